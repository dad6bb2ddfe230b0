use std::collections::HashSet;
use std::path::Path;

use reggaeton::{
    config::Config,
    error::Error,
    identifiers::{Identification, Identifier},
    pipelines::{Pipeline, Preprocess, Preprocessed},
};

/// Identifies strophes holding a few very common spanish words as `es`,
/// and gives up on everything else.
struct Stopwords;

impl Identifier for Stopwords {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        let nb_spanish = sentence
            .split_whitespace()
            .filter(|w| ["que", "la", "el", "tu", "yo", "de"].contains(w))
            .count();
        if nb_spanish > 0 {
            Ok(Some(Identification::new("es".to_string(), 0.9)))
        } else if sentence.split_whitespace().count() > 3 {
            Ok(Some(Identification::new("en".to_string(), 0.9)))
        } else {
            Err(Error::FastText("too short".to_string()))
        }
    }
}

const LYRICS: &str = "[Intro: Artista]
Yo no sé qué me pasa
Cuando tú me miras así

[Coro]
Baby yo te quiero (yeah)
Dame tu amor, dame tu amor
Que yo te quiero, baby
Dame tu amor



[Verse 2]
I just want to dance with you tonight
Baby dance with me all night long

[Coro]
Baby yo te quiero (yeah)
Dame tu amor, dame tu amor
Que yo te quiero, baby
Dame tu amor

ok
";

fn write_corpus(dir: &Path, content: &str) -> std::path::PathBuf {
    let src = dir.join("lyrics.txt");
    std::fs::write(&src, content).unwrap();
    src
}

fn config() -> Config {
    Config {
        window_size: 3,
        min_word_frequency: 2,
        target_language_code: "es".to_string(),
        language_filter: true,
        seed: Some(2024),
    }
}

fn run(config: Config) -> Preprocessed {
    let dir = tempfile::tempdir().unwrap();
    let src = write_corpus(dir.path(), LYRICS);
    Preprocess::new(src, config)
        .with_identifier(Box::new(Stopwords))
        .run()
        .unwrap()
}

#[test_log::test]
fn keeps_spanish_strophes_only() {
    let out = run(config());

    // intro verse, and two choruses; the english verse and "ok" are gone
    assert_eq!(out.strophes().len(), 3);
    for strophe in out.strophes().iter() {
        assert!(!strophe.contains(&"dance".to_string()));
    }
    assert!(!out.vocabulary().kept().contains("dance"));
    assert!(!out.vocabulary().ignored().contains("dance"));
}

#[test_log::test]
fn pairs_respect_vocabulary() {
    let out = run(config());
    let ts = out.training_set();

    assert!(!ts.is_empty());
    assert_eq!(ts.x().len(), ts.y().len());
    for (context, target) in ts.pairs() {
        assert_eq!(context.len(), out.config().window_size);
        for word in context.iter().map(String::as_str).chain(std::iter::once(target)) {
            assert!(!out.vocabulary().is_ignored(word));
            assert!(out.tokenizer().index_of(word).is_some());
        }
    }
    assert_eq!(out.total_words(), out.tokenizer().len() + 1);
}

#[test]
fn pairs_come_from_a_single_strophe() {
    let out = run(config());
    let w = out.config().window_size;

    let windows: HashSet<Vec<String>> = out
        .strophes()
        .iter()
        .flat_map(|s| s.windows(w + 1).map(|win| win.to_vec()))
        .collect();

    for (context, target) in out.training_set().pairs() {
        let mut window = context.to_vec();
        window.push(target.to_string());
        assert!(windows.contains(&window));
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    assert_eq!(run(config()), run(config()));

    let other = run(Config {
        seed: Some(1),
        ..config()
    });
    let reference = run(config());
    let mut a: Vec<_> = other.training_set().pairs().collect();
    let mut b: Vec<_> = reference.training_set().pairs().collect();
    a.sort();
    b.sort();
    assert_eq!(a, b);
}

#[test]
fn save_and_load() {
    let out = run(config());
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("preprocessing").join("preprocessor.json.gz");

    out.save(&dst).unwrap();
    assert!(dst.is_file());

    let loaded = Preprocessed::load(&dst).unwrap();
    assert_eq!(loaded.total_words(), out.total_words());
    assert_eq!(loaded.vocabulary().kept(), out.vocabulary().kept());
    assert_eq!(loaded.vocabulary().ignored(), out.vocabulary().ignored());
    assert_eq!(loaded.tokenizer(), out.tokenizer());
    assert_eq!(loaded.training_set().x(), out.training_set().x());
    assert_eq!(loaded.training_set().y(), out.training_set().y());
    assert_eq!(loaded, out);
}

#[test]
fn blob_exposes_training_fields() {
    let out = run(config());
    let json = serde_json::to_value(&out).unwrap();
    for field in ["total_words", "tokenizer", "x", "y"] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
}

#[test]
fn too_large_window_yields_no_pairs() {
    let out = run(Config {
        window_size: 50,
        ..config()
    });
    assert!(out.strophes().is_empty());
    assert!(out.training_set().is_empty());
    assert_eq!(out.total_words(), 1);
}

#[test]
fn too_high_frequency_yields_no_pairs() {
    let out = run(Config {
        min_word_frequency: 1000,
        ..config()
    });
    assert!(!out.strophes().is_empty());
    assert!(out.vocabulary().kept().is_empty());
    assert!(out.training_set().is_empty());
}

#[test]
fn unwritable_output() {
    let out = run(config());
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a_file");
    std::fs::write(&file, "").unwrap();
    assert!(matches!(out.save(&file.join("blob")), Err(Error::Io(_))));
}
