//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use reggaeton::config::{Config, MIN_WORD_FREQUENCY, TARGET_LANGUAGE, WINDOW_SIZE};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "reggaeton", about = "lyrics preprocessing for next word prediction.")]
/// Holds every command that is callable by the `reggaeton` command.
pub enum Reggaeton {
    #[structopt(about = "Merge lyrics files of a folder into a single corpus file")]
    Merge(Merge),
    #[structopt(about = "Build training pairs from a lyrics corpus")]
    Preprocess(Preprocess),
    #[structopt(about = "Print a summary of a preprocessed blob")]
    Inspect(Inspect),
}

#[derive(Debug, StructOpt)]
/// Merge command and parameters.
pub struct Merge {
    #[structopt(parse(from_os_str), help = "folder holding one lyrics file per artist")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "corpus file (appended to if it already exists)"
    )]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Preprocess command and parameters.
///
/// ```sh
/// reggaeton-preprocess 0.1.0
/// Build training pairs from a lyrics corpus
///
/// USAGE:
///     reggaeton preprocess [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -h, --help                  Prints help information
///         --no-language-filter    keep strophes of every language
///     -V, --version               Prints version information
///
/// OPTIONS:
///     -l, --language <language>                    language to keep. Default is es.
///         --lid-path <lid-path>                    Path to lid.176.bin [default: lid.176.bin]
///         --lid-threshold <lid-threshold>          minimum identification probability [default: 0.0]
///     -f, --min-word-frequency <min-word-frequency>
///             words seen less than this are ignored. Default is 3.
///         --seed <seed>                            shuffling seed. Random if not set.
///     -w, --window-size <window-size>              context length. Default is 10.
///
/// ARGS:
///     <src>    lyrics corpus file
///     <dst>    preprocessed blob destination
/// ```
pub struct Preprocess {
    #[structopt(parse(from_os_str), help = "lyrics corpus file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "preprocessed blob destination")]
    pub dst: PathBuf,
    #[structopt(short = "w", long = "window-size", help = "context length. Default is 10.")]
    pub window_size: Option<usize>,
    #[structopt(
        short = "f",
        long = "min-word-frequency",
        help = "words seen less than this are ignored. Default is 3."
    )]
    pub min_word_frequency: Option<usize>,
    #[structopt(short = "l", long = "language", help = "language to keep. Default is es.")]
    pub language: Option<String>,
    #[structopt(long = "no-language-filter", help = "keep strophes of every language")]
    pub no_language_filter: bool,
    #[structopt(long = "seed", help = "shuffling seed. Random if not set.")]
    pub seed: Option<u64>,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "Path to lid.176.bin",
        default_value = "lid.176.bin"
    )]
    pub lid_path: PathBuf,
    #[structopt(
        long = "lid-threshold",
        help = "minimum identification probability",
        default_value = "0.0"
    )]
    pub lid_threshold: f32,
}

impl Preprocess {
    /// Builds the pipeline configuration, falling back to defaults.
    pub fn config(&self) -> Config {
        Config {
            window_size: self.window_size.unwrap_or(WINDOW_SIZE),
            min_word_frequency: self.min_word_frequency.unwrap_or(MIN_WORD_FREQUENCY),
            target_language_code: self
                .language
                .clone()
                .unwrap_or_else(|| TARGET_LANGUAGE.to_string()),
            language_filter: !self.no_language_filter,
            seed: self.seed,
        }
    }
}

#[derive(Debug, StructOpt)]
/// Inspect command and parameters.
pub struct Inspect {
    #[structopt(parse(from_os_str), help = "preprocessed blob")]
    pub src: PathBuf,
}
