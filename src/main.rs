//! # Reggaeton
//!
//! Prepares a lyrics corpus for next word prediction training.
//!
//! ## Getting started
//!
//! ```sh
//! reggaeton 0.1.0
//! lyrics preprocessing for next word prediction.
//!
//! USAGE:
//!     reggaeton <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help          Prints this message or the help of the given subcommand(s)
//!     inspect       Print a summary of a preprocessed blob
//!     merge         Merge lyrics files of a folder into a single corpus file
//!     preprocess    Build training pairs from a lyrics corpus
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=info`).
use reggaeton::{
    error::Error,
    identifiers::FastText,
    io::merge_lyrics,
    pipelines::{Pipeline, Preprocess, Preprocessed},
};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Reggaeton::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Reggaeton::Merge(m) => {
            let nb_files = merge_lyrics(&m.src, &m.dst)?;
            info!("{} lyrics files merged into {:?}", nb_files, m.dst);
        }

        cli::Reggaeton::Preprocess(p) => {
            let config = p.config();
            let mut pipeline = Preprocess::new(p.src.clone(), config.clone());
            if config.language_filter {
                let identifier = FastText::new(&p.lid_path, p.lid_threshold)?;
                pipeline = pipeline.with_identifier(Box::new(identifier));
            }

            let preprocessed = pipeline.run()?;
            preprocessed.save(&p.dst)?;
            info!("{:#?}", preprocessed.summary());
        }

        cli::Reggaeton::Inspect(i) => {
            let preprocessed = Preprocessed::load(&i.src)?;
            println!("{}", serde_json::to_string_pretty(&preprocessed.summary())?);
        }
    };
    Ok(())
}
