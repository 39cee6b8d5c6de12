//! # dido-align
//!
//! Aligns conversational corpora to the DIDO dialogue ontology.
//!
//! ## Getting started
//!
//! ```sh
//! dido-align 0.1.0
//! DIDO corpus alignment tool.
//!
//! USAGE:
//!     dido-align <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     align    Align a corpus file to DIDO, writing Turtle
//!     group    Save the first dialogues of a JSON lines stream, one file each
//!     help     Prints this message or the help of the given subcommand(s)
//! ```
//!
//! Set `RUST_LOG=info` to follow progress.

use dido_align::error::Error;
use dido_align::pipelines::{Alignment, ErrorPolicy, Grouping, Pipeline, SourceFormat};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::DidoAlign::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::DidoAlign::Align(a) => {
            if !a.delimiter.is_ascii() {
                return Err(Error::Custom(format!(
                    "delimiter must be ascii, got {:?}",
                    a.delimiter
                )));
            }
            let format: SourceFormat = a.format.parse()?;
            let policy = if a.skip_errors {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Abort
            };

            let p = Alignment::new(a.src, a.dst, format, a.recipe)
                .with_ontology(Some(a.ontology))
                .with_first_n(a.first_n)
                .with_policy(policy)
                .with_delimiter(a.delimiter as u8);
            let stats = p.run()?;
            info!(
                "{} records aligned, {} skipped",
                stats.records, stats.skipped
            );
        }

        cli::DidoAlign::Group(g) => {
            let p = Grouping::new(g.src, g.dst, g.n, g.key_field);
            for path in p.run()? {
                info!("saved {:?}", path);
            }
        }
    };
    Ok(())
}
