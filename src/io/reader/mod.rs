/*! Corpus reading utilities

Record readers ([JsonlReader], [CsvReader]) are iterators of `Result<Record, Error>`,
so that a malformed line does not prevent reading the following ones.

!*/
pub mod csvreader;
pub mod jsonlreader;
mod turtlereader;

pub use csvreader::{daic_transcript_number, CsvReader};
pub use jsonlreader::JsonlReader;
pub use turtlereader::{load_ontology, read_turtle};
