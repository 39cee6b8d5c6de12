//! # dido-align
//!
//! Aligns conversational corpora (AMI meetings, DAIC-WOZ interviews) to the DIDO dialogue ontology.
//!
//! Records are read from JSON lines or CSV files, mapped to RDF statements following a [recipe::Recipe],
//! and gathered in a single [oxrdf::Graph] that can be written as Turtle.
//!
//! ```no_run
//! use std::path::Path;
//! use dido_align::pipelines::CorpusAligner;
//! use dido_align::recipe::Recipe;
//! use dido_align::io::writer::write_turtle_file;
//!
//! # fn main() -> Result<(), dido_align::error::Error> {
//! let aligner = CorpusAligner::new(&Recipe::ami())?;
//! let aligned = aligner.align_jsonl(Path::new("dialogues_json/EN2001a.jsonl"))?;
//! write_turtle_file(&aligned.graph, Path::new("ami_dialogue.ttl"))?;
//! # Ok(())
//! # }
//! ```
pub mod error;
pub mod io;
pub mod mapping;
pub mod pipelines;
pub mod processing;
pub mod recipe;
pub mod record;
pub mod vocab;
