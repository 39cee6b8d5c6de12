//! Pipelines.
//!
//! [CorpusAligner] does the record to graph alignment,
//! command-level pipelines implement the light [Pipeline] trait.
pub mod aligner;
pub mod alignment;
pub mod grouping;
pub mod pipeline;

pub use aligner::{AlignStats, Aligned, CorpusAligner, ErrorPolicy};
pub use alignment::{Alignment, SourceFormat};
pub use grouping::Grouping;
pub use pipeline::Pipeline;
