//! Alignment pipeline: a corpus file in, a Turtle file out.
//!
//! # Processing
//! 1. The recipe is resolved (built-in name or JSON file) and compiled.
//! 1. Records are read from the source, in the given [SourceFormat].
//! 1. Optionally, only the first `n` dialogues are kept (see [crate::processing::take_first_n_groups]).
//! 1. Records are aligned into a graph seeded with the ontology, if found.
//! 1. The graph is written as Turtle.
use std::path::PathBuf;
use std::str::FromStr;

use log::info;

use crate::error::Error;
use crate::io::reader::{daic_transcript_number, CsvReader, JsonlReader};
use crate::io::writer::write_turtle_file;
use crate::pipelines::aligner::{AlignStats, CorpusAligner, ErrorPolicy};
use crate::pipelines::pipeline::Pipeline;
use crate::processing::take_first_n_groups;
use crate::recipe::Recipe;
use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jsonl,
    Csv,
    /// DAIC-WOZ `NNN_TRANSCRIPT.csv`
    Daic,
}

impl SourceFormat {
    pub const VARIANTS: [&'static str; 3] = ["jsonl", "csv", "daic"];
}

impl FromStr for SourceFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jsonl" => Ok(Self::Jsonl),
            "csv" => Ok(Self::Csv),
            "daic" => Ok(Self::Daic),
            other => Err(Error::Custom(format!("unknown source format `{}`", other))),
        }
    }
}

type RecordStream = Box<dyn Iterator<Item = Result<Record, Error>>>;

pub struct Alignment {
    src: PathBuf,
    dst: PathBuf,
    format: SourceFormat,
    recipe: String,
    ontology: Option<PathBuf>,
    first_n: Option<usize>,
    policy: ErrorPolicy,
    delimiter: u8,
}

impl Alignment {
    pub fn new(src: PathBuf, dst: PathBuf, format: SourceFormat, recipe: String) -> Self {
        Self {
            src,
            dst,
            format,
            recipe,
            ontology: None,
            first_n: None,
            policy: ErrorPolicy::Abort,
            delimiter: b',',
        }
    }

    pub fn with_ontology(mut self, ontology: Option<PathBuf>) -> Self {
        self.ontology = ontology;
        self
    }

    pub fn with_first_n(mut self, first_n: Option<usize>) -> Self {
        self.first_n = first_n;
        self
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn records(&self, aligner: &CorpusAligner) -> Result<RecordStream, Error> {
        let records: RecordStream = match self.format {
            SourceFormat::Jsonl => Box::new(JsonlReader::from_path(&self.src)?),
            SourceFormat::Csv => Box::new(CsvReader::from_path(&self.src, self.delimiter)?),
            SourceFormat::Daic => {
                let number = daic_transcript_number(&self.src)?;
                Box::new(
                    CsvReader::from_path(&self.src, self.delimiter)?
                        .with_constant(aligner.mapper().subject_key_field(), &number),
                )
            }
        };
        Ok(records)
    }
}

impl Pipeline<AlignStats> for Alignment {
    fn run(&self) -> Result<AlignStats, Error> {
        let recipe = Recipe::from_name_or_path(&self.recipe)?;
        let mut aligner = CorpusAligner::new(&recipe)?.with_policy(self.policy);
        if let Some(ontology) = &self.ontology {
            aligner = aligner.with_ontology(ontology.clone());
        }

        let records = self.records(&aligner)?;
        let aligned = match self.first_n {
            Some(n) => {
                let groups = take_first_n_groups(records, n, aligner.mapper().subject_key_field())?;
                info!("kept {} dialogues", groups.len());
                aligner.align_groups(&groups)?
            }
            None => aligner.align(records)?,
        };

        write_turtle_file(&aligned.graph, &self.dst)?;
        info!("Alignment complete. Results saved to {:?}", self.dst);
        Ok(aligned.stats)
    }
}
