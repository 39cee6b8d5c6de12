/*! Corpus alignment

Drives a [RecordMapper] over a whole source and gathers the statements in one graph.

Sources are anything yielding `Result<Record, Error>`: JSON lines files, CSV files, columnar batches, grouped streams.
The graph is seeded with the base ontology when one is configured. A missing ontology file is not an error.

Record level errors ([Error::MissingKey], [Error::Parse], [Error::Iri]) either stop the alignment
or are logged and skipped, following the [ErrorPolicy].
!*/
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use oxrdf::Graph;

use crate::error::Error;
use crate::io::reader::{daic_transcript_number, load_ontology, CsvReader, JsonlReader};
use crate::mapping::{RecordMapper, TripleSink};
use crate::processing::Group;
use crate::recipe::Recipe;
use crate::record::{Batch, Record};

/// What to do with a record that can't be mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlignStats {
    /// mapped records
    pub records: usize,
    /// skipped records
    pub skipped: usize,
}

impl AlignStats {
    fn merge(&mut self, other: AlignStats) {
        self.records += other.records;
        self.skipped += other.skipped;
    }
}

/// An aligned graph and how it was obtained.
#[derive(Debug)]
pub struct Aligned {
    pub graph: Graph,
    pub stats: AlignStats,
}

#[derive(Debug, Clone)]
pub struct CorpusAligner {
    mapper: RecordMapper,
    ontology: Option<PathBuf>,
    policy: ErrorPolicy,
}

impl CorpusAligner {
    pub fn new(recipe: &Recipe) -> Result<Self, Error> {
        Ok(Self {
            mapper: RecordMapper::new(recipe)?,
            ontology: None,
            policy: ErrorPolicy::default(),
        })
    }

    /// Seed graphs with the Turtle ontology at `src`.
    pub fn with_ontology(mut self, src: PathBuf) -> Self {
        self.ontology = Some(src);
        self
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn mapper(&self) -> &RecordMapper {
        &self.mapper
    }

    /// Initial graph: the ontology if there's one, an empty graph otherwise.
    pub fn seed(&self) -> Result<Graph, Error> {
        let src = match &self.ontology {
            Some(src) => src,
            None => return Ok(Graph::new()),
        };

        match load_ontology(src) {
            Ok(graph) => {
                info!("seeded with {} ontology triples from {:?}", graph.len(), src);
                Ok(graph)
            }
            Err(Error::MissingOntology(src)) => {
                warn!(
                    "Could not load ontology {:?}, starting with an empty graph.",
                    src
                );
                Ok(Graph::new())
            }
            Err(e) => Err(e),
        }
    }

    fn skippable(&self, e: &Error) -> bool {
        self.policy == ErrorPolicy::Skip
            && matches!(
                e,
                Error::MissingKey { .. } | Error::Parse { .. } | Error::Iri(_)
            )
    }

    /// Map every record of `records` into `sink`.
    pub fn align_into<I, S>(&self, records: I, sink: &mut S) -> Result<AlignStats, Error>
    where
        I: IntoIterator<Item = Result<Record, Error>>,
        S: TripleSink + ?Sized,
    {
        let mut stats = AlignStats::default();

        for record in records {
            let result = match record {
                Ok(record) => self.mapper.apply(&record, sink),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => stats.records += 1,
                Err(e) if self.skippable(&e) => {
                    warn!("skipping record: {}", e);
                    stats.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        debug!("{:?}", stats);
        Ok(stats)
    }

    /// Align `records` into a fresh (seeded) graph.
    pub fn align<I>(&self, records: I) -> Result<Aligned, Error>
    where
        I: IntoIterator<Item = Result<Record, Error>>,
    {
        let mut graph = self.seed()?;
        let stats = self.align_into(records, &mut graph)?;
        info!(
            "aligned {} records ({} skipped), {} triples",
            stats.records,
            stats.skipped,
            graph.len()
        );
        Ok(Aligned { graph, stats })
    }

    /// Align a JSON lines file.
    pub fn align_jsonl(&self, src: &Path) -> Result<Aligned, Error> {
        info!("aligning {:?}", src);
        self.align(JsonlReader::from_path(src)?)
    }

    /// Align a CSV file with a header row.
    pub fn align_csv(&self, src: &Path, delimiter: u8) -> Result<Aligned, Error> {
        info!("aligning {:?}", src);
        self.align(CsvReader::from_path(src, delimiter)?)
    }

    /// Align a DAIC-WOZ `NNN_TRANSCRIPT.csv` file.
    /// `NNN` becomes the dialogue key of every row.
    pub fn align_daic_transcript(&self, src: &Path, delimiter: u8) -> Result<Aligned, Error> {
        let number = daic_transcript_number(src)?;
        info!("aligning {:?} as dialogue {}", src, number);
        let reader = CsvReader::from_path(src, delimiter)?
            .with_constant(self.mapper.subject_key_field(), &number);
        self.align(reader)
    }

    /// Align a columnar batch.
    pub fn align_batch(&self, batch: &Batch) -> Result<Aligned, Error> {
        self.align(batch.records()?.into_iter().map(Ok))
    }

    /// Align groups (see [crate::processing::take_first_n_groups]) into a single graph.
    pub fn align_groups(&self, groups: &[Group]) -> Result<Aligned, Error> {
        let mut graph = self.seed()?;
        let mut stats = AlignStats::default();

        for group in groups {
            debug!("aligning group {} ({} records)", group.key(), group.len());
            let records = group.records().iter().cloned().map(Ok);
            stats.merge(self.align_into(records, &mut graph)?);
        }

        info!(
            "aligned {} groups, {} records ({} skipped), {} triples",
            groups.len(),
            stats.records,
            stats.skipped,
            graph.len()
        );
        Ok(Aligned { graph, stats })
    }
}
