//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Iri(oxrdf::IriParseError),
    RdfParse(oxrdfio::RdfParseError),
    /// A field needed to build a subject IRI (or a group key) is absent or null.
    MissingKey {
        field: String,
        position: usize,
    },
    /// Base ontology file is absent. Non fatal for alignment.
    MissingOntology(PathBuf),
    /// Malformed input line/row (1-based line number).
    Parse {
        line: usize,
        msg: String,
    },
    UnknownRecipe(String),
    Custom(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Iri(e) => write!(f, "invalid iri: {}", e),
            Error::RdfParse(e) => write!(f, "rdf parse error: {}", e),
            Error::MissingKey { field, position } => {
                write!(f, "record {} has no value for key field `{}`", position, field)
            }
            Error::MissingOntology(p) => write!(f, "ontology file {:?} not found", p),
            Error::Parse { line, msg } => write!(f, "line {}: {}", line, msg),
            Error::UnknownRecipe(name) => write!(f, "unknown recipe `{}`", name),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<oxrdf::IriParseError> for Error {
    fn from(v: oxrdf::IriParseError) -> Self {
        Self::Iri(v)
    }
}

impl From<oxrdfio::RdfParseError> for Error {
    fn from(v: oxrdfio::RdfParseError) -> Self {
        Self::RdfParse(v)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
