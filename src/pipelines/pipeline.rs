//! Pipeline trait.
use crate::error::Error;

/// Implemented by each command-level pipeline,
/// generic over the return type so that callers get
/// whatever summary the pipeline produces.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
