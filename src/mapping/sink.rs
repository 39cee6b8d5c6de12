//! TripleSink trait.
use oxrdf::{Graph, Triple};

/// Destination of mapped statements.
pub trait TripleSink {
    fn insert(&mut self, triple: Triple);
}

impl TripleSink for Graph {
    fn insert(&mut self, triple: Triple) {
        Graph::insert(self, &triple);
    }
}

impl TripleSink for Vec<Triple> {
    fn insert(&mut self, triple: Triple) {
        self.push(triple);
    }
}
