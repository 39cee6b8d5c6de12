/*! Record to RDF mapping.

A [RecordMapper] is compiled once from a [crate::recipe::Recipe] and applied to every record of a corpus.
Statements go to a [TripleSink], usually an [oxrdf::Graph].
!*/
mod mapper;
mod sink;

pub use mapper::RecordMapper;
pub use sink::TripleSink;
