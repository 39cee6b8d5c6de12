/*!
# IO utilities

Record reading (JSON lines, CSV), ontology loading and graph/group writing.
!*/
pub mod reader;
pub mod writer;
