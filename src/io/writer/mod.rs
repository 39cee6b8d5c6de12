/*!
# Writing

Turtle serialization of aligned graphs, and JSON lines saving of record groups.
!*/
mod jsonlwriter;
mod turtlewriter;

pub use jsonlwriter::{save_groups_as_jsonl, write_jsonl};
pub use turtlewriter::{write_turtle, write_turtle_file};
