//! Turtle graph writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use oxrdf::Graph;
use oxrdfio::{RdfFormat, RdfSerializer};

use crate::error::Error;
use crate::vocab::PREFIXES;

/// Serialize `graph` as Turtle into `w`, binding [PREFIXES]. Gives back the writer.
pub fn write_turtle<W>(graph: &Graph, w: W) -> Result<W, Error>
where
    W: Write,
{
    let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
    for (prefix, ns) in PREFIXES.iter() {
        serializer = serializer.with_prefix(*prefix, *ns)?;
    }

    let mut writer = serializer.for_writer(w);
    for triple in graph.iter() {
        writer.serialize_triple(triple)?;
    }
    Ok(writer.finish()?)
}

/// Serialize `graph` into a Turtle file at `dst`, truncating it if it exists.
pub fn write_turtle_file(graph: &Graph, dst: &Path) -> Result<(), Error> {
    let f = File::create(dst)?;
    let mut w = write_turtle(graph, BufWriter::new(f))?;
    w.flush()?;
    info!("{} triples written to {:?}", graph.len(), dst);
    Ok(())
}
