//! Turtle graph reader, used to seed alignments with the DIDO ontology.
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use oxrdf::{Graph, Triple};
use oxrdfio::{RdfFormat, RdfParser};

use crate::error::Error;

/// Parse a Turtle document into a graph.
pub fn read_turtle<R>(inner: R) -> Result<Graph, Error>
where
    R: Read,
{
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(RdfFormat::Turtle).for_reader(inner) {
        let quad = quad?;
        graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
    }
    Ok(graph)
}

/// Load the ontology located at `src`.
///
/// An absent file gives [Error::MissingOntology], so that callers can go on with an empty graph.
pub fn load_ontology(src: &Path) -> Result<Graph, Error> {
    let f = match File::open(src) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::MissingOntology(src.to_path_buf()))
        }
        Err(e) => return Err(Error::Io(e)),
    };
    read_turtle(BufReader::new(f))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const ONTOLOGY: &str = r#"
@prefix dido: <http://purl.org/twc/dido#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

dido:Dialogue a owl:Class ;
    rdfs:label "Dialogue" .
dido:Utterance a owl:Class .
"#;

    #[test]
    fn parse() {
        let g = read_turtle(Cursor::new(ONTOLOGY)).unwrap();
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn parse_error() {
        let r = read_turtle(Cursor::new("dido:Dialogue a ."));
        assert!(matches!(r, Err(Error::RdfParse(_))));
    }

    #[test]
    fn missing() {
        let dir = tempfile::tempdir().unwrap();
        let r = load_ontology(&dir.path().join("DIDO.ttl"));
        assert!(matches!(r, Err(Error::MissingOntology(_))));
    }

    #[test]
    fn load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DIDO.ttl");
        std::fs::write(&path, ONTOLOGY).unwrap();
        assert_eq!(load_ontology(&path).unwrap().len(), 3);
    }
}
