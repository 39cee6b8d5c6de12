//! Namespaces and terms used by the alignment.
//!
//! Terms are `'static` constants, the prefix table is built once on first use.
use std::collections::HashMap;

use lazy_static::lazy_static;
use oxrdf::NamedNodeRef;

pub const DIDO_NS: &str = "http://purl.org/twc/dido#";
pub const SIO_NS: &str = "http://semanticscience.org/resource/";
pub const TIME_NS: &str = "http://www.w3.org/2006/time#";
pub const PROV_NS: &str = "http://www.w3.org/ns/prov#";
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// Default base for generated individuals.
pub const INDIVIDUALS_NS: &str = "http://purl.org/twc/dido/individuals#";

pub mod dido {
    use oxrdf::NamedNodeRef;

    pub const DIALOGUE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/twc/dido#Dialogue");
    pub const PARTICIPANT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/twc/dido#Participant");
    pub const INTERLOCUTOR: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/twc/dido#Interlocutor");
    pub const UTTERANCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/twc/dido#Utterance");
    pub const UTTERANCE_TEXT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/twc/dido#UtteranceText");
    pub const DIALOGUE_TRANSCRIPT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/twc/dido#DialogueTranscript");
    pub const HAS_TEXT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/twc/dido#hasText");
    pub const HAS_ATTRIBUTE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/twc/dido#hasAttribute");
    pub const IS_PARTICIPANT_IN: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/twc/dido#isParticipantIn");
}

/// Semanticscience Integrated Ontology terms, by numeric code.
pub mod sio {
    use oxrdf::NamedNodeRef;

    /// process
    pub const PROCESS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://semanticscience.org/resource/SIO_000006");
    /// agent
    pub const AGENT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://semanticscience.org/resource/SIO_000397");
    /// is participant in
    pub const IS_PARTICIPANT_IN: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://semanticscience.org/resource/SIO_000062");
    /// is part of
    pub const IS_PART_OF: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://semanticscience.org/resource/SIO_000068");
    /// has output
    pub const HAS_OUTPUT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://semanticscience.org/resource/SIO_000232");
    /// is about
    pub const IS_ABOUT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://semanticscience.org/resource/SIO_000332");
}

pub mod time {
    use oxrdf::NamedNodeRef;

    pub const TEMPORAL_DURATION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#TemporalDuration");
    pub const HAS_BEGINNING: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hasBeginning");
    pub const HAS_END: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hasEnd");
}

lazy_static! {
    /// Prefixes bound on serialized graphs, in output order.
    pub static ref PREFIXES: Vec<(&'static str, &'static str)> = vec![
        ("dido", DIDO_NS),
        ("sio", SIO_NS),
        ("time", TIME_NS),
        ("prov", PROV_NS),
        ("rdf", RDF_NS),
        ("rdfs", RDFS_NS),
        ("xsd", XSD_NS),
        ("ex", INDIVIDUALS_NS),
    ];

    static ref PREFIX_LOOKUP: HashMap<&'static str, &'static str> =
        PREFIXES.iter().copied().collect();
}

/// Expand a prefixed name (`dido:hasText`) using [PREFIXES].
///
/// Full IRIs and names with an unknown prefix are returned untouched,
/// IRI validation happens when the term is built.
pub fn expand(term: &str) -> String {
    match term.split_once(':') {
        Some((prefix, local)) if !local.starts_with("//") => match PREFIX_LOOKUP.get(prefix) {
            Some(ns) => format!("{}{}", ns, local),
            None => term.to_string(),
        },
        _ => term.to_string(),
    }
}

/// Shorthand used by built-in recipes.
pub(crate) fn iri(term: NamedNodeRef<'static>) -> String {
    term.as_str().to_string()
}
