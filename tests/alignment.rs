use std::fs::File;
use std::io::Cursor;

use dido_align::error::Error;
use dido_align::io::reader::jsonlreader::Reader;
use dido_align::io::reader::read_turtle;
use dido_align::io::writer::{save_groups_as_jsonl, write_turtle};
use dido_align::pipelines::CorpusAligner;
use dido_align::processing::take_first_n_groups;
use dido_align::recipe::Recipe;
use dido_align::vocab::{dido, time};
use oxrdf::vocab::rdf;
use oxrdf::dataset::CanonicalizationAlgorithm;
use oxrdf::{Graph, NamedNode, Triple};

const STREAM: &str = r#"{"meeting_id":"EN2001a","audio_id":"x","speaker_id":"MEE068","begin_time":0.5,"end_time":1.2,"text":"okay"}
{"meeting_id":"EN2001a","audio_id":"x","speaker_id":"MEE069","begin_time":1.2,"end_time":2.0,"text":"right"}
{"meeting_id":"EN2001b","audio_id":"x","speaker_id":"MEE068","begin_time":0.0,"end_time":3.3,"text":"so"}
{"meeting_id":"EN2001d","audio_id":"x","speaker_id":"FEE005","begin_time":0.0,"end_time":0.8,"text":"hello"}
"#;

fn individual(local: &str) -> NamedNode {
    NamedNode::new(format!("http://purl.org/twc/dido/individuals#{}", local)).unwrap()
}

#[test]
fn single_record_graph() {
    let aligner = CorpusAligner::new(&Recipe::ami()).unwrap();
    let data = r#"{"meeting_id":"EN1","speaker_id":"S1","begin_time":0.0,"end_time":1.5,"text":"hi"}"#;
    let aligned = aligner
        .align(Reader::new(Cursor::new(data)))
        .unwrap();

    assert_eq!(aligned.graph.len(), 12);
    assert!(aligned.graph.contains(&Triple::new(
        individual("participant/S1"),
        dido::IS_PARTICIPANT_IN,
        individual("dialogue/EN1")
    )));
}

#[test]
fn group_then_align() {
    let groups = take_first_n_groups(
        Reader::new(Cursor::new(STREAM)),
        2,
        "meeting_id",
    )
    .unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 2);

    let aligner = CorpusAligner::new(&Recipe::ami()).unwrap();
    let aligned = aligner.align_groups(&groups).unwrap();

    assert_eq!(aligned.stats.records, 3);
    for key in ["EN2001a", "EN2001b"] {
        assert!(aligned.graph.contains(&Triple::new(
            individual(&format!("dialogue/{}", key)),
            rdf::TYPE,
            dido::DIALOGUE.into_owned()
        )));
    }
    assert!(!aligned.graph.contains(&Triple::new(
        individual("dialogue/EN2001d"),
        rdf::TYPE,
        dido::DIALOGUE.into_owned()
    )));
}

#[test]
fn saved_groups_align_like_the_stream() {
    let dir = tempfile::tempdir().unwrap();
    let groups = take_first_n_groups(
        Reader::new(Cursor::new(STREAM)),
        1,
        "meeting_id",
    )
    .unwrap();
    let paths = save_groups_as_jsonl(&groups, dir.path()).unwrap();

    let aligner = CorpusAligner::new(&Recipe::ami()).unwrap();
    let from_file = aligner.align_jsonl(&paths[0]).unwrap();
    let from_groups = aligner.align_groups(&groups).unwrap();

    let mut a = from_file.graph;
    let mut b = from_groups.graph;
    a.canonicalize(CanonicalizationAlgorithm::Unstable);
    b.canonicalize(CanonicalizationAlgorithm::Unstable);
    assert_eq!(a, b);
}

#[test]
fn turtle_roundtrip() {
    let aligner = CorpusAligner::new(&Recipe::ami()).unwrap();
    let aligned = aligner
        .align(Reader::new(Cursor::new(STREAM)))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("ami_dialogue.ttl");
    write_turtle(&aligned.graph, File::create(&dst).unwrap()).unwrap();
    let mut parsed: Graph = read_turtle(File::open(&dst).unwrap()).unwrap();

    let mut graph = aligned.graph;
    assert_eq!(parsed.len(), graph.len());
    graph.canonicalize(CanonicalizationAlgorithm::Unstable);
    parsed.canonicalize(CanonicalizationAlgorithm::Unstable);
    assert_eq!(graph, parsed);
    assert_eq!(parsed.triples_for_predicate(time::HAS_END).count(), 4);
}

#[test]
fn daic_recipe_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let recipe_path = dir.path().join("daic.json");
    std::fs::write(
        &recipe_path,
        serde_json::to_string_pretty(&Recipe::daic_woz()).unwrap(),
    )
    .unwrap();

    let src = dir.path().join("301_TRANSCRIPT.csv");
    std::fs::write(
        &src,
        "begin_time,end_time,speaker,value\n1.0,2.0,Ellie,how are you doing today\n2.5,3.0,Participant,\n",
    )
    .unwrap();

    let recipe = Recipe::from_name_or_path(recipe_path.to_str().unwrap()).unwrap();
    let aligner = CorpusAligner::new(&recipe).unwrap();
    let aligned = aligner.align_daic_transcript(&src, b',').unwrap();

    assert_eq!(aligned.stats.records, 2);
    // second row has no text: no text entity for it
    assert!(aligned.graph.contains(&Triple::new(
        individual("utteranceTexts/301_0"),
        rdf::TYPE,
        dido::UTTERANCE_TEXT.into_owned()
    )));
    assert!(!aligned.graph.contains(&Triple::new(
        individual("utteranceTexts/301_1"),
        rdf::TYPE,
        dido::UTTERANCE_TEXT.into_owned()
    )));
    assert!(aligned.graph.contains(&Triple::new(
        individual("interlocutors/301"),
        rdf::TYPE,
        dido::INTERLOCUTOR.into_owned()
    )));
}

#[test]
fn unknown_recipe() {
    let dir = tempfile::tempdir().unwrap();
    let r = Recipe::from_name_or_path(dir.path().join("nope.json").to_str().unwrap());
    assert!(matches!(r, Err(Error::Io(_))));
}
