/*! Recipes

A [Recipe] declares how the fields of a record become RDF statements.
It is plain data, (de)serializable from JSON, and compiled into a [crate::mapping::RecordMapper].

Relations and types are either full IRIs or prefixed names (`dido:hasText`) resolved with [crate::vocab::PREFIXES].

Three recipes are built in:
- `ami`: AMI meeting corpus, one utterance per record, text inlined.
- `ami-dialogue`: AMI meeting corpus, every mapping attached to the dialogue itself.
- `daic-woz`: DAIC-WOZ interview transcripts, text in a separate entity, interviewer/participant roles.
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::vocab::{self, dido, iri, sio, time};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Namespace prepended to every generated IRI.
    #[serde(default = "default_base")]
    pub base: String,
    /// Field holding the dialogue identifier.
    pub subject_key_field: String,
    #[serde(default = "default_subject_prefix")]
    pub subject_uri_prefix: String,
    #[serde(default)]
    pub subject_types: Vec<String>,
    /// When set, each record is an utterance and mappings attach to it.
    #[serde(default)]
    pub utterance: Option<UtteranceRecipe>,
    /// File-level provenance entity about the dialogue.
    #[serde(default)]
    pub transcript: Option<TranscriptRecipe>,
    pub mappings: Vec<Mapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtteranceRecipe {
    pub uri_prefix: String,
    pub key: UtteranceKey,
    #[serde(default)]
    pub types: Vec<String>,
    /// Utterance to dialogue relation.
    pub part_of: String,
    #[serde(default)]
    pub text: TextLayout,
}

/// Second half of an utterance identifier, after the dialogue key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtteranceKey {
    /// Value of a field (`{dialogue}_{begin_time}`).
    Field(String),
    /// Row index in the source (`{dialogue}_{row}`).
    Row,
}

/// Where literal mappings of an utterance go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TextLayout {
    /// On the utterance itself.
    #[default]
    Inline,
    /// On a dedicated text entity, linked from the utterance.
    Separate {
        uri_prefix: String,
        #[serde(default)]
        types: Vec<String>,
        link: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRecipe {
    pub uri_prefix: String,
    #[serde(default)]
    pub types: Vec<String>,
    /// Transcript to dialogue relation.
    pub relation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingKind {
    Literal,
    Object,
    Temporal,
}

/// How the key of an object IRI is derived from the field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKey {
    /// The value itself.
    #[default]
    Value,
    /// `role_key` when the value equals `role`, the dialogue key otherwise.
    Role { role: String, role_key: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub source_field: String,
    pub relation: String,
    pub kind: MappingKind,
    #[serde(default)]
    pub uri_prefix: Option<String>,
    /// Types declared on objects.
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub key: ObjectKey,
}

fn default_base() -> String {
    vocab::INDIVIDUALS_NS.to_string()
}

fn default_subject_prefix() -> String {
    "dialogue/".to_string()
}

impl Mapping {
    pub fn literal(source_field: &str, relation: &str) -> Self {
        Self {
            source_field: source_field.to_string(),
            relation: relation.to_string(),
            kind: MappingKind::Literal,
            uri_prefix: None,
            types: Vec::new(),
            key: ObjectKey::Value,
        }
    }

    pub fn object(source_field: &str, relation: &str, uri_prefix: &str, types: Vec<String>) -> Self {
        Self {
            source_field: source_field.to_string(),
            relation: relation.to_string(),
            kind: MappingKind::Object,
            uri_prefix: Some(uri_prefix.to_string()),
            types,
            key: ObjectKey::Value,
        }
    }

    pub fn temporal(source_field: &str, relation: &str) -> Self {
        Self {
            source_field: source_field.to_string(),
            relation: relation.to_string(),
            kind: MappingKind::Temporal,
            uri_prefix: None,
            types: Vec::new(),
            key: ObjectKey::Value,
        }
    }

    pub fn with_key(mut self, key: ObjectKey) -> Self {
        self.key = key;
        self
    }
}

impl Recipe {
    /// Names accepted by [Recipe::builtin].
    pub const BUILTINS: [&'static str; 3] = ["ami", "ami-dialogue", "daic-woz"];

    pub fn builtin(name: &str) -> Result<Self, Error> {
        match name {
            "ami" => Ok(Self::ami()),
            "ami-dialogue" => Ok(Self::ami_dialogue()),
            "daic-woz" => Ok(Self::daic_woz()),
            other => Err(Error::UnknownRecipe(other.to_string())),
        }
    }

    /// Load a recipe from a JSON file.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let f = File::open(src)?;
        Ok(serde_json::from_reader(BufReader::new(f))?)
    }

    /// Built-in name, or path to a JSON recipe.
    pub fn from_name_or_path(name: &str) -> Result<Self, Error> {
        if Self::BUILTINS.contains(&name) {
            Self::builtin(name)
        } else {
            Self::from_path(Path::new(name))
        }
    }

    /// AMI JSON lines: `meeting_id`, `speaker_id`, `begin_time`, `end_time`, `text`.
    pub fn ami() -> Self {
        Self {
            base: default_base(),
            subject_key_field: "meeting_id".to_string(),
            subject_uri_prefix: default_subject_prefix(),
            subject_types: vec![iri(dido::DIALOGUE), iri(sio::PROCESS)],
            utterance: Some(UtteranceRecipe {
                uri_prefix: "utterance/".to_string(),
                key: UtteranceKey::Field("begin_time".to_string()),
                types: vec![iri(dido::UTTERANCE)],
                part_of: iri(sio::IS_PART_OF),
                text: TextLayout::Inline,
            }),
            transcript: None,
            mappings: vec![
                Mapping::literal("text", dido::HAS_TEXT.as_str()),
                Mapping::object(
                    "speaker_id",
                    dido::IS_PARTICIPANT_IN.as_str(),
                    "participant/",
                    vec![iri(dido::PARTICIPANT), iri(sio::AGENT)],
                ),
                Mapping::temporal("begin_time", time::HAS_BEGINNING.as_str()),
                Mapping::temporal("end_time", time::HAS_END.as_str()),
            ],
        }
    }

    /// AMI streamed examples, statements hanging off the dialogue.
    pub fn ami_dialogue() -> Self {
        Self {
            base: vocab::DIDO_NS.to_string(),
            subject_key_field: "meeting_id".to_string(),
            subject_uri_prefix: default_subject_prefix(),
            subject_types: vec![iri(dido::DIALOGUE), iri(sio::PROCESS)],
            utterance: None,
            transcript: None,
            mappings: vec![
                Mapping::literal("text", dido::HAS_TEXT.as_str()),
                Mapping::object(
                    "speaker_id",
                    dido::IS_PARTICIPANT_IN.as_str(),
                    "participant/",
                    vec![iri(dido::INTERLOCUTOR)],
                ),
                Mapping::temporal("begin_time", time::HAS_BEGINNING.as_str()),
                Mapping::temporal("end_time", time::HAS_END.as_str()),
            ],
        }
    }

    /// DAIC-WOZ transcripts: `speaker`, `value`, `begin_time`, `end_time`.
    /// The dialogue key (`dialogue_id`) comes from the transcript file name.
    pub fn daic_woz() -> Self {
        Self {
            base: default_base(),
            subject_key_field: "dialogue_id".to_string(),
            subject_uri_prefix: default_subject_prefix(),
            subject_types: vec![iri(dido::DIALOGUE)],
            utterance: Some(UtteranceRecipe {
                uri_prefix: "utterances/".to_string(),
                key: UtteranceKey::Row,
                types: vec![iri(dido::UTTERANCE)],
                part_of: iri(sio::IS_PART_OF),
                text: TextLayout::Separate {
                    uri_prefix: "utteranceTexts/".to_string(),
                    types: vec![iri(dido::UTTERANCE_TEXT)],
                    link: iri(sio::HAS_OUTPUT),
                },
            }),
            transcript: Some(TranscriptRecipe {
                uri_prefix: "dialogueTranscript/".to_string(),
                types: vec![iri(dido::DIALOGUE_TRANSCRIPT)],
                relation: iri(sio::IS_ABOUT),
            }),
            mappings: vec![
                Mapping::literal("value", oxrdf::vocab::rdfs::LABEL.as_str()),
                Mapping::object(
                    "speaker",
                    sio::IS_PARTICIPANT_IN.as_str(),
                    "interlocutors/",
                    vec![iri(dido::INTERLOCUTOR)],
                )
                .with_key(ObjectKey::Role {
                    role: "Ellie".to_string(),
                    role_key: "ellie".to_string(),
                }),
                Mapping::temporal("begin_time", time::HAS_BEGINNING.as_str()),
                Mapping::temporal("end_time", time::HAS_END.as_str()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builtins() {
        for name in Recipe::BUILTINS {
            assert!(Recipe::builtin(name).is_ok());
        }
        assert!(matches!(
            Recipe::builtin("switchboard"),
            Err(Error::UnknownRecipe(_))
        ));
    }

    #[test]
    fn from_json_defaults() {
        let recipe: Recipe = serde_json::from_value(json!({
            "subject_key_field": "conv_id",
            "mappings": [
                {"source_field": "utt", "relation": "dido:hasText", "kind": "literal"},
                {"source_field": "spk", "relation": "dido:isParticipantIn", "kind": "object",
                 "uri_prefix": "participant/", "types": ["dido:Participant"]},
                {"source_field": "start", "relation": "time:hasBeginning", "kind": "temporal"}
            ]
        }))
        .unwrap();

        assert_eq!(recipe.base, vocab::INDIVIDUALS_NS);
        assert_eq!(recipe.subject_uri_prefix, "dialogue/");
        assert!(recipe.utterance.is_none());
        assert_eq!(recipe.mappings[1].kind, MappingKind::Object);
        assert_eq!(recipe.mappings[1].key, ObjectKey::Value);
    }

    #[test]
    fn serde_roundtrip_daic() {
        let recipe = Recipe::daic_woz();
        let serialized = serde_json::to_string(&recipe).unwrap();
        let result: Recipe = serde_json::from_str(&serialized).unwrap();
        assert_eq!(recipe, result);
    }

    #[test]
    fn from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipe.json");
        std::fs::write(&path, serde_json::to_string(&Recipe::ami()).unwrap()).unwrap();

        let recipe = Recipe::from_name_or_path(path.to_str().unwrap()).unwrap();
        assert_eq!(recipe, Recipe::ami());
    }
}
