/*! RecordMapper

Emits, for one record:
1. the dialogue and its types (always),
1. the transcript entity about the dialogue (if configured),
1. the utterance, its types and its link to the dialogue (if configured),
1. one group of statements per mapping whose field is present.

Literal and temporal mappings attach to the utterance when there is one, to the dialogue otherwise.
Object mappings always point to the dialogue.

All temporal mappings of a record share a single blank node, so that `hasBeginning` and `hasEnd` describe the same duration.
The node label is derived from the record identity (utterance IRI, or dialogue IRI with row and times), so mapping a record twice yields the same statements.

Keys taken from the data are percent-encoded before they become part of an IRI.
!*/
use std::hash::{Hash, Hasher};

use log::debug;
use oxrdf::vocab::{rdf, xsd};
use oxrdf::{BlankNode, Literal, NamedNode, Triple};
use serde_json::Value;
use twox_hash::XxHash64;

use crate::error::Error;
use crate::mapping::TripleSink;
use crate::recipe::{Mapping, MappingKind, ObjectKey, Recipe, TextLayout, UtteranceKey};
use crate::record::{lexical, Record};
use crate::vocab::{self, dido, time};

#[derive(Debug, Clone)]
pub struct RecordMapper {
    base: String,
    subject_key_field: String,
    subject_prefix: String,
    subject_types: Vec<NamedNode>,
    utterance: Option<UtteranceTerms>,
    transcript: Option<TranscriptTerms>,
    mappings: Vec<MappingTerms>,
}

#[derive(Debug, Clone)]
struct UtteranceTerms {
    prefix: String,
    key: UtteranceKey,
    types: Vec<NamedNode>,
    part_of: NamedNode,
    text: TextTerms,
}

#[derive(Debug, Clone)]
enum TextTerms {
    Inline,
    Separate {
        prefix: String,
        types: Vec<NamedNode>,
        link: NamedNode,
    },
}

#[derive(Debug, Clone)]
struct TranscriptTerms {
    prefix: String,
    types: Vec<NamedNode>,
    relation: NamedNode,
}

#[derive(Debug, Clone)]
struct MappingTerms {
    source_field: String,
    relation: NamedNode,
    kind: MappingKind,
    prefix: String,
    types: Vec<NamedNode>,
    key: ObjectKey,
}

/// Resolve a recipe term (IRI or prefixed name).
fn term(s: &str) -> Result<NamedNode, Error> {
    Ok(NamedNode::new(vocab::expand(s))?)
}

fn terms(v: &[String]) -> Result<Vec<NamedNode>, Error> {
    v.iter().map(|s| term(s)).collect()
}

/// Literal keeping the JSON type of the value.
fn literal(value: &Value) -> Literal {
    match value {
        Value::String(s) => Literal::new_simple_literal(s),
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            Literal::new_typed_literal(n.to_string(), xsd::INTEGER)
        }
        Value::Number(n) => Literal::new_typed_literal(n.to_string(), xsd::DOUBLE),
        Value::Bool(b) => Literal::new_typed_literal(b.to_string(), xsd::BOOLEAN),
        other => Literal::new_simple_literal(lexical(other)),
    }
}

fn typed(subject: &NamedNode, types: &[NamedNode], out: &mut Vec<Triple>) {
    for t in types {
        out.push(Triple::new(subject.clone(), rdf::TYPE, t.clone()));
    }
}

impl MappingTerms {
    fn new(m: &Mapping) -> Result<Self, Error> {
        Ok(Self {
            source_field: m.source_field.clone(),
            relation: term(&m.relation)?,
            kind: m.kind,
            prefix: m.uri_prefix.clone().unwrap_or_default(),
            types: terms(&m.types)?,
            key: m.key.clone(),
        })
    }
}

impl RecordMapper {
    /// Compile a recipe. Fails on terms that are not valid IRIs.
    pub fn new(recipe: &Recipe) -> Result<Self, Error> {
        let utterance = match &recipe.utterance {
            Some(u) => Some(UtteranceTerms {
                prefix: u.uri_prefix.clone(),
                key: u.key.clone(),
                types: terms(&u.types)?,
                part_of: term(&u.part_of)?,
                text: match &u.text {
                    TextLayout::Inline => TextTerms::Inline,
                    TextLayout::Separate {
                        uri_prefix,
                        types,
                        link,
                    } => TextTerms::Separate {
                        prefix: uri_prefix.clone(),
                        types: terms(types)?,
                        link: term(link)?,
                    },
                },
            }),
            None => None,
        };

        let transcript = match &recipe.transcript {
            Some(t) => Some(TranscriptTerms {
                prefix: t.uri_prefix.clone(),
                types: terms(&t.types)?,
                relation: term(&t.relation)?,
            }),
            None => None,
        };

        let mappings = recipe
            .mappings
            .iter()
            .map(MappingTerms::new)
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            base: recipe.base.clone(),
            subject_key_field: recipe.subject_key_field.clone(),
            subject_prefix: recipe.subject_uri_prefix.clone(),
            subject_types: terms(&recipe.subject_types)?,
            utterance,
            transcript,
            mappings,
        })
    }

    /// Field holding the dialogue identifier.
    pub fn subject_key_field(&self) -> &str {
        &self.subject_key_field
    }

    fn named(&self, prefix: &str, key: &str) -> Result<NamedNode, Error> {
        Ok(NamedNode::new(format!(
            "{}{}{}",
            self.base,
            prefix,
            urlencoding::encode(key)
        ))?)
    }

    /// Duration node of `record`, hanging off `anchor`.
    ///
    /// Utterances identify the record on their own, dialogue anchors are shared
    /// by the whole dialogue and need the row and time values too.
    fn duration_node(&self, anchor: &NamedNode, record: &Record) -> BlankNode {
        let mut halves = [XxHash64::with_seed(0), XxHash64::with_seed(1)];
        for h in halves.iter_mut() {
            anchor.as_str().hash(h);
            if self.utterance.is_none() {
                record.position().hash(h);
                for m in self.mappings.iter().filter(|m| m.kind == MappingKind::Temporal) {
                    record.text(&m.source_field).hash(h);
                }
            }
        }
        let [high, low] = halves;
        BlankNode::new_from_unique_id((u128::from(high.finish()) << 64) | u128::from(low.finish()))
    }

    /// IRI of the dialogue identified by `key`.
    pub fn dialogue_iri(&self, key: &str) -> Result<NamedNode, Error> {
        self.named(&self.subject_prefix, key)
    }

    /// Map `record` into `sink`.
    ///
    /// Nothing reaches the sink when the record fails.
    pub fn apply<S>(&self, record: &Record, sink: &mut S) -> Result<(), Error>
    where
        S: TripleSink + ?Sized,
    {
        for triple in self.triples(record)? {
            sink.insert(triple);
        }
        Ok(())
    }

    /// Statements for `record`.
    pub fn triples(&self, record: &Record) -> Result<Vec<Triple>, Error> {
        let mut out = Vec::new();

        let dialogue_key = record.key(&self.subject_key_field)?;
        let dialogue = self.dialogue_iri(&dialogue_key)?;
        typed(&dialogue, &self.subject_types, &mut out);

        if let Some(tr) = &self.transcript {
            let transcript = self.named(&tr.prefix, &dialogue_key)?;
            typed(&transcript, &tr.types, &mut out);
            out.push(Triple::new(
                transcript,
                tr.relation.clone(),
                dialogue.clone(),
            ));
        }

        // (anchor, utterance id) of literal and temporal statements
        let (anchor, utterance_id) = match &self.utterance {
            Some(u) => {
                let suffix = match &u.key {
                    UtteranceKey::Field(field) => record.key(field)?,
                    UtteranceKey::Row => record.position().to_string(),
                };
                let utterance_id = format!("{}_{}", dialogue_key, suffix);
                let utterance = self.named(&u.prefix, &utterance_id)?;
                typed(&utterance, &u.types, &mut out);
                out.push(Triple::new(
                    utterance.clone(),
                    u.part_of.clone(),
                    dialogue.clone(),
                ));
                (utterance, Some(utterance_id))
            }
            None => (dialogue.clone(), None),
        };

        let mut duration: Option<BlankNode> = None;

        for m in &self.mappings {
            let value = match record.get(&m.source_field) {
                Some(v) => v,
                None => continue,
            };

            match m.kind {
                MappingKind::Literal => {
                    let text_layout = self.utterance.as_ref().map(|u| &u.text);
                    match (text_layout, &utterance_id) {
                        (
                            Some(TextTerms::Separate {
                                prefix,
                                types,
                                link,
                            }),
                            Some(utterance_id),
                        ) => {
                            let text = self.named(prefix, utterance_id)?;
                            typed(&text, types, &mut out);
                            out.push(Triple::new(anchor.clone(), link.clone(), text.clone()));
                            out.push(Triple::new(text, m.relation.clone(), literal(value)));
                        }
                        _ => out.push(Triple::new(
                            anchor.clone(),
                            m.relation.clone(),
                            literal(value),
                        )),
                    }
                }

                MappingKind::Object => {
                    let value = lexical(value);
                    let key = match &m.key {
                        ObjectKey::Value => value,
                        ObjectKey::Role { role, role_key } if *role == value => role_key.clone(),
                        ObjectKey::Role { .. } => dialogue_key.clone(),
                    };
                    if key.trim().is_empty() {
                        debug!(
                            "record {}: blank `{}`, no object",
                            record.position(),
                            m.source_field
                        );
                        continue;
                    }
                    let object = self.named(&m.prefix, &key)?;
                    typed(&object, &m.types, &mut out);
                    out.push(Triple::new(object, m.relation.clone(), dialogue.clone()));
                }

                MappingKind::Temporal => {
                    let node = match &duration {
                        Some(node) => node.clone(),
                        None => {
                            let node = self.duration_node(&anchor, record);
                            out.push(Triple::new(
                                anchor.clone(),
                                dido::HAS_ATTRIBUTE,
                                node.clone(),
                            ));
                            out.push(Triple::new(
                                node.clone(),
                                rdf::TYPE,
                                time::TEMPORAL_DURATION.into_owned(),
                            ));
                            duration = Some(node.clone());
                            node
                        }
                    };
                    let value = lexical(value).trim().to_string();
                    out.push(Triple::new(
                        node,
                        m.relation.clone(),
                        Literal::new_typed_literal(value, xsd::FLOAT),
                    ));
                }
            }
        }

        Ok(out)
    }
}
