/*! Records and batches

A [Record] is one flat row of a corpus (one utterance), keeping its position in the source it was read from.
A [Batch] is the columnar counterpart: field name to a sequence of values, one value per row.
!*/
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    position: usize,
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(position: usize, fields: Map<String, Value>) -> Self {
        Self { position, fields }
    }

    /// Row index of the record in its source (0-based).
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Get a field value. Absent and `null` fields are both `None`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self.fields.get(field) {
            None | Some(Value::Null) => None,
            Some(v) => Some(v),
        }
    }

    /// Lexical form of a field, as used in IRIs and literals.
    ///
    /// Numbers keep their JSON representation (`0.0` stays `0.0`).
    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).map(lexical)
    }

    /// Lexical form of a field that is needed to build an identifier.
    ///
    /// Absent, null or blank values yield [Error::MissingKey].
    pub fn key(&self, field: &str) -> Result<String, Error> {
        match self.text(field) {
            Some(k) if !k.trim().is_empty() => Ok(k),
            _ => Err(Error::MissingKey {
                field: field.to_string(),
                position: self.position,
            }),
        }
    }
}

/// Lexical form of a JSON value.
pub fn lexical(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Columnar batch: field name to values, all columns of equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    columns: BTreeMap<String, Vec<Value>>,
}

impl Batch {
    pub fn new(columns: BTreeMap<String, Vec<Value>>) -> Self {
        Self { columns }
    }

    /// Build a batch from rows. Columns are the union of the records' fields,
    /// fields missing from a record are filled with `null`.
    pub fn from_records(records: &[Record]) -> Self {
        let mut columns: BTreeMap<String, Vec<Value>> = records
            .iter()
            .flat_map(|r| r.fields().keys())
            .map(|k| (k.clone(), Vec::with_capacity(records.len())))
            .collect();

        for record in records {
            for (name, column) in columns.iter_mut() {
                column.push(record.fields().get(name).cloned().unwrap_or(Value::Null));
            }
        }

        Self { columns }
    }

    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(|c| c.as_slice())
    }

    /// Number of rows. Fails if columns have different lengths.
    pub fn num_rows(&self) -> Result<usize, Error> {
        let mut lengths = self.columns.iter().map(|(name, c)| (name, c.len()));
        let first = match lengths.next() {
            Some((_, len)) => len,
            None => return Ok(0),
        };
        for (name, len) in lengths {
            if len != first {
                return Err(Error::Custom(format!(
                    "ragged batch: column `{}` has {} values, expected {}",
                    name, len, first
                )));
            }
        }
        Ok(first)
    }

    /// Split the batch into row records.
    pub fn records(&self) -> Result<Vec<Record>, Error> {
        let nb_rows = self.num_rows()?;
        let records = (0..nb_rows)
            .map(|row| {
                let fields = self
                    .columns
                    .iter()
                    .map(|(name, column)| (name.clone(), column[row].clone()))
                    .collect();
                Record::new(row, fields)
            })
            .collect();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(position: usize, v: Value) -> Record {
        match v {
            Value::Object(fields) => Record::new(position, fields),
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn number_lexical_form() {
        let r = record(0, json!({"begin_time": 0.0, "n": 3, "f": 1.5}));
        assert_eq!(r.text("begin_time").unwrap(), "0.0");
        assert_eq!(r.text("n").unwrap(), "3");
        assert_eq!(r.text("f").unwrap(), "1.5");
    }

    #[test]
    fn null_is_absent() {
        let r = record(4, json!({"speaker_id": null}));
        assert!(r.get("speaker_id").is_none());
        assert!(r.get("nope").is_none());
    }

    #[test]
    fn missing_key() {
        let r = record(4, json!({"meeting_id": "  "}));
        match r.key("meeting_id") {
            Err(Error::MissingKey { field, position }) => {
                assert_eq!(field, "meeting_id");
                assert_eq!(position, 4);
            }
            other => panic!("expected missing key, got {:?}", other),
        }
    }

    #[test]
    fn batch_from_records() {
        let records = vec![
            record(0, json!({"meeting_id": "A", "text": "hi"})),
            record(1, json!({"meeting_id": "A", "speaker_id": "S1"})),
        ];
        let batch = Batch::from_records(&records);
        assert_eq!(batch.num_rows().unwrap(), 2);
        assert_eq!(batch.column("text").unwrap(), &[json!("hi"), Value::Null]);
        assert_eq!(
            batch.column("speaker_id").unwrap(),
            &[Value::Null, json!("S1")]
        );
    }

    #[test]
    fn batch_to_records() {
        let batch: Batch = serde_json::from_value(json!({
            "meeting_id": ["A", "B"],
            "begin_time": [0.0, 2.5],
        }))
        .unwrap();
        let records = batch.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].position(), 1);
        assert_eq!(records[1].key("meeting_id").unwrap(), "B");
        assert_eq!(records[1].text("begin_time").unwrap(), "2.5");
    }

    #[test]
    fn ragged_batch() {
        let batch: Batch = serde_json::from_value(json!({
            "meeting_id": ["A", "B"],
            "text": ["hi"],
        }))
        .unwrap();
        assert!(batch.records().is_err());
    }
}
