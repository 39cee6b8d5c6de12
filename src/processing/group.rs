/*! Stream grouping

Carves a flat record stream into per-conversation groups.

Streamed corpora list the rows of a conversation contiguously, which allows to stop reading at the first record
of the `n+1`th conversation. On a stream that is not contiguous by key, records of an admitted group that come after that point are lost.
!*/
use std::collections::HashMap;

use log::debug;

use crate::error::Error;
use crate::record::{Batch, Record};

/// Records sharing a key, in stream order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    key: String,
    records: Vec<Record>,
}

impl Group {
    pub fn new(key: String, records: Vec<Record>) -> Self {
        Self { key, records }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Columnar view of the group.
    pub fn to_batch(&self) -> Batch {
        Batch::from_records(&self.records)
    }
}

/// Collect the first `n` distinct groups of `stream`, keyed by `key_field`.
///
/// Groups are returned in first-seen order. Records of an already admitted key are always appended.
/// The first record bearing a new key once `n` keys are admitted ends the pass: nothing after it is read.
///
/// Fails with [Error::MissingKey] if a record has no `key_field`, and propagates stream errors.
pub fn take_first_n_groups<I>(stream: I, n: usize, key_field: &str) -> Result<Vec<Group>, Error>
where
    I: IntoIterator<Item = Result<Record, Error>>,
{
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Record>> = HashMap::new();

    for record in stream {
        let record = record?;
        let key = record.key(key_field)?;

        match groups.get_mut(&key) {
            Some(group) => group.push(record),
            None => {
                if order.len() >= n {
                    debug!("{} groups collected, stopping at key {}", n, key);
                    break;
                }
                order.push(key.clone());
                groups.insert(key, vec![record]);
            }
        }
    }

    Ok(order
        .into_iter()
        .map(|key| {
            let records = groups.remove(&key).unwrap_or_default();
            Group::new(key, records)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use serde_json::{json, Value};

    use super::*;

    fn stream(keys: &[&str]) -> Vec<Result<Record, Error>> {
        keys.iter()
            .enumerate()
            .map(|(i, k)| match json!({"k": k, "i": i}) {
                Value::Object(fields) => Ok(Record::new(i, fields)),
                _ => unreachable!(),
            })
            .collect()
    }

    fn shape(groups: &[Group]) -> Vec<Vec<String>> {
        groups
            .iter()
            .map(|g| g.records().iter().map(|r| r.key("k").unwrap()).collect())
            .collect()
    }

    #[test]
    fn admitted_groups_keep_growing() {
        let groups = take_first_n_groups(stream(&["A", "A", "B", "A"]), 2, "k").unwrap();
        assert_eq!(shape(&groups), vec![vec!["A", "A", "A"], vec!["B"]]);
        assert_eq!(groups[0].key(), "A");
        assert_eq!(groups[1].key(), "B");
    }

    #[test]
    fn stops_at_first_extra_key() {
        let groups = take_first_n_groups(stream(&["A", "B", "A"]), 1, "k").unwrap();
        assert_eq!(shape(&groups), vec![vec!["A"]]);
    }

    #[test]
    fn nothing_read_after_stop() {
        let consumed = Cell::new(0);
        let s = stream(&["A", "A", "B", "C", "C", "C"])
            .into_iter()
            .inspect(|_| consumed.set(consumed.get() + 1));

        let groups = take_first_n_groups(s, 2, "k").unwrap();
        assert_eq!(groups.len(), 2);
        // A, A, B, then C ends the pass
        assert_eq!(consumed.get(), 4);
    }

    #[test]
    fn fewer_groups_than_asked() {
        let groups = take_first_n_groups(stream(&["A", "B", "B"]), 5, "k").unwrap();
        assert_eq!(shape(&groups), vec![vec!["A"], vec!["B", "B"]]);
    }

    #[test]
    fn zero_groups() {
        let groups = take_first_n_groups(stream(&["A", "B"]), 0, "k").unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn missing_key() {
        let mut s = stream(&["A"]);
        s.push(Ok(Record::new(1, serde_json::Map::new())));
        let r = take_first_n_groups(s, 3, "k");
        assert!(matches!(r, Err(Error::MissingKey { position: 1, .. })));
    }

    #[test]
    fn stream_error() {
        let mut s = stream(&["A"]);
        s.push(Err(Error::Parse {
            line: 2,
            msg: "bad".to_string(),
        }));
        assert!(matches!(
            take_first_n_groups(s, 3, "k"),
            Err(Error::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn group_batch() {
        let groups = take_first_n_groups(stream(&["A", "A"]), 1, "k").unwrap();
        let batch = groups[0].to_batch();
        assert_eq!(batch.num_rows().unwrap(), 2);
        assert_eq!(batch.column("i").unwrap(), &[json!(0), json!(1)]);
    }
}
