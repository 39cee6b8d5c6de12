/*! CSV record reader.

The first row holds field names. Empty cells are read as `null`, so they are skipped by optional mappings.
Constant fields can be added to every record, which is how DAIC-WOZ transcripts get their dialogue identifier (see [daic_transcript_number]).
!*/
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{StringRecord, StringRecordsIntoIter};
use serde_json::{Map, Value};

use crate::error::Error;
use crate::record::Record;

pub struct CsvReader<R>
where
    R: Read,
{
    headers: StringRecord,
    records: StringRecordsIntoIter<R>,
    constants: Vec<(String, Value)>,
    position: usize,
}

impl CsvReader<File> {
    pub fn from_path(src: &Path, delimiter: u8) -> Result<Self, Error> {
        let f = File::open(src)?;
        Self::new(f, delimiter)
    }
}

/// Turn csv errors that carry a position into [Error::Parse].
fn row_error(e: csv::Error) -> Error {
    match e.position() {
        Some(pos) => Error::Parse {
            line: pos.line() as usize,
            msg: e.to_string(),
        },
        None => Error::Csv(e),
    }
}

impl<R> CsvReader<R>
where
    R: Read,
{
    pub fn new(inner: R, delimiter: u8) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_reader(inner);
        let headers = reader.headers().map_err(row_error)?.clone();

        Ok(Self {
            headers,
            records: reader.into_records(),
            constants: Vec::new(),
            position: 0,
        })
    }

    /// Set `field` to `value` on every record, overriding the column if any.
    pub fn with_constant(mut self, field: &str, value: &str) -> Self {
        self.constants
            .push((field.to_string(), Value::String(value.to_string())));
        self
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    fn to_record(&self, row: &StringRecord) -> Record {
        let mut fields: Map<String, Value> = self
            .headers
            .iter()
            .zip(row.iter())
            .map(|(name, cell)| {
                let value = if cell.trim().is_empty() {
                    Value::Null
                } else {
                    Value::String(cell.to_string())
                };
                (name.to_string(), value)
            })
            .collect();

        for (field, value) in &self.constants {
            fields.insert(field.clone(), value.clone());
        }

        Record::new(self.position, fields)
    }
}

impl<R> Iterator for CsvReader<R>
where
    R: Read,
{
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.records.next()? {
            Ok(row) => row,
            Err(e) => return Some(Err(row_error(e))),
        };
        let record = self.to_record(&row);
        self.position += 1;
        Some(Ok(record))
    }
}

/// Get the dialogue number of a DAIC-WOZ transcript from its file name (`300_TRANSCRIPT.csv` gives `300`).
pub fn daic_transcript_number(src: &Path) -> Result<String, Error> {
    let file_name = src
        .file_name()
        .and_then(|f| f.to_str())
        .ok_or_else(|| Error::Custom(format!("{:?} has no file name", src)))?;

    match file_name.strip_suffix("_TRANSCRIPT.csv") {
        Some(num) if num.len() == 3 && num.chars().all(|c| c.is_ascii_digit()) => {
            Ok(num.to_string())
        }
        _ => Err(Error::Custom(format!(
            "{} is not a DAIC-WOZ transcript name (expected NNN_TRANSCRIPT.csv)",
            file_name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const TRANSCRIPT: &str = "begin_time,end_time,speaker,value
36.588,39.668,Ellie,hi i'm ellie thanks for coming in today
62.328,63.178,Participant,
63.5,64.1,Participant,good
";

    #[test]
    fn read_rows() {
        let r = CsvReader::new(Cursor::new(TRANSCRIPT), b',').unwrap();
        let records: Vec<_> = r.collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].text("speaker").unwrap(), "Ellie");
        assert_eq!(records[0].text("begin_time").unwrap(), "36.588");
        assert_eq!(records[2].position(), 2);
        // empty cell is null
        assert!(records[1].get("value").is_none());
    }

    #[test]
    fn constants() {
        let r = CsvReader::new(Cursor::new(TRANSCRIPT), b',')
            .unwrap()
            .with_constant("dialogue_id", "300");
        for record in r {
            assert_eq!(record.unwrap().key("dialogue_id").unwrap(), "300");
        }
    }

    #[test]
    fn tab_delimited() {
        let data = "start_time\tstop_time\tspeaker\tvalue\n1.0\t2.0\tEllie\thello\n";
        let mut r = CsvReader::new(Cursor::new(data), b'\t').unwrap();
        assert_eq!(r.headers().len(), 4);
        let record = r.next().unwrap().unwrap();
        assert_eq!(record.text("value").unwrap(), "hello");
    }

    #[test]
    fn ragged_row() {
        let data = "a,b\n1,2\n1,2,3\n";
        let mut r = CsvReader::new(Cursor::new(data), b',').unwrap();
        assert!(r.next().unwrap().is_ok());
        assert!(matches!(r.next(), Some(Err(Error::Parse { line: 3, .. }))));
    }

    #[test]
    fn transcript_number() {
        assert_eq!(
            daic_transcript_number(Path::new("data/300_TRANSCRIPT.csv")).unwrap(),
            "300"
        );
        assert!(daic_transcript_number(Path::new("3000_TRANSCRIPT.csv")).is_err());
        assert!(daic_transcript_number(Path::new("abc_TRANSCRIPT.csv")).is_err());
        assert!(daic_transcript_number(Path::new("300_P.csv")).is_err());
    }
}
