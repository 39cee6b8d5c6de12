/*! JSON lines record reader.
 * !*/
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::Error;
use crate::record::Record;

/// Yields one [Record] per non-blank line.
///
/// Malformed lines yield [Error::Parse] with their 1-based line number,
/// and reading can go on after them.
#[derive(Debug)]
pub struct Reader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
    line: usize,
    position: usize,
}

pub type JsonlReader = Reader<File>;

impl JsonlReader {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handler = File::open(src)?;
        Ok(Self::new(handler))
    }
}

impl<T> Reader<T>
where
    T: Read,
{
    pub fn new(inner: T) -> Self {
        Self {
            lines: BufReader::new(inner).lines(),
            line: 0,
            position: 0,
        }
    }
}

impl<T> Iterator for Reader<T>
where
    T: Read,
{
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            self.line += 1;

            if line.trim().is_empty() {
                continue;
            }

            let fields = match serde_json::from_str::<Map<String, Value>>(&line) {
                Ok(fields) => fields,
                Err(e) => {
                    return Some(Err(Error::Parse {
                        line: self.line,
                        msg: e.to_string(),
                    }))
                }
            };

            let record = Record::new(self.position, fields);
            self.position += 1;
            return Some(Ok(record));
        }
    }
}
