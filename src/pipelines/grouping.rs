//! Grouping pipeline: keep the first dialogues of a JSON lines stream, one file per dialogue.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::reader::JsonlReader;
use crate::io::writer::save_groups_as_jsonl;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::take_first_n_groups;

pub struct Grouping {
    src: PathBuf,
    dst: PathBuf,
    n: usize,
    key_field: String,
}

impl Grouping {
    pub fn new(src: PathBuf, dst: PathBuf, n: usize, key_field: String) -> Self {
        Self {
            src,
            dst,
            n,
            key_field,
        }
    }
}

impl Pipeline<Vec<PathBuf>> for Grouping {
    fn run(&self) -> Result<Vec<PathBuf>, Error> {
        let reader = JsonlReader::from_path(&self.src)?;
        let groups = take_first_n_groups(reader, self.n, &self.key_field)?;
        info!("collected {} groups from {:?}", groups.len(), self.src);
        save_groups_as_jsonl(&groups, &self.dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("stream.jsonl");
        std::fs::write(
            &src,
            "{\"meeting_id\":\"A\"}\n{\"meeting_id\":\"A\"}\n{\"meeting_id\":\"B\"}\n{\"meeting_id\":\"C\"}\n",
        )
        .unwrap();

        let dst = dir.path().join("dialogues_json");
        let p = Grouping::new(src, dst.clone(), 2, "meeting_id".to_string());
        let paths = p.run().unwrap();

        assert_eq!(paths, vec![dst.join("A.jsonl"), dst.join("B.jsonl")]);
        assert_eq!(
            std::fs::read_to_string(&paths[0]).unwrap().lines().count(),
            2
        );
    }
}
