/*! JSON lines writer for record groups.

Each group of a stream ends up in its own `<key>.jsonl` file, one record per line.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::processing::Group;
use crate::record::Record;

/// Write `records` to `w`, one JSON object per line.
pub fn write_jsonl<W>(records: &[Record], mut w: W) -> Result<W, Error>
where
    W: Write,
{
    for record in records {
        serde_json::to_writer(&mut w, record.fields())?;
        w.write_all(b"\n")?;
    }
    Ok(w)
}

/// File name of a group, refusing keys that would leave the destination folder.
fn group_file_name(key: &str) -> Result<String, Error> {
    let mut components = Path::new(key).components();
    let single_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_name || key.contains(['/', '\\']) {
        return Err(Error::Custom(format!(
            "group key `{}` is not a valid file name",
            key
        )));
    }
    Ok(format!("{}.jsonl", key))
}

/// Save each group to `dst/<key>.jsonl`, creating `dst` if needed.
///
/// Returns the written paths, in group order.
/// Fails before writing anything if a key is not a plain file name (`..`, separators).
pub fn save_groups_as_jsonl(groups: &[Group], dst: &Path) -> Result<Vec<PathBuf>, Error> {
    let names = groups
        .iter()
        .map(|g| group_file_name(g.key()))
        .collect::<Result<Vec<_>, Error>>()?;

    std::fs::create_dir_all(dst)?;

    let mut paths = Vec::with_capacity(groups.len());
    for (group, name) in groups.iter().zip(names) {
        let path = dst.join(name);
        info!("saving {} ({} records) to {:?}", group.key(), group.len(), path);

        let f = File::create(&path)?;
        let mut w = write_jsonl(group.records(), BufWriter::new(f))?;
        w.flush()?;
        paths.push(path);
    }

    Ok(paths)
}
