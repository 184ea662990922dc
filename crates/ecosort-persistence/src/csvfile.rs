//! Shared helpers for append-only CSV files.

use std::fs::OpenOptions;
use std::path::Path;

use crate::error::{PersistenceError, Result};

/// Create the file with a header row if it does not exist yet.
pub(crate) fn ensure_with_header(path: &Path, header: &[&str]) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| PersistenceError::Directory {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header)?;
    writer.flush()?;
    Ok(())
}

/// Append a single record to an existing CSV file.
pub(crate) fn append_record<I, F>(path: &Path, record: I) -> Result<()>
where
    I: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|source| PersistenceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(record)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_header_written_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/test.csv");

        ensure_with_header(&path, &["a", "b"]).unwrap();
        ensure_with_header(&path, &["a", "b"]).unwrap();
        append_record(&path, ["1", "2"]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a,b\n1,2\n");
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quoted.csv");

        ensure_with_header(&path, &["text"]).unwrap();
        append_record(&path, ["привет, бот"]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"привет, бот\""));
    }
}
