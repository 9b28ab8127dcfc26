//! JSON file persistence for the inventory table.
//!
//! The file is a single JSON object mapping item name to integer quantity:
//!
//! ```json
//! {"apple": 7, "banana": 2}
//! ```
//!
//! Writes are whole-file overwrites. There is no version header.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

use stockroom_core::ItemName;

/// Default data file.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode inventory file {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode inventory file {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a table from `path`.
///
/// Returns `Ok(None)` when the file does not exist; every other failure is an
/// error.
pub(crate) fn read_table(path: &Path) -> Result<Option<IndexMap<ItemName, i64>>, PersistenceError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(PersistenceError::io(path, err)),
    };

    let table = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            PersistenceError::io(path, source.into())
        } else {
            PersistenceError::Decode {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(Some(table))
}

/// Overwrite `path` with `table`.
pub(crate) fn write_table(path: &Path, table: &IndexMap<ItemName, i64>) -> Result<(), PersistenceError> {
    let file = File::create(path).map_err(|err| PersistenceError::io(path, err))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, table).map_err(|source| PersistenceError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    writer.flush().map_err(|err| PersistenceError::io(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, i64)]) -> IndexMap<ItemName, i64> {
        entries
            .iter()
            .map(|(name, qty)| (ItemName::parse(*name).unwrap(), *qty))
            .collect()
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let got = read_table(&dir.path().join("absent.json")).unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn written_file_is_a_plain_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        write_table(&path, &table(&[("apple", 7), ("banana", 2)])).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({"apple": 7, "banana": 2}));
    }

    #[test]
    fn write_truncates_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        write_table(&path, &table(&[("apple", 7), ("banana", 2), ("cherry", 40)])).unwrap();
        write_table(&path, &table(&[("kiwi", 1)])).unwrap();

        let got = read_table(&path).unwrap().unwrap();
        assert_eq!(got, table(&[("kiwi", 1)]));
    }

    #[test]
    fn non_integer_quantities_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        for raw in [r#"{"apple": 1.5}"#, r#"{"apple": "ten"}"#, r#"["apple"]"#, "not json"] {
            std::fs::write(&path, raw).unwrap();
            let err = read_table(&path).unwrap_err();
            assert!(matches!(err, PersistenceError::Decode { .. }), "{raw}");
        }
    }

    #[test]
    fn directory_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_table(dir.path(), &table(&[])).unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }
}
