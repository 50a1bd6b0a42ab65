//! Fetch collaborators
//!
//! The catalog never performs network access itself. A [`CatalogSource`] hands
//! it already-decoded records; the network request (or file read) happens on
//! the collaborator's side of this trait.

use super::error::FetchFailure;
use super::record::Record;
use std::fs;
use std::path::{Path, PathBuf};

/// Something that can supply the full record list once per session
pub trait CatalogSource {
    /// Produce the records in server order
    ///
    /// # Errors
    ///
    /// Returns `FetchFailure` if the data cannot be obtained or decoded.
    fn fetch(&self) -> Result<Vec<Record>, FetchFailure>;

    /// Short human-readable description, used in log lines
    fn describe(&self) -> String;
}

/// Decode a JSON array of records
///
/// # Errors
///
/// Returns `FetchFailure::Decode` if the bytes are not a JSON array of records.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<Record>, FetchFailure> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Reads the dataset from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Record>, FetchFailure> {
        let bytes = fs::read(&self.path)?;
        decode_records(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Decodes a response body that was fetched elsewhere
#[derive(Debug, Clone)]
pub struct JsonBytesSource {
    bytes: Vec<u8>,
}

impl JsonBytesSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl CatalogSource for JsonBytesSource {
    fn fetch(&self) -> Result<Vec<Record>, FetchFailure> {
        decode_records(&self.bytes)
    }

    fn describe(&self) -> String {
        format!("in-memory payload ({} bytes)", self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_records_keeps_server_order() {
        let records = decode_records(
            br#"[{"id":"3","name":"C"},{"id":"1","name":"A"},{"id":"2","name":"B"}]"#,
        )
        .unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_decode_records_keeps_rows_with_bad_optional_fields() {
        let records = decode_records(
            br#"[
                {"id":"1","name":"Aachen","geolocation":{"type":"Point","coordinates":[6.08333,50.775]}},
                {"id":"2","geolocation":{"coordinates":"broken"}},
                {"id":"3","name":"Abee","geolocation":null}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 3);
        assert!(records[0].geolocation.is_some());
        assert!(records[1].geolocation.is_none());
        assert!(records[1].name.is_empty());
        assert!(records[2].geolocation.is_none());
    }

    #[test]
    fn test_decode_records_rejects_non_array() {
        let result = decode_records(br#"{"id":"1","name":"A"}"#);
        assert!(matches!(result, Err(FetchFailure::Decode(_))));
    }

    #[test]
    fn test_bytes_source() {
        let source = JsonBytesSource::new(r#"[{"id":"1","name":"Aachen"}]"#);
        let records = source.fetch().unwrap();
        assert_eq!(records.len(), 1);
        assert!(source.describe().contains("bytes"));
    }

    #[test]
    fn test_file_source_reads_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landings.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(br#"[{"id":"1","name":"Aachen"},{"id":"2","name":"Aarhus"}]"#)
            .unwrap();

        let source = JsonFileSource::new(&path);
        assert_eq!(source.fetch().unwrap().len(), 2);
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = JsonFileSource::new("definitely/not/here.json");
        assert!(matches!(source.fetch(), Err(FetchFailure::Io(_))));
    }
}
