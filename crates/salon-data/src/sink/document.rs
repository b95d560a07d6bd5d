//! JSON document set: one file per entity plus a combined file.

use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::{Sink, SinkReport};
use crate::atomic_io::{open_output_dir, write_atomic};
use crate::dataset::Table;
use crate::error::ExportError;

/// Name of the document holding every entity.
pub const MASTER_DOCUMENT: &str = "master_data.json";

/// Writes `<key>.json` for every entity, then [`MASTER_DOCUMENT`].
///
/// Each entity document is `{ "<key>": [records...] }`, indented for
/// reading. Files are finalised one at a time: a failure part way through
/// leaves the earlier files in place.
#[derive(Debug, Clone)]
pub struct DocumentSink {
    dir: PathBuf,
}

impl DocumentSink {
    /// Creates a sink writing into `dir`, which must already exist.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the documents are written to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Sink for DocumentSink {
    fn name(&self) -> &'static str {
        "json"
    }

    fn write(&self, tables: &[Table]) -> Result<SinkReport, ExportError> {
        let dir = open_output_dir(&self.dir)?;
        let mut files = Vec::with_capacity(tables.len() + 1);
        let mut master = Map::with_capacity(tables.len());

        for table in tables {
            let key = table.kind.key();
            let records = Value::Array(table.records.iter().cloned().map(Value::Object).collect());
            let mut document = Map::with_capacity(1);
            document.insert(key.to_owned(), records.clone());

            let file_name = format!("{key}.json");
            let path = self.dir.join(&file_name);
            let bytes = to_pretty(key, &Value::Object(document))?;
            write_atomic(&dir, &Utf8PathBuf::from(file_name), &path, &bytes)?;
            debug!(path = %path.display(), records = table.records.len(), "wrote document");

            master.insert(key.to_owned(), records);
            files.push(path);
        }

        let path = self.dir.join(MASTER_DOCUMENT);
        let bytes = to_pretty("master_data", &Value::Object(master))?;
        write_atomic(&dir, &Utf8PathBuf::from(MASTER_DOCUMENT), &path, &bytes)?;
        files.push(path);

        info!(dir = %self.dir.display(), files = files.len(), "wrote JSON documents");
        Ok(SinkReport {
            sink: self.name(),
            files,
        })
    }
}

fn to_pretty(entity: &'static str, value: &Value) -> Result<Vec<u8>, ExportError> {
    serde_json::to_vec_pretty(value).map_err(|err| ExportError::SerializeError {
        entity,
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use cap_std::ambient_authority;
    use cap_std::fs::Dir;
    use serde_json::json;

    use super::*;
    use crate::dataset::{EntityKind, Record};

    fn scratch(name: &str) -> PathBuf {
        let path = PathBuf::from("target")
            .join("salon-data-unit")
            .join(format!("documents-{name}-{}", std::process::id()));
        Dir::open_ambient_dir(".", ambient_authority())
            .and_then(|root| root.create_dir_all(&path))
            .expect("create scratch dir");
        path
    }

    fn staff_table() -> Table {
        let Value::Object(record) = json!({ "staff_id": "STAFF001", "hourly_rate": 75.0 }) else {
            panic!("object literal");
        };
        let records: Vec<Record> = vec![record];
        Table {
            kind: EntityKind::Staff,
            records,
        }
    }

    #[test]
    fn writes_entity_and_master_documents() {
        let dir = scratch("both");
        let sink = DocumentSink::new(&dir);
        assert_eq!(sink.dir(), dir.as_path());

        let report = sink.write(&[staff_table()]).expect("write succeeds");

        assert_eq!(report.sink, "json");
        assert_eq!(
            report.files,
            vec![dir.join("staff.json"), dir.join(MASTER_DOCUMENT)]
        );
        let staff: Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join("staff.json")).expect("read"))
                .expect("valid json");
        assert_eq!(
            staff,
            json!({ "staff": [{ "staff_id": "STAFF001", "hourly_rate": 75.0 }] })
        );
    }

    #[test]
    fn documents_are_indented() {
        let dir = scratch("indent");

        DocumentSink::new(&dir)
            .write(&[staff_table()])
            .expect("write succeeds");

        let text = std::fs::read_to_string(dir.join(MASTER_DOCUMENT)).expect("read");
        assert!(text.contains("\n  \"staff\": [\n"));
    }

    #[test]
    fn missing_directory_fails_without_creating_it() {
        let dir = PathBuf::from("target/salon-data-unit/documents-missing");
        let sink = DocumentSink::new(&dir);

        let result = sink.write(&[staff_table()]);

        assert!(matches!(result, Err(ExportError::OutputDirectory { .. })));
        assert!(!dir.exists());
    }
}
