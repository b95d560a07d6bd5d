//! Output sinks.
//!
//! A run writes its tables to exactly one [`Sink`]. The workbook sink is
//! preferred; when the crate is built without the `xlsx` feature, or JSON
//! output is requested, the document sink is used instead.

mod document;
mod layout;
#[cfg(feature = "xlsx")]
mod tabular;

use std::path::PathBuf;

use tracing::info;

use crate::config::Settings;
use crate::dataset::Table;
use crate::error::ExportError;

pub use document::{DocumentSink, MASTER_DOCUMENT};
pub use layout::{MAX_COLUMN_WIDTH, cell_text, column_widths, header_label};
#[cfg(feature = "xlsx")]
pub use tabular::TabularSink;

/// Destination for a generated dataset.
pub trait Sink {
    /// Short name of the output format.
    fn name(&self) -> &'static str;

    /// Writes every table.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the destination cannot be opened or a file
    /// cannot be serialized or written.
    fn write(&self, tables: &[Table]) -> Result<SinkReport, ExportError>;
}

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkReport {
    /// Name of the sink that wrote the files.
    pub sink: &'static str,
    /// Files written, in the order they were finalised.
    pub files: Vec<PathBuf>,
}

/// Whether this build can write XLSX workbooks.
#[must_use]
pub const fn tabular_available() -> bool {
    cfg!(feature = "xlsx")
}

/// Chooses the sink for a run.
///
/// Returns the workbook sink unless JSON output was requested or the
/// workbook writer is not compiled in; the latter case is logged as a
/// warning before falling back to the document sink.
#[must_use]
pub fn select_sink(settings: &Settings) -> Box<dyn Sink> {
    if settings.json_only() {
        info!(dir = %settings.json_dir().display(), "JSON output requested");
        return Box::new(DocumentSink::new(settings.json_dir()));
    }
    workbook_or_documents(settings)
}

#[cfg(feature = "xlsx")]
fn workbook_or_documents(settings: &Settings) -> Box<dyn Sink> {
    Box::new(TabularSink::new(settings.output_path()))
}

#[cfg(not(feature = "xlsx"))]
fn workbook_or_documents(settings: &Settings) -> Box<dyn Sink> {
    tracing::warn!(
        dir = %settings.json_dir().display(),
        "workbook writer unavailable; writing JSON documents instead"
    );
    Box::new(DocumentSink::new(settings.json_dir()))
}
