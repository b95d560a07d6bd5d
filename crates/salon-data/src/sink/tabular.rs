//! XLSX workbook: one styled sheet per entity.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet, XlsxError};
use serde_json::Value;
use tracing::{debug, info};

use super::layout::{column_widths, header_label};
use super::{Sink, SinkReport};
use crate::atomic_io::{open_parent, write_atomic};
use crate::dataset::Table;
use crate::error::ExportError;

/// Header fill colour.
const HEADER_FILL: u32 = 0x00D6_3384;

/// Writes every table to its own sheet in a single workbook.
///
/// Sheets appear in table order. The first row holds the field names as
/// bold white labels on a pink fill and stays frozen while scrolling. A
/// table with no records still gets an empty sheet.
#[derive(Debug, Clone)]
pub struct TabularSink {
    path: PathBuf,
}

impl TabularSink {
    /// Creates a sink writing the workbook to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the workbook file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for TabularSink {
    fn name(&self) -> &'static str {
        "xlsx"
    }

    fn write(&self, tables: &[Table]) -> Result<SinkReport, ExportError> {
        let (dir, file_name) = open_parent(&self.path)?;
        let mut workbook = Workbook::new();
        let header = header_format();

        for table in tables {
            let sheet_name = table.kind.sheet_name();
            let worksheet = workbook.add_worksheet();
            fill_sheet(worksheet, table, &header).map_err(|err| ExportError::WorkbookError {
                sheet: sheet_name.to_owned(),
                message: err.to_string(),
            })?;
            debug!(sheet = sheet_name, rows = table.records.len(), "filled sheet");
        }

        let bytes = workbook
            .save_to_buffer()
            .map_err(|err| ExportError::WorkbookError {
                sheet: String::new(),
                message: err.to_string(),
            })?;
        write_atomic(&dir, &file_name, &self.path, &bytes)?;

        info!(path = %self.path.display(), sheets = tables.len(), "wrote workbook");
        Ok(SinkReport {
            sink: self.name(),
            files: vec![self.path.clone()],
        })
    }
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn fill_sheet(worksheet: &mut Worksheet, table: &Table, header: &Format) -> Result<(), XlsxError> {
    worksheet.set_name(table.kind.sheet_name())?;

    let columns = table.columns();
    if columns.is_empty() {
        return Ok(());
    }

    for (col, field) in (0_u16..).zip(&columns) {
        worksheet.write_string_with_format(0, col, header_label(field), header)?;
    }

    for (row, record) in (1_u32..).zip(&table.records) {
        for (col, field) in (0_u16..).zip(&columns) {
            match record.get(*field) {
                Some(Value::String(text)) => {
                    worksheet.write_string(row, col, text)?;
                }
                Some(Value::Number(number)) => {
                    if let Some(value) = number.as_f64() {
                        worksheet.write_number(row, col, value)?;
                    }
                }
                Some(Value::Bool(flag)) => {
                    worksheet.write_boolean(row, col, *flag)?;
                }
                Some(other @ (Value::Array(_) | Value::Object(_))) => {
                    worksheet.write_string(row, col, other.to_string())?;
                }
                Some(Value::Null) | None => {}
            }
        }
    }

    for (col, width) in (0_u16..).zip(column_widths(table)) {
        worksheet.set_column_width(col, width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    Ok(())
}
