//! Error types for the salon-data crate.
//!
//! This module defines semantic error enums for record generation and for
//! the export sinks, following the project's error handling conventions with
//! `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating records.
///
/// The static catalogs are never empty in practice, but generators draw from
/// them through fallible lookups so a bad edit surfaces as an error rather
/// than a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A catalog the generator draws from contains no entries.
    #[error("catalog '{catalog}' contains no entries")]
    EmptyCatalog {
        /// Name of the empty catalog.
        catalog: &'static str,
    },

    /// A catalog entry holds a value that cannot be converted.
    #[error("catalog '{catalog}' has an invalid entry: {entry}")]
    InvalidCatalogEntry {
        /// Name of the catalog.
        catalog: &'static str,
        /// The offending entry.
        entry: String,
    },

    /// Appointments were requested but no customers exist to book them.
    #[error("cannot generate {requested} appointments without any customers")]
    NoCustomers {
        /// Number of appointments requested.
        requested: usize,
    },
}

/// Errors that can occur while writing a dataset to a sink.
///
/// Every variant that touches the filesystem carries the offending path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The output directory is missing or cannot be opened.
    #[error("output directory '{path}' is not usable: {message}")]
    OutputDirectory {
        /// Path to the output directory.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A file could not be written.
    #[error("failed to write '{path}': {message}")]
    WriteError {
        /// Path to the file being written.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// Records for an entity could not be serialized.
    #[error("failed to serialize {entity}: {message}")]
    SerializeError {
        /// Entity key being serialized.
        entity: &'static str,
        /// Description of the serialization error.
        message: String,
    },

    /// A record did not flatten into a field mapping.
    #[error("record {index} of {entity} is not a flat field mapping")]
    MalformedRecord {
        /// Entity key of the record.
        entity: &'static str,
        /// Position of the record within its entity.
        index: usize,
    },

    /// The workbook writer rejected a sheet or cell.
    #[error("workbook error in sheet '{sheet}': {message}")]
    WorkbookError {
        /// Sheet being written when the error occurred.
        sheet: String,
        /// Description of the workbook error.
        message: String,
    },
}

/// Errors that can occur while loading or validating settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Layered configuration could not be loaded.
    #[error("failed to load configuration: {message}")]
    LoadError {
        /// Description of the loader error.
        message: String,
    },

    /// Appointments were requested with a customer count of zero.
    #[error("appointment count {appointments} requires at least one customer")]
    AppointmentsWithoutCustomers {
        /// Requested appointment count.
        appointments: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_empty_catalog_formats_correctly() {
        let err = GenerationError::EmptyCatalog {
            catalog: "first names",
        };
        assert_eq!(err.to_string(), "catalog 'first names' contains no entries");
    }

    #[test]
    fn generation_error_invalid_entry_formats_correctly() {
        let err = GenerationError::InvalidCatalogEntry {
            catalog: "staff",
            entry: "2023-13-01".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "catalog 'staff' has an invalid entry: 2023-13-01"
        );
    }

    #[test]
    fn generation_error_no_customers_formats_correctly() {
        let err = GenerationError::NoCustomers { requested: 100 };
        assert_eq!(
            err.to_string(),
            "cannot generate 100 appointments without any customers"
        );
    }

    #[test]
    fn export_error_output_directory_formats_correctly() {
        let err = ExportError::OutputDirectory {
            path: PathBuf::from("json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "output directory 'json' is not usable: file not found"
        );
    }

    #[test]
    fn export_error_write_formats_correctly() {
        let err = ExportError::WriteError {
            path: PathBuf::from("/tmp/master.xlsx"),
            message: "permission denied".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write '/tmp/master.xlsx': permission denied"
        );
    }

    #[test]
    fn export_error_malformed_record_formats_correctly() {
        let err = ExportError::MalformedRecord {
            entity: "invoices",
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "record 3 of invoices is not a flat field mapping"
        );
    }

    #[test]
    fn export_error_workbook_formats_correctly() {
        let err = ExportError::WorkbookError {
            sheet: "Customers".to_owned(),
            message: "name too long".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "workbook error in sheet 'Customers': name too long"
        );
    }

    #[test]
    fn config_error_appointments_without_customers_formats_correctly() {
        let err = ConfigError::AppointmentsWithoutCustomers { appointments: 5 };
        assert_eq!(
            err.to_string(),
            "appointment count 5 requires at least one customer"
        );
    }
}
