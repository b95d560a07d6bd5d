//! Internally consistent demo records for a small beauty-services studio.
//!
//! This crate generates customers, their addresses, appointments, products,
//! invoices, staff, daily analytics, inventory, an opening schedule and
//! studio settings, then writes them either to a styled XLSX workbook or to
//! a set of JSON documents.
//!
//! # Overview
//!
//! - Every random draw goes through a [`RandomSource`], so a seeded run is
//!   reproducible and tests can script exact values.
//! - Records reference one another: addresses and appointments point at
//!   generated customers, and invoices exist only for completed
//!   appointments. [`check_consistency`] verifies these rules.
//! - A [`Dataset`] flattens into ordered tables that a [`Sink`] writes.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use salon_data::{
//!     EntityKind, GenerationOptions, SeededSource, check_consistency, generate_dataset,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
//! let mut rng = SeededSource::from_seed(42);
//! let dataset = generate_dataset(&mut rng, today, GenerationOptions::default())
//!     .expect("generation succeeds");
//!
//! assert_eq!(dataset.count(EntityKind::Customers), 50);
//! assert!(check_consistency(&dataset).is_empty());
//!
//! let tables = dataset.tables().expect("records flatten");
//! assert_eq!(tables.len(), 10);
//! ```

mod atomic_io;
mod catalog;
mod config;
mod consistency;
mod dataset;
mod error;
pub mod generator;
pub mod money;
mod random;
pub mod records;
pub mod sink;
mod summary;

pub use catalog::{
    INVENTORY, InventoryDef, RETAIL_ITEMS, RetailDef, SERVICES, STAFF, ServiceDef, StaffDef,
};
pub use config::Settings;
pub use consistency::{Violation, check_consistency};
pub use dataset::{
    DEFAULT_APPOINTMENT_COUNT, DEFAULT_CUSTOMER_COUNT, Dataset, EntityKind, GenerationOptions,
    Record, Table, generate_dataset,
};
pub use error::{ConfigError, ExportError, GenerationError};
pub use random::{RandomSource, ScriptedSource, SeededSource};
pub use sink::{DocumentSink, Sink, SinkReport, select_sink, tabular_available};
pub use summary::{FALLBACK_NOTICE, fallback_notice, summary_lines};
#[cfg(feature = "xlsx")]
pub use sink::TabularSink;
