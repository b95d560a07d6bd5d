//! Run configuration loaded via OrthoConfig.
//!
//! Values layer command-line flags over `SALON_DATA_*` environment variables
//! over the defaults below.

use std::ffi::OsString;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::dataset::{DEFAULT_APPOINTMENT_COUNT, DEFAULT_CUSTOMER_COUNT, GenerationOptions};
use crate::error::ConfigError;

const DEFAULT_OUTPUT_PATH: &str = "master.xlsx";
const DEFAULT_JSON_DIR: &str = "json";

/// Settings controlling one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SALON_DATA")]
pub struct Settings {
    /// Seed for the random source; a fresh seed is drawn when absent.
    pub seed: Option<u64>,
    /// Number of customers to generate.
    pub customer_count: Option<usize>,
    /// Number of appointments to generate.
    pub appointment_count: Option<usize>,
    /// Workbook path for the tabular sink.
    pub output_path: Option<PathBuf>,
    /// Existing directory the document sink writes into.
    pub json_dir: Option<PathBuf>,
    /// Write JSON documents even when the workbook writer is available.
    #[ortho_config(default = false)]
    pub json_only: bool,
}

impl Settings {
    /// Loads settings from command-line arguments and the environment.
    ///
    /// The first item of `args` is the program name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LoadError`] if a flag or variable cannot be
    /// parsed.
    pub fn load_from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::load_from_iter(args).map_err(|err| ConfigError::LoadError {
            message: err.to_string(),
        })
    }

    /// Return the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Return the customer count, falling back to the default.
    #[must_use]
    pub fn customer_count(&self) -> usize {
        self.customer_count.unwrap_or(DEFAULT_CUSTOMER_COUNT)
    }

    /// Return the appointment count, falling back to the default.
    #[must_use]
    pub fn appointment_count(&self) -> usize {
        self.appointment_count.unwrap_or(DEFAULT_APPOINTMENT_COUNT)
    }

    /// Return the workbook path, falling back to `master.xlsx`.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    /// Return the document directory, falling back to `json`.
    #[must_use]
    pub fn json_dir(&self) -> PathBuf {
        self.json_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_JSON_DIR))
    }

    /// Whether the document sink was requested explicitly.
    #[must_use]
    pub const fn json_only(&self) -> bool {
        self.json_only
    }

    /// Generator sizes derived from these settings.
    #[must_use]
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            customer_count: self.customer_count(),
            appointment_count: self.appointment_count(),
        }
    }

    /// Rejects combinations the generators cannot satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AppointmentsWithoutCustomers`] if appointments
    /// are requested with a customer count of zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let appointments = self.appointment_count();
        if appointments > 0 && self.customer_count() == 0 {
            return Err(ConfigError::AppointmentsWithoutCustomers { appointments });
        }
        Ok(())
    }
}
