//! Whole-run orchestration: generate every entity and hand the result to a
//! sink as ordered tables.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{ExportError, GenerationError};
use crate::generator::{
    generate_addresses, generate_analytics, generate_appointments, generate_customers,
    generate_inventory, generate_invoices, generate_products, generate_schedule,
    generate_settings, generate_staff,
};
use crate::random::RandomSource;
use crate::records::{
    Address, Appointment, Customer, DailyAnalytics, Invoice, InventoryItem, Product,
    ScheduleDay, Setting, StaffMember,
};

/// Default number of customers per run.
pub const DEFAULT_CUSTOMER_COUNT: usize = 50;

/// Default number of appointments per run.
pub const DEFAULT_APPOINTMENT_COUNT: usize = 100;

/// A flattened record: field name to scalar value, in declaration order.
pub type Record = Map<String, Value>;

/// Sizes for the count-driven generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Number of customers to generate.
    pub customer_count: usize,
    /// Number of appointments to generate.
    pub appointment_count: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            customer_count: DEFAULT_CUSTOMER_COUNT,
            appointment_count: DEFAULT_APPOINTMENT_COUNT,
        }
    }
}

/// The ten generated entities, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Studio clients.
    Customers,
    /// Client addresses.
    Addresses,
    /// Booked appointments.
    Appointments,
    /// Services and retail items.
    Products,
    /// Invoices for completed appointments.
    Invoices,
    /// Staff roster.
    Staff,
    /// Trailing daily analytics.
    Analytics,
    /// Stocked supplies.
    Inventory,
    /// Forward opening schedule.
    Schedule,
    /// Studio settings.
    Settings,
}

impl EntityKind {
    /// Every entity kind, in sheet and file order.
    pub const ALL: [Self; 10] = [
        Self::Customers,
        Self::Addresses,
        Self::Appointments,
        Self::Products,
        Self::Invoices,
        Self::Staff,
        Self::Analytics,
        Self::Inventory,
        Self::Schedule,
        Self::Settings,
    ];

    /// Lowercase name used for JSON documents and their top-level key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Addresses => "addresses",
            Self::Appointments => "appointments",
            Self::Products => "products",
            Self::Invoices => "invoices",
            Self::Staff => "staff",
            Self::Analytics => "analytics",
            Self::Inventory => "inventory",
            Self::Schedule => "schedule",
            Self::Settings => "settings",
        }
    }

    /// Capitalised name used for the workbook sheet.
    #[must_use]
    pub const fn sheet_name(self) -> &'static str {
        match self {
            Self::Customers => "Customers",
            Self::Addresses => "Addresses",
            Self::Appointments => "Appointments",
            Self::Products => "Products",
            Self::Invoices => "Invoices",
            Self::Staff => "Staff",
            Self::Analytics => "Analytics",
            Self::Inventory => "Inventory",
            Self::Schedule => "Schedule",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

/// One entity's records, flattened for a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Which entity the records belong to.
    pub kind: EntityKind,
    /// Flattened records in generation order.
    pub records: Vec<Record>,
}

impl Table {
    /// Field names of the first record, or nothing for an empty table.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|record| record.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Every record generated in one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Generated customers.
    pub customers: Vec<Customer>,
    /// Addresses belonging to the customers.
    pub addresses: Vec<Address>,
    /// Appointments booked by the customers.
    pub appointments: Vec<Appointment>,
    /// Services and retail items.
    pub products: Vec<Product>,
    /// Invoices raised for completed appointments.
    pub invoices: Vec<Invoice>,
    /// Staff roster.
    pub staff: Vec<StaffMember>,
    /// Daily analytics for the trailing window.
    pub analytics: Vec<DailyAnalytics>,
    /// Stocked supplies.
    pub inventory: Vec<InventoryItem>,
    /// Opening schedule for the coming weeks.
    pub schedule: Vec<ScheduleDay>,
    /// Studio settings.
    pub settings: Vec<Setting>,
}

impl Dataset {
    /// Number of records generated for `kind`.
    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Customers => self.customers.len(),
            EntityKind::Addresses => self.addresses.len(),
            EntityKind::Appointments => self.appointments.len(),
            EntityKind::Products => self.products.len(),
            EntityKind::Invoices => self.invoices.len(),
            EntityKind::Staff => self.staff.len(),
            EntityKind::Analytics => self.analytics.len(),
            EntityKind::Inventory => self.inventory.len(),
            EntityKind::Schedule => self.schedule.len(),
            EntityKind::Settings => self.settings.len(),
        }
    }

    /// Per-entity record counts in output order.
    #[must_use]
    pub fn summary(&self) -> Vec<(EntityKind, usize)> {
        EntityKind::ALL
            .iter()
            .map(|kind| (*kind, self.count(*kind)))
            .collect()
    }

    /// Flattens every entity into ordered tables for a sink.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::SerializeError`] if a record cannot be
    /// serialized, or [`ExportError::MalformedRecord`] if a record does not
    /// flatten into a field mapping.
    pub fn tables(&self) -> Result<Vec<Table>, ExportError> {
        EntityKind::ALL
            .iter()
            .map(|kind| self.table(*kind))
            .collect()
    }

    fn table(&self, kind: EntityKind) -> Result<Table, ExportError> {
        let records = match kind {
            EntityKind::Customers => flatten(kind, &self.customers),
            EntityKind::Addresses => flatten(kind, &self.addresses),
            EntityKind::Appointments => flatten(kind, &self.appointments),
            EntityKind::Products => flatten(kind, &self.products),
            EntityKind::Invoices => flatten(kind, &self.invoices),
            EntityKind::Staff => flatten(kind, &self.staff),
            EntityKind::Analytics => flatten(kind, &self.analytics),
            EntityKind::Inventory => flatten(kind, &self.inventory),
            EntityKind::Schedule => flatten(kind, &self.schedule),
            EntityKind::Settings => flatten(kind, &self.settings),
        }?;
        Ok(Table { kind, records })
    }
}

/// Serializes typed records into field mappings.
pub(crate) fn flatten<T: Serialize>(
    kind: EntityKind,
    records: &[T],
) -> Result<Vec<Record>, ExportError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let value =
                serde_json::to_value(record).map_err(|err| ExportError::SerializeError {
                    entity: kind.key(),
                    message: err.to_string(),
                })?;
            into_record(kind, index, value)
        })
        .collect()
}

fn into_record(kind: EntityKind, index: usize, value: Value) -> Result<Record, ExportError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ExportError::MalformedRecord {
            entity: kind.key(),
            index,
        }),
    }
}

/// Generates a complete dataset.
///
/// Customers come first, then the records that reference them (addresses,
/// appointments, invoices), then the independent entities. Every draw is
/// taken from `rng`, so a seeded source reproduces the same dataset.
///
/// # Errors
///
/// Returns [`GenerationError`] if a generator fails, for example when
/// appointments are requested without any customers.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use salon_data::{GenerationOptions, SeededSource, generate_dataset};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
/// let options = GenerationOptions { customer_count: 5, appointment_count: 10 };
/// let dataset = generate_dataset(&mut SeededSource::from_seed(1), today, options)
///     .expect("generated");
///
/// assert_eq!(dataset.customers.len(), 5);
/// assert_eq!(dataset.appointments.len(), 10);
/// ```
pub fn generate_dataset<R: RandomSource>(
    rng: &mut R,
    today: NaiveDate,
    options: GenerationOptions,
) -> Result<Dataset, GenerationError> {
    debug!(%today, ?options, "generating dataset");

    let customers = generate_customers(rng, today, options.customer_count)?;
    let addresses = generate_addresses(rng, &customers)?;
    let appointments = generate_appointments(rng, today, &customers, options.appointment_count)?;
    let products = generate_products(rng)?;
    let invoices = generate_invoices(rng, &appointments)?;
    let staff = generate_staff()?;
    let analytics = generate_analytics(rng, today);
    let inventory = generate_inventory(rng, today);
    let schedule = generate_schedule(rng, today);
    let settings = generate_settings();

    let dataset = Dataset {
        customers,
        addresses,
        appointments,
        products,
        invoices,
        staff,
        analytics,
        inventory,
        schedule,
        settings,
    };

    info!(
        customers = dataset.customers.len(),
        addresses = dataset.addresses.len(),
        appointments = dataset.appointments.len(),
        invoices = dataset.invoices.len(),
        "generated dataset"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;
    use crate::random::SeededSource;

    #[fixture]
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    #[fixture]
    fn dataset(today: NaiveDate) -> Dataset {
        generate_dataset(
            &mut SeededSource::from_seed(11),
            today,
            GenerationOptions::default(),
        )
        .expect("generated")
    }

    #[rstest]
    fn default_options_match_documented_sizes() {
        let options = GenerationOptions::default();
        assert_eq!(options.customer_count, 50);
        assert_eq!(options.appointment_count, 100);
    }

    #[rstest]
    fn tables_follow_fixed_order(dataset: Dataset) {
        let tables = dataset.tables().expect("tables");

        let names: Vec<&str> = tables.iter().map(|t| t.kind.sheet_name()).collect();
        assert_eq!(
            names,
            vec![
                "Customers",
                "Addresses",
                "Appointments",
                "Products",
                "Invoices",
                "Staff",
                "Analytics",
                "Inventory",
                "Schedule",
                "Settings",
            ]
        );
    }

    #[rstest]
    fn columns_follow_declaration_order(dataset: Dataset) {
        let tables = dataset.tables().expect("tables");
        let customers = tables.first().expect("customers table");

        assert_eq!(
            customers.columns(),
            vec![
                "customer_id",
                "first_name",
                "last_name",
                "email",
                "phone",
                "date_registered",
                "total_visits",
                "loyalty_points",
                "preferred_contact",
                "notes",
            ]
        );
    }

    #[rstest]
    fn summary_matches_table_lengths(dataset: Dataset) {
        let tables = dataset.tables().expect("tables");

        for ((kind, count), table) in dataset.summary().into_iter().zip(&tables) {
            assert_eq!(kind, table.kind);
            assert_eq!(count, table.records.len());
        }
    }

    #[rstest]
    fn same_seed_reproduces_dataset(today: NaiveDate, dataset: Dataset) {
        let again = generate_dataset(
            &mut SeededSource::from_seed(11),
            today,
            GenerationOptions::default(),
        )
        .expect("generated");

        assert_eq!(again, dataset);
    }

    #[rstest]
    fn zero_appointments_yield_zero_invoices(today: NaiveDate) {
        let options = GenerationOptions {
            customer_count: 3,
            appointment_count: 0,
        };
        let dataset =
            generate_dataset(&mut SeededSource::from_seed(5), today, options).expect("generated");

        assert!(dataset.appointments.is_empty());
        assert!(dataset.invoices.is_empty());
        let tables = dataset.tables().expect("tables");
        assert!(tables
            .iter()
            .any(|t| t.kind == EntityKind::Invoices && t.columns().is_empty()));
    }

    #[rstest]
    fn appointments_without_customers_fail(today: NaiveDate) {
        let options = GenerationOptions {
            customer_count: 0,
            appointment_count: 4,
        };

        let result = generate_dataset(&mut SeededSource::from_seed(5), today, options);

        assert_eq!(result, Err(GenerationError::NoCustomers { requested: 4 }));
    }

    #[test]
    fn non_object_values_are_malformed() {
        let result = into_record(EntityKind::Staff, 2, json!("STAFF001"));

        assert_eq!(
            result,
            Err(ExportError::MalformedRecord {
                entity: "staff",
                index: 2,
            })
        );
    }

    #[test]
    fn optional_fields_flatten_to_null() {
        let records = flatten(EntityKind::Schedule, &[json!({ "open_time": null })])
            .expect("flattened");

        assert_eq!(
            records.first().and_then(|r| r.get("open_time")),
            Some(&Value::Null)
        );
    }
}
