//! Cross-entity checks over a generated dataset.
//!
//! The generators are built so every check here holds; the binary runs them
//! after generation and logs anything that does not.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::dataset::{Dataset, EntityKind};
use crate::generator::INVOICE_DUE_DAYS;
use crate::money::{balance_for, deposit_for, scale, tax_for, total_with_tax};
use crate::records::{AddressType, Appointment, AppointmentStatus};

/// Largest difference tolerated between two monetary amounts.
const CENT_TOLERANCE: f64 = 0.005;

/// A record that breaks a cross-entity rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Entity the offending record belongs to.
    pub entity: EntityKind,
    /// Identifier (or date) of the offending record.
    pub record: String,
    /// What is wrong with it.
    pub problem: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.entity, self.record, self.problem)
    }
}

#[derive(Default)]
struct Findings(Vec<Violation>);

impl Findings {
    fn flag(&mut self, entity: EntityKind, record: &str, problem: impl Into<String>) {
        self.0.push(Violation {
            entity,
            record: record.to_owned(),
            problem: problem.into(),
        });
    }

    fn require(
        &mut self,
        holds: bool,
        entity: EntityKind,
        record: &str,
        problem: impl Into<String>,
    ) {
        if !holds {
            self.flag(entity, record, problem);
        }
    }
}

/// Checks every cross-entity rule and returns the records that break one.
///
/// An empty result means the dataset is internally consistent.
#[must_use]
pub fn check_consistency(dataset: &Dataset) -> Vec<Violation> {
    let mut findings = Findings::default();

    check_sequences(dataset, &mut findings);
    check_addresses(dataset, &mut findings);
    check_appointments(dataset, &mut findings);
    check_invoices(dataset, &mut findings);
    check_inventory(dataset, &mut findings);
    check_schedule(dataset, &mut findings);
    check_analytics(dataset, &mut findings);

    findings.0
}

const fn same_amount(left: f64, right: f64) -> bool {
    (left - right).abs() < CENT_TOLERANCE
}

fn check_sequence<'a>(
    findings: &mut Findings,
    entity: EntityKind,
    prefix: &str,
    width: usize,
    ids: impl Iterator<Item = &'a str>,
) {
    for (position, id) in ids.enumerate() {
        let expected = format!("{prefix}{:0width$}", position + 1);
        findings.require(
            id == expected,
            entity,
            id,
            format!("identifier out of sequence, expected {expected}"),
        );
    }
}

fn check_sequences(dataset: &Dataset, findings: &mut Findings) {
    check_sequence(
        findings,
        EntityKind::Customers,
        "CUST",
        4,
        dataset.customers.iter().map(|c| c.customer_id.as_str()),
    );
    check_sequence(
        findings,
        EntityKind::Addresses,
        "ADDR",
        4,
        dataset.addresses.iter().map(|a| a.address_id.as_str()),
    );
    check_sequence(
        findings,
        EntityKind::Appointments,
        "APT",
        4,
        dataset.appointments.iter().map(|a| a.appointment_id.as_str()),
    );
    check_sequence(
        findings,
        EntityKind::Products,
        "PROD",
        3,
        dataset.products.iter().map(|p| p.product_id.as_str()),
    );
    check_sequence(
        findings,
        EntityKind::Invoices,
        "INV",
        5,
        dataset.invoices.iter().map(|i| i.invoice_id.as_str()),
    );
    check_sequence(
        findings,
        EntityKind::Inventory,
        "ITEM",
        3,
        dataset.inventory.iter().map(|i| i.item_id.as_str()),
    );
    check_sequence(
        findings,
        EntityKind::Settings,
        "SET",
        3,
        dataset.settings.iter().map(|s| s.setting_id.as_str()),
    );
}

fn check_addresses(dataset: &Dataset, findings: &mut Findings) {
    let mut homes: HashMap<&str, usize> = dataset
        .customers
        .iter()
        .map(|customer| (customer.customer_id.as_str(), 0))
        .collect();

    for address in &dataset.addresses {
        let id = address.address_id.as_str();
        let Some(count) = homes.get_mut(address.customer_id.as_str()) else {
            findings.flag(
                EntityKind::Addresses,
                id,
                format!("unknown customer {}", address.customer_id),
            );
            continue;
        };
        let is_home = address.address_type == AddressType::Home;
        if is_home {
            *count += 1;
        }
        findings.require(
            address.is_default == is_home,
            EntityKind::Addresses,
            id,
            "only home addresses are default",
        );
    }

    for customer in &dataset.customers {
        let count = homes
            .get(customer.customer_id.as_str())
            .copied()
            .unwrap_or_default();
        findings.require(
            count == 1,
            EntityKind::Customers,
            &customer.customer_id,
            format!("has {count} home addresses"),
        );
    }
}

fn check_appointments(dataset: &Dataset, findings: &mut Findings) {
    let customers: HashSet<&str> = dataset
        .customers
        .iter()
        .map(|customer| customer.customer_id.as_str())
        .collect();

    for appointment in &dataset.appointments {
        let id = appointment.appointment_id.as_str();
        let entity = EntityKind::Appointments;
        findings.require(
            customers.contains(appointment.customer_id.as_str()),
            entity,
            id,
            format!("unknown customer {}", appointment.customer_id),
        );
        findings.require(
            same_amount(appointment.deposit_paid, deposit_for(appointment.total_amount)),
            entity,
            id,
            "deposit is not 30% of the total",
        );

        let completed = appointment.status == AppointmentStatus::Completed;
        let expected_balance = if completed {
            0.0
        } else {
            balance_for(appointment.total_amount)
        };
        findings.require(
            same_amount(appointment.balance_due, expected_balance),
            entity,
            id,
            format!("balance due should be {expected_balance:.2}"),
        );
        findings.require(
            appointment.payment_method.is_some() == completed,
            entity,
            id,
            "payment method must be present exactly when completed",
        );
    }
}

fn check_invoices(dataset: &Dataset, findings: &mut Findings) {
    let appointments: HashMap<&str, &Appointment> = dataset
        .appointments
        .iter()
        .map(|appointment| (appointment.appointment_id.as_str(), appointment))
        .collect();
    let mut invoiced: HashMap<&str, usize> = HashMap::new();

    for invoice in &dataset.invoices {
        let id = invoice.invoice_id.as_str();
        let entity = EntityKind::Invoices;
        *invoiced.entry(invoice.appointment_id.as_str()).or_default() += 1;

        let Some(appointment) = appointments.get(invoice.appointment_id.as_str()) else {
            findings.flag(
                entity,
                id,
                format!("unknown appointment {}", invoice.appointment_id),
            );
            continue;
        };
        findings.require(
            appointment.status == AppointmentStatus::Completed,
            entity,
            id,
            "invoiced appointment is not completed",
        );
        findings.require(
            invoice.customer_id == appointment.customer_id,
            entity,
            id,
            "customer differs from the appointment's",
        );
        findings.require(
            invoice.invoice_date == appointment.appointment_date,
            entity,
            id,
            "invoice date differs from the appointment date",
        );
        findings.require(
            (invoice.due_date - invoice.invoice_date).num_days() == INVOICE_DUE_DAYS,
            entity,
            id,
            format!("due date is not {INVOICE_DUE_DAYS} days after the invoice date"),
        );
        findings.require(
            same_amount(invoice.subtotal, appointment.total_amount)
                && same_amount(invoice.tax_amount, tax_for(invoice.subtotal))
                && same_amount(invoice.total_amount, total_with_tax(invoice.subtotal)),
            entity,
            id,
            "tax or total does not follow from the subtotal",
        );
        findings.require(
            same_amount(invoice.amount_paid, invoice.total_amount)
                && same_amount(invoice.balance, 0.0),
            entity,
            id,
            "invoice is not paid in full",
        );
        findings.require(
            invoice.payment_method == appointment.payment_method,
            entity,
            id,
            "payment method differs from the appointment's",
        );
    }

    for appointment in &dataset.appointments {
        if appointment.status != AppointmentStatus::Completed {
            continue;
        }
        let count = invoiced
            .get(appointment.appointment_id.as_str())
            .copied()
            .unwrap_or_default();
        findings.require(
            count == 1,
            EntityKind::Appointments,
            &appointment.appointment_id,
            format!("completed appointment has {count} invoices"),
        );
    }
}

fn check_inventory(dataset: &Dataset, findings: &mut Findings) {
    for item in &dataset.inventory {
        findings.require(
            item.needs_reorder == (item.quantity <= item.reorder_level),
            EntityKind::Inventory,
            &item.item_id,
            "reorder flag does not match stock level",
        );
        findings.require(
            same_amount(
                item.total_value,
                scale(f64::from(item.quantity), item.cost_per_unit),
            ),
            EntityKind::Inventory,
            &item.item_id,
            "total value is not quantity times unit cost",
        );
    }
}

fn check_schedule(dataset: &Dataset, findings: &mut Findings) {
    for day in &dataset.schedule {
        let date = day.date.to_string();
        findings.require(
            day.available_slots.checked_add(day.booked_slots) == Some(day.total_slots),
            EntityKind::Schedule,
            &date,
            "available and booked slots do not add up to the total",
        );
        if !day.is_available {
            findings.require(
                day.total_slots == 0 && day.open_time.is_none() && day.close_time.is_none(),
                EntityKind::Schedule,
                &date,
                "closed day has hours or slots",
            );
        }
    }
}

fn check_analytics(dataset: &Dataset, findings: &mut Findings) {
    for day in &dataset.analytics {
        let date = day.date.to_string();
        findings.require(
            day.completed_bookings <= day.total_bookings,
            EntityKind::Analytics,
            &date,
            "more completed than total bookings",
        );
        findings.require(
            day.returning_clients <= day.total_bookings,
            EntityKind::Analytics,
            &date,
            "more returning clients than bookings",
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::dataset::{GenerationOptions, generate_dataset};
    use crate::random::SeededSource;
    use crate::records::PaymentMethod;

    #[fixture]
    fn dataset() -> Dataset {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        generate_dataset(
            &mut SeededSource::from_seed(99),
            today,
            GenerationOptions::default(),
        )
        .expect("generated")
    }

    fn problems_for(violations: &[Violation], entity: EntityKind) -> Vec<&str> {
        violations
            .iter()
            .filter(|v| v.entity == entity)
            .map(|v| v.problem.as_str())
            .collect()
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(2026)]
    fn generated_datasets_are_consistent(#[case] seed: u64) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        let dataset = generate_dataset(
            &mut SeededSource::from_seed(seed),
            today,
            GenerationOptions::default(),
        )
        .expect("generated");

        assert_eq!(check_consistency(&dataset), Vec::new());
    }

    #[rstest]
    fn dangling_address_is_reported(mut dataset: Dataset) {
        let address = dataset.addresses.first_mut().expect("an address");
        address.customer_id = "CUST9999".to_owned();

        let violations = check_consistency(&dataset);

        assert!(
            problems_for(&violations, EntityKind::Addresses).contains(&"unknown customer CUST9999")
        );
        assert!(!problems_for(&violations, EntityKind::Customers).is_empty());
    }

    #[rstest]
    fn invoice_for_open_appointment_is_reported(mut dataset: Dataset) {
        let appointment_id = dataset
            .invoices
            .first()
            .map(|invoice| invoice.appointment_id.clone())
            .expect("an invoice");
        let appointment = dataset
            .appointments
            .iter_mut()
            .find(|a| a.appointment_id == appointment_id)
            .expect("invoiced appointment");
        appointment.status = AppointmentStatus::Pending;

        let violations = check_consistency(&dataset);

        assert!(
            problems_for(&violations, EntityKind::Invoices)
                .contains(&"invoiced appointment is not completed")
        );
    }

    #[rstest]
    fn mismatched_payment_method_is_reported(mut dataset: Dataset) {
        let invoice = dataset.invoices.first_mut().expect("an invoice");
        invoice.payment_method = if invoice.payment_method == Some(PaymentMethod::Cash) {
            Some(PaymentMethod::Zelle)
        } else {
            Some(PaymentMethod::Cash)
        };

        let violations = check_consistency(&dataset);

        assert_eq!(
            problems_for(&violations, EntityKind::Invoices),
            vec!["payment method differs from the appointment's"]
        );
    }

    #[rstest]
    fn wrong_reorder_flag_is_reported(mut dataset: Dataset) {
        let item = dataset.inventory.first_mut().expect("an item");
        item.needs_reorder = !item.needs_reorder;

        let violations = check_consistency(&dataset);

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.first().map(ToString::to_string),
            Some("Inventory ITEM001: reorder flag does not match stock level".to_owned())
        );
    }

    #[rstest]
    fn slot_arithmetic_is_checked(mut dataset: Dataset) {
        let day = dataset
            .schedule
            .iter_mut()
            .find(|d| d.is_available)
            .expect("an open day");
        day.booked_slots += 1;

        let violations = check_consistency(&dataset);

        assert_eq!(
            problems_for(&violations, EntityKind::Schedule),
            vec!["available and booked slots do not add up to the total"]
        );
    }
}
