//! Appointments and the invoices raised for completed ones.

use chrono::NaiveDate;

use super::{draw_u32, pick, pick_weighted, shift_days};
use crate::catalog::{APPOINTMENT_NOTES, SERVICES};
use crate::error::GenerationError;
use crate::money::{TAX_RATE_PERCENT, balance_for, deposit_for, tax_for, total_with_tax};
use crate::random::RandomSource;
use crate::records::{
    Appointment, AppointmentStatus, Customer, Invoice, Location, PaymentMethod, PaymentStatus,
};

/// Days after the appointment that an invoice falls due.
pub const INVOICE_DUE_DAYS: i64 = 15;

/// Earliest appointment day, relative to today.
const EARLIEST_OFFSET: i64 = -90;

/// Latest appointment day, relative to today.
const LATEST_OFFSET: i64 = 30;

const FIRST_HOUR: u32 = 7;
const LAST_HOUR: u32 = 18;

const PAST_STATUSES: &[(AppointmentStatus, u32)] = &[
    (AppointmentStatus::Completed, 3),
    (AppointmentStatus::Cancelled, 1),
];

const FUTURE_STATUSES: &[(AppointmentStatus, u32)] = &[
    (AppointmentStatus::Confirmed, 2),
    (AppointmentStatus::Pending, 1),
];

const LOCATIONS: &[(Location, u32)] = &[(Location::Studio, 3), (Location::Home, 1)];

/// Discounts recorded on invoices, skewed towards none.
const DISCOUNTS: &[f64] = &[0.0, 0.0, 0.0, 10.0, 25.0, 50.0];

/// Generates `count` appointments for randomly chosen customers.
///
/// Dates fall between 90 days ago and 30 days ahead. Appointments before
/// today are mostly completed, today's are always completed, and anything
/// later is confirmed or pending. Deposits and
/// balances derive from the service price and the status.
///
/// # Errors
///
/// Returns [`GenerationError::NoCustomers`] if `count` is non-zero and
/// `customers` is empty, or [`GenerationError::EmptyCatalog`] if a catalog
/// is empty.
pub fn generate_appointments<R: RandomSource>(
    rng: &mut R,
    today: NaiveDate,
    customers: &[Customer],
    count: usize,
) -> Result<Vec<Appointment>, GenerationError> {
    if count > 0 && customers.is_empty() {
        return Err(GenerationError::NoCustomers { requested: count });
    }

    let mut appointments = Vec::with_capacity(count);

    for sequence in 1..=count {
        let customer = pick(rng, customers, "customers")?;
        let service = pick(rng, SERVICES, "services")?;
        let offset = rng.int_in(EARLIEST_OFFSET, LATEST_OFFSET);
        let hour = draw_u32(rng, FIRST_HOUR, LAST_HOUR);
        let location = *pick_weighted(rng, LOCATIONS, "locations")?;
        let status = status_for_offset(rng, offset)?;
        let completed = status == AppointmentStatus::Completed;
        let payment_method = if completed {
            Some(*pick(rng, &PaymentMethod::ALL, "payment methods")?)
        } else {
            None
        };

        appointments.push(Appointment {
            appointment_id: format!("APT{sequence:04}"),
            customer_id: customer.customer_id.clone(),
            service_name: service.name.to_owned(),
            appointment_date: shift_days(today, offset),
            appointment_time: format!("{hour:02}:00"),
            duration_minutes: service.duration_minutes,
            location,
            status,
            deposit_paid: deposit_for(service.price),
            total_amount: service.price,
            balance_due: if completed {
                0.0
            } else {
                balance_for(service.price)
            },
            payment_method,
            notes: (*pick(rng, APPOINTMENT_NOTES, "appointment notes")?).to_owned(),
        });
    }

    Ok(appointments)
}

/// Chooses a status from how far the appointment day lies from today.
fn status_for_offset<R: RandomSource>(
    rng: &mut R,
    offset: i64,
) -> Result<AppointmentStatus, GenerationError> {
    if offset < 0 {
        pick_weighted(rng, PAST_STATUSES, "past statuses").copied()
    } else if offset == 0 {
        Ok(AppointmentStatus::Completed)
    } else {
        pick_weighted(rng, FUTURE_STATUSES, "future statuses").copied()
    }
}

/// Raises one invoice per completed appointment, preserving input order.
///
/// Invoices are dated on the appointment day, fall due fifteen days later,
/// add 8.25% tax to the appointment total, and are always paid in full.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyCatalog`] if the discount catalog is
/// empty.
pub fn generate_invoices<R: RandomSource>(
    rng: &mut R,
    appointments: &[Appointment],
) -> Result<Vec<Invoice>, GenerationError> {
    appointments
        .iter()
        .filter(|appointment| appointment.status == AppointmentStatus::Completed)
        .enumerate()
        .map(|(position, appointment)| -> Result<Invoice, GenerationError> {
            let total = total_with_tax(appointment.total_amount);
            Ok(Invoice {
                invoice_id: format!("INV{:05}", position + 1),
                appointment_id: appointment.appointment_id.clone(),
                customer_id: appointment.customer_id.clone(),
                invoice_date: appointment.appointment_date,
                due_date: shift_days(appointment.appointment_date, INVOICE_DUE_DAYS),
                subtotal: appointment.total_amount,
                tax_rate: TAX_RATE_PERCENT,
                tax_amount: tax_for(appointment.total_amount),
                discount: *pick(rng, DISCOUNTS, "discounts")?,
                total_amount: total,
                amount_paid: total,
                balance: 0.0,
                payment_status: PaymentStatus::Paid,
                payment_date: appointment.appointment_date,
                payment_method: appointment.payment_method,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;
    use crate::generator::generate_customers;
    use crate::generator::test_fixtures::{rng, today};
    use crate::money::round2;
    use crate::random::{ScriptedSource, SeededSource};

    fn booked(rng: &mut SeededSource, today: NaiveDate, count: usize) -> Vec<Appointment> {
        let customers = generate_customers(rng, today, 20).expect("customers");
        generate_appointments(rng, today, &customers, count).expect("appointments")
    }

    #[rstest]
    fn appointments_reference_generated_customers(mut rng: SeededSource, today: NaiveDate) {
        let customers = generate_customers(&mut rng, today, 10).expect("customers");
        let appointments =
            generate_appointments(&mut rng, today, &customers, 80).expect("appointments");

        assert_eq!(appointments.len(), 80);
        for appointment in &appointments {
            assert!(
                customers
                    .iter()
                    .any(|c| c.customer_id == appointment.customer_id)
            );
            assert!(SERVICES.iter().any(|s| s.name == appointment.service_name));
        }
    }

    #[rstest]
    fn appointment_dates_and_hours_stay_in_window(mut rng: SeededSource, today: NaiveDate) {
        for appointment in booked(&mut rng, today, 200) {
            assert!(appointment.appointment_date >= shift_days(today, -90));
            assert!(appointment.appointment_date <= shift_days(today, 30));
            let hour: u32 = appointment
                .appointment_time
                .trim_end_matches(":00")
                .parse()
                .expect("hour");
            assert!((7..=18).contains(&hour));
        }
    }

    #[rstest]
    fn status_follows_the_appointment_date(mut rng: SeededSource, today: NaiveDate) {
        for appointment in booked(&mut rng, today, 300) {
            let status = appointment.status;
            if appointment.appointment_date > today {
                assert!(matches!(
                    status,
                    AppointmentStatus::Confirmed | AppointmentStatus::Pending
                ));
            } else if appointment.appointment_date == today {
                assert_eq!(status, AppointmentStatus::Completed);
            } else {
                assert!(matches!(
                    status,
                    AppointmentStatus::Completed | AppointmentStatus::Cancelled
                ));
            }
        }
    }

    #[rstest]
    fn financial_fields_follow_status(mut rng: SeededSource, today: NaiveDate) {
        for appointment in booked(&mut rng, today, 300) {
            let deposit = round2(appointment.total_amount * 0.3);
            assert!((appointment.deposit_paid - deposit).abs() < 1e-9);
            if appointment.status == AppointmentStatus::Completed {
                assert!(appointment.balance_due.abs() < f64::EPSILON);
                assert!(appointment.payment_method.is_some());
            } else {
                let sum = appointment.deposit_paid + appointment.balance_due;
                assert!((sum - appointment.total_amount).abs() < 1e-9);
                assert!(appointment.payment_method.is_none());
            }
        }
    }

    #[rstest]
    #[case(-90, AppointmentStatus::Completed)]
    #[case(-2, AppointmentStatus::Completed)]
    #[case(-1, AppointmentStatus::Completed)]
    #[case(0, AppointmentStatus::Completed)]
    #[case(1, AppointmentStatus::Confirmed)]
    #[case(30, AppointmentStatus::Confirmed)]
    fn status_for_offset_with_lowest_roll(
        #[case] offset: i64,
        #[case] expected: AppointmentStatus,
    ) {
        let mut rng = ScriptedSource::constant(0, 0.0);
        assert_eq!(status_for_offset(&mut rng, offset), Ok(expected));
    }

    #[rstest]
    #[case(-5, AppointmentStatus::Cancelled)]
    #[case(-1, AppointmentStatus::Cancelled)]
    #[case(0, AppointmentStatus::Completed)]
    #[case(3, AppointmentStatus::Pending)]
    fn status_for_offset_with_highest_roll(
        #[case] offset: i64,
        #[case] expected: AppointmentStatus,
    ) {
        let mut rng = ScriptedSource::constant(i64::MAX, 0.0);
        assert_eq!(status_for_offset(&mut rng, offset), Ok(expected));
    }

    #[test]
    fn appointments_without_customers_fail() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        let mut rng = SeededSource::from_seed(1);

        let result = generate_appointments(&mut rng, today, &[], 3);

        assert_eq!(result, Err(GenerationError::NoCustomers { requested: 3 }));
    }

    #[test]
    fn zero_appointments_need_no_customers() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        let mut rng = SeededSource::from_seed(1);

        let appointments = generate_appointments(&mut rng, today, &[], 0).expect("empty");

        assert!(appointments.is_empty());
    }

    #[rstest]
    fn invoices_cover_exactly_the_completed_appointments(mut rng: SeededSource, today: NaiveDate) {
        let appointments = booked(&mut rng, today, 150);
        let invoices = generate_invoices(&mut rng, &appointments).expect("invoices");

        let completed: Vec<_> = appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .map(|a| a.appointment_id.clone())
            .collect();
        let invoiced: Vec<_> = invoices.iter().map(|i| i.appointment_id.clone()).collect();
        assert_eq!(invoiced, completed);
    }

    #[rstest]
    fn invoices_are_paid_in_full_with_tax(mut rng: SeededSource, today: NaiveDate) {
        let appointments = booked(&mut rng, today, 150);
        let by_id: HashMap<_, _> = appointments
            .iter()
            .map(|a| (a.appointment_id.clone(), a))
            .collect();
        let invoices = generate_invoices(&mut rng, &appointments).expect("invoices");

        for (position, invoice) in invoices.iter().enumerate() {
            let appointment = by_id
                .get(&invoice.appointment_id)
                .expect("invoice references an appointment");
            assert_eq!(invoice.invoice_id, format!("INV{:05}", position + 1));
            assert_eq!(invoice.customer_id, appointment.customer_id);
            assert_eq!(invoice.invoice_date, appointment.appointment_date);
            assert_eq!(invoice.due_date, shift_days(appointment.appointment_date, 15));
            assert!((invoice.total_amount - round2(invoice.subtotal * 1.0825)).abs() < 1e-9);
            assert!((invoice.amount_paid - invoice.total_amount).abs() < f64::EPSILON);
            assert!(invoice.balance.abs() < f64::EPSILON);
            assert_eq!(invoice.payment_status, PaymentStatus::Paid);
            assert!(DISCOUNTS.contains(&invoice.discount));
        }
    }

    #[test]
    fn no_appointments_means_no_invoices() {
        let mut rng = SeededSource::from_seed(1);
        let invoices = generate_invoices(&mut rng, &[]).expect("invoices");
        assert!(invoices.is_empty());
    }
}
