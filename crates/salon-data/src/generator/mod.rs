//! Record generators.
//!
//! Each generator is a plain function of a [`RandomSource`], the reference
//! day, and any previously generated records it depends on. The only side
//! effect is consuming draws from the source.

mod bookings;
mod calendar;
mod offerings;
mod people;

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

use crate::error::GenerationError;
use crate::random::RandomSource;

pub use bookings::{INVOICE_DUE_DAYS, generate_appointments, generate_invoices};
pub use calendar::{
    ANALYTICS_DAYS, SCHEDULE_DAYS, SLOTS_PER_DAY, generate_analytics, generate_schedule,
};
pub use offerings::{generate_inventory, generate_products, generate_settings};
pub use people::{generate_addresses, generate_customers, generate_staff};

/// Draws a uniform element from a catalog, failing if the catalog is empty.
fn pick<'a, R, T>(
    rng: &mut R,
    items: &'a [T],
    catalog: &'static str,
) -> Result<&'a T, GenerationError>
where
    R: RandomSource,
{
    rng.choose(items)
        .ok_or(GenerationError::EmptyCatalog { catalog })
}

/// Draws a weighted element from a catalog, failing if it has no weight.
fn pick_weighted<'a, R, T>(
    rng: &mut R,
    items: &'a [(T, u32)],
    catalog: &'static str,
) -> Result<&'a T, GenerationError>
where
    R: RandomSource,
{
    rng.choose_weighted(items)
        .ok_or(GenerationError::EmptyCatalog { catalog })
}

/// Draws a count uniformly from `low..=high`.
fn draw_u32<R: RandomSource>(rng: &mut R, low: u32, high: u32) -> u32 {
    u32::try_from(rng.int_in(i64::from(low), i64::from(high))).unwrap_or(low)
}

/// Shifts a day by a signed number of days.
fn shift_days(day: NaiveDate, days: i64) -> NaiveDate {
    day + TimeDelta::days(days)
}

/// Full English weekday name for a day.
fn weekday_name(day: NaiveDate) -> &'static str {
    match day.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
