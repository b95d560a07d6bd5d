//! Currency arithmetic shared by the generators.
//!
//! Amounts are dollars held in `f64` and rounded to cents at creation time,
//! so exported values never carry float noise such as `122.49999999999999`.

/// Fraction of a service price collected as a deposit.
pub const DEPOSIT_RATE: f64 = 0.30;

/// Sales tax rate in percent, as printed on invoices.
pub const TAX_RATE_PERCENT: f64 = 8.25;

const TAX_RATE: f64 = TAX_RATE_PERCENT / 100.0;

/// Rounds an amount to two decimal places, ties to even.
///
/// An exact half cent goes to the even cent, so `20.625` becomes `20.62`
/// while `162.375` becomes `162.38`.
///
/// # Example
///
/// ```
/// use salon_data::money::round2;
///
/// assert!((round2(162.375) - 162.38).abs() < 1e-9);
/// assert!((round2(20.625) - 20.62).abs() < 1e-9);
/// assert!((round2(12.0) - 12.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round_ties_even() / 100.0
}

/// Deposit collected up front for a service price.
#[must_use]
pub fn deposit_for(price: f64) -> f64 {
    round2(price * DEPOSIT_RATE)
}

/// Balance outstanding after the deposit for a service price.
///
/// Computed as the remainder of the price so that deposit and balance
/// always add back up to the price.
#[must_use]
pub fn balance_for(price: f64) -> f64 {
    round2(price - deposit_for(price))
}

/// Tax owed on a subtotal.
#[must_use]
pub fn tax_for(subtotal: f64) -> f64 {
    round2(subtotal * TAX_RATE)
}

/// Subtotal inflated by the tax rate.
#[must_use]
pub fn total_with_tax(subtotal: f64) -> f64 {
    round2(subtotal * (1.0 + TAX_RATE))
}

/// Scales an amount by a factor and rounds the result to cents.
#[must_use]
pub fn scale(amount: f64, factor: f64) -> f64 {
    round2(amount * factor)
}
