//! Generated record types.
//!
//! Each entity is a flat struct of scalar fields. Field declaration order is
//! significant: it becomes the column order in the workbook and the key order
//! in the JSON documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a customer prefers to be contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPreference {
    /// Email.
    Email,
    /// Voice call.
    Phone,
    /// SMS.
    Text,
}

/// Purpose of a customer address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    /// Primary residence; every customer has exactly one.
    Home,
    /// Optional separate billing address.
    Billing,
}

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked and confirmed by the studio.
    Confirmed,
    /// Requested but not yet confirmed.
    Pending,
    /// Service delivered and paid.
    Completed,
    /// Cancelled before the service date.
    Cancelled,
}

/// Where a service takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// At the studio.
    Studio,
    /// At the client's home.
    Home,
}

/// How a completed appointment was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash.
    Cash,
    /// Credit card.
    CreditCard,
    /// Debit card.
    DebitCard,
    /// Venmo transfer.
    Venmo,
    /// Zelle transfer.
    Zelle,
}

impl PaymentMethod {
    /// Every accepted payment method, in display order.
    pub const ALL: [Self; 5] = [
        Self::Cash,
        Self::CreditCard,
        Self::DebitCard,
        Self::Venmo,
        Self::Zelle,
    ];

    /// Returns the serialized name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::CreditCard => "credit_card",
            Self::DebitCard => "debit_card",
            Self::Venmo => "venmo",
            Self::Zelle => "zelle",
        }
    }
}

/// Settlement state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Settled in full.
    Paid,
}

/// A studio client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Sequential identifier such as `CUST0001`.
    pub customer_id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email derived from the name and sequence number.
    pub email: String,
    /// Phone number in `(214) NNN-NNNN` form.
    pub phone: String,
    /// Day the customer registered.
    pub date_registered: NaiveDate,
    /// Lifetime visit count.
    pub total_visits: u32,
    /// Loyalty points balance.
    pub loyalty_points: u32,
    /// Preferred contact channel.
    pub preferred_contact: ContactPreference,
    /// Free-form note, possibly empty.
    pub notes: String,
}

/// A postal address belonging to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Identifier sequential across every address in a run.
    pub address_id: String,
    /// Owning customer.
    pub customer_id: String,
    /// Home or billing.
    pub address_type: AddressType,
    /// House number and street.
    pub street_address: String,
    /// Apartment or suite, possibly empty.
    pub apt_unit: String,
    /// City.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Five-digit ZIP code.
    pub zip_code: String,
    /// Whether this is the customer's default address.
    pub is_default: bool,
}

/// A booked service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Sequential identifier such as `APT0001`.
    pub appointment_id: String,
    /// Booking customer.
    pub customer_id: String,
    /// Name of the booked service.
    pub service_name: String,
    /// Service day.
    pub appointment_date: NaiveDate,
    /// Start time as `HH:00`.
    pub appointment_time: String,
    /// Duration of the service.
    pub duration_minutes: u32,
    /// Studio or home visit.
    pub location: Location,
    /// Lifecycle state.
    pub status: AppointmentStatus,
    /// Deposit taken at booking.
    pub deposit_paid: f64,
    /// Full service price.
    pub total_amount: f64,
    /// Amount still owed; zero once completed.
    pub balance_due: f64,
    /// Settlement method, present only once completed.
    pub payment_method: Option<PaymentMethod>,
    /// Free-form note, possibly empty.
    pub notes: String,
}

/// A service or retail product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Sequential identifier such as `PROD001`.
    pub product_id: String,
    /// Service or product name.
    pub service_name: String,
    /// Catalog category.
    pub category: String,
    /// List price.
    pub base_price: f64,
    /// Service duration; zero for retail items.
    pub duration_minutes: u32,
    /// Deposit required at booking; zero for retail items.
    pub deposit_required: f64,
    /// Whether the product is offered.
    pub is_active: bool,
    /// Short description.
    pub description: String,
    /// Whether lashes are included.
    pub includes_lashes: bool,
    /// Whether a touch-up is included.
    pub includes_touch_up: bool,
}

/// A bill raised for a completed appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Sequential identifier such as `INV00001`.
    pub invoice_id: String,
    /// Appointment being billed.
    pub appointment_id: String,
    /// Billed customer.
    pub customer_id: String,
    /// Issue date, equal to the appointment date.
    pub invoice_date: NaiveDate,
    /// Date payment falls due.
    pub due_date: NaiveDate,
    /// Pre-tax amount.
    pub subtotal: f64,
    /// Tax rate in percent.
    pub tax_rate: f64,
    /// Tax owed on the subtotal.
    pub tax_amount: f64,
    /// Courtesy discount recorded on the invoice.
    pub discount: f64,
    /// Subtotal plus tax.
    pub total_amount: f64,
    /// Amount received.
    pub amount_paid: f64,
    /// Amount outstanding.
    pub balance: f64,
    /// Settlement state.
    pub payment_status: PaymentStatus,
    /// Day payment was received.
    pub payment_date: NaiveDate,
    /// Settlement method carried over from the appointment.
    pub payment_method: Option<PaymentMethod>,
}

/// A member of the studio team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Fixed identifier such as `STAFF001`.
    pub staff_id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Job title.
    pub role: String,
    /// Work email.
    pub email: String,
    /// Work phone.
    pub phone: String,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Whether the staff member is active.
    pub is_active: bool,
    /// Comma-separated specialties.
    pub specialties: String,
    /// Hourly rate.
    pub hourly_rate: f64,
}

/// Booking and revenue figures for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAnalytics {
    /// Reported day.
    pub date: NaiveDate,
    /// Weekday name.
    pub day_of_week: String,
    /// Bookings taken for the day.
    pub total_bookings: u32,
    /// Bookings that were delivered.
    pub completed_bookings: u32,
    /// Bookings cancelled.
    pub cancelled_bookings: u32,
    /// Clients who did not show.
    pub no_shows: u32,
    /// Revenue for the day.
    pub revenue: f64,
    /// Deposits collected for the day.
    pub deposits_collected: f64,
    /// Tips received for the day.
    pub tips: f64,
    /// First-time clients.
    pub new_clients: u32,
    /// Repeat clients.
    pub returning_clients: u32,
    /// Mean review score.
    pub average_rating: f64,
}

/// A stocked supply with derived valuation fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Fixed identifier such as `ITEM001`.
    pub item_id: String,
    /// Item name.
    pub item_name: String,
    /// Supply category.
    pub category: String,
    /// Manufacturer.
    pub brand: String,
    /// Units on hand.
    pub quantity: u32,
    /// Unit of measure.
    pub unit: String,
    /// Cost per unit.
    pub cost_per_unit: f64,
    /// Reorder threshold.
    pub reorder_level: u32,
    /// Usual supplier.
    pub supplier: String,
    /// Quantity times unit cost.
    pub total_value: f64,
    /// Whether quantity is at or below the reorder threshold.
    pub needs_reorder: bool,
    /// Day the item was last restocked.
    pub last_restocked: NaiveDate,
}

/// Opening hours and slot usage for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// Scheduled day.
    pub date: NaiveDate,
    /// Weekday name.
    pub day_of_week: String,
    /// Whether the studio is open.
    pub is_available: bool,
    /// Opening time, absent on closed days.
    pub open_time: Option<String>,
    /// Closing time, absent on closed days.
    pub close_time: Option<String>,
    /// Bookable slots.
    pub total_slots: u32,
    /// Slots already taken.
    pub booked_slots: u32,
    /// Slots still free.
    pub available_slots: u32,
    /// Whether the day hosts a special event.
    pub is_special_event: bool,
    /// Free-form note, possibly empty.
    pub notes: String,
}

/// A configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    /// Fixed identifier such as `SET001`.
    pub setting_id: String,
    /// Grouping.
    pub category: String,
    /// Configuration key.
    pub setting_key: String,
    /// Value rendered as text.
    pub setting_value: String,
    /// What the setting controls.
    pub description: String,
}
