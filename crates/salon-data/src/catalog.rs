//! Static catalogs the generators draw from.
//!
//! Everything here is read-only process-wide data. Generators sample from
//! these lists but never modify them.

/// A bookable service offered by the studio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceDef {
    /// Display name, also used as the appointment's service name.
    pub name: &'static str,
    /// Full price in dollars.
    pub price: f64,
    /// Booked duration in minutes.
    pub duration_minutes: u32,
}

/// A retail product sold alongside services.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetailDef {
    /// Product name.
    pub name: &'static str,
    /// Retail price in dollars.
    pub price: f64,
    /// Product category.
    pub category: &'static str,
}

/// A stocked supply item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryDef {
    /// Item name.
    pub name: &'static str,
    /// Supply category.
    pub category: &'static str,
    /// Manufacturer.
    pub brand: &'static str,
    /// Units currently on hand.
    pub quantity: u32,
    /// Unit of measure.
    pub unit: &'static str,
    /// Purchase cost per unit in dollars.
    pub cost_per_unit: f64,
    /// Quantity at or below which the item should be reordered.
    pub reorder_level: u32,
    /// Usual supplier.
    pub supplier: &'static str,
}

/// A hand-authored staff member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaffDef {
    /// Fixed staff identifier.
    pub staff_id: &'static str,
    /// Given name.
    pub first_name: &'static str,
    /// Family name.
    pub last_name: &'static str,
    /// Job title.
    pub role: &'static str,
    /// Work email.
    pub email: &'static str,
    /// Work phone.
    pub phone: &'static str,
    /// Hire date as `YYYY-MM-DD`.
    pub hire_date: &'static str,
    /// Comma-separated specialties.
    pub specialties: &'static str,
    /// Hourly rate in dollars.
    pub hourly_rate: f64,
}

/// A static configuration entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDef {
    /// Grouping shown in the settings sheet.
    pub category: &'static str,
    /// Configuration key.
    pub key: &'static str,
    /// Configuration value rendered as text.
    pub value: &'static str,
    /// What the setting controls.
    pub description: &'static str,
}

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Sarah", "Amaka", "Jennifer", "Emily", "Jessica", "Ashley", "Michelle", "Stephanie",
    "Nicole", "Brittany", "Amanda", "Melissa", "Rebecca", "Laura",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Johnson", "Williams", "Davis", "Brown", "Miller", "Wilson", "Moore", "Taylor", "Anderson",
    "Thomas", "Jackson", "White", "Harris", "Martin",
];

/// Services in booking order. The first products mirror this list.
pub const SERVICES: &[ServiceDef] = &[
    ServiceDef {
        name: "Bridal Glam",
        price: 300.0,
        duration_minutes: 120,
    },
    ServiceDef {
        name: "Natural Beat",
        price: 150.0,
        duration_minutes: 60,
    },
    ServiceDef {
        name: "Evening Elegance",
        price: 200.0,
        duration_minutes: 90,
    },
    ServiceDef {
        name: "Special FX",
        price: 250.0,
        duration_minutes: 90,
    },
    ServiceDef {
        name: "Photo Ready",
        price: 175.0,
        duration_minutes: 75,
    },
    ServiceDef {
        name: "Glam Squad Package",
        price: 400.0,
        duration_minutes: 150,
    },
    ServiceDef {
        name: "Makeup Lesson",
        price: 125.0,
        duration_minutes: 60,
    },
];

pub(crate) const SERVICE_CATEGORIES: &[&str] =
    &["Bridal", "Special Event", "Everyday", "Educational"];

/// Retail items listed after the services in the product catalog.
pub const RETAIL_ITEMS: &[RetailDef] = &[
    RetailDef {
        name: "Lash Set - Natural",
        price: 25.0,
        category: "Lashes",
    },
    RetailDef {
        name: "Lash Set - Dramatic",
        price: 35.0,
        category: "Lashes",
    },
    RetailDef {
        name: "Lash Glue - Sensitive",
        price: 15.0,
        category: "Lashes",
    },
    RetailDef {
        name: "Setting Spray",
        price: 30.0,
        category: "Products",
    },
    RetailDef {
        name: "Makeup Remover Wipes",
        price: 12.0,
        category: "Products",
    },
    RetailDef {
        name: "Touch-Up Kit",
        price: 45.0,
        category: "Products",
    },
];

pub(crate) const STREETS: &[&str] = &[
    "Main St",
    "Oak Ave",
    "Maple Dr",
    "Cedar Ln",
    "Pine Rd",
    "Elm St",
    "Washington Blvd",
    "Jefferson Ave",
    "Madison Dr",
    "Monroe St",
];

pub(crate) const CITIES: &[&str] = &[
    "Dallas",
    "Plano",
    "Frisco",
    "McKinney",
    "Allen",
    "Richardson",
    "Carrollton",
];

pub(crate) const STATE_CODE: &str = "TX";
pub(crate) const AREA_CODE: &str = "214";
pub(crate) const ZIP_PREFIX: &str = "75";

pub(crate) const CUSTOMER_NOTES: &[&str] = &[
    "VIP client",
    "Referred by friend",
    "Social media",
    "Walk-in",
    "Regular client",
    "",
];

pub(crate) const APPOINTMENT_NOTES: &[&str] = &[
    "",
    "Allergic to latex",
    "Brings own brushes",
    "Prefers natural look",
    "Rush service",
];

/// The studio's two-person roster.
pub const STAFF: &[StaffDef] = &[
    StaffDef {
        staff_id: "STAFF001",
        first_name: "Beauty",
        last_name: "Bee",
        role: "CEO / Lead Makeup Artist",
        email: "beauty@glamorbybee.com",
        phone: "(214) 555-0001",
        hire_date: "2023-01-15",
        specialties: "Bridal, Special FX, Editorial",
        hourly_rate: 75.0,
    },
    StaffDef {
        staff_id: "STAFF002",
        first_name: "Paul",
        last_name: "Logistics",
        role: "Operations Manager",
        email: "paul@glamorbybee.com",
        phone: "(214) 555-0002",
        hire_date: "2023-02-01",
        specialties: "Scheduling, Inventory, Client Relations",
        hourly_rate: 45.0,
    },
];

/// Supplies tracked in the inventory sheet.
pub const INVENTORY: &[InventoryDef] = &[
    InventoryDef {
        name: "Foundation - Fair",
        category: "Foundation",
        brand: "Fenty Beauty",
        quantity: 6,
        unit: "bottle",
        cost_per_unit: 39.0,
        reorder_level: 3,
        supplier: "Sephora Pro",
    },
    InventoryDef {
        name: "Foundation - Medium",
        category: "Foundation",
        brand: "Fenty Beauty",
        quantity: 4,
        unit: "bottle",
        cost_per_unit: 39.0,
        reorder_level: 3,
        supplier: "Sephora Pro",
    },
    InventoryDef {
        name: "Foundation - Deep",
        category: "Foundation",
        brand: "Fenty Beauty",
        quantity: 2,
        unit: "bottle",
        cost_per_unit: 39.0,
        reorder_level: 3,
        supplier: "Sephora Pro",
    },
    InventoryDef {
        name: "Concealer Palette",
        category: "Concealer",
        brand: "NARS",
        quantity: 5,
        unit: "palette",
        cost_per_unit: 32.5,
        reorder_level: 2,
        supplier: "Sephora Pro",
    },
    InventoryDef {
        name: "Color Corrector Set",
        category: "Concealer",
        brand: "Make Up For Ever",
        quantity: 3,
        unit: "set",
        cost_per_unit: 28.0,
        reorder_level: 2,
        supplier: "Camera Ready",
    },
    InventoryDef {
        name: "Translucent Setting Powder",
        category: "Powder",
        brand: "Laura Mercier",
        quantity: 8,
        unit: "jar",
        cost_per_unit: 43.0,
        reorder_level: 3,
        supplier: "Ulta Pro",
    },
    InventoryDef {
        name: "Bronzer",
        category: "Powder",
        brand: "Benefit",
        quantity: 4,
        unit: "compact",
        cost_per_unit: 34.0,
        reorder_level: 2,
        supplier: "Ulta Pro",
    },
    InventoryDef {
        name: "Blush Palette",
        category: "Powder",
        brand: "Anastasia Beverly Hills",
        quantity: 3,
        unit: "palette",
        cost_per_unit: 40.0,
        reorder_level: 2,
        supplier: "Ulta Pro",
    },
    InventoryDef {
        name: "Eyeshadow Palette - Neutrals",
        category: "Eyes",
        brand: "Urban Decay",
        quantity: 5,
        unit: "palette",
        cost_per_unit: 54.0,
        reorder_level: 2,
        supplier: "Sephora Pro",
    },
    InventoryDef {
        name: "Eyeshadow Palette - Glam",
        category: "Eyes",
        brand: "Huda Beauty",
        quantity: 2,
        unit: "palette",
        cost_per_unit: 65.0,
        reorder_level: 2,
        supplier: "Sephora Pro",
    },
    InventoryDef {
        name: "Liquid Eyeliner",
        category: "Eyes",
        brand: "Stila",
        quantity: 12,
        unit: "pen",
        cost_per_unit: 22.0,
        reorder_level: 5,
        supplier: "Camera Ready",
    },
    InventoryDef {
        name: "Mascara",
        category: "Eyes",
        brand: "Too Faced",
        quantity: 10,
        unit: "tube",
        cost_per_unit: 27.0,
        reorder_level: 6,
        supplier: "Camera Ready",
    },
    InventoryDef {
        name: "Strip Lashes - Natural",
        category: "Lashes",
        brand: "Ardell",
        quantity: 40,
        unit: "pair",
        cost_per_unit: 4.5,
        reorder_level: 15,
        supplier: "Beauty Supply Direct",
    },
    InventoryDef {
        name: "Strip Lashes - Dramatic",
        category: "Lashes",
        brand: "Ardell",
        quantity: 12,
        unit: "pair",
        cost_per_unit: 5.25,
        reorder_level: 15,
        supplier: "Beauty Supply Direct",
    },
    InventoryDef {
        name: "Lash Adhesive",
        category: "Lashes",
        brand: "DUO",
        quantity: 6,
        unit: "tube",
        cost_per_unit: 8.75,
        reorder_level: 4,
        supplier: "Beauty Supply Direct",
    },
    InventoryDef {
        name: "Lipstick Set",
        category: "Lips",
        brand: "MAC",
        quantity: 7,
        unit: "set",
        cost_per_unit: 58.0,
        reorder_level: 2,
        supplier: "MAC Pro",
    },
    InventoryDef {
        name: "Lip Liner Set",
        category: "Lips",
        brand: "MAC",
        quantity: 3,
        unit: "set",
        cost_per_unit: 36.0,
        reorder_level: 2,
        supplier: "MAC Pro",
    },
    InventoryDef {
        name: "Setting Spray",
        category: "Skincare",
        brand: "Urban Decay",
        quantity: 9,
        unit: "bottle",
        cost_per_unit: 33.0,
        reorder_level: 4,
        supplier: "Ulta Pro",
    },
    InventoryDef {
        name: "Primer",
        category: "Skincare",
        brand: "Smashbox",
        quantity: 4,
        unit: "bottle",
        cost_per_unit: 38.0,
        reorder_level: 4,
        supplier: "Ulta Pro",
    },
    InventoryDef {
        name: "Makeup Remover Wipes",
        category: "Hygiene",
        brand: "Neutrogena",
        quantity: 30,
        unit: "pack",
        cost_per_unit: 6.5,
        reorder_level: 10,
        supplier: "Beauty Supply Direct",
    },
    InventoryDef {
        name: "Disposable Mascara Wands",
        category: "Hygiene",
        brand: "Generic",
        quantity: 150,
        unit: "piece",
        cost_per_unit: 0.12,
        reorder_level: 100,
        supplier: "Beauty Supply Direct",
    },
    InventoryDef {
        name: "Beauty Blenders",
        category: "Tools",
        brand: "Beautyblender",
        quantity: 18,
        unit: "piece",
        cost_per_unit: 11.0,
        reorder_level: 20,
        supplier: "Camera Ready",
    },
    InventoryDef {
        name: "Brush Cleaner",
        category: "Tools",
        brand: "Cinema Secrets",
        quantity: 3,
        unit: "bottle",
        cost_per_unit: 16.0,
        reorder_level: 2,
        supplier: "Camera Ready",
    },
];

/// Settings that do not mirror a generator constant.
pub(crate) const STATIC_SETTINGS: &[SettingDef] = &[
    SettingDef {
        category: "Business",
        key: "business_name",
        value: "Glamor by Bee",
        description: "Trading name shown on invoices",
    },
    SettingDef {
        category: "Business",
        key: "business_email",
        value: "beauty@glamorbybee.com",
        description: "Primary contact email",
    },
    SettingDef {
        category: "Business",
        key: "business_phone",
        value: "(214) 555-0001",
        description: "Primary contact phone",
    },
    SettingDef {
        category: "Business",
        key: "timezone",
        value: "America/Chicago",
        description: "Timezone used for bookings",
    },
    SettingDef {
        category: "Booking",
        key: "cancellation_window_hours",
        value: "48",
        description: "Hours before an appointment a client may cancel with a refund",
    },
    SettingDef {
        category: "Booking",
        key: "booking_lead_days",
        value: "2",
        description: "Minimum days between booking and appointment",
    },
    SettingDef {
        category: "Booking",
        key: "max_advance_booking_days",
        value: "180",
        description: "How far ahead clients may book",
    },
    SettingDef {
        category: "Notifications",
        key: "sms_reminders_enabled",
        value: "true",
        description: "Send SMS reminders before appointments",
    },
    SettingDef {
        category: "Notifications",
        key: "reminder_hours_before",
        value: "24",
        description: "Hours before an appointment to send a reminder",
    },
    SettingDef {
        category: "Notifications",
        key: "email_confirmations_enabled",
        value: "true",
        description: "Email a confirmation after booking",
    },
    SettingDef {
        category: "Travel",
        key: "travel_fee",
        value: "50.00",
        description: "Flat fee for on-location services",
    },
    SettingDef {
        category: "Travel",
        key: "service_radius_miles",
        value: "30",
        description: "Maximum distance for on-location services",
    },
];
