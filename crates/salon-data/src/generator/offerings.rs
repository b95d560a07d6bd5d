//! The product catalog, stocked inventory, and studio settings.

use chrono::NaiveDate;

use super::{INVOICE_DUE_DAYS, SLOTS_PER_DAY, pick, shift_days};
use crate::catalog::{INVENTORY, RETAIL_ITEMS, SERVICE_CATEGORIES, SERVICES, STATIC_SETTINGS};
use crate::error::GenerationError;
use crate::money::{DEPOSIT_RATE, TAX_RATE_PERCENT, deposit_for, scale};
use crate::random::RandomSource;
use crate::records::{InventoryItem, PaymentMethod, Product, Setting};

/// Order in which setting categories are listed.
const SETTING_CATEGORIES: &[&str] = &["Business", "Booking", "Payments", "Notifications", "Travel"];

/// Generates the product catalog: every service, then every retail item.
///
/// Service products draw a category and two add-on flags at random; retail
/// items carry no duration, no deposit, and no add-ons. Identifiers run
/// sequentially across both groups.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyCatalog`] if the service category catalog
/// is empty.
pub fn generate_products<R: RandomSource>(rng: &mut R) -> Result<Vec<Product>, GenerationError> {
    let mut products = Vec::with_capacity(SERVICES.len() + RETAIL_ITEMS.len());

    for service in SERVICES {
        let category = *pick(rng, SERVICE_CATEGORIES, "service categories")?;
        products.push(Product {
            product_id: format!("PROD{:03}", products.len() + 1),
            service_name: service.name.to_owned(),
            category: category.to_owned(),
            base_price: service.price,
            duration_minutes: service.duration_minutes,
            deposit_required: deposit_for(service.price),
            is_active: true,
            description: format!("Professional {} service", service.name.to_lowercase()),
            includes_lashes: rng.chance(0.5),
            includes_touch_up: rng.chance(0.5),
        });
    }

    for item in RETAIL_ITEMS {
        products.push(Product {
            product_id: format!("PROD{:03}", products.len() + 1),
            service_name: item.name.to_owned(),
            category: item.category.to_owned(),
            base_price: item.price,
            duration_minutes: 0,
            deposit_required: 0.0,
            is_active: true,
            description: format!("{} for retail", item.name),
            includes_lashes: false,
            includes_touch_up: false,
        });
    }

    Ok(products)
}

/// Generates the inventory sheet from the stocked catalog.
///
/// Stock levels are fixed; only the last restock date (5 to 60 days ago) is
/// drawn at random.
pub fn generate_inventory<R: RandomSource>(rng: &mut R, today: NaiveDate) -> Vec<InventoryItem> {
    INVENTORY
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let restocked_days_ago = rng.int_in(5, 60);
            InventoryItem {
                item_id: format!("ITEM{:03}", position + 1),
                item_name: item.name.to_owned(),
                category: item.category.to_owned(),
                brand: item.brand.to_owned(),
                quantity: item.quantity,
                unit: item.unit.to_owned(),
                cost_per_unit: item.cost_per_unit,
                reorder_level: item.reorder_level,
                supplier: item.supplier.to_owned(),
                total_value: scale(f64::from(item.quantity), item.cost_per_unit),
                needs_reorder: item.quantity <= item.reorder_level,
                last_restocked: shift_days(today, -restocked_days_ago),
            }
        })
        .collect()
}

/// Generates the settings sheet.
///
/// Settings that mirror a generator constant (deposit percentage, tax rate,
/// slots per day, invoice terms, payment methods) are rendered from that
/// constant so the sheet always agrees with the generated records.
#[must_use]
pub fn generate_settings() -> Vec<Setting> {
    let mut entries: Vec<(&str, &str, String, &str)> = STATIC_SETTINGS
        .iter()
        .map(|def| (def.category, def.key, def.value.to_owned(), def.description))
        .collect();
    entries.extend(derived_settings());
    entries.sort_by_key(|(category, ..)| category_rank(category));

    entries
        .into_iter()
        .enumerate()
        .map(|(position, (category, key, value, description))| Setting {
            setting_id: format!("SET{:03}", position + 1),
            category: category.to_owned(),
            setting_key: key.to_owned(),
            setting_value: value,
            description: description.to_owned(),
        })
        .collect()
}

fn derived_settings() -> Vec<(&'static str, &'static str, String, &'static str)> {
    let methods: Vec<&str> = PaymentMethod::ALL
        .iter()
        .map(|method| method.as_str())
        .collect();
    vec![
        (
            "Booking",
            "deposit_percentage",
            format!("{:.0}", DEPOSIT_RATE * 100.0),
            "Share of the service price collected at booking",
        ),
        (
            "Booking",
            "slots_per_day",
            SLOTS_PER_DAY.to_string(),
            "Bookable appointment slots on an open day",
        ),
        (
            "Payments",
            "tax_rate",
            TAX_RATE_PERCENT.to_string(),
            "Sales tax percentage applied to invoices",
        ),
        (
            "Payments",
            "invoice_due_days",
            INVOICE_DUE_DAYS.to_string(),
            "Days after the appointment an invoice falls due",
        ),
        (
            "Payments",
            "accepted_payment_methods",
            methods.join(","),
            "Payment methods accepted at checkout",
        ),
    ]
}

fn category_rank(category: &str) -> usize {
    SETTING_CATEGORIES
        .iter()
        .position(|known| *known == category)
        .unwrap_or(SETTING_CATEGORIES.len())
}
