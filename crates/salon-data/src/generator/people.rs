//! Customers, their addresses, and the staff roster.

use chrono::NaiveDate;

use super::{draw_u32, pick, shift_days};
use crate::catalog::{
    AREA_CODE, CITIES, CUSTOMER_NOTES, FIRST_NAMES, LAST_NAMES, STAFF, STATE_CODE, STREETS,
    ZIP_PREFIX,
};
use crate::error::GenerationError;
use crate::random::RandomSource;
use crate::records::{Address, AddressType, ContactPreference, Customer, StaffMember};

/// Probability that a customer also has a separate billing address.
const BILLING_ADDRESS_PROBABILITY: f64 = 0.2;

const CONTACT_PREFERENCES: [ContactPreference; 3] = [
    ContactPreference::Email,
    ContactPreference::Phone,
    ContactPreference::Text,
];

/// Generates `count` customers with sequential identifiers.
///
/// Registration dates fall within the year before `today`.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyCatalog`] if a name or note catalog is
/// empty.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use salon_data::{SeededSource, generator::generate_customers};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
/// let mut rng = SeededSource::from_seed(7);
/// let customers = generate_customers(&mut rng, today, 3).expect("generated");
///
/// assert_eq!(customers.len(), 3);
/// assert_eq!(customers[2].customer_id, "CUST0003");
/// ```
pub fn generate_customers<R: RandomSource>(
    rng: &mut R,
    today: NaiveDate,
    count: usize,
) -> Result<Vec<Customer>, GenerationError> {
    let mut customers = Vec::with_capacity(count);

    for sequence in 1..=count {
        let first_name = *pick(rng, FIRST_NAMES, "first names")?;
        let last_name = *pick(rng, LAST_NAMES, "last names")?;
        let email = format!(
            "{}.{}{sequence}@email.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );
        let phone = format!(
            "({AREA_CODE}) {}-{}",
            draw_u32(rng, 100, 999),
            draw_u32(rng, 1000, 9999)
        );
        let registered_days_ago = rng.int_in(1, 365);

        customers.push(Customer {
            customer_id: format!("CUST{sequence:04}"),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email,
            phone,
            date_registered: shift_days(today, -registered_days_ago),
            total_visits: draw_u32(rng, 1, 15),
            loyalty_points: draw_u32(rng, 0, 500),
            preferred_contact: *pick(rng, &CONTACT_PREFERENCES, "contact preferences")?,
            notes: (*pick(rng, CUSTOMER_NOTES, "customer notes")?).to_owned(),
        });
    }

    Ok(customers)
}

/// Generates addresses for every customer.
///
/// Each customer receives exactly one default home address and, with a 20%
/// chance, a non-default billing address. Identifiers are sequential over
/// the whole output, billing rows included.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyCatalog`] if the street or city catalog
/// is empty.
pub fn generate_addresses<R: RandomSource>(
    rng: &mut R,
    customers: &[Customer],
) -> Result<Vec<Address>, GenerationError> {
    let mut addresses = Vec::with_capacity(customers.len());

    for customer in customers {
        let apt_unit = match rng.int_in(0, 2) {
            1 => format!("Apt {}", draw_u32(rng, 1, 999)),
            2 => format!("Suite {}", draw_u32(rng, 100, 500)),
            _ => String::new(),
        };
        let home = build_address(
            rng,
            addresses.len() + 1,
            customer,
            AddressType::Home,
            apt_unit,
        )?;
        addresses.push(home);

        if rng.chance(BILLING_ADDRESS_PROBABILITY) {
            let billing = build_address(
                rng,
                addresses.len() + 1,
                customer,
                AddressType::Billing,
                String::new(),
            )?;
            addresses.push(billing);
        }
    }

    Ok(addresses)
}

fn build_address<R: RandomSource>(
    rng: &mut R,
    sequence: usize,
    customer: &Customer,
    address_type: AddressType,
    apt_unit: String,
) -> Result<Address, GenerationError> {
    let street = *pick(rng, STREETS, "streets")?;
    let street_address = format!("{} {street}", draw_u32(rng, 100, 9999));
    let city = *pick(rng, CITIES, "cities")?;
    let zip_code = format!(
        "{ZIP_PREFIX}{}{}",
        draw_u32(rng, 0, 9),
        draw_u32(rng, 10, 99)
    );

    Ok(Address {
        address_id: format!("ADDR{sequence:04}"),
        customer_id: customer.customer_id.clone(),
        address_type,
        street_address,
        apt_unit,
        city: city.to_owned(),
        state: STATE_CODE.to_owned(),
        zip_code,
        is_default: address_type == AddressType::Home,
    })
}

/// Returns the fixed staff roster.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidCatalogEntry`] if a hire date in the
/// roster is not a valid `YYYY-MM-DD` date.
pub fn generate_staff() -> Result<Vec<StaffMember>, GenerationError> {
    STAFF
        .iter()
        .map(|member| -> Result<StaffMember, GenerationError> {
            let hire_date = NaiveDate::parse_from_str(member.hire_date, "%Y-%m-%d").map_err(
                |_| GenerationError::InvalidCatalogEntry {
                    catalog: "staff",
                    entry: member.hire_date.to_owned(),
                },
            )?;
            Ok(StaffMember {
                staff_id: member.staff_id.to_owned(),
                first_name: member.first_name.to_owned(),
                last_name: member.last_name.to_owned(),
                role: member.role.to_owned(),
                email: member.email.to_owned(),
                phone: member.phone.to_owned(),
                hire_date,
                is_active: true,
                specialties: member.specialties.to_owned(),
                hourly_rate: member.hourly_rate,
            })
        })
        .collect()
}
