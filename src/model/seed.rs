//! Demo fleet loaded at startup when `seed_demo_data` is enabled.

use super::CarPayload;

/// The six demo cars, in insertion order.
pub fn demo_cars() -> Vec<CarPayload> {
    [
        ("BMW", "Seria 1", 2010, "2025-08-10", "2025-12-31", "2026-05-03"),
        ("Mercedes", "GLS", 2015, "2026-01-15", "2026-04-25", "2026-08-08"),
        ("Volkswagen", "Caddy", 2018, "2025-06-08", "2025-07-13", "2027-03-04"),
        ("Seat", "Ibiza", 2008, "2020-03-17", "2021-11-18", "2019-11-02"),
        ("Volvo", "XC60", 2020, "2027-01-01", "2026-03-27", "2027-05-21"),
        ("Skoda", "Octavia", 2001, "2016-06-24", "2016-10-03", "2016-01-16"),
    ]
    .into_iter()
    .map(|(brand, model, year, insurance, road_tax, inspection)| CarPayload {
        brand: Some(brand.to_string()),
        model: Some(model.to_string()),
        year: Some(year),
        insurance_expiry: Some(insurance.to_string()),
        road_tax_expiry: Some(road_tax.to_string()),
        inspection_expiry: Some(inspection.to_string()),
        owner_id: None,
    })
    .collect()
}
