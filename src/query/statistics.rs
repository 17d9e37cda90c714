//! Expiring-insurance report.

use crate::model::Car;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of cars of one brand whose insurance runs out soon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandCount {
    #[serde(rename = "carBrand")]
    pub brand: String,
    pub count: usize,
}

/// Counts, per brand, the cars whose insurance expires strictly after `today` and strictly
/// before `today + window_days`.
///
/// Ordered by count descending, then brand ascending. Brands with no expiring car are left
/// out.
pub fn expiring_insurance(cars: &[Car], today: NaiveDate, window_days: u64) -> Vec<BrandCount> {
    let horizon = today
        .checked_add_days(Days::new(window_days))
        .unwrap_or(NaiveDate::MAX);

    let mut per_brand: BTreeMap<&str, usize> = BTreeMap::new();
    for car in cars
        .iter()
        .filter(|car| car.insurance_expiry > today && car.insurance_expiry < horizon)
    {
        *per_brand.entry(car.brand.as_str()).or_default() += 1;
    }

    let mut report: Vec<BrandCount> = per_brand
        .into_iter()
        .map(|(brand, count)| BrandCount {
            brand: brand.to_string(),
            count,
        })
        .collect();
    report.sort_by(|a, b| b.count.cmp(&a.count));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CarId;

    fn car(id: u32, brand: &str, insurance: NaiveDate) -> Car {
        Car {
            id: CarId(id),
            brand: brand.into(),
            model: "Any".into(),
            year: 2015,
            insurance_expiry: insurance,
            road_tax_expiry: insurance,
            inspection_expiry: insurance,
            owner_id: None,
        }
    }

    fn day(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap() + Days::new(offset)
    }

    #[test]
    fn counts_only_the_open_window() {
        let cars = vec![
            car(1, "Dacia", day(0)),
            car(2, "Dacia", day(1)),
            car(3, "Dacia", day(29)),
            car(4, "Dacia", day(30)),
            car(5, "Opel", day(10)),
        ];
        let report = expiring_insurance(&cars, day(0), 30);
        assert_eq!(
            report,
            vec![
                BrandCount { brand: "Dacia".into(), count: 2 },
                BrandCount { brand: "Opel".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn ties_are_broken_by_brand() {
        let cars = vec![
            car(1, "Volvo", day(3)),
            car(2, "Audi", day(4)),
            car(3, "Fiat", day(5)),
            car(4, "Fiat", day(6)),
        ];
        let brands: Vec<String> = expiring_insurance(&cars, day(0), 30)
            .into_iter()
            .map(|row| row.brand)
            .collect();
        assert_eq!(brands, vec!["Fiat", "Audi", "Volvo"]);
    }

    #[test]
    fn serializes_with_frontend_key() {
        let row = BrandCount { brand: "Seat".into(), count: 3 };
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"carBrand":"Seat","count":3}"#
        );
    }
}
