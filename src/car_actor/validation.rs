//! Record validation for car payloads.
//!
//! Rules are checked in a fixed order (`carBrand`, `carModel`, `year`, then the three expiry
//! dates) and the first violation is returned. Messages keep the wording the frontend already
//! displays.

use crate::model::{CarDraft, CarPayload};
use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use thiserror::Error;

const MIN_BRAND_LEN: usize = 3;

/// Bounds injected into the car actor at `run()` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_year: i64,
    pub max_year: i64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_year: 1900,
            max_year: 2030,
        }
    }
}

/// The first rule a payload violated.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn required(field: &'static str) -> Self {
        Self::new(field, format!("\"{field}\" is required"))
    }

    fn empty(field: &'static str) -> Self {
        Self::new(field, format!("\"{field}\" is not allowed to be empty"))
    }

    fn not_a_date(field: &'static str) -> Self {
        Self::new(field, format!("\"{field}\" must be in ISO 8601 date format"))
    }
}

/// Check a complete payload and turn it into a [`CarDraft`].
pub fn validate(payload: &CarPayload, rules: &ValidationRules) -> Result<CarDraft, ValidationError> {
    let brand = required_text("carBrand", payload.brand.as_deref())?;
    if brand.chars().count() < MIN_BRAND_LEN {
        return Err(ValidationError::new(
            "carBrand",
            format!("\"carBrand\" length must be at least {MIN_BRAND_LEN} characters long"),
        ));
    }

    let model = required_text("carModel", payload.model.as_deref())?;

    let year = payload.year.ok_or_else(|| ValidationError::required("year"))?;
    if year < rules.min_year {
        return Err(ValidationError::new(
            "year",
            format!("\"year\" must be greater than or equal to {}", rules.min_year),
        ));
    }
    if year > rules.max_year {
        return Err(ValidationError::new(
            "year",
            format!("\"year\" must be less than or equal to {}", rules.max_year),
        ));
    }
    let year = i32::try_from(year).map_err(|_| {
        ValidationError::new("year", "\"year\" must be a safe number")
    })?;

    let insurance_expiry = required_date("insuranceValidity", payload.insurance_expiry.as_deref())?;
    let road_tax_expiry = required_date("roadTaxValidity", payload.road_tax_expiry.as_deref())?;
    let inspection_expiry = required_date(
        "technicalInspectionValidity",
        payload.inspection_expiry.as_deref(),
    )?;

    Ok(CarDraft {
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        insurance_expiry,
        road_tax_expiry,
        inspection_expiry,
        owner_id: payload.owner_id,
    })
}

fn required_text<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    match value {
        None => Err(ValidationError::required(field)),
        Some("") => Err(ValidationError::empty(field)),
        Some(text) => Ok(text),
    }
}

fn required_date(field: &'static str, value: Option<&str>) -> Result<NaiveDate, ValidationError> {
    let raw = value.ok_or_else(|| ValidationError::required(field))?;
    parse_date(raw).ok_or_else(|| ValidationError::not_a_date(field))
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp. A timestamp keeps only its date part.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CarPayload {
        CarPayload {
            brand: Some("Dacia".into()),
            model: Some("Logan".into()),
            year: Some(2019),
            insurance_expiry: Some("2026-03-01".into()),
            road_tax_expiry: Some("2026-12-31".into()),
            inspection_expiry: Some("2027-06-15".into()),
            owner_id: None,
        }
    }

    fn field_of(p: &CarPayload) -> &'static str {
        validate(p, &ValidationRules::default()).unwrap_err().field
    }

    #[test]
    fn accepts_complete_payload() {
        let draft = validate(&payload(), &ValidationRules::default()).unwrap();
        assert_eq!(draft.brand, "Dacia");
        assert_eq!(draft.year, 2019);
        assert_eq!(draft.insurance_expiry, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn short_brand_is_rejected() {
        let mut p = payload();
        p.brand = Some("AB".into());
        let err = validate(&p, &ValidationRules::default()).unwrap_err();
        assert_eq!(err.field, "carBrand");
        assert_eq!(err.message, "\"carBrand\" length must be at least 3 characters long");
    }

    #[test]
    fn first_violation_wins() {
        let mut p = payload();
        p.model = Some(String::new());
        p.year = Some(1800);
        p.road_tax_expiry = None;
        assert_eq!(field_of(&p), "carModel");

        p.model = Some("Logan".into());
        assert_eq!(field_of(&p), "year");

        p.year = Some(2000);
        assert_eq!(field_of(&p), "roadTaxValidity");
    }

    #[test]
    fn year_bounds_come_from_rules() {
        let rules = ValidationRules {
            min_year: 2000,
            max_year: 2010,
        };
        let err = validate(&payload(), &rules).unwrap_err();
        assert_eq!(err.message, "\"year\" must be less than or equal to 2010");
    }

    #[test]
    fn missing_and_malformed_dates() {
        let mut p = payload();
        p.inspection_expiry = None;
        let err = validate(&p, &ValidationRules::default()).unwrap_err();
        assert_eq!(err.message, "\"technicalInspectionValidity\" is required");

        p.inspection_expiry = Some("2026-02-30".into());
        let err = validate(&p, &ValidationRules::default()).unwrap_err();
        assert_eq!(err.message, "\"technicalInspectionValidity\" must be in ISO 8601 date format");
    }

    #[test]
    fn timestamps_keep_their_date() {
        assert_eq!(
            parse_date("2025-08-10T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2025, 8, 10)
        );
        assert_eq!(parse_date("10/08/2025"), None);
    }
}
