use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier of a car. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CarId(pub u32);

impl From<u32> for CarId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vehicle kept in the garage.
///
/// # Resource Framework
/// This struct implements the [`ResourceEntity`](resource_framework::ResourceEntity) trait,
/// so a [`ResourceActor`](resource_framework::ResourceActor) can own the records.
///
/// See [`impl ResourceEntity for Car`](#impl-ResourceEntity-for-Car) for:
/// - Creation payload ([`CarPayload`])
/// - Update payload ([`CarUpdate`])
/// - Injected context ([`ValidationRules`](crate::car_actor::ValidationRules))
///
/// JSON keys follow the names the frontend already uses (`carBrand`,
/// `insuranceValidity`, ...). Dates go out as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    #[serde(rename = "carID")]
    pub id: CarId,
    #[serde(rename = "carBrand")]
    pub brand: String,
    #[serde(rename = "carModel")]
    pub model: String,
    pub year: i32,
    #[serde(rename = "insuranceValidity")]
    pub insurance_expiry: NaiveDate,
    #[serde(rename = "roadTaxValidity")]
    pub road_tax_expiry: NaiveDate,
    #[serde(rename = "technicalInspectionValidity")]
    pub inspection_expiry: NaiveDate,
    /// Weak reference to the owning user. Lookup only.
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u32>,
}

/// Incoming car body, before validation.
///
/// Every field is optional so that a missing field is reported by the validator with
/// its own message instead of failing deserialization. The same shape carries a
/// full create/replace body and a partial patch. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarPayload {
    #[serde(rename = "carBrand", default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "carModel", default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(rename = "insuranceValidity", default, skip_serializing_if = "Option::is_none")]
    pub insurance_expiry: Option<String>,
    #[serde(rename = "roadTaxValidity", default, skip_serializing_if = "Option::is_none")]
    pub road_tax_expiry: Option<String>,
    #[serde(
        rename = "technicalInspectionValidity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inspection_expiry: Option<String>,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u32>,
}

impl CarPayload {
    /// Lay `patch` over `self`: every field present in the patch wins, every absent one
    /// keeps the current value.
    pub fn overlay(self, patch: CarPayload) -> CarPayload {
        CarPayload {
            brand: patch.brand.or(self.brand),
            model: patch.model.or(self.model),
            year: patch.year.or(self.year),
            insurance_expiry: patch.insurance_expiry.or(self.insurance_expiry),
            road_tax_expiry: patch.road_tax_expiry.or(self.road_tax_expiry),
            inspection_expiry: patch.inspection_expiry.or(self.inspection_expiry),
            owner_id: patch.owner_id.or(self.owner_id),
        }
    }
}

impl From<&Car> for CarPayload {
    fn from(car: &Car) -> Self {
        let iso = |date: NaiveDate| Some(date.format("%Y-%m-%d").to_string());
        Self {
            brand: Some(car.brand.clone()),
            model: Some(car.model.clone()),
            year: Some(i64::from(car.year)),
            insurance_expiry: iso(car.insurance_expiry),
            road_tax_expiry: iso(car.road_tax_expiry),
            inspection_expiry: iso(car.inspection_expiry),
            owner_id: car.owner_id,
        }
    }
}

/// A payload that passed validation. Only the store turns it into a [`Car`], since only
/// the store knows the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDraft {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub insurance_expiry: NaiveDate,
    pub road_tax_expiry: NaiveDate,
    pub inspection_expiry: NaiveDate,
    pub owner_id: Option<u32>,
}

impl CarDraft {
    pub fn into_car(self, id: CarId) -> Car {
        Car {
            id,
            brand: self.brand,
            model: self.model,
            year: self.year,
            insurance_expiry: self.insurance_expiry,
            road_tax_expiry: self.road_tax_expiry,
            inspection_expiry: self.inspection_expiry,
            owner_id: self.owner_id,
        }
    }
}

/// Modification of a stored car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarUpdate {
    /// Full replacement: the payload must be complete on its own.
    Replace(CarPayload),
    /// Partial update: merged over the stored record, then validated as a whole.
    Patch(CarPayload),
}
