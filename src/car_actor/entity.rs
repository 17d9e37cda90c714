//! Entity trait implementation for the Car domain type.
//!
//! This module contains the [`ResourceEntity`] implementation that lets a
//! [`ResourceActor`](resource_framework::ResourceActor) keep [`Car`] records. Every write goes
//! through [`validate`], so a stored car always satisfies the [`ValidationRules`] it was
//! started with.

use super::error::CarError;
use super::validation::{validate, ValidationRules};
use crate::model::{Car, CarId, CarPayload, CarUpdate};
use async_trait::async_trait;
use resource_framework::ResourceEntity;
use tracing::debug;

#[async_trait]
impl ResourceEntity for Car {
    type Id = CarId;
    type Create = CarPayload;
    type Update = CarUpdate;
    type Context = ValidationRules;
    type Error = CarError;

    /// Validates the payload and stamps it with the store-assigned id.
    fn from_create_params(
        id: CarId,
        params: CarPayload,
        rules: &ValidationRules,
    ) -> Result<Self, CarError> {
        Ok(validate(&params, rules)?.into_car(id))
    }

    /// Applies a replace or a patch.
    ///
    /// A patch is laid over the current record before validation, so the rules see the
    /// merged car. The id never changes.
    async fn on_update(&mut self, update: CarUpdate, rules: &ValidationRules) -> Result<(), CarError> {
        let candidate = match update {
            CarUpdate::Replace(payload) => payload,
            CarUpdate::Patch(patch) => CarPayload::from(&*self).overlay(patch),
        };
        let draft = validate(&candidate, rules)?;
        debug!(car_id = %self.id, "Car revalidated");
        *self = draft.into_car(self.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Car {
        let payload = crate::model::seed::demo_cars().remove(1);
        Car::from_create_params(CarId(2), payload, &ValidationRules::default()).unwrap()
    }

    #[tokio::test]
    async fn patch_merges_before_validating() {
        let mut car = stored();
        let patch = CarPayload {
            year: Some(2016),
            ..CarPayload::default()
        };
        car.on_update(CarUpdate::Patch(patch), &ValidationRules::default())
            .await
            .unwrap();
        assert_eq!(car.year, 2016);
        assert_eq!(car.brand, "Mercedes");
        assert_eq!(car.id, CarId(2));
    }

    #[tokio::test]
    async fn replace_requires_a_complete_payload() {
        let mut car = stored();
        let partial = CarPayload {
            brand: Some("Audi".into()),
            ..CarPayload::default()
        };
        let err = car
            .on_update(CarUpdate::Replace(partial), &ValidationRules::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CarError::Validation(ref v) if v.field == "carModel"));
    }

    #[test]
    fn create_rejects_out_of_range_year() {
        let mut payload = crate::model::seed::demo_cars().remove(0);
        payload.year = Some(2031);
        let err = Car::from_create_params(CarId(1), payload, &ValidationRules::default()).unwrap_err();
        assert_eq!(err.to_string(), "\"year\" must be less than or equal to 2030");
    }
}
