//! The storage seam the HTTP layer talks to.

use crate::car_actor::CarError;
use crate::model::{Car, CarId, CarPayload};
use async_trait::async_trait;

/// Abstract car store. Handlers only see this trait, so tests can swap the actor-backed
/// [`CarClient`](super::CarClient) for anything else that keeps cars.
///
/// Every write validates its payload and fails with [`CarError::Validation`] on the first
/// broken rule. Writes against a missing id fail with [`CarError::NotFound`].
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// All cars, in id order.
    async fn list(&self) -> Result<Vec<Car>, CarError>;

    async fn get(&self, id: CarId) -> Result<Option<Car>, CarError>;

    /// Stores a new car under a fresh id and returns it.
    async fn create(&self, payload: CarPayload) -> Result<Car, CarError>;

    /// Replaces every field of an existing car. The payload must be complete.
    async fn replace(&self, id: CarId, payload: CarPayload) -> Result<Car, CarError>;

    /// Overlays the present fields on the stored car, then validates the result.
    async fn patch(&self, id: CarId, patch: CarPayload) -> Result<Car, CarError>;

    /// Removes a car and returns what was stored.
    async fn delete(&self, id: CarId) -> Result<Car, CarError>;
}
