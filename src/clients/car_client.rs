use crate::car_actor::CarError;
use crate::clients::CarRepository;
use crate::model::{Car, CarId, CarPayload, CarUpdate};
use async_trait::async_trait;
use resource_framework::{FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Car actor.
#[derive(Clone)]
pub struct CarClient {
    inner: ResourceClient<Car>,
}

impl CarClient {
    pub fn new(inner: ResourceClient<Car>) -> Self {
        Self { inner }
    }

    /// Folds framework failures into the car domain.
    ///
    /// Entity errors raised by the actor are the original `CarError`, boxed; they come back
    /// out unchanged. Everything else means the store is unreachable.
    fn map_error(e: FrameworkError) -> CarError {
        match e {
            FrameworkError::NotFound(id) => CarError::NotFound(id),
            other => match other.into_entity_error::<CarError>() {
                Ok(car_error) => car_error,
                Err(plumbing) => CarError::Store(plumbing.to_string()),
            },
        }
    }
}

#[async_trait]
impl CarRepository for CarClient {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Car>, CarError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: CarId) -> Result<Option<Car>, CarError> {
        debug!("Sending request");
        self.inner.get(id).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, payload: CarPayload) -> Result<Car, CarError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn replace(&self, id: CarId, payload: CarPayload) -> Result<Car, CarError> {
        debug!("Sending request");
        self.inner
            .update(id, CarUpdate::Replace(payload))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn patch(&self, id: CarId, patch: CarPayload) -> Result<Car, CarError> {
        debug!("Sending request");
        self.inner
            .update(id, CarUpdate::Patch(patch))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CarId) -> Result<Car, CarError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}
