use crate::car_actor::{self, CarError, ValidationRules};
use crate::clients::{CarClient, CarRepository};
use crate::config::{Config, ConfigError};
use crate::model::CarPayload;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for the car store.
///
/// `GarageSystem` starts the Car actor with its validation rules, hands out the client, and
/// shuts the actor down again.
///
/// # Example
///
/// ```ignore
/// let system = GarageSystem::new(32, ValidationRules::default());
///
/// let car = system.car_client.create(payload).await?;
///
/// system.shutdown().await?;
/// ```
pub struct GarageSystem {
    /// Client for interacting with the Car actor
    pub car_client: CarClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl GarageSystem {
    /// Spawns the Car actor with `rules` injected as its context.
    pub fn new(capacity: usize, rules: ValidationRules) -> Self {
        let (actor, car_client) = car_actor::new(capacity);
        let handle = tokio::spawn(actor.run(rules));

        Self { car_client, handle }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let rules = config.validation_rules()?;
        Ok(Self::new(config.channel_capacity, rules))
    }

    /// Inserts `cars` in order and returns how many were stored.
    pub async fn seed(&self, cars: Vec<CarPayload>) -> Result<usize, CarError> {
        let mut stored = 0;
        for payload in cars {
            self.car_client.create(payload).await?;
            stored += 1;
        }
        info!(count = stored, "Demo cars loaded");
        Ok(stored)
    }

    /// A shareable handle for the HTTP layer.
    pub fn repository(&self) -> Arc<dyn CarRepository> {
        Arc::new(self.car_client.clone())
    }

    /// Gracefully shuts down the actor.
    ///
    /// Dropping the last client closes the channel and the actor loop exits. Every clone
    /// handed out by [`GarageSystem::repository`] must be dropped first, otherwise this
    /// waits for them.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.car_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e);
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
