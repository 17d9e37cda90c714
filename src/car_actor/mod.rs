//! Car-specific resource logic: the entity implementation, its validation rules and errors.

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;
pub use validation::{parse_date, validate, ValidationError, ValidationRules};

use crate::clients::CarClient;
use crate::model::Car;
use resource_framework::ResourceActor;

/// Creates a new Car actor and its client.
///
/// The actor is not running yet: spawn `actor.run(rules)` to start serving requests.
pub fn new(capacity: usize) -> (ResourceActor<Car>, CarClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    let client = CarClient::new(generic_client);

    (actor, client)
}
