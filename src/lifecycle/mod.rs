//! # System Lifecycle
//!
//! Starting and stopping the actor behind the service.
//!
//! ## Dependency Injection via Context
//!
//! The Car actor is created without dependencies and receives its
//! [`ValidationRules`](crate::car_actor::ValidationRules) through `run(context)`. The rules
//! come from [`Config`](crate::config::Config), so the year bounds can change without
//! touching the entity.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**: closes the sender side of the channel
//! 2. **Actor detects closure**: `receiver.recv()` returns `None`
//! 3. **Await completion**: wait for the actor task to finish
//!
//! Requests already queued are still answered before the actor exits.

pub mod garage_system;

pub use garage_system::*;
