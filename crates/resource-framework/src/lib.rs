//! # Resource Framework
//!
//! Building blocks for keeping typed records behind an actor: a single Tokio task owns the
//! records and serves CRUD requests sent by cheap, cloneable clients.
//!
//! ## Why an actor for a store?
//!
//! - **Isolated state**: no shared memory, no locks. The task that owns the map is the only
//!   code that touches it.
//! - **Sequential processing**: every request against a store is handled to completion before
//!   the next one starts, so each create, update and delete is atomic.
//! - **Uniform API**: every resource gets the same `create / list / get / update / delete`
//!   surface, typed by its own DTOs.
//!
//! ## Core Types
//!
//! - [`ResourceEntity`]: the contract a record type implements (ids, DTOs, context, hooks).
//! - [`ResourceActor`]: the server half that owns the records.
//! - [`ResourceClient`]: the client half that sends requests.
//! - [`FrameworkError`]: plumbing errors plus the boxed entity error.
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_framework::{ResourceActor, ResourceEntity};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Trailer {
//!     id: u32,
//!     axles: u8,
//! }
//!
//! #[derive(Debug)] struct TrailerCreate { axles: u8 }
//! #[derive(Debug)] struct TrailerUpdate { axles: Option<u8> }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("a trailer needs between 1 and 4 axles, got {0}")]
//! struct AxleCount(u8);
//!
//! #[async_trait]
//! impl ResourceEntity for Trailer {
//!     type Id = u32;
//!     type Create = TrailerCreate;
//!     type Update = TrailerUpdate;
//!     type Context = ();
//!     type Error = AxleCount;
//!
//!     fn from_create_params(id: u32, params: TrailerCreate, _: &()) -> Result<Self, AxleCount> {
//!         Ok(Self { id, axles: params.axles })
//!     }
//!
//!     async fn on_update(&mut self, update: TrailerUpdate, _: &()) -> Result<(), AxleCount> {
//!         if let Some(axles) = update.axles {
//!             self.axles = axles;
//!         }
//!         if !(1..=4).contains(&self.axles) {
//!             return Err(AxleCount(self.axles));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Trailer>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let trailer = client.create(TrailerCreate { axles: 2 }).await.unwrap();
//!
//!     // A rejected update leaves the stored record untouched.
//!     let rejected = client.update(trailer.id, TrailerUpdate { axles: Some(9) }).await;
//!     assert!(rejected.is_err());
//!     assert_eq!(client.get(trailer.id).await.unwrap().unwrap().axles, 2);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`], not to `new`. Whatever the entity
//! declares as `Context` (validation rules, other clients) is then passed to every hook.
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient`, a scripted stand-in for a store.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ResourceEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
