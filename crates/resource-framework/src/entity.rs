//! # ResourceEntity Trait
//!
//! The `ResourceEntity` trait is the contract a record type implements to be kept by the
//! generic [`ResourceActor`](crate::ResourceActor). It names the identifier, the create and
//! update DTOs, the injected context and the error type, and exposes the lifecycle hooks
//! (`from_create_params`, `on_create`, `on_update`, `on_delete`) the actor drives.
//!
//! # Provided Methods (Hooks)
//! - [`ResourceEntity::on_create`]
//! - [`ResourceEntity::on_delete`]
//!
//! Both default to `Ok(())`. Override them only when the record needs a check or a side
//! effect at that point of its life.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Associated Types
/// A `Car` entity takes a `CarPayload` to be created and a `CarUpdate` to be modified; the
/// compiler rejects any other payload sent to that actor.
///
/// # Async & Context
/// The hooks are `#[async_trait]` and receive `&Self::Context`, a value handed to
/// [`ResourceActor::run`](crate::ResourceActor::run) once the actor is started ("late binding").
/// Validation rules, other clients or settings live there.
#[async_trait]
pub trait ResourceEntity: Clone + Send + Sync + 'static {
    /// Store-assigned identifier. Built from the actor's `u32` counter and ordered so that
    /// listings come back in creation order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to create a new record.
    type Create: Send + Sync + Debug;

    /// Payload used to modify an existing record.
    type Update: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` when none are needed.
    type Context: Send + Sync;

    /// Per-entity error type. Boxed into
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) by the actor
    /// and recoverable on the client side with `downcast`.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full record from its new id and the create payload.
    ///
    /// Runs before `on_create`. Returning an error aborts the create and the id is burned.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is inserted into the store.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update.
    ///
    /// The actor calls this on a **copy** of the stored record and only writes the copy back
    /// when the hook returns `Ok`. An implementation may therefore mutate `self` freely before
    /// discovering the update is invalid.
    async fn on_update(&mut self, update: Self::Update, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Called immediately before the record is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
