//! # ActorEntity Trait
//!
//! The contract a value type implements to be stored and mutated by a
//! [`ResourceActor`](crate::framework::ResourceActor). Entities are keyed by a
//! caller-supplied id: the first `upsert` for an id builds the entity, every later
//! `upsert` for the same id is folded into it through [`ActorEntity::on_merge`].
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any keyed entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they can consult other services. The `Context` is handed to
/// `run()` rather than `new()`, so dependencies can be wired after the actor and its
/// client exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The key this entity is stored under. Supplied by the caller on every upsert.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The payload carried by an upsert. Builds a fresh entity or is merged into an
    /// existing one.
    type Create: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per entity, shared by all hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity for an id that is not yet stored.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after a fresh entity is built and before it is inserted.
    /// Returning an error leaves the store untouched.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Folds an upsert payload into an entity that already exists.
    ///
    /// Implementations must validate before mutating: on error the entity is kept
    /// as it was.
    async fn on_merge(
        &mut self,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
