//! Generic keyed-store actor.
//!
//! A [`ResourceActor`] owns a map of [`ActorEntity`] values keyed by a caller-supplied
//! id and serves requests from cloneable [`ResourceClient`] handles over a Tokio
//! channel. Because one task owns the map, shared mutable state needs no locks.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that stored types implement (build, merge, delete hooks)
//! - [`ResourceActor`] - The task that owns the store
//! - [`ResourceClient`] - Type-safe handle for sending requests
//! - [`ActorClient`] - Shared read operations for domain wrappers
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for a scripted client that answers without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
