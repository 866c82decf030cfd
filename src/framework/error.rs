//! # Framework Errors
//!
//! Errors raised by the actor plumbing. Entity errors travel boxed inside
//! [`FrameworkError::EntityError`] and can be recovered with
//! [`FrameworkError::downcast_entity`].

use std::error::Error;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's receiver is gone; nothing will process the request.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor accepted the request but never answered it.
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    pub(crate) fn entity<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self::EntityError(Box::new(error))
    }

    /// Recovers the entity's own error type when this wraps one of type `E`.
    /// Any other error is handed back unchanged.
    pub fn downcast_entity<E: Error + 'static>(self) -> Result<E, Self> {
        match self {
            Self::EntityError(inner) => match inner.downcast::<E>() {
                Ok(error) => Ok(*error),
                Err(inner) => Err(Self::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}
