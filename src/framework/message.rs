//! # Generic Messages
//!
//! The request envelope exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// Every variant carries its own `respond_to` channel, so a request is answered
/// exactly once. The store is keyed, so the variants are the operations of a map
/// rather than full CRUD:
///
/// - **Upsert**: insert a fresh entity or merge into the existing one.
/// - **Get**: read one entity by key.
/// - **List**: read every entity, in insertion order.
/// - **Delete**: remove one key.
/// - **Clear**: remove every key.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Upsert {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Clear {
        respond_to: Response<usize>,
    },
}
