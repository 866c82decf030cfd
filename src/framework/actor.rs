//! # Keyed Store Actor
//!
//! [`ResourceActor`] owns an insertion-ordered map of entities and the receiving end
//! of its channel. It is the only code that touches the map, so no locks are needed:
//! requests are processed one at a time, in arrival order.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a keyed collection of entities.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass the entity's `Context` into `actor.run(context)`.
/// 3. **Run**: spawn the returned future on the runtime.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<BasketLine>::new(32);
/// tokio::spawn(actor.run(catalog.clone()));
/// client.upsert(ProductId(2), BasketAdd::one()).await?;
/// ```
///
/// # Operations
///
/// * **Upsert**: if the id is stored, `on_merge` folds the payload into it; otherwise
///   `from_create_params` + `on_create` build a fresh entity which is appended.
///   Either way the stored entity is returned.
/// * **Get**: a clone of the entity, or `None`.
/// * **List**: clones of every entity, oldest key first.
/// * **Delete**: `on_delete`, then the key is removed without disturbing the order of
///   the remaining keys. `NotFound` if absent.
/// * **Clear**: drops every entity and reports how many there were.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the channel capacity; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Upsert {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Upsert");
                    let result = self.upsert(id.clone(), params, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, size = self.store.len(), "Upserted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Upsert failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        continue;
                    }
                    self.store.shift_remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Clear { respond_to } => {
                    let removed = self.store.len();
                    self.store.clear();
                    info!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn upsert(
        &mut self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        if let Some(item) = self.store.get_mut(&id) {
            item.on_merge(params, context)
                .await
                .map_err(FrameworkError::entity)?;
            return Ok(item.clone());
        }

        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::entity)?;
        item.on_create(context)
            .await
            .map_err(FrameworkError::entity)?;
        self.store.insert(id, item.clone());
        Ok(item)
    }
}
