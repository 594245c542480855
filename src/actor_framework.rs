use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record must implement to be served by a [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Get the ID of the record
    fn id(&self) -> &Self::Id;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the request")]
    ActorDropped,
    #[error("Backend failure: {0}")]
    Backend(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Insert or replace; answers with the previous record, if any.
    Put {
        item: T,
        respond_to: Response<Option<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Keyed record store owned by a single task.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: Entity> ResourceActor<T> {
    /// Spawnable actor seeded with `records`, plus its client. Later duplicates win.
    pub fn with_records(
        buffer_size: usize,
        records: impl IntoIterator<Item = T>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = records
            .into_iter()
            .map(|item| (item.id().clone(), item))
            .collect();
        let actor = Self { receiver, store };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        debug!(records = self.store.len(), "ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Put { item, respond_to } => {
                    let previous = self.store.insert(item.id().clone(), item);
                    let _ = respond_to.send(Ok(previous));
                }
            }
        }
        debug!("ResourceActor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn put(&self, item: T) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Put { item, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: u64,
        label: String,
    }

    impl Entity for Shelf {
        type Id = u64;

        fn id(&self) -> &u64 {
            &self.id
        }
    }

    fn shelf(id: u64, label: &str) -> Shelf {
        Shelf { id, label: label.to_string() }
    }

    #[tokio::test]
    async fn test_resource_actor_put_get() {
        let (actor, client) = ResourceActor::with_records(10, vec![shelf(1, "a")]);
        tokio::spawn(actor.run());

        assert_eq!(client.get(1).await.unwrap(), Some(shelf(1, "a")));
        assert_eq!(client.get(2).await.unwrap(), None);

        let previous = client.put(shelf(1, "b")).await.unwrap();
        assert_eq!(previous, Some(shelf(1, "a")));
        assert_eq!(client.get(1).await.unwrap(), Some(shelf(1, "b")));

        assert_eq!(client.put(shelf(2, "c")).await.unwrap(), None);
        assert_eq!(client.get(2).await.unwrap(), Some(shelf(2, "c")));
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Shelf>::with_records(1, Vec::new());
        drop(actor);

        assert_eq!(client.get(1).await, Err(FrameworkError::ActorClosed));
    }
}
