// In memory implementation of the EventStore port.
//
// Responsibilities
// - Hold the insertion-ordered event collection for the process lifetime.
// - Guard every read-modify-write behind one lock acquisition; the runtime
//   handles requests on parallel workers, so the collection must not rely
//   on cooperative scheduling for consistency.

use crate::modules::events::core::record::EventRecord;
use crate::shared::infrastructure::event_store::EventStore;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEventStore {
    inner: RwLock<Vec<EventRecord>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(&self, record: EventRecord) {
        self.inner.write().await.push(record);
    }

    async fn list(&self) -> Vec<EventRecord> {
        self.inner.read().await.clone()
    }

    async fn remove(&self, id: &str) -> bool {
        let mut guard = self.inner.write().await;
        match guard.iter().position(|record| record.id == id) {
            Some(index) => {
                guard.remove(index);
                true
            }
            None => false,
        }
    }
}
