pub mod in_memory;

use crate::modules::events::core::record::EventRecord;

/// Port over the event collection. Implementations own the synchronization;
/// handlers never see the inner collection.
#[async_trait::async_trait]
pub trait EventStore {
    async fn append(&self, record: EventRecord);

    /// Full collection in insertion order.
    async fn list(&self) -> Vec<EventRecord>;

    /// Removes the first record whose id matches exactly. Returns whether a
    /// record was removed.
    async fn remove(&self, id: &str) -> bool;
}
