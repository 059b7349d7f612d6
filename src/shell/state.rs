use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventStore + Send + Sync>,
}
