// Composition root for the events service.
//
// Responsibilities:
// - Instantiate the in-memory event store.
// - Wire the store into the inbound HTTP handlers through AppState.
// - Expose the router to main.

pub mod http;
pub mod state;
