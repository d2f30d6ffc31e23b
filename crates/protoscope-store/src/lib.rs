// In-memory session store
// Replays a recorded protocol stream and answers identifier lookups;
// raw logs are the source of truth, the store is a per-invocation projection

mod error;
mod loader;
mod store;

// Public API
pub use error::{Error, Result};
pub use loader::{load_session, parse_session};
pub use store::SessionStore;
