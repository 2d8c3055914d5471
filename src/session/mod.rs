mod manager;
pub mod store;

pub use manager::SessionManager;
pub use store::{BrowserStore, MemoryStore, SessionStore};
