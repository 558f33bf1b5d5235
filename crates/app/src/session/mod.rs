//! Session Storage

mod errors;
mod memory;
mod store;

pub use errors::SessionStoreError;
pub use memory::MemorySessionStore;
pub use store::*;
