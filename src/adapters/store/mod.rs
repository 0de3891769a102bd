//! Store adapters for the catalog and dialogue ports.
//!
//! - `InMemoryStore` - documents held in memory (tests, development)
//! - `JsonDirectoryStore` - documents read from a directory of JSON exports

mod documents;
mod in_memory;
mod json_dir;

pub use documents::{ActivityDocument, ConversationDocument, TrackerDocument};
pub use in_memory::{InMemoryStore, StoreContents};
pub use json_dir::JsonDirectoryStore;
