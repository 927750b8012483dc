//! Key-value storage for the post-login session marker.
//!
//! Two backends implement [`KeyValueStore`]:
//! - `FileStore`: JSON file on disk, survives restarts
//! - `MemoryStore`: in-process map, used by tests and as a fallback
//!
//! Every `set` replaces the whole value under a key in one step.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
