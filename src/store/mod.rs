mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::StoreError;

/// Raw string key-value contract the core is built on.
///
/// Values are JSON text; the backend stores them opaquely and never
/// interprets them. Writes overwrite unconditionally and are assumed to hit
/// the device atomically.
pub trait StorageBackend: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
