//! Key/value storage boundary
//!
//! Preferences and session identity are kept behind [`KeyValueStorage`] so the
//! stores never touch a concrete backend. [`FileStorage`] persists across
//! restarts; [`MemoryStorage`] lives as long as the process.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::AppResult;

/// String key/value storage. Every failure is reported as
/// `AppError::StorageUnavailable`.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&self, key: &str) -> AppResult<()>;
}
