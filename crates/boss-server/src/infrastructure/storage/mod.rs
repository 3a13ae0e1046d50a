//! Repository implementations: JSON files on disk and in-memory variants.

pub mod config_file;
pub mod history_file;
pub mod json_file;
pub mod memory;

pub use config_file::JsonConfigRepository;
pub use history_file::JsonHistoryRepository;
pub use memory::{InMemoryConfigRepository, InMemoryHistoryRepository};
