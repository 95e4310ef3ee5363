//! Records: domain type, store abstraction, in-memory implementation.

pub mod domain;
pub mod memory;
pub mod repository;

pub use domain::Record;
pub use memory::MemoryRecordStore;
pub use repository::RecordStore;
