//! Service layer for the herd record store.
//! - `records`: the `Record` domain type, the `RecordStore` abstraction and
//!   its in-memory implementation.
//! - `storage`: generic lock-guarded map used by the record store.

pub mod errors;
pub mod records;
pub mod storage;
