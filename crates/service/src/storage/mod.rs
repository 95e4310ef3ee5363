//! Storage primitives for the service layer.

pub mod memory_map_store;
