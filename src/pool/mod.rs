// src/pool/mod.rs
//! Array pooling: rent backing arrays, recycle them for reuse.
//!
//! Buffers go through many short-lived backing arrays as they grow; the pool
//! keeps superseded arrays parked in power-of-two size classes so the next
//! rental of that class skips the allocator entirely.

mod array;
mod config;
mod stats;

pub use array::{ArrayPool, MAX_ARRAY_LEN, MIN_ARRAY_LEN};
pub use config::PoolConfig;
pub use stats::PoolStats;
