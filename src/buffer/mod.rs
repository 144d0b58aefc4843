// src/buffer/mod.rs
//! Growable double-ended sequence buffer.
//!
//! Split by concern: `core` owns the backing array and the `[head, tail)`
//! window, `plan` decides how each growth request is satisfied, and `ops`
//! implements the edit operations on top of both.

mod core;
mod ops;
mod plan;

pub use self::core::{MAX_CAPACITY, MIN_CAPACITY, SeqBuffer};
