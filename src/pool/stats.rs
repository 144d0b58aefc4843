// src/pool/stats.rs
//! Pool statistics snapshot.

/// A point-in-time snapshot of [`ArrayPool`](super::ArrayPool) counters.
///
/// Counters are tracked with relaxed atomics; a snapshot taken while other
/// threads rent concurrently may be briefly inconsistent with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Arrays allocated fresh because no idle array of the class was parked
    pub allocated: usize,
    /// Total rentals served
    pub rented: usize,
    /// Arrays handed back via `recycle`
    pub recycled: usize,
    /// Rentals satisfied from a parked array instead of a fresh allocation
    pub reused: usize,
    /// Idle arrays currently parked across all size classes (approximate)
    pub idle: usize,
}
