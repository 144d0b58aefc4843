// src/pool/config.rs
//! Pool configuration.

/// Configuration for an [`ArrayPool`](super::ArrayPool).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Most idle arrays kept per size class; recycled arrays beyond this are
    /// dropped instead of parked
    pub max_per_class: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { max_per_class: 32 }
    }
}
