// src/lib.rs
//! # Growable Double-Ended Sequence Buffer
//!
//! A buffer for building and editing sequences of elements (bytes, chars, or
//! arbitrary values) without the quadratic-copy cost of naive append, insert,
//! and remove on a fixed array.
//!
//! Features:
//! - One backing array with a `[head, tail)` window: slack on both sides, so
//!   appends and prepends are O(1) until their side runs out
//! - Three-tier growth per request: reuse slack, shift the window in place,
//!   or reallocate to the next power of two while preserving existing slack
//! - Interior removal compacts toward the side with less free space, keeping
//!   slack balanced across mixed edit sequences
//! - Rich edit set: normalize runs, stable filtering, pattern replace via
//!   pluggable matchers, padding, duplication, reversal
//! - Lock-free, size-classed array pooling so reallocation-heavy workloads
//!   skip the allocator
//!
//! # Example
//!
//! ```
//! use seqbuf::SeqBuffer;
//! # use seqbuf::BufferError;
//!
//! let mut buf = SeqBuffer::<u8>::new(16);
//! buf.append(1, b"bbb")?;
//! buf.prepend(1, b"aa")?;
//! buf.normalize_adjacent_duplicates();
//! buf.pad_left(5, b"-")?;
//! assert_eq!(buf.as_slice(), b"---ab");
//! # Ok::<(), BufferError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod error;
pub mod matcher;
pub mod pool;

// Re-export main types
pub use buffer::{MAX_CAPACITY, MIN_CAPACITY, SeqBuffer};
pub use error::{BufferError, Result, ResultExt};
pub use matcher::{MatchSpan, Matcher, PredicateMatcher, SliceMatcher};
pub use pool::{ArrayPool, MAX_ARRAY_LEN, MIN_ARRAY_LEN, PoolConfig, PoolStats};

/// Commonly used imports.
pub mod prelude {
    pub use crate::buffer::SeqBuffer;
    pub use crate::error::{BufferError, Result};
    pub use crate::matcher::{MatchSpan, Matcher, PredicateMatcher, SliceMatcher};
    pub use crate::pool::{ArrayPool, PoolConfig, PoolStats};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_basic_buffer() {
        let mut buf = SeqBuffer::<u8>::new(16);
        buf.append(1, b"abc").unwrap();
        buf.prepend(1, b"x").unwrap();
        buf.remove(1, 1).unwrap();

        assert_eq!(buf.as_slice(), b"xbc");
        assert_eq!(*buf.get(0).unwrap(), b'x');
    }

    #[test]
    fn test_pooled_buffer() {
        let pool = Arc::new(ArrayPool::<u8>::new(PoolConfig::default()));
        let mut buf = SeqBuffer::with_pool(16, pool.clone());
        for i in 0..100u8 {
            buf.append(1, &[i]).unwrap();
        }
        assert_eq!(buf.len(), 100);
        assert!(pool.stats().recycled > 0, "superseded arrays were recycled");
    }

    #[test]
    fn test_pattern_edit() {
        let mut buf = SeqBuffer::<u8>::from_slice(b"a, b, c");
        let n = buf.replace_pattern(b", ", 1, b"|").unwrap();
        assert_eq!(n, 2);
        assert_eq!(buf.as_slice(), b"a|b|c");
    }

    #[test]
    fn test_custom_matcher() {
        struct EveryOther;
        impl Matcher<u8> for EveryOther {
            fn find(&self, content: &[u8]) -> Vec<MatchSpan> {
                (0..content.len())
                    .step_by(2)
                    .map(|i| MatchSpan { index: i, len: 1 })
                    .collect()
            }
        }

        let mut buf = SeqBuffer::<u8>::from_slice(b"abcdef");
        buf.remove_matches(&EveryOther).unwrap();
        assert_eq!(buf.as_slice(), b"bdf");
    }
}
