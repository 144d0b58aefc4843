// src/pool/array.rs
//! Lock-free, size-classed array pool.
//!
//! # Architecture
//!
//! Arrays are parked in one free list per power-of-two size class, each a
//! `crossbeam::SegQueue` with an approximate atomic length. Renting pops
//! from the class's list and falls back to a fresh allocation; recycling
//! scrubs the array back to filler values and parks it unless the class is
//! already at its configured limit.
//!
//! # Scrubbing
//!
//! Recycled arrays are scrubbed (`T::default()` written into every slot)
//! before being parked. Buffer content is opaque to the pool, and a parked
//! array must not keep the previous owner's element resources alive.

use super::config::PoolConfig;
use super::stats::PoolStats;
use crossbeam::queue::SegQueue;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Smallest array length a pool hands out.
pub const MIN_ARRAY_LEN: usize = 16;
/// Largest array length a pool hands out (1Gi elements).
pub const MAX_ARRAY_LEN: usize = 1 << 30;

/// Number of power-of-two size classes between the two bounds, inclusive.
const NUM_CLASSES: usize =
    (MAX_ARRAY_LEN.trailing_zeros() - MIN_ARRAY_LEN.trailing_zeros() + 1) as usize;

/// One size class's free list: a lock-free queue plus an approximate length.
///
/// The counter and the queue are not updated atomically together, so `len()`
/// may be briefly stale. That is acceptable for the per-class size cap.
struct FreeList<T> {
    arrays: SegQueue<Vec<T>>,
    size: AtomicUsize,
}

impl<T> FreeList<T> {
    fn new() -> Self {
        Self {
            arrays: SegQueue::new(),
            size: AtomicUsize::new(0),
        }
    }

    #[inline]
    fn push(&self, array: Vec<T>) {
        self.arrays.push(array);
        self.size.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn pop(&self) -> Option<Vec<T>> {
        self.arrays.pop().inspect(|_| {
            self.size.fetch_sub(1, Ordering::Relaxed);
        })
    }

    #[inline]
    fn len(&self) -> usize {
        self.size.load(Ordering::Relaxed)
    }
}

/// A thread-safe pool of fixed-length backing arrays.
///
/// Rented arrays are plain `Vec<T>` with `len()` equal to their size class,
/// every slot initialized; the renter owns the array outright until it is
/// recycled or dropped. The pool never assumes an array comes back — losing
/// one to a plain drop only costs a future reuse.
///
/// Shareable across threads via `Arc`.
///
/// # Examples
///
/// ```
/// use seqbuf::{ArrayPool, PoolConfig};
///
/// let pool = ArrayPool::<u8>::new(PoolConfig::default());
/// let array = pool.rent(100);
/// assert!(array.len() >= 100);
/// pool.recycle(array);
/// assert_eq!(pool.available(100), 1);
/// ```
pub struct ArrayPool<T> {
    classes: Vec<FreeList<T>>,
    config: PoolConfig,
    allocated: AtomicUsize,
    rented: AtomicUsize,
    recycled: AtomicUsize,
    reused: AtomicUsize,
}

impl<T: Default> Default for ArrayPool<T> {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

impl<T: Default> ArrayPool<T> {
    /// Creates an empty pool.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            classes: (0..NUM_CLASSES).map(|_| FreeList::new()).collect(),
            config,
            allocated: AtomicUsize::new(0),
            rented: AtomicUsize::new(0),
            recycled: AtomicUsize::new(0),
            reused: AtomicUsize::new(0),
        }
    }

    /// Rents an array of at least `min_len` slots.
    ///
    /// The request is rounded up to the class size (the next power of two, at
    /// least [`MIN_ARRAY_LEN`]), so the returned length can exceed the
    /// request. Renters must use the actual `len()`.
    ///
    /// # Panics
    ///
    /// Panics if the rounded length exceeds [`MAX_ARRAY_LEN`].
    pub fn rent(&self, min_len: usize) -> Vec<T> {
        let size = min_len.max(MIN_ARRAY_LEN).next_power_of_two();
        assert!(
            size <= MAX_ARRAY_LEN,
            "Array length {} exceeds maximum {}",
            size,
            MAX_ARRAY_LEN
        );
        self.rented.fetch_add(1, Ordering::Relaxed);
        match self.classes[class_index(size)].pop() {
            Some(array) => {
                self.reused.fetch_add(1, Ordering::Relaxed);
                array
            }
            None => {
                self.allocated.fetch_add(1, Ordering::Relaxed);
                fresh(size)
            }
        }
    }

    /// Hands an array back for reuse.
    ///
    /// The array is scrubbed (every slot reset to `T::default()`) and parked
    /// in its size class. Arrays whose length is not a class size, and
    /// arrays arriving while the class is at `max_per_class`, are dropped.
    pub fn recycle(&self, mut array: Vec<T>) {
        self.recycled.fetch_add(1, Ordering::Relaxed);
        let len = array.len();
        if !len.is_power_of_two() || !(MIN_ARRAY_LEN..=MAX_ARRAY_LEN).contains(&len) {
            return;
        }
        let class = &self.classes[class_index(len)];
        if class.len() >= self.config.max_per_class {
            return;
        }
        for slot in array.iter_mut() {
            *slot = T::default();
        }
        class.push(array);
    }

    /// Parks `count` fresh arrays of (at least) `len` slots, up to the class
    /// limit, so the first rentals skip allocation.
    pub fn prewarm(&self, len: usize, count: usize) {
        let size = len.max(MIN_ARRAY_LEN).next_power_of_two();
        assert!(
            size <= MAX_ARRAY_LEN,
            "Array length {} exceeds maximum {}",
            size,
            MAX_ARRAY_LEN
        );
        let class = &self.classes[class_index(size)];
        for _ in 0..count {
            if class.len() >= self.config.max_per_class {
                break;
            }
            self.allocated.fetch_add(1, Ordering::Relaxed);
            class.push(fresh(size));
        }
    }

    /// Idle arrays currently parked in the class serving `len`-slot requests.
    pub fn available(&self, len: usize) -> usize {
        let size = len.max(MIN_ARRAY_LEN).next_power_of_two();
        if size > MAX_ARRAY_LEN {
            return 0;
        }
        self.classes[class_index(size)].len()
    }

    /// Drops every idle array in every class.
    pub fn clear(&self) {
        for class in &self.classes {
            while class.pop().is_some() {}
        }
    }

    /// Returns a snapshot of pool counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            allocated: self.allocated.load(Ordering::Relaxed),
            rented: self.rented.load(Ordering::Relaxed),
            recycled: self.recycled.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
            idle: self.classes.iter().map(FreeList::len).sum(),
        }
    }
}

#[inline]
fn class_index(size: usize) -> usize {
    (size.trailing_zeros() - MIN_ARRAY_LEN.trailing_zeros()) as usize
}

fn fresh<T: Default>(len: usize) -> Vec<T> {
    let mut array = Vec::new();
    array.resize_with(len, T::default);
    array
}
