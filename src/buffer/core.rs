// src/buffer/core.rs
//! Core storage: one backing array and a `[head, tail)` window into it.
//!
//! This module provides the fundamental [`SeqBuffer`] type: construction,
//! bounds-checked element access, and slice views. Growth decisions live in
//! `plan`, edit algorithms in `ops`.

use crate::error::{BufferError, Result};
use crate::pool::ArrayPool;
use std::fmt;
use std::sync::Arc;

/// Smallest capacity ever allocated for a buffer.
pub const MIN_CAPACITY: usize = 16;
/// Largest representable capacity (1Gi elements).
pub const MAX_CAPACITY: usize = 1 << 30;

/// A growable, double-ended sequence buffer.
///
/// The logical content is the window `array[head..tail)` of a single backing
/// array. Both ends carry slack, so appends and prepends are O(1) until the
/// respective side runs out, and interior edits shift whichever partition is
/// cheaper to move. Capacity grows in powers of two, preserving the existing
/// free-space split so that growth in either direction stays amortized O(1).
///
/// A buffer owns its backing array exclusively. Mutation requires `&mut self`
/// and [`Clone`] detaches into an independent buffer, so two handles never
/// alias the same array.
///
/// Slots outside the window hold `T::default()` filler and are never exposed
/// as content.
///
/// # Examples
///
/// ```
/// use seqbuf::SeqBuffer;
/// # use seqbuf::BufferError;
///
/// let mut buf = SeqBuffer::<u8>::new(16);
/// buf.append(1, b"bc")?;
/// buf.prepend(1, b"a")?;
/// assert_eq!(buf.as_slice(), b"abc");
/// # Ok::<(), BufferError>(())
/// ```
pub struct SeqBuffer<T> {
    /// Backing array; capacity is `array.len()`
    pub(crate) array: Vec<T>,
    /// First logical element
    pub(crate) head: usize,
    /// One past the last logical element
    pub(crate) tail: usize,
    /// Where reallocations rent from and superseded arrays return to
    pub(crate) pool: Option<Arc<ArrayPool<T>>>,
}

impl<T: Default> SeqBuffer<T> {
    /// Creates an empty buffer with at least `min_capacity` slots.
    ///
    /// The request is rounded up to the next power of two (at least
    /// [`MIN_CAPACITY`]) and the window starts centered, so both append and
    /// prepend have immediate slack.
    ///
    /// # Panics
    ///
    /// Panics if the rounded capacity exceeds [`MAX_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seqbuf::SeqBuffer;
    ///
    /// let buf = SeqBuffer::<u8>::new(100);
    /// assert_eq!(buf.capacity(), 128);
    /// assert_eq!(buf.len(), 0);
    /// assert_eq!(buf.free_prepend(), buf.free_append());
    /// ```
    pub fn new(min_capacity: usize) -> Self {
        Self::build(min_capacity, None)
    }

    /// Creates an empty buffer whose backing arrays come from `pool`.
    ///
    /// Every reallocation rents from the pool and recycles the superseded
    /// array back into it. The pool may hand out arrays longer than
    /// requested; the buffer always uses the actual length.
    ///
    /// # Panics
    ///
    /// Panics if the rounded capacity exceeds [`MAX_CAPACITY`].
    pub fn with_pool(min_capacity: usize, pool: Arc<ArrayPool<T>>) -> Self {
        Self::build(min_capacity, Some(pool))
    }

    fn build(min_capacity: usize, pool: Option<Arc<ArrayPool<T>>>) -> Self {
        let capacity = min_capacity.max(MIN_CAPACITY).next_power_of_two();
        assert!(
            capacity <= MAX_CAPACITY,
            "Buffer capacity {} exceeds maximum {}",
            capacity,
            MAX_CAPACITY
        );
        let array = match &pool {
            Some(pool) => pool.rent(capacity),
            None => fresh_array(capacity),
        };
        let mid = array.len() / 2;
        Self {
            array,
            head: mid,
            tail: mid,
            pool,
        }
    }

    /// Obtains a backing array of at least `min_len` slots, from the pool if
    /// one is attached.
    pub(crate) fn obtain(&self, min_len: usize) -> Vec<T> {
        match &self.pool {
            Some(pool) => pool.rent(min_len),
            None => fresh_array(min_len),
        }
    }

    /// Hands a superseded backing array back to the pool, if any.
    pub(crate) fn release(&self, array: Vec<T>) {
        if let Some(pool) = &self.pool {
            pool.recycle(array);
        }
    }

    /// Consumes the buffer and returns its backing array to the pool.
    ///
    /// Plain dropping frees the array to the heap instead; this is only
    /// useful when the array should stay warm in the pool.
    pub fn recycle(self) {
        let Self { array, pool, .. } = self;
        if let Some(pool) = pool {
            pool.recycle(array);
        }
    }
}

impl<T: Clone + Default> SeqBuffer<T> {
    /// Creates a buffer holding a copy of `elements`, window centered.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqbuf::SeqBuffer;
    ///
    /// let buf = SeqBuffer::<u8>::from_slice(b"hello");
    /// assert_eq!(buf.as_slice(), b"hello");
    /// assert_eq!(buf.len(), 5);
    /// ```
    pub fn from_slice(elements: &[T]) -> Self {
        let mut buf = Self::new(elements.len());
        let head = (buf.array.len() - elements.len()) / 2;
        for (i, e) in elements.iter().enumerate() {
            buf.array[head + i] = e.clone();
        }
        buf.head = head;
        buf.tail = head + elements.len();
        buf
    }
}

impl<T> SeqBuffer<T> {
    /// Number of logical elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tail - self.head
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Total capacity of the backing array.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.array.len()
    }

    /// Free slots before the window (room for O(1) prepends).
    #[inline(always)]
    pub fn free_prepend(&self) -> usize {
        self.head
    }

    /// Free slots after the window (room for O(1) appends).
    #[inline(always)]
    pub fn free_append(&self) -> usize {
        self.array.len() - self.tail
    }

    /// Returns the element at logical index `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len() {
            return Err(BufferError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(&self.array[self.head + index])
    }

    /// Overwrites the element at logical index `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.len() {
            return Err(BufferError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.array[self.head + index] = value;
        Ok(())
    }

    /// Read-only view of the logical content.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqbuf::SeqBuffer;
    ///
    /// let buf = SeqBuffer::<u8>::from_slice(b"abc");
    /// assert_eq!(buf.as_slice(), b"abc");
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.array[self.head..self.tail]
    }

    /// Mutable view of the logical content, for bulk algorithms.
    ///
    /// Use with caution: callers may reorder or overwrite elements freely but
    /// must not assume anything about slots outside the returned slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.array[self.head..self.tail]
    }

    /// Iterates over the logical content.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

fn fresh_array<T: Default>(len: usize) -> Vec<T> {
    let mut array = Vec::new();
    array.resize_with(len, T::default);
    array
}

impl<T> AsRef<[T]> for SeqBuffer<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T> IntoIterator for &'a SeqBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Default> Clone for SeqBuffer<T> {
    /// Detaches into an independent buffer over a freshly obtained array.
    fn clone(&self) -> Self {
        let mut array = self.obtain(self.array.len());
        for i in self.head..self.tail {
            array[i] = self.array[i].clone();
        }
        Self {
            array,
            head: self.head,
            tail: self.tail,
            pool: self.pool.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SeqBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqBuffer")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("content", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for SeqBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SeqBuffer<T> {}
