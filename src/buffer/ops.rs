// src/buffer/ops.rs
//! Edit operations, expressed against the storage core and capacity planner.
//!
//! Every repetition-based operation takes `(count, elements)` and writes
//! `count` back-to-back repetitions of the `elements` slice; a single value
//! is just a one-element slice. A zero `count` is rejected as
//! [`BufferError::InvalidArgument`], an empty `elements` slice is a no-op.
//!
//! Operations validate their arguments and settle capacity before touching
//! content, so a failing call leaves the buffer unchanged.

use super::core::SeqBuffer;
use crate::error::{BufferError, Result};
use crate::matcher::{Matcher, PredicateMatcher, SliceMatcher};

impl<T: Clone + Default> SeqBuffer<T> {
    /// Appends `count` repetitions of `elements`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqbuf::SeqBuffer;
    /// # use seqbuf::BufferError;
    ///
    /// let mut buf = SeqBuffer::<u8>::new(16);
    /// buf.append(1, b"abc")?;
    /// buf.append(2, b"!")?;
    /// assert_eq!(buf.as_slice(), b"abc!!");
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn append(&mut self, count: usize, elements: &[T]) -> Result<()> {
        let total = repeat_len(count, elements.len())?;
        if total == 0 {
            return Ok(());
        }
        let start = self.len();
        self.reserve_back(total)?;
        self.write_run(start, count, elements);
        Ok(())
    }

    /// Prepends `count` repetitions of `elements`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqbuf::SeqBuffer;
    /// # use seqbuf::BufferError;
    ///
    /// let mut buf = SeqBuffer::<u8>::from_slice(b"abc");
    /// buf.prepend(1, b"x")?;
    /// assert_eq!(buf.as_slice(), b"xabc");
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn prepend(&mut self, count: usize, elements: &[T]) -> Result<()> {
        let total = repeat_len(count, elements.len())?;
        if total == 0 {
            return Ok(());
        }
        self.reserve_front(total)?;
        self.write_run(0, count, elements);
        Ok(())
    }

    /// Inserts `count` repetitions of `elements` before logical `index`.
    ///
    /// `index == 0` behaves like [`prepend`](Self::prepend), `index == len()`
    /// like [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// [`BufferError::IndexOutOfRange`] if `index > len()`;
    /// [`BufferError::InvalidArgument`] if `count == 0`.
    pub fn insert(&mut self, index: usize, count: usize, elements: &[T]) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(BufferError::IndexOutOfRange { index, len });
        }
        let total = repeat_len(count, elements.len())?;
        if total == 0 {
            return Ok(());
        }
        if index == 0 {
            self.reserve_front(total)?;
        } else if index == len {
            self.reserve_back(total)?;
        } else {
            self.reserve_interior(index, total)?;
        }
        self.write_run(index, count, elements);
        Ok(())
    }

    /// Removes the `count` elements at `[index, index + count)`.
    ///
    /// Removing at either end is a pure boundary move. Interior removal
    /// compacts toward the side with less free space, keeping slack balanced
    /// across repeated mixed-direction edits.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqbuf::SeqBuffer;
    /// # use seqbuf::BufferError;
    ///
    /// let mut buf = SeqBuffer::<u8>::from_slice(b"xabc");
    /// buf.remove(1, 1)?;
    /// assert_eq!(buf.as_slice(), b"xbc");
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn remove(&mut self, index: usize, count: usize) -> Result<()> {
        let len = self.len();
        let end = index
            .checked_add(count)
            .filter(|&end| end <= len)
            .ok_or(BufferError::IndexOutOfRange { index, len })?;
        if count == 0 {
            return Ok(());
        }
        if index == 0 {
            self.head += count;
        } else if end == len {
            self.tail -= count;
        } else if self.free_prepend() <= self.free_append() {
            // Prepend slack is scarcer: close the gap by pushing the prefix
            // right, growing the cheap side.
            let head = self.head;
            self.slide(head, head + index, head + count);
            self.head += count;
        } else {
            let (gap_end, tail) = (self.head + end, self.tail);
            self.slide(gap_end, tail, gap_end - count);
            self.tail -= count;
        }
        Ok(())
    }

    /// Removes everything from logical `index` to the end.
    pub fn remove_from(&mut self, index: usize) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(BufferError::IndexOutOfRange { index, len });
        }
        self.tail = self.head + index;
        Ok(())
    }

    /// Removes the first `count` elements. O(1).
    pub fn remove_left(&mut self, count: usize) -> Result<()> {
        let len = self.len();
        if count > len {
            return Err(BufferError::IndexOutOfRange { index: count, len });
        }
        self.head += count;
        Ok(())
    }

    /// Removes the last `count` elements. O(1).
    pub fn remove_right(&mut self, count: usize) -> Result<()> {
        let len = self.len();
        if count > len {
            return Err(BufferError::IndexOutOfRange { index: count, len });
        }
        self.tail -= count;
        Ok(())
    }

    /// Removes every element satisfying `predicate`, keeping survivor order.
    ///
    /// Single forward pass with a write cursor; no allocation. Returns the
    /// number of elements removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqbuf::SeqBuffer;
    ///
    /// let mut buf = SeqBuffer::<u8>::from_slice(b"a1b2c3");
    /// let removed = buf.remove_all(|e| e.is_ascii_digit());
    /// assert_eq!(removed, 3);
    /// assert_eq!(buf.as_slice(), b"abc");
    /// ```
    pub fn remove_all(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let mut keep = self.head;
        for r in self.head..self.tail {
            if !predicate(&self.array[r]) {
                if keep != r {
                    self.array[keep] = self.array[r].clone();
                }
                keep += 1;
            }
        }
        let removed = self.tail - keep;
        self.tail = keep;
        removed
    }

    /// Forward scan: each element satisfying `predicate` gets `count - 1`
    /// copies inserted immediately after it. The scan skips past what it
    /// inserted, so copies are never reprocessed. Returns the number of
    /// elements duplicated.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidArgument`] if `count == 0`. `count == 1` is a
    /// no-op.
    pub fn duplicate_where(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
        count: usize,
    ) -> Result<usize> {
        if count == 0 {
            return Err(BufferError::InvalidArgument(
                "duplicate count must be positive".into(),
            ));
        }
        let mut duplicated = 0;
        let mut i = 0;
        while i < self.len() {
            if predicate(&self.array[self.head + i]) {
                if count > 1 {
                    let value = self.array[self.head + i].clone();
                    self.insert(i + 1, count - 1, std::slice::from_ref(&value))?;
                }
                duplicated += 1;
                i += count;
            } else {
                i += 1;
            }
        }
        Ok(duplicated)
    }

    /// Exchanges the elements at logical indices `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.len();
        if i >= len {
            return Err(BufferError::IndexOutOfRange { index: i, len });
        }
        if j >= len {
            return Err(BufferError::IndexOutOfRange { index: j, len });
        }
        if i != j {
            self.array.swap(self.head + i, self.head + j);
        }
        Ok(())
    }

    /// Reverses the whole buffer in place.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Reverses `[index, index + count)` in place by pairwise swaps.
    pub fn reverse_range(&mut self, index: usize, count: usize) -> Result<()> {
        let len = self.len();
        let end = index
            .checked_add(count)
            .filter(|&end| end <= len)
            .ok_or(BufferError::IndexOutOfRange { index, len })?;
        for k in 0..count / 2 {
            self.array
                .swap(self.head + index + k, self.head + end - 1 - k);
        }
        Ok(())
    }

    /// Grows to exactly `total_width` by prepending repetitions of `pattern`,
    /// trimming overshoot from the outer (left) edge.
    ///
    /// Already-wide-enough buffers are untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqbuf::SeqBuffer;
    /// # use seqbuf::BufferError;
    ///
    /// let mut buf = SeqBuffer::<u8>::from_slice(b"7");
    /// buf.pad_left(5, b"0")?;
    /// assert_eq!(buf.as_slice(), b"00007");
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn pad_left(&mut self, total_width: usize, pattern: &[T]) -> Result<()> {
        if pattern.is_empty() {
            return Err(BufferError::InvalidArgument(
                "pad pattern must not be empty".into(),
            ));
        }
        let len = self.len();
        if total_width <= len {
            return Ok(());
        }
        let reps = (total_width - len).div_ceil(pattern.len());
        self.prepend(reps, pattern)?;
        let overshoot = self.len() - total_width;
        if overshoot > 0 {
            self.remove_left(overshoot)?;
        }
        Ok(())
    }

    /// Grows to exactly `total_width` by appending repetitions of `pattern`,
    /// trimming overshoot from the outer (right) edge.
    pub fn pad_right(&mut self, total_width: usize, pattern: &[T]) -> Result<()> {
        if pattern.is_empty() {
            return Err(BufferError::InvalidArgument(
                "pad pattern must not be empty".into(),
            ));
        }
        let len = self.len();
        if total_width <= len {
            return Ok(());
        }
        let reps = (total_width - len).div_ceil(pattern.len());
        self.append(reps, pattern)?;
        let overshoot = self.len() - total_width;
        if overshoot > 0 {
            self.remove_right(overshoot)?;
        }
        Ok(())
    }

    /// Pads both sides to reach `total_width`, splitting the extra width as
    /// evenly as possible. An odd remainder goes to the left side iff
    /// `left_bias` is set.
    pub fn pad_even(
        &mut self,
        total_width: usize,
        left_pattern: &[T],
        right_pattern: &[T],
        left_bias: bool,
    ) -> Result<()> {
        if left_pattern.is_empty() || right_pattern.is_empty() {
            return Err(BufferError::InvalidArgument(
                "pad pattern must not be empty".into(),
            ));
        }
        let len = self.len();
        if total_width <= len {
            return Ok(());
        }
        let extra = total_width - len;
        let left_extra = extra / 2 + usize::from(extra % 2 == 1 && left_bias);
        let right_extra = extra - left_extra;
        if right_extra > 0 {
            self.pad_right(len + right_extra, right_pattern)?;
        }
        if left_extra > 0 {
            self.pad_left(total_width, left_pattern)?;
        }
        Ok(())
    }
}

impl<T: Clone + Default + PartialEq> SeqBuffer<T> {
    /// Collapses every run of consecutive equal elements to one instance.
    ///
    /// Idempotent: applying it twice equals applying it once. Returns the
    /// number of elements removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqbuf::SeqBuffer;
    ///
    /// let mut buf = SeqBuffer::<u8>::from_slice(b"aabbbcc");
    /// buf.normalize_adjacent_duplicates();
    /// assert_eq!(buf.as_slice(), b"abc");
    /// ```
    pub fn normalize_adjacent_duplicates(&mut self) -> usize {
        self.clamp_runs(1, None)
    }

    /// Clamps every run of consecutive equal elements to at most
    /// `max_adjacent` instances. When `elements` is given, only runs of
    /// elements in that set are clamped; other runs pass through untouched.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidArgument`] if `max_adjacent == 0`.
    pub fn normalize_adjacent(
        &mut self,
        max_adjacent: usize,
        elements: Option<&[T]>,
    ) -> Result<usize> {
        if max_adjacent == 0 {
            return Err(BufferError::InvalidArgument(
                "max adjacent count must be positive".into(),
            ));
        }
        Ok(self.clamp_runs(max_adjacent, elements))
    }

    fn clamp_runs(&mut self, max_adjacent: usize, elements: Option<&[T]>) -> usize {
        let mut w = self.head;
        let mut r = self.head;
        while r < self.tail {
            let run_start = r;
            while r < self.tail && self.array[r] == self.array[run_start] {
                r += 1;
            }
            let run_len = r - run_start;
            let clamp = elements.is_none_or(|set| set.contains(&self.array[run_start]));
            let keep = if clamp { run_len.min(max_adjacent) } else { run_len };
            // w never passes run_start, so reads below stay ahead of writes.
            for k in 0..keep {
                if w != run_start + k {
                    self.array[w] = self.array[run_start + k].clone();
                }
                w += 1;
            }
        }
        let removed = self.tail - w;
        self.tail = w;
        removed
    }

    /// Collapses every interior run of elements satisfying `predicate` to a
    /// single `replacement`; runs touching either edge of the buffer are
    /// removed outright, with no replacement emitted. Returns the net number
    /// of elements removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqbuf::SeqBuffer;
    ///
    /// let mut buf = SeqBuffer::<u8>::from_slice(b"  a  b  ");
    /// buf.normalize_all(|e| *e == b' ', &b'_');
    /// assert_eq!(buf.as_slice(), b"a_b");
    /// ```
    pub fn normalize_all(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
        replacement: &T,
    ) -> usize {
        let mut w = self.head;
        let mut r = self.head;
        while r < self.tail {
            if predicate(&self.array[r]) {
                let run_start = r;
                while r < self.tail && predicate(&self.array[r]) {
                    r += 1;
                }
                let interior = run_start != self.head && r != self.tail;
                if interior {
                    self.array[w] = replacement.clone();
                    w += 1;
                }
            } else {
                if w != r {
                    self.array[w] = self.array[r].clone();
                }
                w += 1;
                r += 1;
            }
        }
        let removed = self.tail - w;
        self.tail = w;
        removed
    }

    /// Replaces every span reported by `matcher` with `count` repetitions of
    /// `replacement`. Returns the number of spans edited.
    ///
    /// Spans are computed once against the unmodified content and applied
    /// from the highest index to the lowest: later edits change lengths, and
    /// only descending order keeps the not-yet-applied indices valid.
    ///
    /// An empty `replacement` removes the spans outright.
    pub fn replace_matches<M: Matcher<T>>(
        &mut self,
        matcher: &M,
        count: usize,
        replacement: &[T],
    ) -> Result<usize> {
        if count == 0 {
            return Err(BufferError::InvalidArgument(
                "repeat count must be positive".into(),
            ));
        }
        let spans = matcher.find(self.as_slice());
        for span in spans.iter().rev() {
            self.remove(span.index, span.len)?;
            if !replacement.is_empty() {
                self.insert(span.index, count, replacement)?;
            }
        }
        Ok(spans.len())
    }

    /// Replaces every occurrence of the literal `pattern` with `count`
    /// repetitions of `replacement`.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidArgument`] on an empty pattern or `count == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqbuf::SeqBuffer;
    /// # use seqbuf::BufferError;
    ///
    /// let mut buf = SeqBuffer::<u8>::from_slice(b"one,two,three");
    /// buf.replace_pattern(b",", 1, b"; ")?;
    /// assert_eq!(buf.as_slice(), b"one; two; three");
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn replace_pattern(
        &mut self,
        pattern: &[T],
        count: usize,
        replacement: &[T],
    ) -> Result<usize> {
        if pattern.is_empty() {
            return Err(BufferError::InvalidArgument(
                "pattern must not be empty".into(),
            ));
        }
        self.replace_matches(&SliceMatcher::new(pattern), count, replacement)
    }

    /// Replaces every element satisfying `predicate` with `count` repetitions
    /// of `replacement`.
    pub fn replace_where(
        &mut self,
        predicate: impl Fn(&T) -> bool,
        count: usize,
        replacement: &[T],
    ) -> Result<usize> {
        self.replace_matches(&PredicateMatcher::new(predicate), count, replacement)
    }

    /// Removes every span reported by `matcher`, highest index first.
    pub fn remove_matches<M: Matcher<T>>(&mut self, matcher: &M) -> Result<usize> {
        let spans = matcher.find(self.as_slice());
        for span in spans.iter().rev() {
            self.remove(span.index, span.len)?;
        }
        Ok(spans.len())
    }

    /// Removes every occurrence of the literal `pattern`.
    pub fn remove_pattern(&mut self, pattern: &[T]) -> Result<usize> {
        if pattern.is_empty() {
            return Err(BufferError::InvalidArgument(
                "pattern must not be empty".into(),
            ));
        }
        self.remove_matches(&SliceMatcher::new(pattern))
    }
}

impl<T: Clone + Default> SeqBuffer<T> {
    /// Writes `reps` repetitions of `elements` over the already reserved
    /// slots starting at logical `start`.
    fn write_run(&mut self, start: usize, reps: usize, elements: &[T]) {
        let mut w = self.head + start;
        for _ in 0..reps {
            for e in elements {
                self.array[w] = e.clone();
                w += 1;
            }
        }
    }
}

/// Total slots for `count` repetitions of a `unit_len`-element sequence.
fn repeat_len(count: usize, unit_len: usize) -> Result<usize> {
    if count == 0 {
        return Err(BufferError::InvalidArgument(
            "repeat count must be positive".into(),
        ));
    }
    count.checked_mul(unit_len).ok_or(BufferError::CapacityOverflow)
}
