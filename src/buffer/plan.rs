// src/buffer/plan.rs
//! Capacity planning: reuse slack, shift the window, or reallocate.
//!
//! Every growth request runs a strict three-tier decision, cheapest first:
//!
//! 1. **No-move** — the target side's slack already covers the request; only
//!    the window boundary moves. O(1).
//! 2. **In-place shift** — combined slack covers it; the whole window slides
//!    to the opposite end of the array, reclaiming the other side's slack.
//!    One contiguous O(len) copy, zero allocation.
//! 3. **Reallocate** — a new power-of-two array sized to hold the old total
//!    slack plus the request, so earlier growth in *either* direction keeps
//!    amortizing future growth.
//!
//! [`plan_growth`] is the pure sizing function behind tier 3; it is
//! unit-tested in isolation from any array movement.

use super::core::{MAX_CAPACITY, MIN_CAPACITY, SeqBuffer};
use crate::error::{BufferError, Result};

/// Which side of the window a reservation grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GrowDirection {
    /// Room before the first element
    Front,
    /// Room after the last element
    Back,
    /// Room at a logical index, splitting the window around a gap
    Interior(usize),
}

/// Result of [`plan_growth`]: the capacity to request and where the window's
/// first element lands in the new array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GrowthPlan {
    /// Capacity to request from the allocator (a power of two)
    pub(crate) capacity: usize,
    /// New `head` position, assuming an array of exactly `capacity` slots
    pub(crate) head: usize,
}

/// Sizes a reallocation for `requested` extra slots in `direction`.
///
/// The new capacity is the next power of two covering the old total slack
/// plus the request; discarding slack here would forfeit the amortization
/// already paid for. `head` preserves the non-growing side's slack exactly,
/// so rounding surplus accrues to the growing side.
pub(crate) fn plan_growth(
    free_pre: usize,
    len: usize,
    requested: usize,
    free_post: usize,
    direction: GrowDirection,
) -> Result<GrowthPlan> {
    let total = free_pre
        .checked_add(len)
        .and_then(|t| t.checked_add(requested))
        .and_then(|t| t.checked_add(free_post))
        .ok_or(BufferError::CapacityOverflow)?;
    let capacity = total
        .max(MIN_CAPACITY)
        .checked_next_power_of_two()
        .ok_or(BufferError::CapacityOverflow)?;
    if capacity > MAX_CAPACITY {
        return Err(BufferError::CapacityOverflow);
    }
    let head = match direction {
        GrowDirection::Front => capacity - free_post - len,
        GrowDirection::Back | GrowDirection::Interior(_) => free_pre,
    };
    Ok(GrowthPlan { capacity, head })
}

impl<T: Clone + Default> SeqBuffer<T> {
    /// Ensures `extra` free slots after the window, then claims them by
    /// advancing `tail`. The claimed slots hold filler for the caller to
    /// overwrite.
    pub(crate) fn reserve_back(&mut self, extra: usize) -> Result<()> {
        if self.free_append() < extra {
            if self.free_prepend() + self.free_append() >= extra {
                self.shift_window_to_start();
            } else {
                self.regrow(extra, GrowDirection::Back)?;
            }
        }
        self.tail += extra;
        Ok(())
    }

    /// Ensures `extra` free slots before the window, then claims them by
    /// retreating `head`.
    pub(crate) fn reserve_front(&mut self, extra: usize) -> Result<()> {
        if self.free_prepend() < extra {
            if self.free_prepend() + self.free_append() >= extra {
                self.shift_window_to_end();
            } else {
                self.regrow(extra, GrowDirection::Front)?;
            }
        }
        self.head -= extra;
        Ok(())
    }

    /// Opens a gap of `extra` slots at logical index `index` (exclusive of
    /// the window ends; those are plain front/back reservations).
    ///
    /// Prefix-shift is tried first, then suffix-shift; if neither side's
    /// slack suffices alone, both partitions are copied into a fresh array
    /// around the gap in a single pass.
    pub(crate) fn reserve_interior(&mut self, index: usize, extra: usize) -> Result<()> {
        if self.free_prepend() >= extra {
            let head = self.head;
            self.slide(head, head + index, head - extra);
            self.head -= extra;
        } else if self.free_append() >= extra {
            let (start, tail) = (self.head + index, self.tail);
            self.slide(start, tail, start + extra);
            self.tail += extra;
        } else {
            self.regrow(extra, GrowDirection::Interior(index))?;
        }
        Ok(())
    }

    /// Tier 3: rent a larger array, relocate the window, recycle the old
    /// array. For `Interior`, the gap is already claimed on return (`tail`
    /// includes `extra`); for `Front`/`Back` the caller claims it.
    fn regrow(&mut self, extra: usize, direction: GrowDirection) -> Result<()> {
        let len = self.len();
        let plan = plan_growth(self.free_prepend(), len, extra, self.free_append(), direction)?;
        let mut fresh = self.obtain(plan.capacity);
        // The allocator may hand back more than requested; surplus goes to
        // the growing side.
        let surplus = fresh.len() - plan.capacity;
        let head = match direction {
            GrowDirection::Front => plan.head + surplus,
            _ => plan.head,
        };
        match direction {
            GrowDirection::Interior(index) => {
                for k in 0..index {
                    fresh[head + k] = self.array[self.head + k].clone();
                }
                for k in index..len {
                    fresh[head + extra + k] = self.array[self.head + k].clone();
                }
                self.tail = head + len + extra;
            }
            _ => {
                for k in 0..len {
                    fresh[head + k] = self.array[self.head + k].clone();
                }
                self.tail = head + len;
            }
        }
        self.head = head;
        let old = std::mem::replace(&mut self.array, fresh);
        self.release(old);
        Ok(())
    }

    /// Tier 2 for appends: slide the window flush against the array start,
    /// reclaiming all prepend-side slack.
    fn shift_window_to_start(&mut self) {
        let len = self.len();
        let (head, tail) = (self.head, self.tail);
        self.slide(head, tail, 0);
        self.head = 0;
        self.tail = len;
    }

    /// Tier 2 for prepends: slide the window flush against the array end.
    fn shift_window_to_end(&mut self) {
        let len = self.len();
        let capacity = self.array.len();
        let (head, tail) = (self.head, self.tail);
        self.slide(head, tail, capacity - len);
        self.head = capacity - len;
        self.tail = capacity;
    }

    /// Moves `array[src_start..src_end)` to start at `dest`, handling overlap
    /// by picking the copy direction.
    pub(crate) fn slide(&mut self, src_start: usize, src_end: usize, dest: usize) {
        let count = src_end - src_start;
        if dest < src_start {
            for k in 0..count {
                self.array[dest + k] = self.array[src_start + k].clone();
            }
        } else if dest > src_start {
            for k in (0..count).rev() {
                self.array[dest + k] = self.array[src_start + k].clone();
            }
        }
    }
}
