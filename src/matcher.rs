// src/matcher.rs
//! Match-span producers consumed by pattern-based buffer edits.
//!
//! A [`Matcher`] inspects a read-only snapshot of buffer content and reports
//! where its pattern occurs. The buffer applies the resulting spans from the
//! highest index to the lowest, so a matcher never has to account for edits
//! made from its own output.

/// A half-open match location inside buffer content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    /// Logical index of the first matched element
    pub index: usize,
    /// Number of matched elements
    pub len: usize,
}

impl MatchSpan {
    /// One past the last matched index.
    #[inline]
    pub fn end(&self) -> usize {
        self.index + self.len
    }
}

/// Locates match spans inside a content snapshot.
///
/// Implementations must return spans in ascending index order, non-overlapping
/// and within `content` bounds. The buffer treats the returned list as a
/// snapshot taken before any edit in the current call.
pub trait Matcher<T> {
    /// Returns every match of this pattern within `content`.
    fn find(&self, content: &[T]) -> Vec<MatchSpan>;
}

/// Leftmost, non-overlapping occurrences of a literal element sequence.
///
/// # Examples
///
/// ```
/// use seqbuf::{Matcher, SliceMatcher};
///
/// let matcher = SliceMatcher::new(b"ab");
/// let spans = matcher.find(b"abxabab");
/// let starts: Vec<usize> = spans.iter().map(|s| s.index).collect();
/// assert_eq!(starts, [0, 3, 5]);
/// ```
pub struct SliceMatcher<'a, T> {
    pattern: &'a [T],
}

impl<'a, T> SliceMatcher<'a, T> {
    /// Creates a matcher for the given literal pattern.
    ///
    /// An empty pattern matches nothing; buffer entry points reject it before
    /// ever calling [`Matcher::find`].
    pub fn new(pattern: &'a [T]) -> Self {
        Self { pattern }
    }
}

impl<T: PartialEq> Matcher<T> for SliceMatcher<'_, T> {
    fn find(&self, content: &[T]) -> Vec<MatchSpan> {
        let plen = self.pattern.len();
        if plen == 0 || plen > content.len() {
            return Vec::new();
        }
        let mut spans = Vec::new();
        let mut i = 0;
        while i + plen <= content.len() {
            if content[i..i + plen] == *self.pattern {
                spans.push(MatchSpan { index: i, len: plen });
                i += plen;
            } else {
                i += 1;
            }
        }
        spans
    }
}

/// A length-1 span for every element satisfying a predicate.
pub struct PredicateMatcher<F> {
    predicate: F,
}

impl<F> PredicateMatcher<F> {
    /// Creates a matcher from an element predicate.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<T, F: Fn(&T) -> bool> Matcher<T> for PredicateMatcher<F> {
    fn find(&self, content: &[T]) -> Vec<MatchSpan> {
        content
            .iter()
            .enumerate()
            .filter(|(_, e)| (self.predicate)(e))
            .map(|(i, _)| MatchSpan { index: i, len: 1 })
            .collect()
    }
}
