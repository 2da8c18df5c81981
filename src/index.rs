//! Position-based string access with clamped bounds.
//!
//! ## How It Works
//!
//! Every range form resolves through the same three steps:
//!
//! ```text
//! text = "hello"  (5 graphemes, last valid position 4)
//!
//! 1. Clamp each finite bound into [0, 4]:
//!       -5..100   →  0..4      (half-open)
//!        1..=9    →  1..=4     (inclusive)
//! 2. Fill in missing bounds:
//!        ..3      →  0..3
//!        2..      →  2..=4
//! 3. Map grapheme positions to byte offsets and slice.
//! ```
//!
//! Reversed bounds that survive clamping (`3..=1`) produce the empty string
//! rather than panicking — there is no reordering.
//!
//! ## Grapheme Positions, Byte Spans
//!
//! Public positions count extended grapheme clusters; bytes only appear in
//! the resolved [`clamped_span`](GraphemeSlice::clamped_span), which is
//! always a valid slice range of the original string:
//!
//! ```text
//! "a🇦🇺b"        graphemes:  a(0)  🇦🇺(1)  b(2)
//!                byte starts: 0     1       9
//!
//! slice_clamped(1..2)  →  clamped_span 1..9  →  "🇦🇺"
//! ```

use std::ops::{Bound, Range, RangeBounds};

use unicode_segmentation::UnicodeSegmentation;

/// Clamped, grapheme-position-based read access for string slices.
///
/// ## Example
///
/// ```rust
/// use selvage::GraphemeSlice;
///
/// let s = "hello";
/// assert_eq!(s.grapheme_len(), 5);
/// assert_eq!(s.slice_clamped(1..3), "el");
/// assert_eq!(s.slice_clamped(-10..=10), "hello");
/// assert_eq!(s.slice_clamped(4..2), "");
/// ```
pub trait GraphemeSlice {
    /// The number of extended grapheme clusters.
    ///
    /// This is the length every position in this trait is measured against,
    /// and it can be much smaller than the byte length:
    ///
    /// ```rust
    /// use selvage::GraphemeSlice;
    ///
    /// assert_eq!("🇦🇺day".grapheme_len(), 4);
    /// assert_eq!("🇦🇺day".len(), 11); // bytes
    /// ```
    fn grapheme_len(&self) -> usize;

    /// The grapheme cluster at `at`, unchecked.
    ///
    /// The caller guarantees `at < grapheme_len()`. This is the fast path
    /// for positions already known to be legal; use
    /// [`slice_clamped`](GraphemeSlice::slice_clamped) when they are not.
    ///
    /// # Panics
    ///
    /// Panics if `at >= grapheme_len()`.
    fn grapheme_at(&self, at: usize) -> &str;

    /// Resolve any integer range to a byte span that is always valid to
    /// slice with, clamping finite bounds into `[0, grapheme_len() - 1]`.
    ///
    /// For an empty string the span is `0..0`. Bounds that are reversed
    /// after clamping collapse to an empty span at the lower position.
    fn clamped_span<R: RangeBounds<isize>>(&self, bounds: R) -> Range<usize>;

    /// Slice by grapheme positions with clamped bounds.
    ///
    /// Total: never panics, for any `isize` bounds and any input. Accepts
    /// all of `lo..hi`, `lo..=hi`, `..hi`, `..=hi`, `lo..`, and `..`.
    ///
    /// ```rust
    /// use selvage::GraphemeSlice;
    ///
    /// assert_eq!("hello".slice_clamped(..3), "hel");
    /// assert_eq!("hello".slice_clamped(..=3), "hell");
    /// assert_eq!("hello".slice_clamped(2..), "llo");
    /// assert_eq!("".slice_clamped(0..5), "");
    /// ```
    fn slice_clamped<R: RangeBounds<isize>>(&self, bounds: R) -> &str;
}

impl GraphemeSlice for str {
    fn grapheme_len(&self) -> usize {
        self.graphemes(true).count()
    }

    fn grapheme_at(&self, at: usize) -> &str {
        match self.graphemes(true).nth(at) {
            Some(unit) => unit,
            None => panic!(
                "grapheme position {at} out of bounds (len {})",
                self.grapheme_len()
            ),
        }
    }

    fn clamped_span<R: RangeBounds<isize>>(&self, bounds: R) -> Range<usize> {
        // Byte offset of each grapheme start; position i slices at starts[i].
        let starts: Vec<usize> = self.grapheme_indices(true).map(|(at, _)| at).collect();
        let count = starts.len();
        if count == 0 {
            // `count - 1` has no meaning here; the only valid span is empty.
            return 0..0;
        }

        let last = (count - 1) as isize;
        let clamp = |position: isize| position.clamp(0, last) as usize;

        let start = match bounds.start_bound() {
            Bound::Included(&lo) => clamp(lo),
            Bound::Excluded(&lo) => clamp(lo.saturating_add(1)),
            Bound::Unbounded => 0,
        };

        // Resolved as an exclusive grapheme position in [0, count].
        let end = match bounds.end_bound() {
            Bound::Excluded(&hi) => clamp(hi),
            Bound::Included(&hi) => clamp(hi) + 1,
            Bound::Unbounded => count,
        };

        if start >= end {
            let at = starts[start];
            return at..at;
        }

        let from = starts[start];
        let to = if end == count { self.len() } else { starts[end] };
        from..to
    }

    fn slice_clamped<R: RangeBounds<isize>>(&self, bounds: R) -> &str {
        &self[self.clamped_span(bounds)]
    }
}

/// In-place single-grapheme replacement for owned strings.
///
/// Mutation discipline: the replacement happens in place, so the original
/// binding observes the change — no new string is returned.
///
/// ## Example
///
/// ```rust
/// use selvage::GraphemeReplace;
///
/// let mut s = String::from("cat");
/// s.set_grapheme_at(0, "b");
/// assert_eq!(s, "bat");
/// ```
pub trait GraphemeReplace {
    /// Replace the grapheme cluster at `at` with `unit`, unchecked.
    ///
    /// The caller guarantees `at < grapheme_len()`. `unit` is typically a
    /// single grapheme but any replacement string is accepted; the byte
    /// length of the text may change.
    ///
    /// # Panics
    ///
    /// Panics if `at >= grapheme_len()`.
    fn set_grapheme_at(&mut self, at: usize, unit: &str);
}

impl GraphemeReplace for String {
    fn set_grapheme_at(&mut self, at: usize, unit: &str) {
        let (from, to) = match self.grapheme_indices(true).nth(at) {
            Some((start, old)) => (start, start + old.len()),
            None => panic!(
                "grapheme position {at} out of bounds (len {})",
                self.grapheme_len()
            ),
        };
        self.replace_range(from..to, unit);
    }
}
