//! Property-based tests for clamped slicing.
//!
//! These tests verify the totality contract and its consequences:
//! - No panic: any `isize` bounds on any input resolve to a valid slice
//! - Substring: the result is always a subslice of the input
//! - Collapse: same-side out-of-range half-open bounds produce ""
//! - Idempotence: re-slicing with equivalent clamped bounds changes nothing

use proptest::prelude::*;
use selvage::{Format, GraphemeReplace, GraphemeSlice};

// =============================================================================
// Test Generators
// =============================================================================

/// Plain ASCII text where one grapheme is one char, keeping the
/// replacement-based properties free of cluster-merging effects.
fn ascii_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{1,24}").unwrap()
}

/// An ASCII text plus a legal grapheme position within it.
fn text_and_position() -> impl Strategy<Value = (String, usize)> {
    ascii_text().prop_flat_map(|text| {
        let len = text.grapheme_len();
        (Just(text), 0..len)
    })
}

// =============================================================================
// Totality
// =============================================================================

proptest! {
    #[test]
    fn slice_never_panics(text in any::<String>(), lo in any::<isize>(), hi in any::<isize>()) {
        let _ = text.slice_clamped(lo..hi);
        let _ = text.slice_clamped(lo..=hi);
        let _ = text.slice_clamped(..hi);
        let _ = text.slice_clamped(..=hi);
        let _ = text.slice_clamped(lo..);
        let _ = text.slice_clamped(..);
    }

    #[test]
    fn span_is_always_sliceable(text in any::<String>(), lo in any::<isize>(), hi in any::<isize>()) {
        let span = text.clamped_span(lo..=hi);
        prop_assert!(text.get(span).is_some());
    }

    #[test]
    fn result_is_a_substring(text in any::<String>(), lo in any::<isize>(), hi in any::<isize>()) {
        prop_assert!(text.contains(text.slice_clamped(lo..hi)));
        prop_assert!(text.contains(text.slice_clamped(lo..=hi)));
        prop_assert!(text.contains(text.slice_clamped(lo..)));
    }
}

// =============================================================================
// Clamping Behavior
// =============================================================================

proptest! {
    #[test]
    fn full_and_open_ranges_are_identity(text in any::<String>()) {
        prop_assert_eq!(text.slice_clamped(..), text.as_str());
        prop_assert_eq!(text.slice_clamped(0..), text.as_str());
        prop_assert_eq!(text.slice_clamped(isize::MIN..), text.as_str());
    }

    #[test]
    fn same_side_half_open_bounds_collapse(
        text in any::<String>(),
        a in 0isize..1000,
        b in 0isize..1000,
    ) {
        let len = text.grapheme_len() as isize;
        // Both past the end.
        prop_assert_eq!(text.slice_clamped(len + a..len + b), "");
        // Both before the start.
        prop_assert_eq!(text.slice_clamped(-1 - a..-1 - b), "");
    }

    #[test]
    fn reversed_bounds_are_empty(text in any::<String>(), lo in any::<isize>(), hi in any::<isize>()) {
        prop_assume!(lo > hi);
        prop_assert_eq!(text.slice_clamped(lo..hi), "");
    }

    #[test]
    fn reslicing_with_clamped_bounds_is_idempotent(
        text in any::<String>(),
        lo in -100isize..100,
        hi in -100isize..100,
    ) {
        let len = text.grapheme_len() as isize;
        prop_assume!(len > 0);

        let a = lo.clamp(0, len - 1);
        let b = hi.clamp(0, len - 1);
        let once = text.slice_clamped(lo..=hi);

        if a <= b {
            prop_assert_eq!(once.slice_clamped(0..=(b - a)), once);
        } else {
            prop_assert_eq!(once, "");
        }
    }
}

// =============================================================================
// Replacement
// =============================================================================

proptest! {
    #[test]
    fn set_then_get_returns_new_unit((text, at) in text_and_position()) {
        let before: Vec<String> = (0..text.grapheme_len())
            .map(|i| text.grapheme_at(i).to_owned())
            .collect();

        let mut updated = text.clone();
        updated.set_grapheme_at(at, "x");

        prop_assert_eq!(updated.grapheme_at(at), "x");
        prop_assert_eq!(updated.grapheme_len(), text.grapheme_len());
        for (i, unit) in before.iter().enumerate() {
            if i != at {
                prop_assert_eq!(updated.grapheme_at(i), unit.as_str());
            }
        }
    }
}

// =============================================================================
// Predicates Are Total
// =============================================================================

proptest! {
    #[test]
    fn predicates_never_panic(text in any::<String>()) {
        for format in Format::ALL {
            let _ = format.matches(&text);
        }
    }
}
