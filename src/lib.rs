//! # selvage
//!
//! Clamped string slicing by character position, plus regex-backed format checks.
//!
//! ## The Problem
//!
//! Rust strings are indexed by *bytes*, and slicing at a non-boundary panics:
//!
//! ```rust,should_panic
//! let s = "héllo";
//! let _ = &s[0..2]; // panics: byte 2 is inside 'é'
//! ```
//!
//! Application code rarely thinks in bytes. It thinks in *characters*: "the
//! first three characters", "everything after position 2", "characters 1
//! through 3". And the positions it computes are frequently out of range —
//! derived from user input, cursor math, or parsed offsets that may be
//! negative or past the end.
//!
//! This crate answers both problems at once:
//!
//! - Positions count **extended grapheme clusters** (UAX #29), the unit a
//!   human would call a character. `"🇦🇺day"` has four characters, not
//!   eleven bytes.
//! - Range bounds are **clamped** into the valid domain before slicing.
//!   Negative, oversized, or reversed bounds never panic; they produce the
//!   nearest valid (possibly empty) slice.
//!
//! ```text
//! text = "hello"             grapheme positions 0..=4
//!
//! slice_clamped(1..3)    →  "el"      in range, used as-is
//! slice_clamped(-5..100) →  "hell"    both bounds pulled into [0, 4]
//! slice_clamped(..=100)  →  "hello"   inclusive end clamped to 4
//! slice_clamped(3..=1)   →  ""        reversed after clamping: empty
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use selvage::{GraphemeReplace, GraphemeSlice};
//!
//! let s = "hello";
//! assert_eq!(s.slice_clamped(1..3), "el");
//! assert_eq!(s.slice_clamped(-5..100), "hell");
//! assert_eq!(s.slice_clamped(2..), "llo");
//! assert_eq!(s.grapheme_at(1), "e");
//!
//! let mut owned = String::from("hello");
//! owned.set_grapheme_at(0, "j");
//! assert_eq!(owned, "jello");
//! ```
//!
//! ## Range Forms
//!
//! All five integer range forms (and the full range) go through one clamped
//! resolution:
//!
//! | Form | Covers (grapheme positions) |
//! |------|------------------------------|
//! | `lo..hi` | `[lo, hi)` after clamping both into `[0, len-1]` |
//! | `lo..=hi` | `[lo, hi]` after clamping both into `[0, len-1]` |
//! | `..hi` | `[0, hi)` after clamping `hi` |
//! | `..=hi` | `[0, hi]` after clamping `hi` |
//! | `lo..` | `[lo, len)` after clamping `lo` |
//! | `..` | the whole string |
//!
//! One deliberate consequence of clamping *finite* bounds to the last valid
//! position: a half-open end equal to the length clamps to `len - 1`, so
//! `"hello".slice_clamped(0..5)` is `"hell"`. Reach the full string with
//! `..`, an open-ended `lo..`, or an inclusive `..=hi`.
//!
//! ## Checked vs Unchecked
//!
//! The clamped family is total: any `isize` bounds, any input, no panics.
//! The single-position accessors ([`GraphemeSlice::grapheme_at`],
//! [`GraphemeReplace::set_grapheme_at`]) are the deliberate escape hatch in
//! the other direction: the caller guarantees the position is in range, and
//! an out-of-range position panics, like built-in slice indexing.
//!
//! ## Format Checks
//!
//! A small table of named, full-match validity predicates rides along:
//!
//! ```rust
//! use selvage::{is_email, is_post_code, Format};
//!
//! assert!(is_email("a@b.com"));
//! assert!(!is_email("not-an-email"));
//! assert!(is_post_code("3000"));
//! assert!(!is_post_code("30000")); // full match: exactly four digits
//! assert!(Format::MobilePhone.matches("0412 345 678"));
//! ```
//!
//! The builtin table is Australian-centric (postcode, phone formats). Other
//! locales slot in through [`PatternSet`] without touching the core:
//!
//! ```rust
//! use selvage::PatternSet;
//!
//! let mut set = PatternSet::builtin();
//! set.register("post-code-uk", "[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}")?;
//! assert!(set.is_valid("post-code-uk", "SW1A 1AA")?);
//! # Ok::<(), selvage::Error>(())
//! ```

mod error;
mod format;
mod index;
mod registry;

pub use error::{Error, Result};
pub use format::{
    all_digits, contains_special_character, is_email, is_fixed_line_phone_number,
    is_mobile_phone_number, is_post_code, is_street_address, Format,
};
pub use index::{GraphemeReplace, GraphemeSlice};
pub use registry::PatternSet;
