//! Builtin format predicates.
//!
//! Each predicate is a full-match regex check: the pattern must consume the
//! entire input, so `"30000"` is not a valid four-digit postcode even though
//! it *contains* one. The two phone predicates add one non-regex rule on
//! top: exactly ten digit characters once separators are stripped, which a
//! `{9,}` repetition alone cannot express.
//!
//! The patterns are validation policy, not engineering: they are the
//! swappable part of the crate. The builtin table covers Australian formats;
//! see [`PatternSet`](crate::PatternSet) for adding other locales at runtime.
//!
//! One inherited quirk is kept on purpose: [`Format::AllDigits`] only
//! requires a *leading* digit (`[0-9].*`), despite its name. Callers depend
//! on the tested behavior, not the name's implied semantics.

use once_cell::sync::Lazy;
use regex::Regex;

/// A named builtin format.
///
/// Each variant carries a fixed pattern, matched against the full input.
///
/// ## Example
///
/// ```rust
/// use selvage::Format;
///
/// assert!(Format::Email.matches("a@b.com"));
/// assert!(Format::PostCode.matches("3000"));
/// assert!(!Format::PostCode.matches("30000"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Email address: `local@domain.tld`, ASCII alphanumerics plus `_.+-`.
    Email,
    /// Australian postcode: exactly four digits.
    PostCode,
    /// Australian fixed-line number: leading `0`, ten digits total,
    /// separators (space, `-`, parentheses) allowed.
    FixedLinePhone,
    /// Australian mobile number: same shape as [`Format::FixedLinePhone`].
    MobilePhone,
    /// Street address: any text of at least seven characters.
    StreetAddress,
    /// Contains at least one non-alphanumeric character.
    SpecialCharacter,
    /// Starts with a digit. The name is historical: the pattern `[0-9].*`
    /// checks only the first character, and that behavior is preserved.
    AllDigits,
}

/// Anchor a pattern so it must consume the entire input.
pub(crate) fn compile_full_match(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

/// The number of ASCII digit characters in `text`.
pub(crate) fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

static REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    Format::ALL
        .iter()
        .map(|format| {
            compile_full_match(format.pattern()).expect("builtin pattern compiles")
        })
        .collect()
});

impl Format {
    /// All builtin formats, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Email,
        Self::PostCode,
        Self::FixedLinePhone,
        Self::MobilePhone,
        Self::StreetAddress,
        Self::SpecialCharacter,
        Self::AllDigits,
    ];

    /// The stable registry name of this format.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::PostCode => "post-code-au",
            Self::FixedLinePhone => "fixed-line-phone-au",
            Self::MobilePhone => "mobile-phone-au",
            Self::StreetAddress => "street-address",
            Self::SpecialCharacter => "special-character",
            Self::AllDigits => "all-digits",
        }
    }

    /// The unanchored pattern source; matching always anchors it as a full
    /// match.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Email => r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+",
            Self::PostCode => "[0-9]{4}",
            Self::FixedLinePhone | Self::MobilePhone => r"0[0-9 \-()]{9,}",
            Self::StreetAddress => ".{7,}",
            Self::SpecialCharacter => ".*[^A-Za-z0-9].*",
            Self::AllDigits => "[0-9].*",
        }
    }

    /// The exact digit-character count this format requires on top of its
    /// pattern, if any.
    #[must_use]
    pub fn exact_digit_count(self) -> Option<usize> {
        match self {
            Self::FixedLinePhone | Self::MobilePhone => Some(10),
            _ => None,
        }
    }

    fn regex(self) -> &'static Regex {
        &REGEXES[self as usize]
    }

    /// Whether `text` is valid under this format.
    ///
    /// Total: returns a bool for any input, including the empty string.
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        if !self.regex().is_match(text) {
            return false;
        }
        match self.exact_digit_count() {
            Some(required) => digit_count(text) == required,
            None => true,
        }
    }
}

/// Whether `text` is a well-formed email address.
#[must_use]
pub fn is_email(text: &str) -> bool {
    Format::Email.matches(text)
}

/// Whether `text` is a four-digit Australian postcode.
#[must_use]
pub fn is_post_code(text: &str) -> bool {
    Format::PostCode.matches(text)
}

/// Whether `text` is an Australian fixed-line phone number: leading `0`,
/// exactly ten digits, separators allowed.
#[must_use]
pub fn is_fixed_line_phone_number(text: &str) -> bool {
    Format::FixedLinePhone.matches(text)
}

/// Whether `text` is an Australian mobile phone number. Shares the
/// fixed-line shape; kept as a separately named predicate so the two rules
/// can diverge per locale.
#[must_use]
pub fn is_mobile_phone_number(text: &str) -> bool {
    Format::MobilePhone.matches(text)
}

/// Whether `text` is plausibly a street address (at least seven characters).
#[must_use]
pub fn is_street_address(text: &str) -> bool {
    Format::StreetAddress.matches(text)
}

/// Whether `text` contains at least one non-alphanumeric character.
#[must_use]
pub fn contains_special_character(text: &str) -> bool {
    Format::SpecialCharacter.matches(text)
}

/// Whether `text` starts with a digit.
///
/// The name is historical and the loose behavior is deliberate:
/// `all_digits("5abc")` is `true`. See [`Format::AllDigits`].
#[must_use]
pub fn all_digits(text: &str) -> bool {
    Format::AllDigits.matches(text)
}
