//! Runtime-extensible pattern table.
//!
//! The builtin [`Format`](crate::Format) table is fixed at compile time and
//! Australian-centric. `PatternSet` lifts the same name → rule mapping into
//! a runtime table so other locales (or application-specific formats) can be
//! registered without touching the indexing core.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::format::{compile_full_match, digit_count, Format};

/// One registered rule: an anchored pattern, plus an optional exact digit
/// count applied after the regex.
#[derive(Debug, Clone)]
struct Rule {
    regex: regex::Regex,
    exact_digits: Option<usize>,
}

impl Rule {
    fn matches(&self, text: &str) -> bool {
        if !self.regex.is_match(text) {
            return false;
        }
        match self.exact_digits {
            Some(required) => digit_count(text) == required,
            None => true,
        }
    }
}

/// A name → validation-rule table, seeded with the builtin formats.
///
/// Registering a name that already exists replaces its rule, so a locale can
/// also *override* a builtin (say, swap `post-code-au` for a stricter one).
///
/// ## Example
///
/// ```rust
/// use selvage::PatternSet;
///
/// let mut set = PatternSet::builtin();
/// assert!(set.is_valid("email", "a@b.com")?);
///
/// set.register("post-code-nz", "[0-9]{4}")?;
/// assert!(set.is_valid("post-code-nz", "6011")?);
/// assert!(set.is_valid("unregistered", "x").is_err());
/// # Ok::<(), selvage::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    rules: HashMap<String, Rule>,
}

impl PatternSet {
    /// An empty table with no rules registered.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table seeded with every builtin [`Format`], registered under
    /// [`Format::name`].
    #[must_use]
    pub fn builtin() -> Self {
        let mut set = Self::empty();
        for format in Format::ALL {
            let regex = compile_full_match(format.pattern())
                .expect("builtin pattern compiles");
            set.rules.insert(
                format.name().to_owned(),
                Rule {
                    regex,
                    exact_digits: format.exact_digit_count(),
                },
            );
        }
        set
    }

    /// Register `pattern` under `name`, anchored as a full match.
    ///
    /// Replaces any existing rule with the same name.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn register(&mut self, name: &str, pattern: &str) -> Result<()> {
        self.register_rule(name, pattern, None)
    }

    /// Like [`register`](Self::register), additionally requiring exactly
    /// `digits` digit characters in the input; the rule shape the builtin
    /// phone formats use.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn register_with_digit_count(
        &mut self,
        name: &str,
        pattern: &str,
        digits: usize,
    ) -> Result<()> {
        self.register_rule(name, pattern, Some(digits))
    }

    fn register_rule(
        &mut self,
        name: &str,
        pattern: &str,
        exact_digits: Option<usize>,
    ) -> Result<()> {
        let regex = compile_full_match(pattern).map_err(|source| Error::InvalidPattern {
            name: name.to_owned(),
            source,
        })?;
        self.rules.insert(
            name.to_owned(),
            Rule {
                regex,
                exact_digits,
            },
        );
        Ok(())
    }

    /// Whether `text` is valid under the rule registered as `name`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownFormat`] if no rule is registered under `name`.
    pub fn is_valid(&self, name: &str, text: &str) -> Result<bool> {
        self.rules
            .get(name)
            .map(|rule| rule.matches(text))
            .ok_or_else(|| Error::UnknownFormat(name.to_owned()))
    }

    /// Whether a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// The registered rule names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_agrees_with_format_enum() {
        let set = PatternSet::builtin();
        let samples = ["a@b.com", "3000", "0412 345 678", "1 Main St", "5abc", ""];
        for format in Format::ALL {
            assert!(set.contains(format.name()));
            for text in samples {
                assert_eq!(
                    set.is_valid(format.name(), text).unwrap(),
                    format.matches(text),
                    "{} disagreed on {text:?}",
                    format.name()
                );
            }
        }
    }

    #[test]
    fn test_register_new_locale() {
        let mut set = PatternSet::builtin();
        set.register("post-code-nz", "[0-9]{4}").unwrap();
        assert!(set.is_valid("post-code-nz", "6011").unwrap());
        assert!(!set.is_valid("post-code-nz", "60112").unwrap());
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut set = PatternSet::builtin();
        set.register("post-code-au", "[0-9]{5}").unwrap();
        assert!(!set.is_valid("post-code-au", "3000").unwrap());
        assert!(set.is_valid("post-code-au", "30001").unwrap());
    }

    #[test]
    fn test_digit_count_rule() {
        let mut set = PatternSet::empty();
        set.register_with_digit_count("phone-uk", r"0[0-9 ]{9,}", 11)
            .unwrap();
        assert!(set.is_valid("phone-uk", "020 7946 0958").unwrap());
        assert!(!set.is_valid("phone-uk", "020 7946 095").unwrap());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let mut set = PatternSet::empty();
        let err = set.register("broken", "[0-9").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref name, .. } if name == "broken"));
    }

    #[test]
    fn test_unknown_format_is_reported() {
        let set = PatternSet::empty();
        let err = set.is_valid("nope", "text").unwrap_err();
        assert!(matches!(err, Error::UnknownFormat(ref name) if name == "nope"));
    }
}
