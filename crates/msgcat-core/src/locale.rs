//! Three-part locale keys and the fallback reduction order.
//!
//! # Invariants
//!
//! 1. **Reduction is total and strictly shrinking**: every call to
//!    [`Locale::reduce`] either drops exactly one populated field (variant
//!    first, then country) or returns `None`. A reduction chain therefore
//!    terminates after at most two steps.
//!
//! 2. **Reduction order is fixed**: variant → country → language → exhausted.
//!    No platform default locale participates; callers that want a default
//!    text consult their pattern store after exhaustion.
//!
//! 3. **Value semantics**: `Locale` is an ordinary hashable value. Two
//!    locales are the same map key iff all three fields match.

use std::fmt;

/// A `(language, country, variant)` triple used both to select message text
/// and as the fallback search key.
///
/// `country` and `variant` may be empty; `language` is non-empty for any
/// locale produced by [`Locale::parse`] or [`Locale::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locale {
    language: String,
    country: String,
    variant: String,
}

impl Locale {
    /// A language-only locale, e.g. `Locale::new("en")`.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: String::new(),
            variant: String::new(),
        }
    }

    /// Add a country designator, e.g. `Locale::new("en").with_country("US")`.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Add a variant designator, e.g. `"TEXAS"` in `en-US-TEXAS`.
    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Parse a locale tag.
    ///
    /// Accepts both `-` and `_` separators (`en`, `en_US`, `en-US-TEXAS`).
    /// Anything past the second separator is the variant verbatim. Returns
    /// `None` for an empty tag or an empty language field.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let normalized = tag.replace('_', "-");
        let mut parts = normalized.splitn(3, '-');
        let language = parts.next().filter(|p| !p.is_empty())?;
        let country = parts.next().unwrap_or("");
        let variant = parts.next().unwrap_or("");
        Some(Self {
            language: language.to_string(),
            country: country.to_string(),
            variant: variant.to_string(),
        })
    }

    /// The language field. Never empty for a parsed locale.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The country field; empty when absent.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The variant field; empty when absent.
    #[must_use]
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// One step of the fallback order: drop the variant if present, else the
    /// country if present, else report exhaustion with `None`.
    ///
    /// Exhaustion is the designed termination of the fallback walk, not an
    /// error condition.
    #[must_use]
    pub fn reduce(&self) -> Option<Self> {
        if !self.variant.is_empty() {
            Some(Self {
                language: self.language.clone(),
                country: self.country.clone(),
                variant: String::new(),
            })
        } else if !self.country.is_empty() {
            Some(Self::new(self.language.clone()))
        } else {
            None
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if !self.country.is_empty() || !self.variant.is_empty() {
            write!(f, "-{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "-{}", self.variant)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language_only() {
        let locale = Locale::parse("de").unwrap();
        assert_eq!(locale.language(), "de");
        assert_eq!(locale.country(), "");
        assert_eq!(locale.variant(), "");
    }

    #[test]
    fn parse_accepts_both_separators() {
        let underscore = Locale::parse("en_US_TEXAS").unwrap();
        let hyphen = Locale::parse("en-US-TEXAS").unwrap();
        assert_eq!(underscore, hyphen);
        assert_eq!(underscore.variant(), "TEXAS");
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(Locale::parse("").is_none());
        assert!(Locale::parse("_US").is_none());
    }

    #[test]
    fn parse_allows_empty_country_with_variant() {
        let locale = Locale::parse("en__POSIX").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.country(), "");
        assert_eq!(locale.variant(), "POSIX");
    }

    #[test]
    fn reduce_drops_variant_first() {
        let full = Locale::new("en").with_country("US").with_variant("TEXAS");
        let reduced = full.reduce().unwrap();
        assert_eq!(reduced, Locale::new("en").with_country("US"));
    }

    #[test]
    fn reduce_drops_country_second() {
        let regional = Locale::new("en").with_country("US");
        assert_eq!(regional.reduce().unwrap(), Locale::new("en"));
    }

    #[test]
    fn reduce_exhausts_at_language() {
        assert!(Locale::new("en").reduce().is_none());
    }

    #[test]
    fn reduce_chain_terminates_in_two_steps() {
        let full = Locale::new("en").with_country("US").with_variant("TEXAS");
        let step1 = full.reduce().unwrap();
        let step2 = step1.reduce().unwrap();
        assert!(step2.reduce().is_none());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tag in ["en", "en-US", "en-US-TEXAS"] {
            let locale = Locale::parse(tag).unwrap();
            assert_eq!(locale.to_string(), tag);
            assert_eq!(Locale::parse(&locale.to_string()).unwrap(), locale);
        }
    }

    #[test]
    fn distinct_variants_are_distinct_keys() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Locale::new("en"));
        set.insert(Locale::new("en").with_country("US"));
        set.insert(Locale::new("en").with_country("US").with_variant("TEXAS"));
        assert_eq!(set.len(), 3);
    }
}
