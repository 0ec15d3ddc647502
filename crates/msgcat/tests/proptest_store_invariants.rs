//! Property-based invariant tests for pattern-store resolution:
//!
//! 1. Resolution is total for registered codes — any locale resolves to
//!    some pattern once a default exists
//! 2. An exact-locale pattern always wins over every fallback tier
//! 3. A pattern at a reduced tier beats the default for the full locale

use msgcat::PatternStore;
use msgcat_core::{Locale, MessageCode, Pattern};
use proptest::prelude::*;

fn tag_part() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn arbitrary_locale() -> impl Strategy<Value = Locale> {
    (tag_part(), proptest::option::of(tag_part()), proptest::option::of(tag_part())).prop_map(
        |(language, country, variant)| {
            let mut locale = Locale::new(language);
            if let Some(country) = country {
                locale = locale.with_country(country);
            }
            if let Some(variant) = variant {
                locale = locale.with_variant(variant);
            }
            locale
        },
    )
}

proptest! {
    #[test]
    fn resolution_is_total_once_a_default_exists(locale in arbitrary_locale()) {
        let mut store = PatternStore::new();
        let code = MessageCode(7);
        store.set_default(code, Pattern::compile("default"));
        prop_assert!(store.resolve(code, &locale).is_some());
    }

    #[test]
    fn exact_locale_pattern_wins(locale in arbitrary_locale()) {
        let mut store = PatternStore::new();
        let code = MessageCode(7);
        store.set_default(code, Pattern::compile("default"));
        store
            .insert_localized(code, locale.clone(), Pattern::compile("exact"))
            .unwrap();
        prop_assert_eq!(store.resolve(code, &locale).unwrap().source(), "exact");
    }

    #[test]
    fn reduced_tier_pattern_beats_default(locale in arbitrary_locale()) {
        if let Some(reduced) = locale.reduce() {
            let mut store = PatternStore::new();
            let code = MessageCode(7);
            store.set_default(code, Pattern::compile("default"));
            store
                .insert_localized(code, reduced, Pattern::compile("reduced"))
                .unwrap();
            prop_assert_eq!(store.resolve(code, &locale).unwrap().source(), "reduced");
        }
    }
}
