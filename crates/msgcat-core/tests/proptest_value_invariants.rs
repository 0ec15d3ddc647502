//! Property-based invariant tests for locale reduction and pattern filling:
//!
//! 1. Reduction terminates — every locale exhausts within two steps
//! 2. Reduction strictly shrinks — each step drops exactly one field
//! 3. Fill never panics — arbitrary templates and params render
//! 4. Fill without placeholders is identity

use msgcat_core::{Locale, Pattern};
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
    fn reduction_terminates_within_two_steps(locale in arbitrary_locale()) {
        let mut cursor = Some(locale);
        let mut steps = 0;
        while let Some(current) = cursor {
            cursor = current.reduce();
            steps += 1;
            prop_assert!(steps <= 3, "reduction chain did not terminate");
        }
    }

    #[test]
    fn reduction_strictly_shrinks(locale in arbitrary_locale()) {
        if let Some(reduced) = locale.reduce() {
            let before = [locale.country(), locale.variant()]
                .iter()
                .filter(|f| !f.is_empty())
                .count();
            let after = [reduced.country(), reduced.variant()]
                .iter()
                .filter(|f| !f.is_empty())
                .count();
            prop_assert_eq!(after + 1, before);
            prop_assert_eq!(locale.language(), reduced.language());
        } else {
            prop_assert!(locale.country().is_empty());
            prop_assert!(locale.variant().is_empty());
        }
    }

    #[test]
    fn fill_never_panics(template in ".{0,120}", params in proptest::collection::vec(".{0,20}", 0..4)) {
        let pattern = Pattern::compile(&template);
        let borrowed: Vec<&str> = params.iter().map(String::as_str).collect();
        let _ = pattern.fill(&borrowed);
    }

    #[test]
    fn fill_without_placeholders_is_identity(template in "[^{}]{0,120}") {
        let pattern = Pattern::compile(&template);
        prop_assert_eq!(pattern.fill(&["x", "y"]), template);
    }
}
