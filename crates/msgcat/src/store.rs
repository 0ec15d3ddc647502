//! Pattern store: default and locale-keyed patterns with fallback resolve.
//!
//! # Invariants
//!
//! 1. **At most one localized pattern per (code, locale) pair**: the insert
//!    path rejects a second pattern for an occupied pair; only the explicit
//!    replace path (used by the merge-overwrite flow) may displace one.
//!
//! 2. **Defaults are a separate namespace**: keyed by code alone, overwritten
//!    freely per the resource-merge rules.
//!
//! 3. **Resolution order is exact → language+country → language → default**,
//!    driven entirely by [`Locale::reduce`]; no platform default locale
//!    participates.

use std::collections::HashMap;

use msgcat_core::{CatalogError, Locale, MessageCode, Pattern};

/// Holds, per message code, one default pattern and zero or more
/// locale-specific patterns.
#[derive(Debug, Default)]
pub struct PatternStore {
    defaults: HashMap<MessageCode, Pattern>,
    localized: HashMap<Locale, HashMap<MessageCode, Pattern>>,
}

impl PatternStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default pattern for a code. Overwrites silently; the default
    /// slot is not conflict-checked.
    pub fn set_default(&mut self, code: MessageCode, pattern: Pattern) {
        self.defaults.insert(code, pattern);
    }

    /// Insert a localized pattern.
    ///
    /// # Errors
    ///
    /// `DuplicateLocalization` when the (code, locale) pair is already
    /// occupied.
    pub fn insert_localized(
        &mut self,
        code: MessageCode,
        locale: Locale,
        pattern: Pattern,
    ) -> Result<(), CatalogError> {
        let per_locale = self.localized.entry(locale.clone()).or_default();
        if per_locale.contains_key(&code) {
            return Err(CatalogError::DuplicateLocalization { code, locale });
        }
        per_locale.insert(code, pattern);
        Ok(())
    }

    /// Insert or replace a localized pattern. Used by the merge-overwrite
    /// flow, which refreshes transferred catalogs instead of rejecting them.
    pub fn replace_localized(&mut self, code: MessageCode, locale: Locale, pattern: Pattern) {
        self.localized.entry(locale).or_default().insert(code, pattern);
    }

    /// Remove every pattern (default and localized) registered for a code.
    pub fn remove_code(&mut self, code: MessageCode) {
        self.defaults.remove(&code);
        for per_locale in self.localized.values_mut() {
            per_locale.remove(&code);
        }
        self.localized.retain(|_, per_locale| !per_locale.is_empty());
    }

    /// The default pattern for a code, if the code is registered.
    #[must_use]
    pub fn default_for(&self, code: MessageCode) -> Option<&Pattern> {
        self.defaults.get(&code)
    }

    /// Every localized pattern registered for a code, for tier transfer.
    #[must_use]
    pub fn localized_for(&self, code: MessageCode) -> Vec<(Locale, &Pattern)> {
        let mut found: Vec<(Locale, &Pattern)> = self
            .localized
            .iter()
            .filter_map(|(locale, per_locale)| {
                per_locale.get(&code).map(|p| (locale.clone(), p))
            })
            .collect();
        found.sort_by(|(a, _), (b, _)| a.to_string().cmp(&b.to_string()));
        found
    }

    /// Resolve the best pattern for a code and locale.
    ///
    /// Walks the exact locale, then each reduction step, then the default
    /// map. Returns `None` only when the code has no default pattern, i.e.
    /// the code is unknown to the store; reduction exhaustion itself is the
    /// designed hand-off to the default, not a miss.
    #[must_use]
    pub fn resolve(&self, code: MessageCode, locale: &Locale) -> Option<&Pattern> {
        let mut cursor = Some(locale.clone());
        while let Some(current) = cursor {
            if let Some(pattern) = self.localized.get(&current).and_then(|m| m.get(&code)) {
                return Some(pattern);
            }
            cursor = current.reduce();
        }
        self.defaults.get(&code)
    }
}
