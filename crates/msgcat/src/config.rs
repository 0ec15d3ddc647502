//! Catalog configuration.

use msgcat_core::Locale;

/// Default template for diagnostic renderings: `{0}` is the numeric code,
/// `{1}` the resolved message, `{2}` the actor name (blank when absent).
pub const DEFAULT_DIAGNOSTIC_TEMPLATE: &str = "[{0}] {1} (actor: {2})";

/// Configuration for catalog bootstrap and diagnostic rendering.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Additional resources to load after the bootstrap resource, in order.
    pub resources: Vec<String>,
    /// The fixed locale used for diagnostic renderings.
    pub diagnostic_locale: Locale,
    /// Output template for diagnostic renderings; three positional
    /// placeholders (code, message, actor).
    pub diagnostic_template: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            resources: Vec::new(),
            diagnostic_locale: Locale::new("en"),
            diagnostic_template: DEFAULT_DIAGNOSTIC_TEMPLATE.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Append one resource name to load after bootstrap.
    #[must_use]
    pub fn with_resource(mut self, name: impl Into<String>) -> Self {
        self.resources.push(name.into());
        self
    }

    /// Replace the full list of resources to load after bootstrap.
    #[must_use]
    pub fn with_resources<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the locale used for diagnostic renderings.
    #[must_use]
    pub fn with_diagnostic_locale(mut self, locale: Locale) -> Self {
        self.diagnostic_locale = locale;
        self
    }

    /// Set the diagnostic output template.
    #[must_use]
    pub fn with_diagnostic_template(mut self, template: impl Into<String>) -> Self {
        self.diagnostic_template = template.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_resources() {
        let config = CatalogConfig::default();
        assert!(config.resources.is_empty());
        assert_eq!(config.diagnostic_locale, Locale::new("en"));
    }

    #[test]
    fn with_resources_replaces_the_list() {
        let config = CatalogConfig::default()
            .with_resource("stale")
            .with_resources(["app-errors", "app-ui"]);
        assert_eq!(config.resources, vec!["app-errors", "app-ui"]);
    }

    #[test]
    fn builders_accumulate() {
        let config = CatalogConfig::default()
            .with_resource("app-errors")
            .with_resource("app-ui")
            .with_diagnostic_locale(Locale::new("de"))
            .with_diagnostic_template("{0}|{1}|{2}");
        assert_eq!(config.resources, vec!["app-errors", "app-ui"]);
        assert_eq!(config.diagnostic_locale, Locale::new("de"));
        assert_eq!(config.diagnostic_template, "{0}|{1}|{2}");
    }
}
