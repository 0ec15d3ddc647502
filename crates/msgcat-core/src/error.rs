//! Error taxonomy for catalog registration, lookup, and loading.

use std::fmt;

use crate::entry::MessageCode;
use crate::locale::Locale;

/// Errors from catalog operations.
///
/// Registration conflicts are fatal to the load call that raises them but
/// never corrupt state committed by earlier, completed loads. Unknown-code
/// lookups are typed failures from `entry()`; rendering swallows them and
/// reports through the trace sink instead.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// A definition re-used a code that an earlier load already registered.
    CodeInUse {
        /// The colliding code.
        code: MessageCode,
    },
    /// One resource supplied two patterns for the same (entry, locale) pair.
    DuplicateLocalization {
        /// The entry's code.
        code: MessageCode,
        /// The locale defined twice.
        locale: Locale,
    },
    /// A lookup referenced a code that was never registered.
    UnknownCode {
        /// The unregistered code.
        code: MessageCode,
    },
    /// The resource loader could not find a named resource.
    ResourceNotFound {
        /// The requested resource name.
        name: String,
    },
    /// The resource loader found the resource but could not parse it.
    MalformedResource {
        /// The requested resource name.
        name: String,
        /// Loader-specific detail.
        detail: String,
    },
    /// The bootstrap resource is missing a code the catalog's own error
    /// paths depend on.
    BootstrapIncomplete {
        /// The missing self-referential code.
        code: MessageCode,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeInUse { code } => {
                write!(f, "message code {code} is already in use")
            }
            Self::DuplicateLocalization { code, locale } => {
                write!(
                    f,
                    "duplicate localization for code {code} and locale {locale}"
                )
            }
            Self::UnknownCode { code } => {
                write!(f, "unknown message code {code}")
            }
            Self::ResourceNotFound { name } => {
                write!(f, "message resource '{name}' not found")
            }
            Self::MalformedResource { name, detail } => {
                write!(f, "message resource '{name}' is malformed: {detail}")
            }
            Self::BootstrapIncomplete { code } => {
                write!(f, "bootstrap resource is missing required code {code}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_embeds_the_offending_code() {
        let err = CatalogError::CodeInUse {
            code: MessageCode(42),
        };
        assert!(err.to_string().contains("42"));

        let err = CatalogError::UnknownCode {
            code: MessageCode(999),
        };
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn display_embeds_the_locale() {
        let err = CatalogError::DuplicateLocalization {
            code: MessageCode(5),
            locale: Locale::new("de").with_country("AT"),
        };
        let text = err.to_string();
        assert!(text.contains('5'));
        assert!(text.contains("de-AT"));
    }
}
