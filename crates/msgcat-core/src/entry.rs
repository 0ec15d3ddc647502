//! Message identities: codes, kinds, severities, and the immutable entry.
//!
//! A [`MessageEntry`] is an identity object, not a container for text: the
//! pattern text lives in the pattern store, keyed by code and locale. Equality
//! and hashing are by code alone, so two entries with the same code are the
//! same identity regardless of kind or severity.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Globally unique numeric identity of a message entry.
///
/// Codes are assigned by the definition source and immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MessageCode(pub u32);

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discriminates which entry subtype a definition produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MessageKind {
    /// Informational diagnostic text.
    Info,
    /// Error diagnostic text.
    Error,
    /// Plain user-visible text with no diagnostic classification.
    PlainString,
}

/// Severity classification used by the diagnostic kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
    /// Finest-grained diagnostic level.
    Trace,
    /// Developer-facing debug detail.
    Debug,
    /// Normal operational information.
    Info,
    /// Recoverable anomaly.
    Warn,
    /// Failure of the current operation.
    Error,
    /// Unrecoverable process-level failure.
    Fatal,
}

impl Severity {
    /// Parse a severity name case-insensitively.
    ///
    /// Definition sources may omit the severity or leave it blank; both, as
    /// well as any unrecognized name, map to [`Severity::Error`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "fatal" => Self::Fatal,
            _ => Self::Error,
        }
    }

    /// Lowercase name, stable for log output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable message identity: numeric code, kind discriminator, and
/// severity classification.
///
/// Created once when a definition is parsed out of a loaded resource; never
/// mutated; lives for the life of the catalog that owns it.
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageEntry {
    code: MessageCode,
    kind: MessageKind,
    severity: Severity,
}

impl MessageEntry {
    /// Construct an entry identity.
    #[must_use]
    pub fn new(code: MessageCode, kind: MessageKind, severity: Severity) -> Self {
        Self {
            code,
            kind,
            severity,
        }
    }

    /// The unique numeric code.
    #[must_use]
    pub fn code(&self) -> MessageCode {
        self.code
    }

    /// The entry kind.
    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// The severity classification. Meaningful for the diagnostic kinds;
    /// plain strings carry the default.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

// Identity is the code alone: two entries with the same code are the same
// entry, whatever their kind or severity claim.
impl PartialEq for MessageEntry {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for MessageEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}
