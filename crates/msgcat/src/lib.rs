#![forbid(unsafe_code)]

//! Process-wide localized message catalog.
//!
//! # Role in msgcat
//! This crate is the catalog layer: it owns the pattern store, the
//! fallback-resolving [`Catalog`], and the collaborator contracts through
//! which definition data arrives and diagnostics leave.
//!
//! # Primary responsibilities
//! - **Catalog**: two-phase bootstrap, idempotent resource loading with
//!   whole-batch commit, overwrite-merge for transferred definitions, and
//!   rendering that never fails.
//! - **PatternStore**: default and locale-keyed patterns, resolved
//!   exact → language+country → language → default.
//! - **Collaborators**: [`ResourceLoader`], [`LocaleProvider`],
//!   [`ActorProvider`], and [`TraceSink`], with JSON-backed and
//!   environment-backed implementations included.
//!
//! # Example
//!
//! ```
//! use msgcat::{CatalogBuilder, CatalogConfig, JsonResourceLoader};
//! use msgcat::source::FixedLocale;
//! use msgcat_core::{Locale, MessageCode};
//!
//! let loader = JsonResourceLoader::new().with_document(
//!     "app",
//!     r#"[{
//!         "code": 5,
//!         "kind": "error",
//!         "default_pattern": "Value {0} is invalid",
//!         "localized": [{ "language": "de", "text": "Wert {0} ist ungültig" }]
//!     }]"#,
//! );
//! let catalog = CatalogBuilder::new()
//!     .with_loader(loader)
//!     .with_locale_provider(FixedLocale(Locale::new("de")))
//!     .with_config(CatalogConfig::default().with_resource("app"))
//!     .bootstrap()
//!     .unwrap();
//!
//! let entry = catalog.entry(MessageCode(5)).unwrap();
//! assert_eq!(catalog.render(&entry, &["7"]), "Wert 7 ist ungültig");
//! ```

pub mod catalog;
pub mod config;
pub mod json_loader;
pub mod source;
pub mod store;

#[cfg(feature = "tracing")]
pub mod logging;

pub use catalog::{BOOTSTRAP_RESOURCE, Catalog, CatalogBuilder, CatalogDefinition};
pub use config::{CatalogConfig, DEFAULT_DIAGNOSTIC_TEMPLATE};
pub use json_loader::JsonResourceLoader;
pub use source::{
    ActorProvider, EnvLocale, FixedActor, FixedLocale, LocaleProvider, LocalizedText, NoActor,
    NullTraceSink, RawDefinition, ResourceLoader, TraceSink,
};
pub use store::PatternStore;

pub use msgcat_core::{
    CatalogError, Locale, MessageCode, MessageEntry, MessageKind, Pattern, Severity,
};
