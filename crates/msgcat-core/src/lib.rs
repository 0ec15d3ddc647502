#![forbid(unsafe_code)]

//! Core value types for the msgcat message catalog.
//!
//! # Role in msgcat
//! `msgcat-core` holds the leaf types the catalog is built from: the
//! three-part [`Locale`] fallback key, the numeric [`MessageCode`] identity,
//! the immutable [`MessageEntry`], compiled positional [`Pattern`] templates,
//! and the [`CatalogError`] taxonomy.
//!
//! # How it fits in the system
//! The `msgcat` crate layers the pattern store, the catalog, and the
//! collaborator contracts on top of these types. Everything here is a plain
//! value with no locking, no I/O, and no global state, so the fallback and
//! interpolation semantics can be tested in isolation.

pub mod entry;
pub mod error;
pub mod locale;
pub mod pattern;

pub use entry::{MessageCode, MessageEntry, MessageKind, Severity};
pub use error::CatalogError;
pub use locale::Locale;
pub use pattern::Pattern;
