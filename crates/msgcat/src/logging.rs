//! Tracing bridge, available with the `tracing` feature.
//!
//! Re-exports the tracing macros for ergonomic use by catalog hosts and
//! provides [`TracingSink`], a trace sink that forwards internal catalog
//! reports to the active subscriber.

use std::error::Error;

pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

use msgcat_core::Severity;

use crate::source::TraceSink;

/// A [`TraceSink`] that forwards reports to the `tracing` subscriber,
/// mapping [`Severity`] onto tracing levels (`Fatal` maps to `error`).
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn report(&self, severity: Severity, message: &str, cause: Option<&dyn Error>) {
        let cause = cause.map(ToString::to_string).unwrap_or_default();
        let cause = cause.as_str();
        match severity {
            Severity::Trace => trace!(target: "msgcat", cause, "{message}"),
            Severity::Debug => debug!(target: "msgcat", cause, "{message}"),
            Severity::Info => info!(target: "msgcat", cause, "{message}"),
            Severity::Warn => warn!(target: "msgcat", cause, "{message}"),
            Severity::Error | Severity::Fatal => error!(target: "msgcat", cause, "{message}"),
        }
    }
}

/// Install a JSON-formatted subscriber honoring `RUST_LOG`, for production
/// hosts that want structured catalog diagnostics.
#[cfg(feature = "tracing-json")]
pub fn init_json() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
