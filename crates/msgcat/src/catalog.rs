//! The catalog: bootstrap, resource loading, merge, and rendering.
//!
//! # Invariants
//!
//! 1. **Code uniqueness**: `load_resource` rejects any definition whose code
//!    is already registered. The check and the insert happen under one write
//!    guard, so concurrent loaders cannot both claim a code.
//!
//! 2. **Loads commit whole or not at all**: a resource batch is validated
//!    against committed state (and against itself) before the first insert.
//!    A failed load leaves the catalog exactly as it was, and the resource
//!    name is marked loaded only after full success.
//!
//! 3. **Every registered entry has a default pattern**, so fallback
//!    resolution can only miss for codes the catalog has never seen.
//!
//! 4. **Rendering never fails**: an unknown entry produces a marked fallback
//!    string embedding the raw code and a report through the trace sink.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Bootstrap resource missing | loader has no such name | `bootstrap` returns `Err` |
//! | Configured resource missing | loader has no such name | reported to the sink, startup continues |
//! | Code collision | two resources define one code | second load fails, first entry intact |
//! | Unknown entry rendered | caller-made entry never loaded | fallback string, sink report |

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use msgcat_core::{CatalogError, Locale, MessageCode, MessageEntry, Pattern};
use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::json_loader::JsonResourceLoader;
use crate::source::{
    ActorProvider, EnvLocale, LocaleProvider, NoActor, NullTraceSink, RawDefinition,
    ResourceLoader, TraceSink,
};
use crate::store::PatternStore;

/// Name of the catalog's own definition resource, loaded before any other.
pub const BOOTSTRAP_RESOURCE: &str = "msgcat-bootstrap";

/// Self-referential code: "unknown message code requested".
const UNKNOWN_CODE_REPORT: MessageCode = MessageCode(1);
/// Self-referential code: "resource could not be loaded".
const RESOURCE_LOAD_REPORT: MessageCode = MessageCode(2);
/// Self-referential code: "code already in use".
const CODE_IN_USE_REPORT: MessageCode = MessageCode(3);
/// Self-referential code: "duplicate localization".
const DUPLICATE_LOCALIZATION_REPORT: MessageCode = MessageCode(4);

/// A fully-formed definition for tier transfer: the entry identity, its
/// default pattern text, and every localized override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// The entry identity.
    pub entry: MessageEntry,
    /// Default pattern text.
    pub default_pattern: String,
    /// Localized pattern text per locale.
    pub localized: Vec<(Locale, String)>,
}

/// Entries the catalog's own error paths render. Captured from the bootstrap
/// resource before the catalog is handed out, so internal reporting never
/// has to look itself up through the public surface.
#[derive(Debug, Clone)]
struct SelfCodes {
    unknown_code: MessageEntry,
    resource_load_failed: MessageEntry,
    code_in_use: MessageEntry,
    duplicate_localization: MessageEntry,
}

/// Mutable catalog state, guarded by one lock as a unit.
#[derive(Debug, Default)]
struct CatalogState {
    used_codes: HashSet<MessageCode>,
    entries: HashMap<MessageCode, MessageEntry>,
    store: PatternStore,
    loaded_resources: HashSet<String>,
}

/// The process-wide catalog of localized, code-identified message text.
///
/// Built once at the composition root via [`CatalogBuilder`] and shared by
/// reference (`Arc<Catalog>`); there is no ambient static accessor.
pub struct Catalog {
    state: RwLock<CatalogState>,
    loader: Box<dyn ResourceLoader>,
    locale_provider: Box<dyn LocaleProvider>,
    actor_provider: Box<dyn ActorProvider>,
    trace_sink: Box<dyn TraceSink>,
    diagnostic_locale: Locale,
    diagnostic_template: Pattern,
    self_codes: SelfCodes,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read_state();
        f.debug_struct("Catalog")
            .field("entries", &state.entries.len())
            .field("loaded_resources", &state.loaded_resources.len())
            .field("diagnostic_locale", &self.diagnostic_locale)
            .finish_non_exhaustive()
    }
}

/// Two-phase constructor for [`Catalog`].
///
/// Defaults: the embedded-JSON loader, the environment locale provider, no
/// actor, and a discarding trace sink.
pub struct CatalogBuilder {
    config: CatalogConfig,
    loader: Box<dyn ResourceLoader>,
    locale_provider: Box<dyn LocaleProvider>,
    actor_provider: Box<dyn ActorProvider>,
    trace_sink: Box<dyn TraceSink>,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    /// Start from defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::default(),
            loader: Box::new(JsonResourceLoader::new()),
            locale_provider: Box::new(EnvLocale),
            actor_provider: Box::new(NoActor),
            trace_sink: Box::new(NullTraceSink),
        }
    }

    /// Set the catalog configuration.
    #[must_use]
    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the resource loader.
    #[must_use]
    pub fn with_loader(mut self, loader: impl ResourceLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    /// Set the active-locale provider for user-facing rendering.
    #[must_use]
    pub fn with_locale_provider(mut self, provider: impl LocaleProvider + 'static) -> Self {
        self.locale_provider = Box::new(provider);
        self
    }

    /// Set the actor provider for diagnostic rendering.
    #[must_use]
    pub fn with_actor_provider(mut self, provider: impl ActorProvider + 'static) -> Self {
        self.actor_provider = Box::new(provider);
        self
    }

    /// Set the sink for internal catalog reports.
    #[must_use]
    pub fn with_trace_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.trace_sink = Box::new(sink);
        self
    }

    /// Build the catalog.
    ///
    /// Phase one loads the bootstrap resource and captures the
    /// self-referential codes locally; any failure there is fatal. Phase two
    /// loads each configured resource; failures there are reported through
    /// the trace sink and startup continues without that resource's entries.
    ///
    /// # Errors
    ///
    /// Loader failures for the bootstrap resource, and
    /// `BootstrapIncomplete` when the bootstrap resource lacks a code the
    /// catalog's own error paths need.
    pub fn bootstrap(self) -> Result<Catalog, CatalogError> {
        let definitions = self.loader.load(BOOTSTRAP_RESOURCE)?;

        let mut state = CatalogState::default();
        Catalog::commit_resource(&mut state, BOOTSTRAP_RESOURCE, &definitions)?;

        // Capture the self codes from the state we just built, not through
        // any public lookup: the catalog does not exist yet.
        let self_codes = SelfCodes {
            unknown_code: Self::capture(&state, UNKNOWN_CODE_REPORT)?,
            resource_load_failed: Self::capture(&state, RESOURCE_LOAD_REPORT)?,
            code_in_use: Self::capture(&state, CODE_IN_USE_REPORT)?,
            duplicate_localization: Self::capture(&state, DUPLICATE_LOCALIZATION_REPORT)?,
        };

        let catalog = Catalog {
            state: RwLock::new(state),
            loader: self.loader,
            locale_provider: self.locale_provider,
            actor_provider: self.actor_provider,
            trace_sink: self.trace_sink,
            diagnostic_locale: self.config.diagnostic_locale.clone(),
            diagnostic_template: Pattern::compile(&self.config.diagnostic_template),
            self_codes,
        };

        for name in &self.config.resources {
            if let Err(err) = catalog.load_resource(name) {
                catalog.report_load_failure(name, &err);
            }
        }

        Ok(catalog)
    }

    fn capture(state: &CatalogState, code: MessageCode) -> Result<MessageEntry, CatalogError> {
        state
            .entries
            .get(&code)
            .cloned()
            .ok_or(CatalogError::BootstrapIncomplete { code })
    }
}

impl Catalog {
    fn read_state(&self) -> RwLockReadGuard<'_, CatalogState> {
        // A poisoned lock means a panic elsewhere mid-write; commits are
        // staged, so the state is still internally consistent.
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load a named resource through the configured loader.
    ///
    /// Idempotent: a name that is already loaded returns `Ok` without
    /// reprocessing (the same resource can legitimately be requested more
    /// than once in multi-tier deployments). The batch commits whole or not
    /// at all.
    ///
    /// # Errors
    ///
    /// Loader failures, `CodeInUse` for a code collision, and
    /// `DuplicateLocalization` for a doubled (entry, locale) pair.
    pub fn load_resource(&self, name: &str) -> Result<(), CatalogError> {
        if self.is_loaded(name) {
            return Ok(());
        }

        // Loader I/O happens outside the lock; the idempotency check is
        // repeated under the write guard before committing.
        let definitions = self.loader.load(name)?;

        let mut state = self.write_state();
        if state.loaded_resources.contains(name) {
            return Ok(());
        }
        Self::commit_resource(&mut state, name, &definitions)
    }

    /// Validate a whole batch against committed state, then insert it.
    /// Holding the write guard across both halves is what makes
    /// check-then-insert atomic for concurrent loaders.
    fn commit_resource(
        state: &mut CatalogState,
        name: &str,
        definitions: &[RawDefinition],
    ) -> Result<(), CatalogError> {
        let mut staged: Vec<(MessageEntry, Pattern, Vec<(Locale, Pattern)>)> =
            Vec::with_capacity(definitions.len());
        let mut batch_codes: HashSet<MessageCode> = HashSet::new();

        for definition in definitions {
            let entry = definition.entry();
            let code = entry.code();
            if state.used_codes.contains(&code) || !batch_codes.insert(code) {
                return Err(CatalogError::CodeInUse { code });
            }

            let mut seen_locales: HashSet<Locale> = HashSet::new();
            let mut localized = Vec::with_capacity(definition.localized.len());
            for text in &definition.localized {
                let locale =
                    text.locale()
                        .ok_or_else(|| CatalogError::MalformedResource {
                            name: name.to_string(),
                            detail: format!(
                                "definition {code} has a localized override with an empty language"
                            ),
                        })?;
                if !seen_locales.insert(locale.clone()) {
                    return Err(CatalogError::DuplicateLocalization { code, locale });
                }
                localized.push((locale, Pattern::compile(&text.text)));
            }

            staged.push((entry, Pattern::compile(&definition.default_pattern), localized));
        }

        for (entry, default_pattern, localized) in staged {
            let code = entry.code();
            state.used_codes.insert(code);
            state.entries.insert(code, entry);
            state.store.set_default(code, default_pattern);
            for (locale, pattern) in localized {
                // Vacancy was proven during staging.
                state.store.replace_localized(code, locale, pattern);
            }
        }
        state.loaded_resources.insert(name.to_string());
        Ok(())
    }

    /// Merge fully-formed definitions from outside the resource-loading
    /// path, e.g. received from a remote tier.
    ///
    /// Unlike [`Catalog::load_resource`] this overwrites existing codes
    /// instead of rejecting them: it is the refresh mechanism for
    /// previously transferred catalogs. An incoming definition replaces the
    /// target code's patterns wholesale.
    pub fn merge_external(&self, definitions: Vec<CatalogDefinition>) {
        let mut state = self.write_state();
        for definition in definitions {
            let code = definition.entry.code();
            state.used_codes.insert(code);
            state.entries.insert(code, definition.entry);
            state.store.remove_code(code);
            state
                .store
                .set_default(code, Pattern::compile(&definition.default_pattern));
            for (locale, text) in definition.localized {
                state
                    .store
                    .replace_localized(code, locale, Pattern::compile(&text));
            }
        }
    }

    /// Whether a resource name has already been loaded.
    #[must_use]
    pub fn is_loaded(&self, name: &str) -> bool {
        self.read_state().loaded_resources.contains(name)
    }

    /// Look up the entry registered under a code.
    ///
    /// # Errors
    ///
    /// `UnknownCode` when no entry carries the code.
    pub fn entry(&self, code: MessageCode) -> Result<MessageEntry, CatalogError> {
        self.read_state()
            .entries
            .get(&code)
            .cloned()
            .ok_or(CatalogError::UnknownCode { code })
    }

    /// Whether a code is registered.
    #[must_use]
    pub fn contains(&self, code: MessageCode) -> bool {
        self.read_state().used_codes.contains(&code)
    }

    /// Every registered entry, sorted by code.
    #[must_use]
    pub fn entries(&self) -> Vec<MessageEntry> {
        let state = self.read_state();
        let mut entries: Vec<MessageEntry> = state.entries.values().cloned().collect();
        entries.sort_by_key(MessageEntry::code);
        entries
    }

    /// Every registered definition with its pattern text, sorted by code,
    /// for transfer to another tier.
    #[must_use]
    pub fn definitions(&self) -> Vec<CatalogDefinition> {
        let state = self.read_state();
        let mut codes: Vec<MessageCode> = state.entries.keys().copied().collect();
        codes.sort_unstable();

        let mut out = Vec::with_capacity(codes.len());
        for code in codes {
            let Some(entry) = state.entries.get(&code) else {
                continue;
            };
            let Some(default) = state.store.default_for(code) else {
                continue;
            };
            out.push(CatalogDefinition {
                entry: entry.clone(),
                default_pattern: default.source().to_string(),
                localized: state
                    .store
                    .localized_for(code)
                    .into_iter()
                    .map(|(locale, pattern)| (locale, pattern.source().to_string()))
                    .collect(),
            });
        }
        out
    }

    /// Render an entry with the active locale and positional parameters.
    ///
    /// Never fails: an entry the catalog does not know produces a marked
    /// fallback string embedding the raw code, and the miss is reported
    /// through the trace sink.
    #[must_use]
    pub fn render(&self, entry: &MessageEntry, params: &[&str]) -> String {
        self.render_for_locale(entry, &self.locale_provider.active_locale(), params)
    }

    /// Render an entry for an explicit locale. The shared core of the user
    /// and diagnostic renderings.
    #[must_use]
    pub fn render_for_locale(&self, entry: &MessageEntry, locale: &Locale, params: &[&str]) -> String {
        let resolved = {
            let state = self.read_state();
            state.store.resolve(entry.code(), locale).cloned()
        };
        match resolved {
            Some(pattern) => pattern.fill(params),
            None => {
                self.report_unknown(entry.code());
                format!("<unknown message code {}>", entry.code())
            }
        }
    }

    /// Render an entry with the configured diagnostic locale, then wrap the
    /// result in the diagnostic template with the code and the current actor
    /// (blank when there is none). The template step is output policy; the
    /// fallback search itself is identical to [`Catalog::render`].
    #[must_use]
    pub fn render_diagnostic(&self, entry: &MessageEntry, params: &[&str]) -> String {
        let message = self.render_for_locale(entry, &self.diagnostic_locale, params);
        let actor = self.actor_provider.current_actor().unwrap_or_default();
        self.diagnostic_template
            .fill(&[&entry.code().to_string(), &message, &actor])
    }

    /// Report an unknown-code miss through the trace sink, rendered with the
    /// self entry captured at bootstrap. That entry is guaranteed present,
    /// so this cannot recurse.
    fn report_unknown(&self, code: MessageCode) {
        let report =
            self.render_diagnostic(&self.self_codes.unknown_code, &[&code.to_string()]);
        let cause = CatalogError::UnknownCode { code };
        self.trace_sink
            .report(self.self_codes.unknown_code.severity(), &report, Some(&cause));
    }

    /// Report a failed post-bootstrap resource load through the trace sink.
    /// Registration conflicts render their dedicated self entries; every
    /// other failure renders the generic resource-load entry.
    fn report_load_failure(&self, name: &str, err: &CatalogError) {
        let (entry, report) = match err {
            CatalogError::CodeInUse { code } => {
                let entry = &self.self_codes.code_in_use;
                (entry, self.render_diagnostic(entry, &[&code.to_string()]))
            }
            CatalogError::DuplicateLocalization { code, locale } => {
                let entry = &self.self_codes.duplicate_localization;
                (
                    entry,
                    self.render_diagnostic(entry, &[&code.to_string(), &locale.to_string()]),
                )
            }
            _ => {
                let entry = &self.self_codes.resource_load_failed;
                (entry, self.render_diagnostic(entry, &[name, &err.to_string()]))
            }
        };
        self.trace_sink.report(entry.severity(), &report, Some(err));
    }
}
