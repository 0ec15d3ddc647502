//! JSON-backed resource loader.
//!
//! Resources are JSON arrays of definitions, registered by name as embedded
//! documents or read from files. The loader pre-seeds the catalog's own
//! bootstrap resource so a freshly built loader can always bootstrap a
//! catalog.

use std::collections::HashMap;
use std::path::Path;

use msgcat_core::CatalogError;

use crate::catalog::BOOTSTRAP_RESOURCE;
use crate::source::{RawDefinition, ResourceLoader};

/// The catalog's own definition document, compiled into the binary.
const BOOTSTRAP_DOCUMENT: &str = include_str!("../resources/bootstrap.json");

/// A [`ResourceLoader`] over named JSON documents.
#[derive(Debug, Clone)]
pub struct JsonResourceLoader {
    documents: HashMap<String, String>,
}

impl Default for JsonResourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonResourceLoader {
    /// Create a loader holding only the embedded bootstrap document.
    #[must_use]
    pub fn new() -> Self {
        let mut documents = HashMap::new();
        documents.insert(BOOTSTRAP_RESOURCE.to_string(), BOOTSTRAP_DOCUMENT.to_string());
        Self { documents }
    }

    /// Register a JSON document under a resource name. Replaces any document
    /// previously registered under the same name.
    #[must_use]
    pub fn with_document(mut self, name: impl Into<String>, json: impl Into<String>) -> Self {
        self.documents.insert(name.into(), json.into());
        self
    }

    /// Register a JSON file's contents under a resource name.
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when the file cannot be read.
    pub fn with_file(
        self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let json = std::fs::read_to_string(path.as_ref()).map_err(|_| {
            CatalogError::ResourceNotFound { name: name.clone() }
        })?;
        Ok(self.with_document(name, json))
    }

    /// Names of every registered document, including the bootstrap resource.
    #[must_use]
    pub fn resource_names(&self) -> Vec<&str> {
        self.documents.keys().map(String::as_str).collect()
    }
}

impl ResourceLoader for JsonResourceLoader {
    fn load(&self, name: &str) -> Result<Vec<RawDefinition>, CatalogError> {
        let json = self
            .documents
            .get(name)
            .ok_or_else(|| CatalogError::ResourceNotFound {
                name: name.to_string(),
            })?;
        serde_json::from_str(json).map_err(|err| CatalogError::MalformedResource {
            name: name.to_string(),
            detail: err.to_string(),
        })
    }
}
