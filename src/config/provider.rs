//! File-backed prompt provider.
//!
//! Loads `prompts.yaml` from the configured tiers, merges them, and serves
//! lookups by path. Mirrors the external config service contract: given a
//! path and a fallback, return the configured value or the fallback.

use super::merge::merge_tiers;
use super::paths::ConfigPaths;
use crate::error::{ProviderError, ProviderResult};
use crate::resolver::PromptProvider;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Prompt provider backed by merged `prompts.yaml` tiers.
///
/// The merged tree is loaded once at construction; lookups afterwards are
/// pure walks over the in-memory tree.
#[derive(Debug, Clone)]
pub struct FilePromptProvider {
    values: Value,
}

impl FilePromptProvider {
    /// Build a provider by discovering tier files from the environment.
    ///
    /// Returns [`ProviderError::Unavailable`] when no prompts file exists in
    /// any tier, which callers negative-cache.
    pub fn discover() -> ProviderResult<Self> {
        Self::discover_with(&ConfigPaths::discover())
    }

    /// Build a provider from explicit tier paths.
    pub fn discover_with(paths: &ConfigPaths) -> ProviderResult<Self> {
        // An explicit file bypasses tier merging entirely, and unlike the
        // tiers its errors propagate: the operator asked for this file.
        if let Some(file) = paths.explicit_file() {
            return Self::from_path(file);
        }

        let mut tiers = Vec::new();
        for file in paths.prompts_files() {
            if !file.exists() {
                continue;
            }
            match load_yaml(&file) {
                Ok(value) => tiers.push(value),
                Err(err) => {
                    warn!(file = %file.display(), "skipping unreadable prompts file: {err}");
                }
            }
        }

        if tiers.is_empty() {
            return Err(ProviderError::Unavailable);
        }

        debug!(tiers = tiers.len(), "loaded prompts config");
        Ok(Self {
            values: merge_tiers(tiers),
        })
    }

    /// Build a provider from a single prompts file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ProviderResult<Self> {
        Ok(Self {
            values: load_yaml(path.as_ref())?,
        })
    }

    /// Build a provider from an already-parsed config tree.
    pub fn from_value(values: Value) -> Self {
        Self { values }
    }

    /// Walk the merged tree by path segments.
    fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let mut current = &self.values;
        for segment in path {
            current = current.as_object()?.get(*segment)?;
        }
        Some(current)
    }
}

#[async_trait]
impl PromptProvider for FilePromptProvider {
    async fn get(&self, path: &[&str], fallback: &str) -> anyhow::Result<String> {
        match self.lookup(path) {
            Some(Value::String(s)) => Ok(s.clone()),
            // Absent or explicitly null means "not configured".
            None | Some(Value::Null) => Ok(fallback.to_string()),
            Some(_) => Err(ProviderError::malformed(path).into()),
        }
    }
}

/// Read and parse a YAML file into a JSON value tree.
///
/// Empty and comment-only files parse as null.
fn load_yaml(path: &Path) -> ProviderResult<Value> {
    let content = std::fs::read_to_string(path)?;
    let value: Option<Value> = serde_yaml::from_str(&content)?;
    Ok(value.unwrap_or(Value::Null))
}
