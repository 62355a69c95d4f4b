//! Lazy prompt resolution with fallback.
//!
//! [`Resolver`] answers "give me the prompt at this config path, or this
//! default" without ever failing: the provider behind it is optional, loaded
//! at most once, and every error on the way degrades to the fallback.
//!
//! The provider is built by a [`ProviderFactory`] on first use. A failed
//! build is negative-cached: the resolver remembers that no provider exists
//! and answers all later calls from the fallback without re-probing. There is
//! deliberately no invalidation on the global resolver; a long-running
//! process should not repeat an expensive doomed load, even at the cost of
//! never noticing a provider that appears later.

use crate::config::FilePromptProvider;
use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// Source of prompt values, keyed by a path of string segments.
///
/// Contract: `get(path, fallback)` returns the configured value at `path`,
/// or `fallback` when the path is simply not configured. Errors are reserved
/// for a broken provider (unreadable store, malformed value) and are absorbed
/// by the resolver.
#[async_trait]
pub trait PromptProvider: Send + Sync {
    async fn get(&self, path: &[&str], fallback: &str) -> anyhow::Result<String>;
}

/// One-shot construction of a [`PromptProvider`].
///
/// `Err` means the provider is unavailable in this environment; the resolver
/// negative-caches that outcome and never calls `load` again.
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    async fn load(&self) -> anyhow::Result<Box<dyn PromptProvider>>;
}

/// Memoizing prompt resolver.
///
/// Holds at most one provider, built lazily by the factory. The cache slot is
/// a lock-free swap cell: concurrent first calls may race, and the last
/// writer wins, which is harmless because the factory builds the same
/// provider either way.
pub struct Resolver {
    factory: Box<dyn ProviderFactory>,
    provider: ArcSwapOption<Box<dyn PromptProvider>>,
    load_attempted: AtomicBool,
}

impl Resolver {
    /// Create a resolver with its own fresh state.
    pub fn new(factory: impl ProviderFactory + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            provider: ArcSwapOption::empty(),
            load_attempted: AtomicBool::new(false),
        }
    }

    /// Resolve the prompt at `path`, degrading to `fallback` on any failure.
    ///
    /// Never errors and never panics; this is the whole point of the type.
    pub async fn resolve(&self, path: &[&str], fallback: &str) -> String {
        if let Some(provider) = self.provider.load_full() {
            return self.invoke(&provider, path, fallback).await;
        }

        // The flag goes up before the probe resolves: one probe per resolver
        // lifetime, never a retry. Callers arriving mid-probe get the
        // fallback rather than waiting.
        if self.load_attempted.swap(true, Ordering::SeqCst) {
            return fallback.to_string();
        }

        match self.factory.load().await {
            Ok(provider) => {
                let provider = Arc::new(provider);
                self.provider.store(Some(Arc::clone(&provider)));
                self.invoke(&provider, path, fallback).await
            }
            Err(err) => {
                debug!("prompt provider unavailable, using fallbacks: {err:#}");
                fallback.to_string()
            }
        }
    }

    /// Whether a provider is currently cached.
    pub fn has_provider(&self) -> bool {
        self.provider.load().is_some()
    }

    async fn invoke(
        &self,
        provider: &Arc<Box<dyn PromptProvider>>,
        path: &[&str],
        fallback: &str,
    ) -> String {
        match provider.get(path, fallback).await {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    path = %path.join("."),
                    "prompt provider failed, using fallback: {err:#}"
                );
                fallback.to_string()
            }
        }
    }
}

/// Factory used by the global resolver: discover `prompts.yaml` tiers.
struct DiscoverFactory;

#[async_trait]
impl ProviderFactory for DiscoverFactory {
    async fn load(&self) -> anyhow::Result<Box<dyn PromptProvider>> {
        let provider = FilePromptProvider::discover()?;
        Ok(Box::new(provider))
    }
}

static GLOBAL_RESOLVER: OnceLock<Resolver> = OnceLock::new();

/// The process-wide resolver, wired to file-backed discovery.
///
/// Initialized on first use and never reset. Embedders needing fresh state
/// (tests, multiple configs in one process) construct a [`Resolver`] of
/// their own instead.
pub fn resolver() -> &'static Resolver {
    GLOBAL_RESOLVER.get_or_init(|| Resolver::new(DiscoverFactory))
}

/// Resolve a configured prompt with a hardcoded fallback.
///
/// Convenience over [`resolver()`]; this is the entry point application code
/// normally uses.
pub async fn get_prompt(path: &[&str], fallback: &str) -> String {
    resolver().resolve(path, fallback).await
}
