//! Resolver configuration
//!
//! All environment-dependent inputs are passed in explicitly here; reading
//! environment variables or config files happens only at the outermost
//! boundary (the CLI), which builds one of these values.

use crate::target::RuntimeTarget;
use std::path::PathBuf;

/// Configuration a resolver is constructed with.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Path (or bare name) of the shared host runtime launcher.
    pub host_launcher: PathBuf,
    /// Runtime target of the host, used to select a compatible package target.
    pub host_runtime: RuntimeTarget,
    /// Global packages cache root, always the first candidate searched.
    pub global_cache_root: PathBuf,
    /// Fallback package roots, searched after the cache in declaration order.
    pub fallback_roots: Vec<PathBuf>,
}

impl ResolverConfig {
    pub fn new(
        host_launcher: impl Into<PathBuf>,
        host_runtime: RuntimeTarget,
        global_cache_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host_launcher: host_launcher.into(),
            host_runtime,
            global_cache_root: global_cache_root.into(),
            fallback_roots: Vec::new(),
        }
    }

    /// Set the fallback package roots (builder pattern).
    pub fn with_fallback_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.fallback_roots = roots;
        self
    }
}
