//! Deterministic on-disk locations for restored packages
//!
//! Pure functions of (package id, version, runtime target); no filesystem
//! access. Package ids are lowercased on disk so that differently-cased
//! references land in the same directory.

use crate::config::ResolverConfig;
use crate::target::RuntimeTarget;
use semver::Version;
use std::path::{Path, PathBuf};

/// Directory inside a package root where the restore step keeps per-package
/// lock data. The runtime dependency manifest is co-located here so cache
/// cleanup tooling finds both by the same convention.
const PACKAGE_STATE_DIR: &str = ".quiver";

/// Root directory of one package version under a cache or fallback root.
pub fn package_root(base: &Path, package_id: &str, version: &Version) -> PathBuf {
    base.join(package_id.to_lowercase()).join(version.to_string())
}

/// All candidate package roots, in search priority order: the global cache
/// first, then the configured fallback roots in declaration order.
pub fn candidate_roots(
    config: &ResolverConfig,
    package_id: &str,
    version: &Version,
) -> Vec<PathBuf> {
    std::iter::once(&config.global_cache_root)
        .chain(config.fallback_roots.iter())
        .map(|base| package_root(base, package_id, version))
        .collect()
}

/// Deterministic path of the runtime dependency manifest for a package.
///
/// Always keyed off the global cache root, independent of which candidate
/// root the assembly was actually found in.
pub fn manifest_path(
    global_cache_root: &Path,
    package_id: &str,
    version: &Version,
    target: RuntimeTarget,
) -> PathBuf {
    package_root(global_cache_root, package_id, version)
        .join(PACKAGE_STATE_DIR)
        .join(target.to_string())
        .join(format!("{}.deps.json", package_id.to_lowercase()))
}
