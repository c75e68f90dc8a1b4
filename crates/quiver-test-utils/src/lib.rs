//! Shared test utilities for the Quiver workspace.
//!
//! Provides the [`ToolFixture`] builder: a temporary project directory plus
//! a temporary package cache, with helpers for writing lock artifacts and
//! installing fake tool assemblies. Dev-dependency only, never published.

use quiver_resolver::{ResolverConfig, RuntimeTarget, ToolCommandRequest};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default moniker fixtures restore tools for.
pub const FIXTURE_TARGET: &str = "rt2.0";

/// A project directory and package cache wired together for resolution tests.
pub struct ToolFixture {
    project: TempDir,
    cache: TempDir,
    fallback: TempDir,
}

impl Default for ToolFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolFixture {
    /// Create empty project and cache directories. No descriptor or lock
    /// artifact is written yet.
    pub fn new() -> Self {
        Self {
            project: TempDir::new().unwrap(),
            cache: TempDir::new().unwrap(),
            fallback: TempDir::new().unwrap(),
        }
    }

    pub fn project_dir(&self) -> &Path {
        self.project.path()
    }

    pub fn cache_root(&self) -> &Path {
        self.cache.path()
    }

    pub fn fallback_root(&self) -> &Path {
        self.fallback.path()
    }

    /// Write the `quiver.toml` project descriptor.
    pub fn write_descriptor(&self) -> &Self {
        fs::write(self.project.path().join("quiver.toml"), "[project]\n").unwrap();
        self
    }

    /// Write a lock artifact restoring one tool package at `version` for
    /// [`FIXTURE_TARGET`], with the conventional entry assembly path.
    pub fn write_lock(&self, package_id: &str, version: &str) -> &Self {
        let entry = Self::entry_rel(package_id);
        self.write_lock_json(serde_json::json!({
            "version": 1,
            "tools": {
                package_id: {
                    "version": version,
                    "hash": "sha512-fixture",
                    "targets": {
                        FIXTURE_TARGET: {
                            "entry": entry.clone(),
                            "assemblies": [entry],
                        }
                    }
                }
            }
        }))
    }

    /// Write an arbitrary lock artifact document.
    pub fn write_lock_json(&self, lock: serde_json::Value) -> &Self {
        let path = self.project.path().join(".quiver/tools.lock.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, serde_json::to_string_pretty(&lock).unwrap()).unwrap();
        self
    }

    /// Conventional entry assembly path for a fixture package.
    pub fn entry_rel(package_id: &str) -> String {
        format!("lib/{FIXTURE_TARGET}/{}.bin", package_id.to_lowercase())
    }

    /// Install the entry assembly under the global cache; returns its path.
    pub fn install_assembly(&self, package_id: &str, version: &str) -> PathBuf {
        self.install_assembly_in(self.cache.path(), package_id, version)
    }

    /// Install the entry assembly under an arbitrary package root base.
    pub fn install_assembly_in(&self, base: &Path, package_id: &str, version: &str) -> PathBuf {
        let path = base
            .join(package_id.to_lowercase())
            .join(version)
            .join(Self::entry_rel(package_id));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"\x7fBIN").unwrap();
        path
    }

    /// Drop a runtime version pin marker next to an installed assembly.
    pub fn write_pin_marker(&self, assembly_path: &Path) {
        fs::write(assembly_path.with_extension("runtime-pin"), b"").unwrap();
    }

    /// Resolver configuration pointing at this fixture's cache and fallback.
    pub fn config(&self) -> ResolverConfig {
        let target = RuntimeTarget::parse(FIXTURE_TARGET).unwrap();
        ResolverConfig::new("/usr/bin/qhost", target, self.cache.path())
            .with_fallback_roots(vec![self.fallback.path().to_path_buf()])
    }

    /// A request for `command_name` issued inside the fixture project.
    pub fn request(&self, command_name: &str, args: &[&str]) -> ToolCommandRequest {
        ToolCommandRequest::new(
            command_name,
            args.iter().map(|a| a.to_string()).collect(),
            self.project.path(),
        )
    }
}
