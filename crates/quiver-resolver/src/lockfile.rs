//! Restore lock artifact reader (external boundary)
//!
//! The restore step pins exact package versions and records, per runtime
//! target, the resolved assembly file paths for each tool. This module only
//! reads that artifact; it never writes it and never resolves version
//! ranges. Absence of the lock, of the package, or of a compatible target
//! is ordinary no-match, not an error.

use crate::target::RuntimeTarget;
use semver::Version;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Lock artifact location, relative to the project directory.
pub const LOCK_FILE_REL: &str = ".quiver/tools.lock.json";

/// Top-level lock artifact document.
#[derive(Debug, Clone, Deserialize)]
pub struct LockFile {
    pub version: u32,
    #[serde(default)]
    pub tools: BTreeMap<String, LockedTool>,
}

/// One restored tool package.
#[derive(Debug, Clone, Deserialize)]
pub struct LockedTool {
    pub version: Version,
    /// Content hash recorded by the restore step (e.g. `sha512-…`).
    pub hash: String,
    /// Dependency groups keyed by runtime target moniker.
    #[serde(default)]
    pub targets: BTreeMap<String, TargetGroup>,
}

/// Resolved files for one runtime target of a package.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetGroup {
    /// Entry assembly path, relative to the package root.
    pub entry: String,
    #[serde(default)]
    pub assemblies: Vec<String>,
    /// Localized resource assemblies.
    #[serde(default)]
    pub resources: Vec<ResourceAssembly>,
    /// Transitive dependencies needed to load the entry assembly.
    #[serde(default)]
    pub dependencies: Vec<LockedDependency>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceAssembly {
    pub locale: String,
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LockedDependency {
    pub name: String,
    pub version: Version,
    pub hash: String,
    #[serde(default)]
    pub files: Vec<String>,
}

/// A tool package as pinned by the restore graph, with the target group
/// selected for the host runtime. Immutable once produced.
#[derive(Debug, Clone)]
pub struct RestoredToolEntry {
    /// Canonical package identity as declared in the lock file. May differ
    /// in casing from the identity derived from the typed command.
    pub package_id: String,
    pub version: Version,
    pub target: RuntimeTarget,
    pub group: TargetGroup,
    pub hash: String,
}

/// Read the pinned version and best compatible target group for a package.
///
/// Lookup over the lock's package keys is case-insensitive. An unreadable
/// or unparsable lock file logs a warning and yields `None` so the caller
/// can fall through to another resolution strategy.
pub fn read_tool(
    project_dir: &Path,
    package_id: &str,
    host_runtime: RuntimeTarget,
) -> Option<RestoredToolEntry> {
    let lock_path = project_dir.join(LOCK_FILE_REL);
    let content = match fs::read_to_string(&lock_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %lock_path.display(), error = %e, "ignoring unreadable lock artifact");
            return None;
        }
    };
    let lock: LockFile = match serde_json::from_str(&content) {
        Ok(lock) => lock,
        Err(e) => {
            tracing::warn!(path = %lock_path.display(), error = %e, "ignoring unreadable lock artifact");
            return None;
        }
    };

    let (canonical_id, tool) = lock
        .tools
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(package_id))?;

    let (target, moniker) =
        RuntimeTarget::best_compatible(host_runtime, tool.targets.keys().map(String::as_str))?;
    let group = tool.targets.get(moniker)?.clone();

    tracing::debug!(
        package = %canonical_id,
        version = %tool.version,
        target = %target,
        "restored tool package found in lock artifact"
    );

    Some(RestoredToolEntry {
        package_id: canonical_id.clone(),
        version: tool.version.clone(),
        target,
        group,
        hash: tool.hash.clone(),
    })
}
