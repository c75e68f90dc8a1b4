//! Runtime dependency manifest generation
//!
//! The shared host runtime loads a tool's entry assembly through a manifest
//! describing the full dependency closure: library names, versions, content
//! hashes, relative file paths and localized resource assemblies. The
//! manifest is materialized lazily on first need and never overwritten:
//! once any file occupies the output path its content is not inspected,
//! however stale or unrelated. Manifest content is a pure function of the
//! restored package metadata, so concurrent writers racing for the same
//! path would produce equivalent bytes; the write uses an exclusive create
//! so exactly one of them lands and the rest observe "already exists".

use crate::error::{Error, Result};
use crate::lockfile::RestoredToolEntry;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Manifest document, in the schema the host loader consumes.
/// Map keys serialize in sorted order, keeping output deterministic.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeDependencyManifest {
    pub runtime_target: String,
    /// Library closure keyed by `name/version`.
    pub libraries: BTreeMap<String, ManifestLibrary>,
}

#[derive(Debug, Serialize)]
pub struct ManifestLibrary {
    pub hash: String,
    /// File paths relative to the package root.
    pub files: Vec<String>,
    /// Relative resource assembly path to locale.
    pub resources: BTreeMap<String, String>,
}

/// Ensure a manifest exists at `output`, generating it if absent.
///
/// A pre-existing file at the path means no work and no validation. I/O
/// failures while writing are fatal for the invocation: the tool cannot
/// safely launch without the manifest.
pub fn ensure_manifest(entry: &RestoredToolEntry, output: &Path) -> Result<()> {
    if output.exists() {
        tracing::debug!(path = %output.display(), "runtime dependency manifest already present");
        return Ok(());
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let manifest = synthesize(entry);
    let content = serde_json::to_vec_pretty(&manifest)?;

    // Exclusive create: a concurrent writer that got there first produces
    // equivalent content, so losing the race is success.
    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(output)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(path = %output.display(), "lost manifest write race, keeping winner");
            return Ok(());
        }
        Err(e) => return Err(Error::io(output, e)),
    };
    file.write_all(&content).map_err(|e| Error::io(output, e))?;
    file.sync_all().map_err(|e| Error::io(output, e))?;

    tracing::debug!(path = %output.display(), "runtime dependency manifest generated");
    Ok(())
}

/// Build the manifest for a restored tool from its lock metadata.
fn synthesize(entry: &RestoredToolEntry) -> RuntimeDependencyManifest {
    let mut libraries = BTreeMap::new();

    let resources = entry
        .group
        .resources
        .iter()
        .map(|r| (r.path.clone(), r.locale.clone()))
        .collect();
    libraries.insert(
        format!("{}/{}", entry.package_id.to_lowercase(), entry.version),
        ManifestLibrary {
            hash: entry.hash.clone(),
            files: entry.group.assemblies.clone(),
            resources,
        },
    );

    for dep in &entry.group.dependencies {
        libraries.insert(
            format!("{}/{}", dep.name.to_lowercase(), dep.version),
            ManifestLibrary {
                hash: dep.hash.clone(),
                files: dep.files.clone(),
                resources: BTreeMap::new(),
            },
        );
    }

    RuntimeDependencyManifest {
        runtime_target: entry.target.to_string(),
        libraries,
    }
}
