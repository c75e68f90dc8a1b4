//! Physical package location search
//!
//! Walks candidate package roots in priority order until one contains the
//! entry assembly on disk. A package the restore graph claims exists but no
//! root physically holds is a reportable structural failure, distinct from
//! the silent no-match of an unreferenced tool.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Extension of the marker file that pins the tool to a specific runtime
/// version. Sits alongside the entry assembly, sharing its file stem.
const RUNTIME_PIN_EXTENSION: &str = "runtime-pin";

/// Where the entry assembly was physically found. Consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToolAssembly {
    /// Absolute path to the entry assembly.
    pub assembly_path: PathBuf,
    /// Candidate package root the assembly was found under.
    pub package_root: PathBuf,
    /// Whether the runtime version pin marker file is present.
    pub runtime_pin_present: bool,
}

/// Find the first candidate root containing the entry assembly.
///
/// `entry_rel` is the assembly path relative to the package root, as
/// recorded in the lock artifact. Roots are checked strictly in the order
/// given; the first hit wins even if later roots also hold the file.
pub fn locate(
    candidate_roots: &[PathBuf],
    entry_rel: &str,
    package_id: &str,
) -> Result<ResolvedToolAssembly> {
    for root in candidate_roots {
        let assembly_path = root.join(entry_rel);
        if assembly_path.is_file() {
            let runtime_pin_present = pin_marker_path(&assembly_path).is_file();
            tracing::debug!(
                assembly = %assembly_path.display(),
                pin = runtime_pin_present,
                "entry assembly located"
            );
            return Ok(ResolvedToolAssembly {
                assembly_path,
                package_root: root.clone(),
                runtime_pin_present,
            });
        }
        tracing::debug!(root = %root.display(), "entry assembly not in candidate root");
    }
    Err(Error::AssembliesNotFound {
        package: package_id.to_string(),
    })
}

fn pin_marker_path(assembly_path: &Path) -> PathBuf {
    let mut marker = assembly_path.to_path_buf();
    marker.set_extension(RUNTIME_PIN_EXTENSION);
    marker
}
