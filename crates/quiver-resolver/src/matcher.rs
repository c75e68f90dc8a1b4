//! Command name to package identity matching
//!
//! The single entry gate for project tool resolution. Derives the expected
//! tool package identity from a typed command name, failing closed (never
//! erroring) when the request cannot possibly refer to a project tool.

use crate::request::ToolCommandRequest;
use std::path::Path;

/// Tool packages are named after their command by convention.
pub const TOOL_PACKAGE_PREFIX: &str = "tool-";

/// File whose presence marks a directory as a Quiver project.
/// Content is not parsed here; only existence matters.
pub const PROJECT_DESCRIPTOR: &str = "quiver.toml";

/// A request that passed the entry gate, with its validated parts.
#[derive(Debug)]
pub struct MatchedCommand<'a> {
    /// Candidate tool package identity. Keeps the typed casing; lookup
    /// against the restore graph is case-insensitive.
    pub package_id: String,
    pub command_name: &'a str,
    pub project_dir: &'a Path,
}

/// Derive the candidate tool package identity for a request.
///
/// Returns `None` when the command name is absent or empty, the project
/// directory is absent, or the directory lacks a project descriptor.
pub fn match_request(request: &ToolCommandRequest) -> Option<MatchedCommand<'_>> {
    let command_name = request.command_name.as_deref()?;
    if command_name.is_empty() {
        return None;
    }
    let project_dir = request.project_dir.as_deref()?;
    if !project_dir.join(PROJECT_DESCRIPTOR).is_file() {
        tracing::debug!(
            project_dir = %project_dir.display(),
            "no project descriptor, skipping project tool resolution"
        );
        return None;
    }
    Some(MatchedCommand {
        package_id: format!("{TOOL_PACKAGE_PREFIX}{command_name}"),
        command_name,
        project_dir,
    })
}
