//! Resolution request type

use std::path::PathBuf;

/// A request to resolve a typed command name inside a project directory.
///
/// All fields are optional by design: the outer command-line layer forwards
/// whatever it has, and resolvers fail closed on anything missing rather
/// than requiring the caller to pre-validate.
#[derive(Debug, Clone, Default)]
pub struct ToolCommandRequest {
    /// The bare command name as typed by the user (e.g. `portable`).
    pub command_name: Option<String>,
    /// User-supplied arguments, in order, unescaped.
    pub args: Option<Vec<String>>,
    /// Directory of the project the command was issued in.
    pub project_dir: Option<PathBuf>,
}

impl ToolCommandRequest {
    pub fn new(
        command_name: impl Into<String>,
        args: Vec<String>,
        project_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            command_name: Some(command_name.into()),
            args: Some(args),
            project_dir: Some(project_dir.into()),
        }
    }
}
