//! Resolver capability and the project tools resolution pipeline
//!
//! Resolution strategies share one capability: turn a request into an
//! optional [`CommandSpec`]. Strategies are tried in order by a
//! [`ResolverChain`]; the first non-empty result wins and structural
//! failures abort the chain immediately.

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::request::ToolCommandRequest;
use crate::spec::{self, CommandSpec};
use crate::{depsfile, lockfile, locator, matcher, paths};
use std::path::PathBuf;

/// A single command resolution strategy.
pub trait CommandResolver {
    /// Strategy name, for logging.
    fn name(&self) -> &'static str;

    /// Resolve a request to a runnable spec.
    ///
    /// `Ok(None)` means the strategy does not apply; the caller should try
    /// the next one. `Err` means the command was recognized but cannot be
    /// launched, and resolution must stop.
    fn resolve(&self, request: &ToolCommandRequest) -> Result<Option<CommandSpec>>;
}

/// Resolves commands provided by restored project tool dependencies.
///
/// Pipeline: derive the package identity from the command name, read the
/// pinned version and compatible target from the restore lock artifact,
/// locate the entry assembly across candidate package roots, ensure the
/// runtime dependency manifest exists, then assemble the spec.
pub struct ProjectToolsResolver {
    config: ResolverConfig,
}

impl ProjectToolsResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }
}

impl CommandResolver for ProjectToolsResolver {
    fn name(&self) -> &'static str {
        "project-tools"
    }

    fn resolve(&self, request: &ToolCommandRequest) -> Result<Option<CommandSpec>> {
        let Some(matched) = matcher::match_request(request) else {
            return Ok(None);
        };

        let Some(entry) = lockfile::read_tool(
            matched.project_dir,
            &matched.package_id,
            self.config.host_runtime,
        ) else {
            tracing::debug!(package = %matched.package_id, "package not in restore graph");
            return Ok(None);
        };

        let roots = paths::candidate_roots(&self.config, &entry.package_id, &entry.version);
        let located = locator::locate(&roots, &entry.group.entry, &entry.package_id)?;

        let manifest = paths::manifest_path(
            &self.config.global_cache_root,
            &entry.package_id,
            &entry.version,
            entry.target,
        );
        depsfile::ensure_manifest(&entry, &manifest)?;

        let user_args = request.args.clone().unwrap_or_default();
        Ok(Some(spec::build(
            &self.config,
            &located,
            matched.command_name,
            &user_args,
        )))
    }
}

/// Fallback resolver that finds the bare command on the process search path
/// and launches it directly, without the host runtime.
pub struct PathCommandResolver {
    search_path: Vec<PathBuf>,
}

impl PathCommandResolver {
    /// `search_path` is supplied by the boundary (typically split from the
    /// `PATH` environment variable there).
    pub fn new(search_path: Vec<PathBuf>) -> Self {
        Self { search_path }
    }
}

impl CommandResolver for PathCommandResolver {
    fn name(&self) -> &'static str {
        "path"
    }

    fn resolve(&self, request: &ToolCommandRequest) -> Result<Option<CommandSpec>> {
        let Some(command_name) = request.command_name.as_deref().filter(|n| !n.is_empty()) else {
            return Ok(None);
        };
        let Some(executable) = self
            .search_path
            .iter()
            .map(|dir| dir.join(command_name))
            .find(|candidate| candidate.is_file())
        else {
            return Ok(None);
        };

        let argv = request.args.clone().unwrap_or_default();
        let args = argv.iter().map(|arg| spec::escape_arg(arg)).collect();
        Ok(Some(CommandSpec {
            executable,
            argv,
            args,
        }))
    }
}

/// Ordered list of resolution strategies; first non-empty result wins.
pub struct ResolverChain {
    resolvers: Vec<Box<dyn CommandResolver>>,
}

impl ResolverChain {
    pub fn new(resolvers: Vec<Box<dyn CommandResolver>>) -> Self {
        Self { resolvers }
    }

    /// The default chain: project tools first, then the process search path.
    pub fn default_chain(config: ResolverConfig, search_path: Vec<PathBuf>) -> Self {
        Self::new(vec![
            Box::new(ProjectToolsResolver::new(config)),
            Box::new(PathCommandResolver::new(search_path)),
        ])
    }

    pub fn resolve(&self, request: &ToolCommandRequest) -> Result<Option<CommandSpec>> {
        for resolver in &self.resolvers {
            if let Some(spec) = resolver.resolve(request)? {
                tracing::debug!(resolver = resolver.name(), "command resolved");
                return Ok(Some(spec));
            }
        }
        Ok(None)
    }
}
