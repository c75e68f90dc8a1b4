//! Boundary configuration loading
//!
//! The resolver takes an explicit [`ResolverConfig`]; this module is the
//! only place environment variables and the user config file are read.
//! Layering, highest precedence first: environment (`QUIVER_HOST`,
//! `QUIVER_RUNTIME`, `QUIVER_HOME`, `QUIVER_FALLBACK_ROOTS`), then
//! `~/.quiver/config.toml`, then built-in defaults.

use crate::error::{Error, Result};
use quiver_resolver::{ResolverConfig, RuntimeTarget};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_HOST_LAUNCHER: &str = "qhost";
const DEFAULT_RUNTIME: RuntimeTarget = RuntimeTarget::new(2, 0);

/// Optional user configuration file, `~/.quiver/config.toml`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    host_launcher: Option<PathBuf>,
    runtime: Option<String>,
    cache_root: Option<PathBuf>,
    #[serde(default)]
    fallback_roots: Vec<PathBuf>,
}

impl ConfigFile {
    fn load() -> Result<Self> {
        let Some(home) = dirs::home_dir() else {
            return Ok(Self::default());
        };
        let path = home.join(".quiver").join("config.toml");
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path,
            message: e.to_string(),
        })
    }
}

/// Build the resolver configuration from environment, file and defaults.
pub fn load_resolver_config() -> Result<ResolverConfig> {
    let file = ConfigFile::load()?;

    let host_launcher = env::var_os("QUIVER_HOST")
        .map(PathBuf::from)
        .or(file.host_launcher)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HOST_LAUNCHER));

    let runtime = match env::var("QUIVER_RUNTIME").ok().or(file.runtime) {
        Some(moniker) => RuntimeTarget::parse(&moniker)
            .ok_or(Error::InvalidRuntimeTarget { moniker })?,
        None => DEFAULT_RUNTIME,
    };

    let cache_root = match env::var_os("QUIVER_HOME").map(PathBuf::from).or(file.cache_root) {
        Some(root) => root,
        None => dirs::home_dir()
            .ok_or(Error::NoHomeDir)?
            .join(".quiver")
            .join("packages"),
    };

    let fallback_roots = match env::var_os("QUIVER_FALLBACK_ROOTS") {
        Some(list) => env::split_paths(&list).collect(),
        None => file.fallback_roots,
    };

    tracing::debug!(
        launcher = %host_launcher.display(),
        runtime = %runtime,
        cache = %cache_root.display(),
        "resolver configuration loaded"
    );

    Ok(ResolverConfig::new(host_launcher, runtime, cache_root)
        .with_fallback_roots(fallback_roots))
}

/// The process search path, for the PATH fallback resolver.
pub fn search_path() -> Vec<PathBuf> {
    env::var_os("PATH")
        .map(|path| env::split_paths(&path).collect())
        .unwrap_or_default()
}
