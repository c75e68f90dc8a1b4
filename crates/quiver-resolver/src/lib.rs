//! Tool command resolution for Quiver
//!
//! Resolves a user-typed command name, issued inside a project directory,
//! into a runnable [`CommandSpec`] for a tool distributed as a versioned
//! package dependency. Resolution reads the restore lock artifact, searches
//! candidate package roots for the entry assembly, and lazily materializes
//! the runtime dependency manifest the host launcher needs.

pub mod config;
pub mod depsfile;
pub mod error;
pub mod lockfile;
pub mod locator;
pub mod matcher;
pub mod paths;
pub mod request;
pub mod resolver;
pub mod spec;
pub mod target;

pub use config::ResolverConfig;
pub use error::{Error, Result};
pub use lockfile::RestoredToolEntry;
pub use locator::ResolvedToolAssembly;
pub use request::ToolCommandRequest;
pub use resolver::{CommandResolver, PathCommandResolver, ProjectToolsResolver, ResolverChain};
pub use spec::CommandSpec;
pub use target::RuntimeTarget;
