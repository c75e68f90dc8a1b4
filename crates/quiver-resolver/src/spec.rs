//! Command spec assembly and argument escaping

use crate::config::ResolverConfig;
use crate::locator::ResolvedToolAssembly;
use std::path::PathBuf;

/// Flag appended when the runtime version pin marker is present.
const PINNED_RUNTIME_FLAG: &str = "--pinned-runtime";

/// A fully-formed process specification, ready for launch.
///
/// Carries the argument vector in two forms: `argv` holds the discrete,
/// unescaped elements an execve-style launcher passes straight to the
/// process, and `args` holds the same elements individually escaped for
/// rendering as a single command line (or for a launcher that parses one).
/// Ownership passes to the external process launcher, which consumes the
/// form it needs as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub executable: PathBuf,
    /// Unescaped argv elements for direct process spawning.
    pub argv: Vec<String>,
    /// The same arguments, individually escaped for command-line rendering.
    pub args: Vec<String>,
}

/// Build the spec for launching a tool assembly under the host runtime.
///
/// Argument order: absolute entry assembly path (quoted in the escaped
/// form), the command name, each user argument, then the pinned-runtime
/// flag only when the marker file was present (never an empty token
/// otherwise).
pub fn build(
    config: &ResolverConfig,
    assembly: &ResolvedToolAssembly,
    command_name: &str,
    user_args: &[String],
) -> CommandSpec {
    let assembly_path = assembly.assembly_path.to_string_lossy().into_owned();

    let mut argv = Vec::with_capacity(user_args.len() + 3);
    argv.push(assembly_path);
    argv.push(command_name.to_string());
    argv.extend(user_args.iter().cloned());
    if assembly.runtime_pin_present {
        argv.push(PINNED_RUNTIME_FLAG.to_string());
    }

    // The assembly path is always quoted in the escaped form; everything
    // after it is escaped only as its content requires.
    let args = std::iter::once(quote(&argv[0]))
        .chain(argv.iter().skip(1).map(|arg| escape_arg(arg)))
        .collect();

    CommandSpec {
        executable: config.host_launcher.clone(),
        argv,
        args,
    }
}

/// Escape one argument so it round-trips through command-line parsing.
///
/// Arguments containing whitespace (and empty arguments) are wrapped in
/// double quotes; embedded quotes are backslash-escaped either way.
pub fn escape_arg(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(char::is_whitespace) {
        quote(arg)
    } else if arg.contains('"') {
        escape_interior(arg)
    } else {
        arg.to_string()
    }
}

fn quote(arg: &str) -> String {
    let mut escaped = escape_interior(arg);
    // A backslash run before the closing quote must be doubled too.
    let trailing = escaped.chars().rev().take_while(|&c| c == '\\').count();
    escaped.extend(std::iter::repeat('\\').take(trailing));
    format!("\"{escaped}\"")
}

/// Escape embedded quotes, doubling any backslash run that precedes one so
/// the backslashes survive quote processing unchanged.
fn escape_interior(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len());
    let mut backslashes = 0usize;
    for c in arg.chars() {
        if c == '\\' {
            backslashes += 1;
            continue;
        }
        if c == '"' {
            out.extend(std::iter::repeat('\\').take(backslashes * 2 + 1));
        } else {
            out.extend(std::iter::repeat('\\').take(backslashes));
        }
        backslashes = 0;
        out.push(c);
    }
    out.extend(std::iter::repeat('\\').take(backslashes));
    out
}
