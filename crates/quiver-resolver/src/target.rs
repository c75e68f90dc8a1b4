//! Runtime target monikers and compatibility ordering
//!
//! A moniker identifies the runtime/API surface a package build targets,
//! written `rt{major}.{minor}` (e.g. `rt2.0`). Compatibility is judged
//! against the host's own runtime target: same major line, minor at or
//! below the host's.

use std::fmt;

/// A parsed runtime target moniker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuntimeTarget {
    major: u16,
    minor: u16,
}

impl RuntimeTarget {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Parse a moniker of the form `rt{major}.{minor}`.
    ///
    /// Returns `None` for anything malformed; an unparsable moniker in a
    /// lock file is treated as an incompatible target, not an error.
    pub fn parse(moniker: &str) -> Option<Self> {
        let rest = moniker.strip_prefix("rt")?;
        let (major, minor) = rest.split_once('.')?;
        Some(Self {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }

    /// Whether a package built for `self` can run on `host`.
    pub fn is_compatible_with(self, host: RuntimeTarget) -> bool {
        self.major == host.major && self.minor <= host.minor
    }

    /// Pick the best compatible moniker from a declared set.
    ///
    /// "Best" is the narrowest compatible match: the highest minor at or
    /// below the host's. Returns the parsed target together with the
    /// original moniker string, which keys the lock file's target groups.
    pub fn best_compatible<'a, I>(host: RuntimeTarget, declared: I) -> Option<(RuntimeTarget, &'a str)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        declared
            .into_iter()
            .filter_map(|moniker| Self::parse(moniker).map(|target| (target, moniker)))
            .filter(|(target, _)| target.is_compatible_with(host))
            .max_by_key(|(target, _)| *target)
    }
}

impl fmt::Display for RuntimeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rt{}.{}", self.major, self.minor)
    }
}
