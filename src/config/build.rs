//! Build metadata baked in at compile time

use serde::Serialize;
use std::fmt;

/// Version, commit, date and builder of this binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    /// Package version
    pub version: &'static str,
    /// Source commit, empty when unknown
    pub commit: &'static str,
    /// Build timestamp, empty when unknown
    pub date: &'static str,
    /// Who or what produced the build, empty when unknown
    pub built_by: &'static str,
}

/// Metadata of the running binary
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    commit: or_empty(option_env!("HUSKY_BUILD_COMMIT")),
    date: or_empty(option_env!("HUSKY_BUILD_DATE")),
    built_by: or_empty(option_env!("HUSKY_BUILT_BY")),
};

const fn or_empty(value: Option<&'static str>) -> &'static str {
    match value {
        Some(value) => value,
        None => "",
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)?;
        if !self.commit.is_empty() {
            write!(f, "\ncommit: {}", self.commit)?;
        }
        if !self.date.is_empty() {
            write!(f, "\nbuilt at: {}", self.date)?;
        }
        if !self.built_by.is_empty() {
            write!(f, "\nbuilt by: {}", self.built_by)?;
        }
        Ok(())
    }
}
