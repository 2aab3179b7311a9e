// Version Tuple & Derived Representations

use std::fmt;

use serde::Serialize;

use crate::error::{ConfigError, Result};

/// Multiplier applied to the major component of the build code.
pub const MAJOR_MULTIPLE: u64 = 1_000_000;

/// Multiplier applied to the minor component of the build code.
pub const MINOR_MULTIPLE: u64 = 1_000;

/// Suffix marking a pre-release build.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Largest minor/patch value for which build-code ordering matches tuple ordering.
pub const MAX_ORDERED_COMPONENT: u32 = 999;

/// Project version as a (major, minor, patch) tuple.
///
/// Fixed at manifest load time and never mutated; every derived
/// representation is a pure function of the three components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Build a version from the raw component sequence in the manifest.
    ///
    /// Anything other than exactly MAJOR.MINOR.PATCH is a configuration
    /// error; there is no recovery path.
    pub fn from_components(components: &[u32]) -> Result<Self> {
        match components {
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(ConfigError::InvalidVersionTuple {
                found: components.len(),
            }),
        }
    }

    /// Integer build code: `major * 1_000_000 + minor * 1_000 + patch`.
    ///
    /// Strictly increasing with the tuple while minor and patch stay within
    /// `[0, MAX_ORDERED_COMPONENT]`.
    pub fn code(&self) -> u64 {
        debug_assert!(
            self.minor <= MAX_ORDERED_COMPONENT && self.patch <= MAX_ORDERED_COMPONENT,
            "minor/patch above {} break build-code ordering",
            MAX_ORDERED_COMPONENT
        );

        u64::from(self.major) * MAJOR_MULTIPLE
            + u64::from(self.minor) * MINOR_MULTIPLE
            + u64::from(self.patch)
    }

    /// Schema version for the persistence layer.
    ///
    /// Same value as [`Version::code`]: one derivation, reused as the
    /// migration version number.
    pub fn database(&self) -> u64 {
        self.code()
    }

    /// Dotted display name, e.g. `1.0.0`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Pre-release name: the display name with `-SNAPSHOT` appended.
    pub fn snapshot(&self) -> String {
        format!("{}{}", self, SNAPSHOT_SUFFIX)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<(u32, u32, u32)> for Version {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}
