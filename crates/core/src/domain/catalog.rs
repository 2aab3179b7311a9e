// Dependency-Version Catalog
// Coordinates are configuration data, not logic: they are validated and
// formatted, never resolved against any registry.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Shared version table: alias -> version string.
pub type VersionTable = BTreeMap<String, String>;

/// One catalog section: alias -> coordinate spec.
pub type CoordinateSection = BTreeMap<String, CoordinateSpec>;

/// A dependency coordinate as declared in the manifest.
///
/// The version is either written inline or references an alias in the
/// shared version table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoordinateSpec {
    pub group: String,
    pub name: String,
    pub version: VersionSpec,
}

/// Inline version string, or `{ ref = "<alias>" }` into the version table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VersionSpec {
    Inline(String),
    Ref {
        #[serde(rename = "ref")]
        reference: String,
    },
}

/// A fully resolved coordinate, displayed as `group:name:version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// A resolved catalog entry, keyed by its manifest alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub alias: String,
    pub coordinate: Coordinate,
}

/// Resolve one catalog section against the shared version table.
///
/// Entries come out in alias order (sections are sorted maps), so output is
/// stable across runs. A reference to a missing alias aborts resolution.
pub fn resolve_section(
    section: &CoordinateSection,
    versions: &VersionTable,
) -> Result<Vec<CatalogEntry>> {
    let mut entries = Vec::with_capacity(section.len());

    for (alias, spec) in section {
        let version = match &spec.version {
            VersionSpec::Inline(version) => version.clone(),
            VersionSpec::Ref { reference } => versions
                .get(reference)
                .cloned()
                .ok_or_else(|| ConfigError::UnknownVersionRef {
                    entry: alias.clone(),
                    reference: reference.clone(),
                })?,
        };

        entries.push(CatalogEntry {
            alias: alias.clone(),
            coordinate: Coordinate {
                group: spec.group.clone(),
                name: spec.name.clone(),
                version,
            },
        });
    }

    Ok(entries)
}
