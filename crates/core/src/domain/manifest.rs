// Project Manifest

use serde::Deserialize;

use super::catalog::{resolve_section, CatalogEntry, CoordinateSection, VersionTable};
use crate::error::Result;

/// Root of the build manifest.
///
/// Everything below `[project]` is the dependency-version catalog; all three
/// catalog sections may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub project: ProjectSection,

    #[serde(default)]
    pub versions: VersionTable,

    #[serde(default)]
    pub libraries: CoordinateSection,

    #[serde(default)]
    pub plugins: CoordinateSection,
}

/// `[project]` section: identity plus the raw version tuple.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    pub name: String,

    /// Raw MAJOR.MINOR.PATCH components, validated during evaluation.
    pub version: Vec<u32>,
}

impl Manifest {
    pub fn resolve_libraries(&self) -> Result<Vec<CatalogEntry>> {
        resolve_section(&self.libraries, &self.versions)
    }

    pub fn resolve_plugins(&self) -> Result<Vec<CatalogEntry>> {
        resolve_section(&self.plugins, &self.versions)
    }
}
