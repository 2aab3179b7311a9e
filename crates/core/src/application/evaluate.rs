// Evaluate Use Case

use serde::Serialize;

use crate::domain::{CatalogEntry, Manifest, Version};
use crate::error::Result;

/// The four derived version fields consumed by the surrounding build system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildFields {
    /// Monotonically comparable build code.
    pub code: u64,

    /// Persistence-layer schema version (same derivation as `code`).
    pub database: u64,

    /// Dotted display name.
    pub name: String,

    /// Pre-release name with the snapshot suffix.
    pub snapshot: String,
}

impl BuildFields {
    pub fn derive(version: &Version) -> Self {
        Self {
            code: version.code(),
            database: version.database(),
            name: version.name(),
            snapshot: version.snapshot(),
        }
    }
}

/// Result of one manifest evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub project: String,
    pub version: Version,
    pub fields: BuildFields,
    pub libraries: Vec<CatalogEntry>,
    pub plugins: Vec<CatalogEntry>,
}

/// Execute the evaluate use case.
///
/// Single synchronous pass: validate the version tuple, derive the build
/// fields, resolve every catalog entry. The first configuration error aborts
/// evaluation and no fields are produced.
pub fn execute(manifest: &Manifest) -> Result<Evaluation> {
    let version = Version::from_components(&manifest.project.version)?;
    let fields = BuildFields::derive(&version);

    let libraries = manifest.resolve_libraries()?;
    let plugins = manifest.resolve_plugins()?;

    Ok(Evaluation {
        project: manifest.project.name.clone(),
        version,
        fields,
        libraries,
        plugins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CoordinateSpec, ProjectSection, VersionSpec};
    use crate::error::ConfigError;

    fn manifest(version: Vec<u32>) -> Manifest {
        Manifest {
            project: ProjectSection {
                name: "demo-app".to_string(),
                version,
            },
            versions: Default::default(),
            libraries: Default::default(),
            plugins: Default::default(),
        }
    }

    #[test]
    fn test_evaluate_derives_all_four_fields() {
        let evaluation = execute(&manifest(vec![1, 0, 0])).unwrap();

        assert_eq!(evaluation.project, "demo-app");
        assert_eq!(evaluation.fields.code, 1_000_000);
        assert_eq!(evaluation.fields.database, 1_000_000);
        assert_eq!(evaluation.fields.name, "1.0.0");
        assert_eq!(evaluation.fields.snapshot, "1.0.0-SNAPSHOT");
    }

    #[test]
    fn test_wrong_arity_produces_no_fields() {
        for version in [vec![1, 0], vec![1, 0, 0, 0]] {
            let err = execute(&manifest(version)).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidVersionTuple { .. }));
        }
    }

    #[test]
    fn test_unknown_ref_aborts_evaluation() {
        let mut manifest = manifest(vec![1, 2, 3]);
        manifest.libraries.insert(
            "glide".to_string(),
            CoordinateSpec {
                group: "com.github.bumptech.glide".to_string(),
                name: "glide".to_string(),
                version: VersionSpec::Ref {
                    reference: "glide".to_string(),
                },
            },
        );

        let err = execute(&manifest).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownVersionRef { .. }));
    }

    #[test]
    fn test_resolved_catalog_is_carried_through() {
        let mut manifest = manifest(vec![2, 1, 0]);
        manifest
            .versions
            .insert("okhttp".to_string(), "3.11.0".to_string());
        manifest.libraries.insert(
            "okhttp".to_string(),
            CoordinateSpec {
                group: "com.squareup.okhttp3".to_string(),
                name: "okhttp".to_string(),
                version: VersionSpec::Ref {
                    reference: "okhttp".to_string(),
                },
            },
        );

        let evaluation = execute(&manifest).unwrap();
        assert_eq!(evaluation.libraries.len(), 1);
        assert_eq!(
            evaluation.libraries[0].coordinate.to_string(),
            "com.squareup.okhttp3:okhttp:3.11.0"
        );
        assert!(evaluation.plugins.is_empty());
    }
}
