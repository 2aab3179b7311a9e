// Manifest File Loader

use std::path::Path;

use buildmeta_core::domain::Manifest;
use config::{Config, File, FileFormat};
use thiserror::Error;
use tracing::debug;

/// Environment variables overriding individual version components.
const ENV_OVERRIDES: [(&str, usize); 3] = [
    ("BUILDMETA_VERSION_MAJOR", 0),
    ("BUILDMETA_VERSION_MINOR", 1),
    ("BUILDMETA_VERSION_PATCH", 2),
];

/// Errors raised while reading the manifest from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("manifest not found: {0}")]
    NotFound(String),

    #[error("failed to parse manifest: {0}")]
    Parse(#[from] config::ConfigError),

    #[error("invalid value for {variable}: `{value}` is not a version component")]
    InvalidOverride { variable: String, value: String },
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Load a manifest from disk.
///
/// After the file is read, `BUILDMETA_VERSION_MAJOR` / `_MINOR` / `_PATCH`
/// replace the matching tuple component when set. An override for a
/// component the tuple does not have is ignored; the arity error surfaces
/// during evaluation, where the tuple is validated.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    debug!(path = %path.display(), "loading manifest");

    let settings = Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml))
        .build()?;
    let mut manifest: Manifest = settings.try_deserialize()?;

    apply_env_overrides(&mut manifest)?;

    Ok(manifest)
}

fn apply_env_overrides(manifest: &mut Manifest) -> Result<()> {
    for (variable, index) in ENV_OVERRIDES {
        let value = match std::env::var(variable) {
            Ok(value) => value,
            Err(_) => continue,
        };

        let component: u32 = value.parse().map_err(|_| LoadError::InvalidOverride {
            variable: variable.to_string(),
            value: value.clone(),
        })?;

        if let Some(slot) = manifest.project.version.get_mut(index) {
            debug!(variable, component, "applying version override");
            *slot = component;
        }
    }

    Ok(())
}
