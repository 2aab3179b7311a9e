// Buildmeta Infrastructure - Manifest Loading
// Reads the TOML manifest from disk and applies environment overrides

mod loader;

pub use loader::{load_manifest, LoadError};

// Note: config::ConfigError is wrapped into LoadError at this boundary;
// core never sees the config crate.
