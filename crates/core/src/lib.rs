// Buildmeta Core - Domain Logic
// NO infrastructure dependencies: file I/O and terminal output live in the outer crates

pub mod application;
pub mod domain;
pub mod error;

pub use error::{ConfigError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
