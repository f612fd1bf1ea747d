//! Layered server configuration: CLI overrides, environment, TOML file,
//! defaults.

pub mod loader;
pub mod models;
pub mod sources;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    Config, ConfigMetadata, ConfigWarning, ConfigWarnings, CorsConfig,
    DatabaseConfig, ServerConfig,
};
pub use sources::{EnvConfig, FileConfig};
