mod error;
mod loader;
pub mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config};
pub use types::{ConfigOverrides, ReleasesConfig, TelesumConfig};
pub use validate::validate_config;
