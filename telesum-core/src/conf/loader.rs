use crate::conf::error::ConfigError;
use crate::conf::types::TelesumConfig;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "telesum.hcl";

/// Loads the configuration file.
///
/// An explicitly named file must exist. Without one, [`DEFAULT_CONFIG_FILE`]
/// is used if present and built-in defaults otherwise. Validation is left to
/// the caller so command line overrides can be applied first.
pub fn load_config(path: Option<&Path>) -> Result<TelesumConfig, ConfigError> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                tracing::debug!("No config file, using defaults");
                return Ok(TelesumConfig::default());
            }
            default
        }
    };

    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))
}
