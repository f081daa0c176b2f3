use crate::conf::error::ConfigError;
use crate::conf::types::TelesumConfig;

pub fn validate_config(cfg: &TelesumConfig) -> Result<(), ConfigError> {
    if cfg.max_concurrent_reads == 0 {
        return Err(ConfigError::InvalidParallelism {
            value: cfg.max_concurrent_reads,
        });
    }

    if cfg.output.as_os_str().is_empty() || cfg.output.file_name().is_none() {
        return Err(ConfigError::InvalidOutput {
            path: cfg.output.clone(),
        });
    }

    if cfg.releases.enabled {
        if cfg.releases.url.trim().is_empty() {
            return Err(ConfigError::MissingReleasesUrl);
        }
        if cfg.releases.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: cfg.releases.timeout_secs,
            });
        }
    }

    Ok(())
}
