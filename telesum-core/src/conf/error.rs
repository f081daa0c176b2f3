use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("max_concurrent_reads must be at least 1 (got {value})")]
    InvalidParallelism { value: usize },

    #[error("releases.timeout_secs must be at least 1 (got {value})")]
    InvalidTimeout { value: u64 },

    #[error("releases.url must be set when release fetching is enabled")]
    MissingReleasesUrl,

    #[error("output must name a file (got {path})")]
    InvalidOutput { path: PathBuf },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
