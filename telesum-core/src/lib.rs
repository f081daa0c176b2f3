pub mod cli;
pub mod combine;
pub mod conf;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod releases;
pub mod summary;
