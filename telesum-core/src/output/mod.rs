mod writer;

pub use writer::{Summary, to_json, write_summary};
