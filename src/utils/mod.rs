pub mod environment;
pub mod files;
pub mod logging;

pub use environment::{config_path_from_env, default_config_path};
pub use files::{format_path_with_tilde, read_transcript_bytes};
pub use logging::init_logging;
