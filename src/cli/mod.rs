// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod merge;
pub mod validation;

// Re-export main types for convenience
pub use args::{parse_args, usage, Args, Command, Options};
pub use config::Config;
pub use validation::validate_options;
