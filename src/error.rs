// error.rs - Error taxonomy for the packer

use std::io;
use thiserror::Error;

/// Every way a packing run can fail.
///
/// The `Display` text of the resolver variants is the exact diagnostic
/// printed to the user, so keep it stable.
#[derive(Debug, Error)]
pub enum PackError {
    /// No `--macro` on the command line or in the config file
    #[error("Option --macro <macro> is mandatory")]
    MissingMacro,

    /// A flag that takes a value was the last token
    #[error("Option {0} expects a value")]
    MissingValue(String),

    #[error("{0} does not exist.")]
    PathNotFound(String),

    #[error("{0} is a directory. Expected a file name.")]
    NotAFile(String),

    #[error("Invalid wildcard '{pattern}': {source}")]
    Wildcard {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to list directory '{dir}': {source}")]
    ReadDir {
        dir: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl PackError {
    /// Process exit code for this error: 2 for usage mistakes, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            PackError::MissingMacro | PackError::MissingValue(_) => 2,
            _ => 1,
        }
    }
}
