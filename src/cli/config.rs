// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::PackError;

/// Defaults read from a TOML file.
///
/// Group values use the command-line syntax: comma-separated paths, with
/// `*` wildcards allowed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(rename = "macro")]
    pub macro_name: Option<String>,
    pub intro: Option<String>,
    #[serde(rename = "pub")]
    pub public: Option<String>,
    #[serde(rename = "priv")]
    pub private: Option<String>,
    pub outro: Option<String>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PackError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PackError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml(&content).map_err(|source| PackError::ConfigParse {
            path: path.display().to_string(),
            source,
        })?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        format!(
            r#"# shpack.toml - Configuration file for shpack
# Generated: {generated}
# Command line arguments will override these settings

# Prefix for the <macro>_IMPLEMENTATION guard
macro = "MYLIB"

# Comment block at the top (license, banner)
intro = "LICENSE"

# Public headers, in order
pub = "include/*.h"

# Private headers and sources, in order
priv = "src/*.h,src/*.c"

# Comment block at the bottom
# outro = "CHANGELOG"
"#,
            generated = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
