// merge.rs - Merge configuration file with CLI arguments

use tracing::debug;

use crate::cli::{Args, Config};
use crate::error::PackError;
use crate::resolve::{resolve_file_list, FileGroup};

impl Args {
    /// Merge with configuration from file.
    /// CLI arguments take precedence over config file values; config groups
    /// are resolved only for slots the command line left empty.
    pub fn merge_with_config(mut self, config: Config) -> Result<Self, PackError> {
        if self.macro_name.is_none() {
            self.macro_name = config.macro_name;
        }
        self.intro = fill_group(self.intro, config.intro.as_deref())?;
        self.public = fill_group(self.public, config.public.as_deref())?;
        self.private = fill_group(self.private, config.private.as_deref())?;
        self.outro = fill_group(self.outro, config.outro.as_deref())?;
        Ok(self)
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, PackError> {
        let config = Config::from_file(config_path)?;
        self.merge_with_config(config)
    }
}

fn fill_group(cli: Option<FileGroup>, config: Option<&str>) -> Result<Option<FileGroup>, PackError> {
    match (cli, config) {
        (Some(group), _) => Ok(Some(group)),
        (None, Some(raw)) => {
            debug!("Using '{}' from configuration", raw);
            resolve_file_list(raw).map(Some)
        }
        (None, None) => Ok(None),
    }
}
