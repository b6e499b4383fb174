use std::path::PathBuf;

use crate::app::Result;
use crate::config::Config;

pub struct AppContext {
    pub config: Config,
}

impl AppContext {
    /// Load configuration and wire up the application context.
    ///
    /// With `config_path` unset, the default config file is used (and
    /// created with commented defaults on first run).
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(&path)?,
            None => Config::load()?,
        };
        Ok(Self { config })
    }
}
