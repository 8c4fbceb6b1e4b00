use config::{Config as ConfigLoader, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use super::error::Error;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "Floyd.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Longest accepted input line, in bytes.
    pub max_line_length: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Log progress every this many outer iterations. 0 disables it.
    pub progress_every: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub min_cell_width: usize,
    pub show_predecessors: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub loader: LoaderConfig,
    pub engine: EngineConfig,
    pub render: RenderConfig,
}

/// Loads configuration from defaults, a TOML file and environment variables.
///
/// An explicit `path` must exist. Without one, `Floyd.toml` in the working
/// directory is used if present. `FLOYD__<SECTION>__<KEY>` variables
/// override both.
pub fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    let file_source = match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigLoadError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            File::from(path).format(FileFormat::Toml).required(true)
        }
        None => File::from(Path::new(DEFAULT_CONFIG_FILE))
            .format(FileFormat::Toml)
            .required(false),
    };

    let s = ConfigLoader::builder()
        .set_default("loader.max_line_length", 64)
        .and_then(|b| b.set_default("engine.progress_every", 0))
        .and_then(|b| b.set_default("render.min_cell_width", 3))
        .and_then(|b| b.set_default("render.show_predecessors", false))
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?
        .add_source(file_source)
        .add_source(
            Environment::with_prefix("FLOYD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
