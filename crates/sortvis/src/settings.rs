#![forbid(unsafe_code)]

//! Layered configuration: defaults, then JSON file, then env and flags.
//!
//! # Failure Modes
//!
//! - The file cannot be read: [`LoadError::Io`].
//! - The file is not valid JSON for [`VisualizerConfig`]: [`LoadError::Parse`].
//! - The merged result has size or speed out of range: [`LoadError::Invalid`].
//!
//! Unknown algorithm ids never fail; they resolve to bubble with a warning.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sortvis_core::{AlgorithmId, ConfigError, VisualizerConfig};

use crate::cli::Opts;

/// Errors loading or merging configuration.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid(ConfigError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            Self::Invalid(err) => write!(f, "invalid settings: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<ConfigError> for LoadError {
    fn from(err: ConfigError) -> Self {
        Self::Invalid(err)
    }
}

/// Read a JSON config file. Missing fields take their defaults.
pub fn load_file(path: &Path) -> Result<VisualizerConfig, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the session config from `opts`, loading `opts.config` if set.
pub fn resolve(opts: &Opts) -> Result<VisualizerConfig, LoadError> {
    let mut config = match &opts.config {
        Some(path) => {
            let config = load_file(path)?;
            tracing::info!(path = %path.display(), "config file loaded");
            config
        }
        None => VisualizerConfig::default(),
    };

    if let Some(id) = &opts.algo_a {
        config.algorithm_a = AlgorithmId::resolve(id);
    }
    if let Some(id) = &opts.algo_b {
        config.algorithm_b = AlgorithmId::resolve(id);
    }
    if let Some(size) = opts.size {
        config.size = size;
    }
    if let Some(distribution) = opts.distribution {
        config.distribution = distribution;
    }
    if let Some(speed) = opts.speed {
        config.speed = speed;
    }
    if opts.no_sound {
        config.sound_enabled = false;
    }

    config.validate()?;
    Ok(config)
}
