//! Loads the page configuration from a RON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use matcher_core::{PageConfig, MAX_PROGRESS_CAP};
use matcher_logging::matcher_info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("progress cap in {path:?} is {cap}%, must be below 100%")]
    ProgressCap { path: PathBuf, cap: u8 },
}

/// Reads `path`; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<PageConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            matcher_info!("No config at {:?}; using defaults", path);
            return Ok(PageConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if config.rules.progress_cap_percent > MAX_PROGRESS_CAP {
        return Err(ConfigError::ProgressCap {
            path: path.to_path_buf(),
            cap: config.rules.progress_cap_percent,
        });
    }
    matcher_info!("Loaded page config from {:?}", path);
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<PageConfig, ron::error::SpannedError> {
    ron::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = parse_config(
            "(rules: (min_description_chars: 80), behaviour: (badge_copy: false))",
        )
        .unwrap();

        assert_eq!(config.rules.min_description_chars, 80);
        assert_eq!(config.rules.resume_extension, "pdf");
        assert!(!config.behaviour.badge_copy);
        assert!(config.behaviour.badge_tooltips);
        assert_eq!(config.timings, PageConfig::default().timings);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(parse_config("(rules: (max_file_bytes: \"lots\"))").is_err());
    }
}
