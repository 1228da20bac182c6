//! # Configuration
//!
//! Settings resolve in order: defaults → config file → command-line flags.
//! The config file is optional TOML; every key may be left out.
//!
//! ```toml
//! disks = 7
//! max_disks = 10
//! step = 0
//! list_moves = false
//! ```

use crate::constants::{step_count, DEFAULT_DISKS, DEFAULT_MAX_DISKS, MAX_DISKS};
use crate::errors::HanoiError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// File and override layers (sparse)
// ============================================================================

/// Contents of a config file; absent keys fall through to defaults
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HanoiConfig {
    pub disks: Option<u32>,
    pub max_disks: Option<u32>,
    pub step: Option<usize>,
    pub list_moves: Option<bool>,
}

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub disks: Option<u32>,
    pub step: Option<usize>,
    pub list_moves: bool,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub disks: u32,
    pub max_disks: u32,
    pub step: usize,
    pub list_moves: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(HanoiError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<HanoiError> for ConfigError {
    fn from(e: HanoiError) -> Self {
        ConfigError::Invalid(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

impl HanoiConfig {
    /// Read a config file from `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config = Self::parse(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config file contents
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Merge defaults, file and overrides, then check the result is playable
pub fn resolve(file: &HanoiConfig, overrides: &Overrides) -> Result<ResolvedConfig, ConfigError> {
    let max_disks = file.max_disks.unwrap_or(DEFAULT_MAX_DISKS);
    let disks = overrides.disks.or(file.disks).unwrap_or(DEFAULT_DISKS);
    let step = overrides.step.or(file.step).unwrap_or(0);
    let list_moves = overrides.list_moves || file.list_moves.unwrap_or(false);

    if max_disks > MAX_DISKS {
        return Err(HanoiError::TooManyDisks {
            disks: max_disks,
            limit: MAX_DISKS,
        }
        .into());
    }
    if disks == 0 {
        return Err(HanoiError::InvalidDiskCount { disks }.into());
    }
    if disks > max_disks {
        return Err(HanoiError::TooManyDisks {
            disks,
            limit: max_disks,
        }
        .into());
    }

    let max_step = step_count(disks);
    if step > max_step {
        return Err(HanoiError::StepOutOfRange {
            target: step,
            max: max_step,
        }
        .into());
    }

    let resolved = ResolvedConfig {
        disks,
        max_disks,
        step,
        list_moves,
    };
    debug!("Resolved config: {:?}", resolved);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let resolved = resolve(&HanoiConfig::default(), &Overrides::default()).unwrap();
        assert_eq!(
            resolved,
            ResolvedConfig {
                disks: DEFAULT_DISKS,
                max_disks: DEFAULT_MAX_DISKS,
                step: 0,
                list_moves: false,
            }
        );
    }

    #[test]
    fn test_file_then_overrides() {
        let file = HanoiConfig::parse("disks = 4\nstep = 3\nlist_moves = true\n").unwrap();
        let resolved = resolve(&file, &Overrides::default()).unwrap();
        assert_eq!(resolved.disks, 4);
        assert_eq!(resolved.step, 3);
        assert!(resolved.list_moves);

        let overrides = Overrides {
            disks: Some(6),
            step: Some(63),
            list_moves: false,
        };
        let resolved = resolve(&file, &overrides).unwrap();
        assert_eq!(resolved.disks, 6);
        assert_eq!(resolved.step, 63);
        assert!(resolved.list_moves);
    }

    #[test]
    fn test_partial_file() {
        let file = HanoiConfig::parse("max_disks = 12\n").unwrap();
        assert_eq!(file.disks, None);
        assert_eq!(file.max_disks, Some(12));
    }

    #[test]
    fn test_rejects_bad_values() {
        let zero = Overrides {
            disks: Some(0),
            ..Overrides::default()
        };
        assert!(matches!(
            resolve(&HanoiConfig::default(), &zero),
            Err(ConfigError::Invalid(HanoiError::InvalidDiskCount { disks: 0 }))
        ));

        let too_many = Overrides {
            disks: Some(11),
            ..Overrides::default()
        };
        assert!(matches!(
            resolve(&HanoiConfig::default(), &too_many),
            Err(ConfigError::Invalid(HanoiError::TooManyDisks {
                disks: 11,
                limit: 10
            }))
        ));

        let past_end = Overrides {
            disks: Some(3),
            step: Some(8),
            list_moves: false,
        };
        assert!(matches!(
            resolve(&HanoiConfig::default(), &past_end),
            Err(ConfigError::Invalid(HanoiError::StepOutOfRange { target: 8, max: 7 }))
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            HanoiConfig::parse("disks = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
