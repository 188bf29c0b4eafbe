//! Search settings loaded from JSON and overridden by command-line flags.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use orienteer_paths::{BarrierConfig, CostModel, ScanStrategy};
use serde::{Deserialize, Serialize};

use crate::cli::{BarrierArgs, MazeArgs};

/// Everything a run can be tuned with. Missing sections and fields take
/// their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub costs: CostModel,
    pub barrier: BarrierConfig,
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `maze` flags on top of the file values.
    pub fn apply_maze(&mut self, args: &MazeArgs) {
        if let Some(step) = args.step {
            self.costs.step = step;
        }
        if let Some(turn) = args.turn {
            self.costs.turn = turn;
        }
    }

    /// Apply `barrier` flags on top of the file values.
    pub fn apply_barrier(&mut self, args: &BarrierArgs) {
        if args.bisect {
            self.barrier.strategy = ScanStrategy::Bisect;
        }
        if args.skip_off_path {
            self.barrier.skip_off_path = true;
        }
    }
}

/// Errors raised while loading a settings file.
#[derive(Debug)]
pub enum SettingsError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "settings: {}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "settings: {}: invalid JSON: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
