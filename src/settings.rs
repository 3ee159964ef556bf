//! Game settings and preferences
//!
//! Read once at startup from a JSON file. Every field is optional in the file;
//! anything left out keeps its default.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::camera::CameraMode;
use crate::consts::DEFAULT_JUMP_RATE;
use crate::error::SettingsError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Directory holding the cue WAV files
    pub asset_dir: PathBuf,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Gameplay ===
    /// Fixed RNG seed; a time-derived seed is used when absent
    pub seed: Option<u64>,
    /// Jump arc units per second
    pub jump_rate: f32,

    // === Display ===
    pub target_fps: u32,
    /// Camera mode at startup
    pub camera: CameraMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Audio
            asset_dir: PathBuf::from("assets"),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            // Gameplay
            seed: None,
            jump_rate: DEFAULT_JUMP_RATE,

            // Display
            target_fps: 60,
            camera: CameraMode::Tower,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const PATH_ENV: &'static str = "HOLE_HOP_SETTINGS";
    /// Settings file used when the variable is unset
    const DEFAULT_FILE: &'static str = "hole_hop.json";

    /// Where settings are read from
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_FILE))
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Seed for this run
    pub fn run_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
