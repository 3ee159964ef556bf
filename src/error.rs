//! Startup error types
//!
//! Gameplay never fails; only resource loading and configuration do.

use std::path::PathBuf;

/// Failure to load a startup resource. Fatal for the binary.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("sound file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// Anything that stops the binary before or during the run
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure to read the settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_failure_named_as_such() {
        let err = StartupError::from(std::io::Error::other("not a tty"));
        assert!(matches!(err, StartupError::Terminal(_)));
        assert_eq!(err.to_string(), "terminal I/O failed: not a tty");
    }

    #[test]
    fn test_asset_error_passes_through() {
        let err: StartupError = AssetError::Missing(PathBuf::from("assets/theme.wav")).into();
        assert!(matches!(err, StartupError::Asset(AssetError::Missing(_))));
        assert_eq!(err.to_string(), "sound file not found: assets/theme.wav");
    }
}
