//! Audio cues using rodio
//!
//! Each cue is a WAV file in the asset directory, read and validated once at
//! startup. Playback is fire-and-forget.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::error::AssetError;
use crate::settings::Settings;
use crate::sim::{Direction, GameEvent};

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Startup theme
    Theme,
    /// Arrow key step
    Move,
    /// Jump launched
    Jump,
    /// Stepped off the board
    Fail,
    /// Fell into a hole
    HoleHit,
    /// Ran into an obstacle
    ObstacleHit,
    /// Level cleared
    LevelUp,
    /// Final level cleared
    GameOver,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 8] = [
        SoundEffect::Theme,
        SoundEffect::Move,
        SoundEffect::Jump,
        SoundEffect::Fail,
        SoundEffect::HoleHit,
        SoundEffect::ObstacleHit,
        SoundEffect::LevelUp,
        SoundEffect::GameOver,
    ];

    /// File name inside the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Theme => "my.wav",
            SoundEffect::Move => "walk.wav",
            SoundEffect::Jump => "jump.wav",
            SoundEffect::Fail => "hole.wav",
            SoundEffect::HoleHit => "hole.wav",
            SoundEffect::ObstacleHit => "obstac.wav",
            SoundEffect::LevelUp => "lvl.wav",
            SoundEffect::GameOver => "final.wav",
        }
    }

    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::DirectionLatched(Direction::Jump) => Some(SoundEffect::Jump),
            GameEvent::DirectionLatched(Direction::None) => None,
            GameEvent::DirectionLatched(_) => Some(SoundEffect::Move),
            GameEvent::OutOfBounds => Some(SoundEffect::Fail),
            GameEvent::HoleHit { .. } => Some(SoundEffect::HoleHit),
            GameEvent::ObstacleHit { .. } => Some(SoundEffect::ObstacleHit),
            GameEvent::LevelCleared { .. } => Some(SoundEffect::LevelUp),
            GameEvent::RunCompleted => Some(SoundEffect::GameOver),
            GameEvent::OutOfLives => None,
        }
    }
}

/// Read one cue file and make sure rodio can decode it
fn load_clip(path: &Path) -> Result<Vec<u8>, AssetError> {
    if !path.is_file() {
        return Err(AssetError::Missing(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Decoder::new(Cursor::new(bytes.clone())).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes)
}

/// Audio manager for the game
pub struct AudioManager {
    /// Kept alive for the lifetime of the manager; `None` when muted for lack of a device
    output: Option<(OutputStream, OutputStreamHandle)>,
    clips: HashMap<SoundEffect, Vec<u8>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    /// Load every cue from `settings.asset_dir` and open the default output
    ///
    /// A missing or broken cue file is an error. A missing output device is
    /// not: the manager stays usable and plays nothing.
    pub fn load(settings: &Settings) -> Result<Self, AssetError> {
        let mut clips = HashMap::new();
        for effect in SoundEffect::ALL {
            let path = settings.asset_dir.join(effect.file_name());
            clips.insert(effect, load_clip(&path)?);
        }
        log::info!(
            "Loaded {} sound cues from {}",
            clips.len(),
            settings.asset_dir.display()
        );

        let output = match OutputStream::try_default() {
            Ok(output) => Some(output),
            Err(e) => {
                log::warn!("No audio output ({e}) - audio disabled");
                None
            }
        };

        let mut manager = Self {
            output,
            clips,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        };
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_muted(settings.muted);
        Ok(manager)
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some((_, handle)) = &self.output else { return };
        let Some(bytes) = self.clips.get(&effect) else { return };

        // Clips were validated at load, so failures here are device hiccups
        let sink = match Sink::try_new(handle) {
            Ok(sink) => sink,
            Err(e) => {
                log::debug!("Dropped {:?}: {e}", effect);
                return;
            }
        };
        match Decoder::new(Cursor::new(bytes.clone())) {
            Ok(source) => {
                sink.set_volume(vol);
                sink.append(source);
                sink.detach();
            }
            Err(e) => log::debug!("Dropped {:?}: {e}", effect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn muted_manager() -> AudioManager {
        AudioManager {
            output: None,
            clips: HashMap::new(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    #[test]
    fn test_event_cues() {
        use SoundEffect::*;
        let cue = |e: GameEvent| SoundEffect::for_event(&e);
        assert_eq!(cue(GameEvent::DirectionLatched(Direction::Left)), Some(Move));
        assert_eq!(cue(GameEvent::DirectionLatched(Direction::Jump)), Some(Jump));
        assert_eq!(cue(GameEvent::OutOfBounds), Some(Fail));
        assert_eq!(cue(GameEvent::HoleHit { tile: 3 }), Some(HoleHit));
        assert_eq!(cue(GameEvent::ObstacleHit { tile: 3 }), Some(ObstacleHit));
        assert_eq!(cue(GameEvent::LevelCleared { from: 1, to: 2 }), Some(LevelUp));
        assert_eq!(cue(GameEvent::RunCompleted), Some(GameOver));
        assert_eq!(cue(GameEvent::OutOfLives), None);
    }

    #[test]
    fn test_level_clear_cue_follows_terminal_flag() {
        use crate::consts::{FINAL_LEVEL, HOLE_COUNT, OBSTACLE_COUNT};
        use crate::sim::{GameState, HoleSet, check, level_rules};

        for level in 1..=FINAL_LEVEL {
            let mut state = GameState::new(5);
            state.holes = HoleSet([0; HOLE_COUNT]);
            state.obstacles.tiles = [0; OBSTACLE_COUNT];
            state.player.level = level;
            state.player.pos.x = 1.6;
            state.player.pos.z = 1.6;

            let cues: Vec<_> = check(&mut state)
                .events
                .iter()
                .filter_map(SoundEffect::for_event)
                .collect();
            let expected = if level_rules(level).terminal {
                SoundEffect::GameOver
            } else {
                SoundEffect::LevelUp
            };
            assert_eq!(cues, vec![expected], "level {level}");
        }
    }

    #[test]
    fn test_missing_asset_dir_fails() {
        let settings = Settings {
            asset_dir: PathBuf::from("/nonexistent/hole_hop_assets"),
            ..Default::default()
        };
        match AudioManager::load(&settings) {
            Err(AssetError::Missing(path)) => {
                assert!(path.ends_with(SoundEffect::Theme.file_name()));
            }
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("load should fail without assets"),
        }
    }

    #[test]
    fn test_undecodable_file_fails() {
        let path = std::env::temp_dir().join(format!("hole_hop_bad_{}.wav", std::process::id()));
        std::fs::write(&path, b"definitely not a wav file").unwrap();
        let result = load_clip(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AssetError::Decode { .. })));
    }

    #[test]
    fn test_volume_math() {
        let mut audio = muted_manager();
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(2.0);
        assert!((audio.effective_volume() - 0.5).abs() < 1e-6);
        audio.set_muted(true);
        assert_eq!(audio.effective_volume(), 0.0);
    }

    #[test]
    fn test_play_without_device_is_silent() {
        let audio = muted_manager();
        audio.play(SoundEffect::Theme);
    }
}
