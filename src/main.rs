//! Hole Hop entry point
//!
//! Loads settings and sound cues, then runs the terminal game loop.

use std::process::ExitCode;

use hole_hop::audio::{AudioManager, SoundEffect};
use hole_hop::camera::CameraCommand;
use hole_hop::platform::{FrameClock, InputState};
use hole_hop::renderer::TerminalRenderer;
use hole_hop::sim::{EndReason, GamePhase, GameState, Outcome, tick};
use hole_hop::{Settings, StartupError};

/// Game instance holding all state
struct Game {
    state: GameState,
    audio: AudioManager,
    input: InputState,
    clock: FrameClock,
}

impl Game {
    fn new(settings: &Settings, audio: AudioManager) -> Self {
        let seed = settings.run_seed();
        let mut state = GameState::new(seed);
        state.jump_rate = settings.jump_rate;
        state.camera.apply(CameraCommand::Select(settings.camera));
        state.camera.update(state.player.pos, 0.0);
        log::info!("Game initialized with seed: {}", seed);

        Self {
            state,
            audio,
            input: InputState::default(),
            clock: FrameClock::new(settings.target_fps),
        }
    }

    /// Run until the player quits (`None`) or the run ends
    fn run(&mut self, renderer: &mut TerminalRenderer) -> Result<Option<Outcome>, StartupError> {
        self.audio.play(SoundEffect::Theme);

        loop {
            self.input.poll()?;
            if self.input.quit_requested() {
                log::info!("Quit requested");
                return Ok(None);
            }

            let dt = self.clock.tick();
            let frame_input = self.input.take();
            for event in tick(&mut self.state, &frame_input, dt) {
                if let Some(cue) = SoundEffect::for_event(&event) {
                    self.audio.play(cue);
                }
            }

            renderer.render(&self.state)?;

            if let GamePhase::Over(outcome) = self.state.phase {
                return Ok(Some(outcome));
            }
            self.clock.pace();
        }
    }
}

fn run(settings: &Settings) -> Result<Option<Outcome>, StartupError> {
    let audio = AudioManager::load(settings)?;
    let mut game = Game::new(settings, audio);
    let mut renderer = TerminalRenderer::new()?;
    // Renderer drops here, restoring the terminal before anything is printed
    game.run(&mut renderer)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Hole Hop starting...");

    let settings = Settings::load();

    match run(&settings) {
        Ok(Some(outcome)) => {
            match outcome.reason {
                EndReason::Completed => println!("You cleared all five levels!"),
                EndReason::OutOfLives => println!("Out of lives on level {}.", outcome.level),
            }
            println!("Score {}", outcome.final_score);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("hole-hop: {e}");
            ExitCode::FAILURE
        }
    }
}
