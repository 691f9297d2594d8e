//! Session lifecycle
//!
//! ```text
//! Idle --start--> Playing --ship destroyed--> Defeated --submit/skip--> GameOver
//!                    ^                                                     |
//!                    +---------------------- restart ---------------------+
//! ```
//!
//! There is no pause and no mid-run exit. Commands that do not apply to the
//! current phase are rejected and leave it unchanged.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, MAX_NAME_LEN};
use crate::highscores::{HighScoreEntry, Leaderboard, MAX_HIGH_SCORES};
use crate::platform::InputCommand;
use crate::profanity::NameFilter;
use crate::renderer::{AssetStatus, FrameSnapshot};
use crate::sim::{Direction, InputState, TickOutcome, World, tick};
use crate::tuning::{Tuning, TuningError};

/// Name recorded when the player submits a blank name
pub const ANONYMOUS: &str = "Anonymous";

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session yet
    Idle,
    /// Active gameplay
    Playing,
    /// Ship destroyed, waiting for name entry
    Defeated,
    /// Run concluded (recorded or skipped)
    GameOver,
}

/// Lifecycle commands issued by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    SubmitName,
    SkipName,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("{command:?} is not valid while {phase:?}")]
    InvalidTransition { command: Command, phase: GamePhase },
}

/// Final numbers of a run, fixed at defeat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u64,
    pub elapsed_secs: f32,
    pub waves: u32,
}

/// The game: lifecycle state machine around one [`World`]
pub struct Game<L: Leaderboard, F: NameFilter> {
    phase: GamePhase,
    world: Option<World>,
    input: InputState,
    tuning: Tuning,
    leaderboard: L,
    filter: F,
    top_scores: Vec<HighScoreEntry>,
    last_run: Option<RunSummary>,
    ship_asset: AssetStatus,
    seed: u64,
    sessions: u64,
}

impl<L: Leaderboard, F: NameFilter> Game<L, F> {
    /// Build an idle game; the tuning is validated up front
    pub fn new(tuning: Tuning, seed: u64, leaderboard: L, filter: F) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            phase: GamePhase::Idle,
            world: None,
            input: InputState::new(),
            tuning,
            leaderboard,
            filter,
            top_scores: Vec::new(),
            last_run: None,
            ship_asset: AssetStatus::default(),
            seed,
            sessions: 0,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    /// Mutable world access for hosts and tests that script a scene
    pub fn world_mut(&mut self) -> Option<&mut World> {
        self.world.as_mut()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Leaderboard as last fetched (empty or stale if the store failed)
    pub fn top_scores(&self) -> &[HighScoreEntry] {
        &self.top_scores
    }

    pub fn last_run(&self) -> Option<&RunSummary> {
        self.last_run.as_ref()
    }

    pub fn leaderboard(&self) -> &L {
        &self.leaderboard
    }

    pub fn ship_asset(&self) -> &AssetStatus {
        &self.ship_asset
    }

    // === Input surface ===

    pub fn set_flag(&mut self, direction: Direction, pressed: bool) {
        self.input.set_flag(direction, pressed);
    }

    /// Queue one projectile; ignored outside of play
    pub fn fire(&mut self) {
        if self.phase == GamePhase::Playing {
            self.input.fire();
        } else {
            log::trace!("Fire ignored while {:?}", self.phase);
        }
    }

    pub fn apply(&mut self, command: InputCommand) {
        match command {
            InputCommand::SetFlag(direction, pressed) => self.set_flag(direction, pressed),
            InputCommand::Fire => self.fire(),
        }
    }

    /// Record the renderer's ship asset status
    pub fn set_ship_asset(&mut self, status: AssetStatus) {
        if let AssetStatus::Failed(reason) = &status {
            log::warn!("Ship asset failed to load ({}), continuing without a mesh", reason);
        }
        self.ship_asset = status;
    }

    // === Lifecycle ===

    fn reject(&self, command: Command) -> GameError {
        log::warn!("Rejected {:?} while {:?}", command, self.phase);
        GameError::InvalidTransition {
            command,
            phase: self.phase,
        }
    }

    /// `Idle -> Playing`
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Idle {
            return Err(self.reject(Command::Start));
        }
        self.begin_session();
        Ok(())
    }

    /// `GameOver -> Playing`, same effect as [`Game::start`]
    pub fn restart(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::GameOver {
            return Err(self.reject(Command::Restart));
        }
        self.begin_session();
        Ok(())
    }

    fn begin_session(&mut self) {
        let seed = self
            .seed
            .wrapping_add(self.sessions.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.sessions += 1;

        self.world = Some(World::new(seed, &self.tuning));
        self.input.clear_fire();
        self.last_run = None;
        self.phase = GamePhase::Playing;
        self.refresh_leaderboard();

        log::info!("Session {} started with seed {}", self.sessions, seed);
    }

    /// Re-fetch the displayed leaderboard; failures keep the stale list
    pub fn refresh_leaderboard(&mut self) {
        match self.leaderboard.fetch_top(MAX_HIGH_SCORES) {
            Ok(entries) => self.top_scores = entries,
            Err(e) => log::warn!("Leaderboard unavailable: {}", e),
        }
    }

    /// Advance one frame. Only steps the world while playing.
    pub fn frame(&mut self, dt: f32) -> Option<TickOutcome> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let world = self.world.as_mut()?;

        let input = self.input.take_tick_input();
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let outcome = tick(world, &input, &self.tuning, dt);

        if outcome.ship_destroyed() {
            let summary = RunSummary {
                score: world.scoreboard.score,
                elapsed_secs: world.elapsed_secs,
                waves: world.waves_spawned,
            };
            log::info!(
                "Ship destroyed: score {} after {:.1}s ({} waves)",
                summary.score,
                summary.elapsed_secs,
                summary.waves
            );
            self.last_run = Some(summary);
            self.input.clear_fire();
            self.phase = GamePhase::Defeated;
        }

        Some(outcome)
    }

    /// `Defeated -> GameOver`, recording the run under a sanitized name
    ///
    /// A failed save is logged; the transition completes regardless.
    pub fn submit_name(&mut self, name: &str) -> Result<(), GameError> {
        if self.phase != GamePhase::Defeated {
            return Err(self.reject(Command::SubmitName));
        }
        let Some(summary) = self.last_run else {
            return Err(self.reject(Command::SubmitName));
        };

        let trimmed: String = name.trim().chars().take(MAX_NAME_LEN).collect();
        let name = if trimmed.is_empty() {
            ANONYMOUS.to_string()
        } else {
            self.filter.sanitize(&trimmed)
        };

        let entry = HighScoreEntry {
            name,
            score: summary.score,
            elapsed_secs: summary.elapsed_secs,
        };
        match self.leaderboard.save(entry) {
            Ok(()) => self.refresh_leaderboard(),
            Err(e) => log::warn!("Failed to save score: {}", e),
        }

        self.phase = GamePhase::GameOver;
        log::info!("Game over (score recorded)");
        Ok(())
    }

    /// `Defeated -> GameOver` without recording
    pub fn skip_name(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Defeated {
            return Err(self.reject(Command::SkipName));
        }
        self.phase = GamePhase::GameOver;
        log::info!("Game over (name entry skipped)");
        Ok(())
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self.phase, self.world.as_ref(), &self.ship_asset)
    }
}
