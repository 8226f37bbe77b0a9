//! Screen state machine
//!
//! Owns the simulation, the high score list and the persistence calls, and
//! decides which screen is active. The presentation layer forwards one
//! [`FrameInput`] per frame and reads the session back to draw; nothing
//! else mutates core state.
//!
//! Every recoverable failure (missing save, corrupt file, failed write)
//! leaves the machine on the screen it was on and surfaces a notice
//! string instead of half-applying a transition.

use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::highscores::HighScores;
use crate::persistence;
use crate::sim::{GameState, TickEvent, TickInput, tick};

/// The five screens. Exactly one is active at a time. `Start` is the
/// pre-boot state: constructing a session immediately moves it to
/// `Selection`, so it is never seen again after boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Selection,
    Start,
    Play,
    GameOver,
    HighScores,
}

/// Named boolean triggers for one frame. Several may be set at once; the
/// transition table is evaluated in a fixed priority order, so behavior
/// stays deterministic without a real input device.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Selection: start a fresh run
    pub new_game: bool,
    /// Selection: resume from the save slot
    pub load_game: bool,
    /// Selection: open the high score screen
    pub show_scores: bool,
    /// Play: write the save slot
    pub save: bool,
    /// Play: ask the shell to exit
    pub quit: bool,
    /// GameOver: fresh run
    pub restart: bool,
    /// GameOver / HighScores: back to Selection
    pub confirm: bool,
    /// Play: paddle movement
    pub left: bool,
    pub right: bool,
}

/// Event handed back to the shell driving the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// User asked to quit; the library never exits the process itself.
    Quit,
}

/// One live game: simulation, screen, leaderboard and file locations.
/// Sessions are plain owned values - tests run several side by side.
pub struct GameSession {
    screen: Screen,
    state: GameState,
    high_scores: HighScores,
    config: SessionConfig,
    notice: Option<String>,
}

impl GameSession {
    /// Boot a session: load the high score list (creating the file on
    /// first boot) and land on the Selection screen. A corrupt high score
    /// file is demoted to an empty list with a notice - boot never fails.
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            screen: Screen::Start,
            state: GameState::new(config.viewport),
            high_scores: HighScores::new(),
            config,
            notice: None,
        };

        match HighScores::load(&session.config.highscore_path) {
            Ok(scores) => session.high_scores = scores,
            Err(e) => {
                log::warn!("high score list unreadable, starting empty: {e}");
                session.notice = Some(e.to_string());
            }
        }

        session.set_screen(Screen::Selection);
        session
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Read-only simulation snapshot for drawing.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Last recoverable error, for the presentation layer to display.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Consume the pending notice once it has been shown.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Advance the session by one frame.
    pub fn frame(&mut self, input: &FrameInput) -> Option<SessionEvent> {
        match self.screen {
            Screen::Selection => self.frame_selection(input),
            Screen::Play => return self.frame_play(input),
            Screen::HighScores => {
                if input.confirm {
                    self.set_screen(Screen::Selection);
                }
            }
            Screen::GameOver => {
                if input.restart {
                    self.state.reset();
                    self.set_screen(Screen::Play);
                } else if input.confirm {
                    self.set_screen(Screen::Selection);
                }
            }
            // Pre-boot state; nothing reacts here
            Screen::Start => {}
        }
        None
    }

    fn frame_selection(&mut self, input: &FrameInput) {
        if input.new_game {
            self.state.reset();
            self.set_screen(Screen::Play);
        } else if input.load_game {
            match persistence::load_record(&self.config.save_path)
                .and_then(|record| self.state.restore(&record))
            {
                Ok(()) => self.set_screen(Screen::Play),
                Err(e) => {
                    // Aborted transition: stay on Selection, sim untouched
                    log::warn!("load failed: {e}");
                    self.notice = Some(e.to_string());
                }
            }
        } else if input.show_scores {
            self.set_screen(Screen::HighScores);
        }
    }

    fn frame_play(&mut self, input: &FrameInput) -> Option<SessionEvent> {
        if input.quit {
            return Some(SessionEvent::Quit);
        }

        let tick_input = TickInput {
            left: input.left,
            right: input.right,
        };
        if let Some(TickEvent::BallLost { score }) = tick(&mut self.state, &tick_input) {
            if let Err(e) = self.high_scores.record(score, &self.config.highscore_path) {
                // Score stays on the in-memory list either way
                log::warn!("high score write failed: {e}");
                self.notice = Some(e.to_string());
            }
            self.set_screen(Screen::GameOver);
        }

        // The save key is honored even on the frame the ball was lost,
        // capturing the post-loss state
        if input.save {
            let record = self.state.snapshot();
            if let Err(e) = persistence::save_record(&record, &self.config.save_path) {
                log::warn!("save failed: {e}");
                self.notice = Some(e.to_string());
            }
        }
        None
    }

    fn set_screen(&mut self, next: Screen) {
        if self.screen != next {
            log::info!("screen {:?} -> {:?}", self.screen, next);
            self.screen = next;
        }
    }
}
