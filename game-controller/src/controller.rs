use std::time::Duration;

use game_core::{GameEventHandler, GameService, StrokeRecorder, WordProvider};
use game_types::{GameError, GamePhase, Intent, MascotMood, Screen, WordDifficulty};
use tracing::{debug, info, warn};

use crate::config::Config;

/// Seconds left at which the mascot starts to look worried
const SAD_MASCOT_THRESHOLD: u32 = 2;

/// Side effects the owner of the controller must carry out after a dispatch.
/// Every effect that outlives the dispatch is tagged with the epoch it was
/// issued under so it can be dropped once the screen has moved on.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start the round countdown, replacing any running one
    StartCountdown { epoch: u64, interval: Duration },
    StopCountdown,
    /// Abort the countdown and every pending scheduled intent
    CancelAll,
    /// Dispatch `intent` after `delay`, unless the screen changed meanwhile
    Schedule {
        epoch: u64,
        delay: Duration,
        intent: Intent,
    },
}

/// Screen-level state machine. Takes intents from the presentation layer,
/// drives the session service and the canvas, and reports the timers it
/// needs as [`Effect`]s instead of running them itself.
#[derive(Debug)]
pub struct GameController {
    config: Config,
    service: GameService,
    words: WordProvider,
    canvas: StrokeRecorder,
    screen: Screen,
    difficulty: WordDifficulty,
    epoch: u64,
}

impl GameController {
    pub fn new(config: Config, words: WordProvider) -> Self {
        let mut canvas = StrokeRecorder::new();
        canvas.set_enabled(false);

        Self {
            difficulty: config.default_difficulty,
            config,
            service: GameService::new(),
            words,
            canvas,
            screen: Screen::Welcome,
            epoch: 0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn phase(&self) -> GamePhase {
        self.screen.phase()
    }

    pub fn service(&self) -> &GameService {
        &self.service
    }

    pub fn canvas(&self) -> &StrokeRecorder {
        &self.canvas
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bumped on every screen change
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.service.add_handler(handler);
    }

    /// Dispatch an intent that was scheduled under `epoch`. Returns `None`
    /// without touching any state when the screen has changed since.
    pub fn dispatch_scheduled(
        &mut self,
        epoch: u64,
        intent: Intent,
    ) -> Result<Option<Vec<Effect>>, GameError> {
        if epoch != self.epoch {
            debug!(
                "Dropping stale {} scheduled at epoch {} (now {})",
                intent.name(),
                epoch,
                self.epoch
            );
            return Ok(None);
        }
        self.dispatch(intent).map(Some)
    }

    /// Apply a user intent. An intent the current screen does not accept is
    /// rejected with [`GameError::InvalidIntent`] and changes nothing.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Vec<Effect>, GameError> {
        let phase = self.phase();

        match (phase, intent) {
            (GamePhase::Welcome, Intent::Quit) => Err(self.invalid(intent)),
            (_, Intent::Quit) => Ok(self.quit()),

            (GamePhase::Welcome, Intent::Begin) => {
                self.difficulty = self.config.default_difficulty;
                self.enter_setup(None);
                Ok(Vec::new())
            }

            (GamePhase::Setup, Intent::SelectDifficulty { difficulty }) => {
                self.difficulty = difficulty;
                let picked = self.words.pick_word(difficulty).map(|w| w.text.clone());
                if let Screen::Setup {
                    difficulty: selected,
                    word,
                    ..
                } = &mut self.screen
                {
                    *selected = difficulty;
                    *word = picked;
                }
                Ok(Vec::new())
            }
            (GamePhase::Setup, Intent::RequestStart) => {
                if let Screen::Setup { mascot, .. } = &mut self.screen {
                    *mascot = MascotMood::Happy;
                }
                Ok(vec![Effect::Schedule {
                    epoch: self.epoch,
                    delay: self.config.start_delay,
                    intent: Intent::StartGame,
                }])
            }
            (GamePhase::Setup, Intent::StartGame) => self.start_game(),

            (GamePhase::Drawing, Intent::Tick) => Ok(self.tick()),
            (GamePhase::Drawing, Intent::TimeUp | Intent::EndRound) => self.finish_round(false),
            (GamePhase::Drawing, Intent::GuessCorrect) => self.finish_round(true),
            (GamePhase::Drawing, Intent::SkipWord) => self.skip_word(),
            (GamePhase::Drawing, Intent::Pointer(event)) => {
                self.canvas.handle(event);
                self.sync_canvas();
                Ok(Vec::new())
            }
            (GamePhase::Drawing, Intent::ClearCanvas) => {
                self.canvas.clear();
                self.sync_canvas();
                Ok(Vec::new())
            }

            (GamePhase::Celebration, Intent::CelebrationFinished) => {
                let (word, drawer) = match &self.screen {
                    Screen::Celebration { word, drawer } => (word.clone(), drawer.clone()),
                    _ => return Err(self.invalid(intent)),
                };
                self.enter(Screen::TimeUp { word, drawer });
                Ok(Vec::new())
            }

            (GamePhase::TimeUp, Intent::NextRound) => {
                let word = self.words.pick_word(self.difficulty).map(|w| w.text.clone());
                self.enter_setup(word);
                Ok(Vec::new())
            }

            _ => Err(self.invalid(intent)),
        }
    }

    fn invalid(&self, intent: Intent) -> GameError {
        debug!("Rejected {} on the {} screen", intent.name(), self.phase());
        GameError::InvalidIntent {
            phase: self.phase(),
            intent: intent.name().to_string(),
        }
    }

    fn enter(&mut self, screen: Screen) {
        if screen.phase() != self.screen.phase() {
            info!("Screen {} -> {}", self.screen.phase(), screen.phase());
        }
        self.epoch += 1;
        self.canvas
            .set_enabled(matches!(screen, Screen::Drawing { .. }));
        self.screen = screen;
    }

    fn enter_setup(&mut self, word: Option<String>) {
        self.enter(Screen::Setup {
            difficulty: self.difficulty,
            word,
            word_counts: self.words.word_counts(),
            mascot: MascotMood::Idle,
        });
    }

    fn start_game(&mut self) -> Result<Vec<Effect>, GameError> {
        let word = match &self.screen {
            Screen::Setup { word: Some(word), .. } => word.clone(),
            _ => self.pick_word()?,
        };

        // The session outlives single rounds so the score keeps adding up
        if self.service.current_session().is_none() {
            self.service
                .create_session(&self.config.player_name, self.config.settings());
        }

        if self.service.start_new_round(&word).is_none() {
            warn!("Failed to start a round for '{}'", word);
            return Err(GameError::NoActiveSession);
        }

        self.begin_drawing(word)
    }

    fn skip_word(&mut self) -> Result<Vec<Effect>, GameError> {
        let word = self.pick_word()?;
        if self.service.start_new_round(&word).is_none() {
            warn!("Failed to start a round for '{}'", word);
            return Err(GameError::NoActiveSession);
        }
        info!("Skipped to a new word");
        self.begin_drawing(word)
    }

    fn begin_drawing(&mut self, word: String) -> Result<Vec<Effect>, GameError> {
        let session = self
            .service
            .current_session()
            .ok_or(GameError::NoActiveSession)?;
        let drawer = session.player.clone();
        let time_remaining = session.settings.round_duration;

        self.canvas.clear();
        self.enter(Screen::Drawing {
            word,
            drawer,
            time_remaining,
            mascot: MascotMood::Idle,
            paths: Vec::new(),
            stroke_style: self.canvas.style().clone(),
        });

        Ok(vec![Effect::StartCountdown {
            epoch: self.epoch,
            interval: self.config.tick_interval,
        }])
    }

    fn tick(&mut self) -> Vec<Effect> {
        let Screen::Drawing {
            time_remaining,
            mascot,
            ..
        } = &mut self.screen
        else {
            return Vec::new();
        };

        *time_remaining = time_remaining.saturating_sub(1);
        if *time_remaining <= SAD_MASCOT_THRESHOLD {
            *mascot = MascotMood::Sad;
        }

        if *time_remaining > 0 {
            return Vec::new();
        }

        info!("Time is up");
        // The round is known to be open while drawing
        self.finish_round(false).unwrap_or_else(|e| {
            warn!("Could not close the round on time up: {}", e);
            vec![Effect::StopCountdown]
        })
    }

    fn finish_round(&mut self, completed: bool) -> Result<Vec<Effect>, GameError> {
        let word = match &self.screen {
            Screen::Drawing { word, .. } => word.clone(),
            _ => return Err(GameError::NoActiveRound),
        };

        self.service
            .end_current_round(completed)
            .ok_or(GameError::NoActiveRound)?;
        let drawer = self
            .service
            .current_drawer()
            .cloned()
            .ok_or(GameError::NoActiveSession)?;

        if completed {
            self.enter(Screen::Celebration { word, drawer });
            Ok(vec![
                Effect::StopCountdown,
                Effect::Schedule {
                    epoch: self.epoch,
                    delay: self.config.celebration_delay,
                    intent: Intent::CelebrationFinished,
                },
            ])
        } else {
            self.enter(Screen::TimeUp { word, drawer });
            Ok(vec![Effect::StopCountdown])
        }
    }

    fn quit(&mut self) -> Vec<Effect> {
        self.service.reset_game();
        self.canvas.clear();
        self.enter(Screen::Welcome);
        vec![Effect::CancelAll]
    }

    fn pick_word(&self) -> Result<String, GameError> {
        self.words
            .pick_word(self.difficulty)
            .map(|w| w.text.clone())
            .ok_or(GameError::NoWordsAvailable)
    }

    fn sync_canvas(&mut self) {
        if let Screen::Drawing { paths, .. } = &mut self.screen {
            *paths = self.canvas.path_data();
        }
    }
}
