use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::stroke::PointerEvent;
use crate::word::WordDifficulty;

/// User intents forwarded by the presentation layer, plus the timer-driven
/// intents the controller schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Intent {
    Begin,
    SelectDifficulty { difficulty: WordDifficulty },
    /// "Let's Draw!" pressed; the game starts after the mascot flourish
    RequestStart,
    StartGame,
    Tick,
    TimeUp,
    EndRound,
    GuessCorrect,
    SkipWord,
    CelebrationFinished,
    NextRound,
    Quit,
    Pointer(PointerEvent),
    ClearCanvas,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Begin => "begin",
            Intent::SelectDifficulty { .. } => "select_difficulty",
            Intent::RequestStart => "request_start",
            Intent::StartGame => "start_game",
            Intent::Tick => "tick",
            Intent::TimeUp => "time_up",
            Intent::EndRound => "end_round",
            Intent::GuessCorrect => "guess_correct",
            Intent::SkipWord => "skip_word",
            Intent::CelebrationFinished => "celebration_finished",
            Intent::NextRound => "next_round",
            Intent::Quit => "quit",
            Intent::Pointer(_) => "pointer",
            Intent::ClearCanvas => "clear_canvas",
        }
    }
}
