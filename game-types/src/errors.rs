use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::game::GamePhase;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    #[error("No active session")]
    NoActiveSession,
    #[error("No active round")]
    NoActiveRound,
    #[error("No words available")]
    NoWordsAvailable,
    #[error("Intent {intent} is not valid on the {phase} screen")]
    InvalidIntent { phase: GamePhase, intent: String },
}
