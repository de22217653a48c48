use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::stroke::StrokeStyle;
use crate::user::Player;
use crate::word::{WordCounts, WordDifficulty};
use crate::{RoundId, SessionId};

pub const DEFAULT_ROUND_DURATION_SECONDS: u32 = 20;
pub const DEFAULT_POINTS_PER_DRAWING: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSettings {
    pub round_duration: u32, // seconds
    pub points_per_drawing: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            round_duration: DEFAULT_ROUND_DURATION_SECONDS,
            points_per_drawing: DEFAULT_POINTS_PER_DRAWING,
        }
    }
}

/// Partial settings supplied when a session is created; unset fields keep
/// their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SettingsOverride {
    pub round_duration: Option<u32>,
    pub points_per_drawing: Option<u32>,
}

impl SettingsOverride {
    pub fn apply(self, base: GameSettings) -> GameSettings {
        GameSettings {
            round_duration: self.round_duration.unwrap_or(base.round_duration),
            points_per_drawing: self.points_per_drawing.unwrap_or(base.points_per_drawing),
        }
    }
}

impl From<GameSettings> for SettingsOverride {
    fn from(settings: GameSettings) -> Self {
        Self {
            round_duration: Some(settings.round_duration),
            points_per_drawing: Some(settings.points_per_drawing),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Round {
    pub id: RoundId,
    pub word: String,
    pub start_time: String,       // ISO 8601 string
    pub end_time: Option<String>, // ISO 8601 string
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub id: SessionId,
    pub player: Player,
    pub rounds: Vec<Round>,
    pub current_round_id: Option<RoundId>,
    pub current_phase: GamePhase,
    pub settings: GameSettings,
    pub created_at: String, // ISO 8601 string
}

impl Session {
    pub fn current_round(&self) -> Option<&Round> {
        let id = self.current_round_id?;
        self.rounds.iter().find(|round| round.id == id)
    }

    pub fn completed_rounds(&self) -> usize {
        self.rounds.iter().filter(|round| round.completed).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GamePhase {
    Welcome,
    Setup,
    Drawing,
    TimeUp,
    Celebration,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Welcome => "welcome",
            GamePhase::Setup => "setup",
            GamePhase::Drawing => "drawing",
            GamePhase::TimeUp => "timeup",
            GamePhase::Celebration => "celebration",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MascotMood {
    #[default]
    Idle,
    Happy,
    Sad,
}

/// What the presentation layer should show right now, with exactly the
/// data each screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Screen {
    Welcome,
    Setup {
        difficulty: WordDifficulty,
        word: Option<String>,
        word_counts: WordCounts,
        mascot: MascotMood,
    },
    Drawing {
        word: String,
        drawer: Player,
        time_remaining: u32,
        mascot: MascotMood,
        paths: Vec<String>,
        stroke_style: StrokeStyle,
    },
    TimeUp {
        word: String,
        drawer: Player,
    },
    Celebration {
        word: String,
        drawer: Player,
    },
}

impl Screen {
    pub fn phase(&self) -> GamePhase {
        match self {
            Screen::Welcome => GamePhase::Welcome,
            Screen::Setup { .. } => GamePhase::Setup,
            Screen::Drawing { .. } => GamePhase::Drawing,
            Screen::TimeUp { .. } => GamePhase::TimeUp,
            Screen::Celebration { .. } => GamePhase::Celebration,
        }
    }

    pub fn drawer(&self) -> Option<&Player> {
        match self {
            Screen::Drawing { drawer, .. }
            | Screen::TimeUp { drawer, .. }
            | Screen::Celebration { drawer, .. } => Some(drawer),
            Screen::Welcome | Screen::Setup { .. } => None,
        }
    }

    pub fn word(&self) -> Option<&str> {
        match self {
            Screen::Setup { word, .. } => word.as_deref(),
            Screen::Drawing { word, .. }
            | Screen::TimeUp { word, .. }
            | Screen::Celebration { word, .. } => Some(word),
            Screen::Welcome => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_override() {
        let base = GameSettings::default();
        assert_eq!(base.round_duration, 20);
        assert_eq!(base.points_per_drawing, 5);

        let only_points = SettingsOverride {
            points_per_drawing: Some(10),
            ..Default::default()
        };
        let settings = only_points.apply(base);
        assert_eq!(settings.round_duration, 20);
        assert_eq!(settings.points_per_drawing, 10);

        assert_eq!(SettingsOverride::default().apply(base), base);
    }

    #[test]
    fn test_current_round_lookup() {
        let round = Round {
            id: uuid::Uuid::new_v4(),
            word: "cat".to_string(),
            start_time: "2024-01-01T00:00:00Z".to_string(),
            end_time: None,
            completed: false,
        };
        let mut session = Session {
            id: uuid::Uuid::new_v4(),
            player: Player::new("You"),
            rounds: vec![round.clone()],
            current_round_id: None,
            current_phase: GamePhase::Setup,
            settings: GameSettings::default(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        assert!(session.current_round().is_none());

        session.current_round_id = Some(round.id);
        assert_eq!(session.current_round().map(|r| r.word.as_str()), Some("cat"));

        session.current_round_id = Some(uuid::Uuid::new_v4());
        assert!(session.current_round().is_none());
    }

    #[test]
    fn test_screen_phase_mapping() {
        let drawer = Player::new("You");
        assert_eq!(Screen::Welcome.phase(), GamePhase::Welcome);
        assert!(Screen::Welcome.drawer().is_none());

        let screen = Screen::TimeUp {
            word: "cat".to_string(),
            drawer: drawer.clone(),
        };
        assert_eq!(screen.phase(), GamePhase::TimeUp);
        assert_eq!(screen.word(), Some("cat"));
        assert_eq!(screen.drawer(), Some(&drawer));
        assert_eq!(GamePhase::TimeUp.to_string(), "timeup");
    }
}
