use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::PlayerId;

pub const DEFAULT_PLAYER_NAME: &str = "Player";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Only ever grows, and only when a round is ended as completed.
    pub score: u32,
}

impl Player {
    pub fn new(name: &str) -> Self {
        let name = name.trim();
        Self {
            id: uuid::Uuid::new_v4(),
            name: if name.is_empty() {
                DEFAULT_PLAYER_NAME.to_string()
            } else {
                name.to_string()
            },
            score: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new("You");
        assert_eq!(player.name, "You");
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_blank_name_falls_back_to_default() {
        assert_eq!(Player::new("").name, DEFAULT_PLAYER_NAME);
        assert_eq!(Player::new("   ").name, DEFAULT_PLAYER_NAME);
        assert_eq!(Player::new("  Ana ").name, "Ana");
    }
}
