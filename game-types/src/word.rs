use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum WordDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl WordDifficulty {
    pub const ALL: [WordDifficulty; 3] = [
        WordDifficulty::Easy,
        WordDifficulty::Medium,
        WordDifficulty::Hard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WordDifficulty::Easy => "easy",
            WordDifficulty::Medium => "medium",
            WordDifficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for WordDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(WordDifficulty::Easy),
            "medium" => Ok(WordDifficulty::Medium),
            "hard" => Ok(WordDifficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Word {
    pub text: String,
    pub difficulty: WordDifficulty,
}

/// Tier sizes shown next to each difficulty button
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordCounts {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl WordCounts {
    pub fn get(&self, difficulty: WordDifficulty) -> u32 {
        match difficulty {
            WordDifficulty::Easy => self.easy,
            WordDifficulty::Medium => self.medium,
            WordDifficulty::Hard => self.hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("easy".parse::<WordDifficulty>(), Ok(WordDifficulty::Easy));
        assert_eq!(" MEDIUM ".parse::<WordDifficulty>(), Ok(WordDifficulty::Medium));
        assert_eq!("Hard".parse::<WordDifficulty>(), Ok(WordDifficulty::Hard));
        assert!("extreme".parse::<WordDifficulty>().is_err());
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&WordDifficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
