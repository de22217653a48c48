use anyhow::{Context, Result, anyhow};
use game_types::{Word, WordCounts, WordDifficulty};
use rand::Rng;
use rand::seq::SliceRandom;
use std::path::Path;
use tracing::{debug, info};

const BUILTIN_WORDS: &[(&str, WordDifficulty)] = &[
    ("cat", WordDifficulty::Easy),
    ("dog", WordDifficulty::Easy),
    ("fish", WordDifficulty::Easy),
    ("bird", WordDifficulty::Easy),
    ("house", WordDifficulty::Easy),
    ("car", WordDifficulty::Easy),
    ("ball", WordDifficulty::Easy),
    ("book", WordDifficulty::Easy),
    ("apple", WordDifficulty::Easy),
    ("banana", WordDifficulty::Easy),
    ("pizza", WordDifficulty::Easy),
    ("cake", WordDifficulty::Easy),
    ("tree", WordDifficulty::Easy),
    ("sun", WordDifficulty::Easy),
    ("moon", WordDifficulty::Easy),
    ("star", WordDifficulty::Easy),
    ("elephant", WordDifficulty::Medium),
    ("butterfly", WordDifficulty::Medium),
    ("giraffe", WordDifficulty::Medium),
    ("guitar", WordDifficulty::Medium),
    ("camera", WordDifficulty::Medium),
    ("sandwich", WordDifficulty::Medium),
    ("spaghetti", WordDifficulty::Medium),
    ("watermelon", WordDifficulty::Medium),
    ("rainbow", WordDifficulty::Medium),
    ("mountain", WordDifficulty::Medium),
    ("ocean", WordDifficulty::Medium),
    ("swimming", WordDifficulty::Medium),
    ("dancing", WordDifficulty::Medium),
    ("reading", WordDifficulty::Medium),
    ("cooking", WordDifficulty::Medium),
    ("teacher", WordDifficulty::Medium),
    ("doctor", WordDifficulty::Medium),
    ("rhinoceros", WordDifficulty::Hard),
    ("microscope", WordDifficulty::Hard),
    ("telescope", WordDifficulty::Hard),
    ("pineapple", WordDifficulty::Hard),
    ("lightning", WordDifficulty::Hard),
    ("skateboard", WordDifficulty::Hard),
    ("graduation", WordDifficulty::Hard),
    ("photography", WordDifficulty::Hard),
    ("firefighter", WordDifficulty::Hard),
    ("astronaut", WordDifficulty::Hard),
];

/// Difficulty-tagged word pool the drawer's secret word is drawn from.
#[derive(Debug, Clone)]
pub struct WordProvider {
    words: Vec<Word>,
}

impl WordProvider {
    /// The word list shipped with the game
    pub fn builtin() -> Self {
        let words = BUILTIN_WORDS
            .iter()
            .map(|(text, difficulty)| Word {
                text: text.to_string(),
                difficulty: *difficulty,
            })
            .collect();
        Self { words }
    }

    /// Parse a word list with one `difficulty:word` entry per line.
    /// Blank lines and `#` comments are skipped; duplicates are dropped.
    pub fn from_word_list(word_list: &str) -> Result<Self> {
        let mut words: Vec<Word> = Vec::new();

        for (line_number, line) in word_list.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (difficulty, text) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("Line {}: expected `difficulty:word`", line_number + 1))?;

            let difficulty: WordDifficulty = difficulty
                .parse()
                .map_err(|e: String| anyhow!("Line {}: {}", line_number + 1, e))?;

            let text = text.trim().to_lowercase();
            if text.is_empty() {
                return Err(anyhow!("Line {}: empty word", line_number + 1));
            }

            if words.iter().any(|w| w.text == text) {
                debug!("Skipping duplicate word '{}'", text);
                continue;
            }

            words.push(Word { text, difficulty });
        }

        Ok(Self { words })
    }

    /// Load a word list file in the `difficulty:word` format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        let provider = Self::from_word_list(&contents)
            .with_context(|| format!("Invalid word list {}", path.display()))?;

        info!("Loaded {} words from {}", provider.len(), path.display());
        Ok(provider)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words_by_difficulty(&self, difficulty: WordDifficulty) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|word| word.difficulty == difficulty)
            .collect()
    }

    pub fn word_count(&self, difficulty: WordDifficulty) -> usize {
        self.words
            .iter()
            .filter(|word| word.difficulty == difficulty)
            .count()
    }

    pub fn word_counts(&self) -> WordCounts {
        WordCounts {
            easy: self.word_count(WordDifficulty::Easy) as u32,
            medium: self.word_count(WordDifficulty::Medium) as u32,
            hard: self.word_count(WordDifficulty::Hard) as u32,
        }
    }

    pub fn random_word_by_difficulty(&self, difficulty: WordDifficulty) -> Option<&Word> {
        self.random_word_by_difficulty_with_rng(difficulty, &mut rand::thread_rng())
    }

    pub fn random_word_by_difficulty_with_rng<R: Rng + ?Sized>(
        &self,
        difficulty: WordDifficulty,
        rng: &mut R,
    ) -> Option<&Word> {
        self.words_by_difficulty(difficulty).choose(rng).copied()
    }

    pub fn random_word(&self) -> Option<&Word> {
        self.random_word_with_rng(&mut rand::thread_rng())
    }

    pub fn random_word_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// A word of the requested tier, or any word when that tier is empty.
    /// Only `None` when the whole pool is empty.
    pub fn pick_word(&self, difficulty: WordDifficulty) -> Option<&Word> {
        self.pick_word_with_rng(difficulty, &mut rand::thread_rng())
    }

    pub fn pick_word_with_rng<R: Rng + ?Sized>(
        &self,
        difficulty: WordDifficulty,
        rng: &mut R,
    ) -> Option<&Word> {
        if let Some(word) = self.random_word_by_difficulty_with_rng(difficulty, rng) {
            return Some(word);
        }
        debug!("No {} words available, falling back to any difficulty", difficulty);
        self.random_word_with_rng(rng)
    }
}

impl Default for WordProvider {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_tier_sizes() {
        let provider = WordProvider::builtin();
        assert_eq!(provider.word_count(WordDifficulty::Easy), 16);
        assert_eq!(provider.word_count(WordDifficulty::Medium), 17);
        assert_eq!(provider.word_count(WordDifficulty::Hard), 10);
        assert_eq!(provider.len(), 43);

        let counts = provider.word_counts();
        assert_eq!(counts.get(WordDifficulty::Medium), 17);
    }

    #[test]
    fn test_random_word_matches_tier() {
        let provider = WordProvider::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        for difficulty in WordDifficulty::ALL {
            for _ in 0..20 {
                let word = provider
                    .random_word_by_difficulty_with_rng(difficulty, &mut rng)
                    .unwrap();
                assert_eq!(word.difficulty, difficulty);
            }
        }
    }

    #[test]
    fn test_empty_tier_falls_back_to_whole_pool() {
        let provider = WordProvider::from_word_list("easy:cat\neasy:dog").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(provider
            .random_word_by_difficulty_with_rng(WordDifficulty::Hard, &mut rng)
            .is_none());

        let word = provider
            .pick_word_with_rng(WordDifficulty::Hard, &mut rng)
            .unwrap();
        assert_eq!(word.difficulty, WordDifficulty::Easy);
        assert!(word.text == "cat" || word.text == "dog");
    }

    #[test]
    fn test_empty_pool_has_no_words() {
        let provider = WordProvider::from_word_list("").unwrap();
        assert!(provider.is_empty());
        assert!(provider.random_word().is_none());
        assert!(provider.pick_word(WordDifficulty::Easy).is_none());
        assert_eq!(provider.word_counts(), WordCounts::default());
    }

    #[test]
    fn test_word_list_parsing() {
        let word_list = "# comment\n\neasy: Cat \nMEDIUM:guitar\n  hard:astronaut\neasy:cat\n";
        let provider = WordProvider::from_word_list(word_list).unwrap();

        assert_eq!(provider.len(), 3);
        assert_eq!(provider.words_by_difficulty(WordDifficulty::Easy)[0].text, "cat");
        assert_eq!(provider.word_count(WordDifficulty::Medium), 1);
        assert_eq!(provider.word_count(WordDifficulty::Hard), 1);
    }

    #[test]
    fn test_word_list_errors() {
        let result = WordProvider::from_word_list("easy:cat\njust-a-word");
        assert!(result.unwrap_err().to_string().contains("Line 2"));

        let result = WordProvider::from_word_list("extreme:volcano");
        assert!(result.unwrap_err().to_string().contains("Unknown difficulty"));

        let result = WordProvider::from_word_list("easy:   ");
        assert!(result.unwrap_err().to_string().contains("empty word"));
    }

    #[test]
    fn test_missing_file() {
        let result = WordProvider::from_file("/definitely/not/here/words.txt");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read word list"));
    }
}
