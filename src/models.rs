use crate::error::{Result, VocabError};
use serde::{Deserialize, Serialize};

/// One source-term/target-term pair. Identity is its position in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    #[serde(rename = "en")]
    pub source_text: String,
    #[serde(rename = "ja")]
    pub target_text: String,
}

impl WordPair {
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }

    /// Trims both terms and rejects the pair if either ends up empty.
    pub fn validated(source_text: &str, target_text: &str) -> Result<Self> {
        let source = source_text.trim();
        let target = target_text.trim();
        if source.is_empty() || target.is_empty() {
            return Err(VocabError::Validation(
                "Please fill in both the word and its translation.".to_string(),
            ));
        }
        Ok(Self::new(source, target))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Learn,
    List,
    Add,
}

impl Mode {
    pub fn all() -> [Mode; 3] {
        [Mode::Learn, Mode::List, Mode::Add]
    }

    pub fn title(self) -> &'static str {
        match self {
            Mode::Learn => "Learn",
            Mode::List => "List",
            Mode::Add => "Add",
        }
    }

    pub fn shortcut(self) -> &'static str {
        match self {
            Mode::Learn => "F1",
            Mode::List => "F2",
            Mode::Add => "F3",
        }
    }

    /// The "next question" control only exists while learning.
    pub fn shows_next_control(self) -> bool {
        self == Mode::Learn
    }
}

/// Consecutive correct answers since the last miss. Lives for the process only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streak(u32);

impl Streak {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn record(&mut self, correct: bool) {
        if correct {
            self.0 = self.0.saturating_add(1);
        } else {
            self.0 = 0;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_pair_wire_shape() {
        let pair = WordPair::new("dog", "犬");
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"en":"dog","ja":"犬"}"#);
    }

    #[test]
    fn test_validated_trims_both_fields() {
        let pair = WordPair::validated("  cat ", "\t猫 ").unwrap();
        assert_eq!(pair, WordPair::new("cat", "猫"));
    }

    #[test]
    fn test_validated_rejects_blank_fields() {
        assert!(WordPair::validated("   ", "猫").is_err());
        assert!(WordPair::validated("cat", "").is_err());
        assert!(matches!(
            WordPair::validated("", " "),
            Err(VocabError::Validation(_))
        ));
    }

    #[test]
    fn test_only_learn_shows_next_control() {
        assert!(Mode::Learn.shows_next_control());
        assert!(!Mode::List.shows_next_control());
        assert!(!Mode::Add.shows_next_control());
    }

    #[test]
    fn test_streak_counts_and_resets() {
        let mut streak = Streak::default();
        assert_eq!(streak.value(), 0);
        for _ in 0..5 {
            streak.record(true);
        }
        assert_eq!(streak.value(), 5);
        streak.record(false);
        assert_eq!(streak.value(), 0);
        streak.record(false);
        assert_eq!(streak.value(), 0);
    }
}
