use crate::input::TextInput;
use crate::models::{Streak, Verdict, WordPair};
use crate::store::WordStore;
use rand::Rng;

pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Stored targets are trimmed on entry, so only case is folded here.
pub fn normalize_expected(expected: &str) -> String {
    expected.to_lowercase()
}

pub fn judge(submitted: &str, expected: &str) -> Verdict {
    if normalize_answer(submitted) == normalize_expected(expected) {
        Verdict::Correct
    } else {
        Verdict::Incorrect {
            expected: expected.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnFocus {
    Answer,
    NextButton,
}

#[derive(Debug, Clone)]
pub struct Question {
    pub pair: WordPair,
    pub input: TextInput,
    pub verdict: Option<Verdict>,
    pub focus: LearnFocus,
}

impl Question {
    pub fn new(pair: WordPair) -> Self {
        Self {
            pair,
            input: TextInput::new(),
            verdict: None,
            focus: LearnFocus::Answer,
        }
    }

    pub fn is_judged(&self) -> bool {
        self.verdict.is_some()
    }

    /// Judges the typed answer once and hands focus to the next-question control.
    pub fn submit(&mut self, streak: &mut Streak) -> Option<&Verdict> {
        if self.verdict.is_none() {
            let verdict = judge(self.input.value(), &self.pair.target_text);
            streak.record(verdict.is_correct());
            self.verdict = Some(verdict);
            self.focus = LearnFocus::NextButton;
        }
        self.verdict.as_ref()
    }
}

#[derive(Debug, Clone)]
pub enum LearnState {
    Empty,
    Loading,
    Asking(Question),
}

/// Uniform pick over the whole store; the previous question may come up again.
pub fn pick_question<R: Rng + ?Sized>(store: &WordStore, rng: &mut R) -> Option<Question> {
    if store.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..store.len());
    store.get(index).cloned().map(Question::new)
}
