//! Quiz questions and score-to-XP conversion

use serde::{Deserialize, Serialize};

/// XP bonus for answering every question correctly
pub const PERFECT_BONUS_XP: i64 = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// XP per correct answer
    pub fn xp_per_correct(&self) -> i64 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 20,
        }
    }
}

/// A multiple-choice question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: String,
    pub topic: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl QuizQuestion {
    /// Usable only if there are at least two options and the answer is one of them
    pub fn is_well_formed(&self) -> bool {
        !self.prompt.trim().is_empty()
            && self.options.len() >= 2
            && self.correct_index < self.options.len()
    }
}

/// One answered question in a submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuizAnswer {
    #[serde(default)]
    pub difficulty: Difficulty,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub perfect: bool,
    pub xp: i64,
}

/// Score a finished quiz
pub fn score_quiz(answers: &[QuizAnswer]) -> QuizScore {
    let correct = answers.iter().filter(|a| a.correct).count();
    let total = answers.len();
    let perfect = total > 0 && correct == total;

    let mut xp: i64 = answers
        .iter()
        .filter(|a| a.correct)
        .map(|a| a.difficulty.xp_per_correct())
        .sum();
    if perfect {
        xp += PERFECT_BONUS_XP;
    }

    QuizScore {
        correct,
        total,
        perfect,
        xp,
    }
}
