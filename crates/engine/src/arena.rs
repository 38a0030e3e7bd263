//! Multiplayer quiz arena simulation
//!
//! Opponents are generated locally. All randomness comes from the caller's
//! `Rng`, so a seeded generator replays the same match.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Base points for a correct answer
pub const CORRECT_POINTS: i64 = 100;
/// Maximum extra points for answering instantly
pub const SPEED_POINTS: i64 = 50;
/// Fastest an opponent ever answers
pub const MIN_RESPONSE_MS: u64 = 1_500;
pub const DEFAULT_TIME_LIMIT_MS: u64 = 15_000;
/// Longest time limit a match accepts
pub const MAX_TIME_LIMIT_MS: u64 = 60_000;

const OPPONENT_NAMES: &[&str] = &[
    "PennyPincher",
    "StockSurfer",
    "BudgetBoss",
    "CoinCollector",
    "SavvySaver",
    "DividendDan",
    "CreditCrusher",
    "CashFlowKid",
];

/// The human player's answer to one question
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerAnswer {
    pub correct: bool,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Opponent {
    pub name: String,
    pub skill: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Standing {
    pub name: String,
    pub is_player: bool,
    pub score: i64,
    pub correct: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArenaResult {
    pub standings: Vec<Standing>,
    /// 1-based finishing position of the player
    pub placement: usize,
    pub xp: i64,
    pub won: bool,
}

/// Points for one answer
pub fn answer_points(correct: bool, elapsed_ms: u64, time_limit_ms: u64) -> i64 {
    if !correct || time_limit_ms == 0 {
        return 0;
    }
    let elapsed = elapsed_ms.min(time_limit_ms);
    let remaining = u128::from(time_limit_ms - elapsed);
    // At most SPEED_POINTS, so the narrowing cast is lossless
    let speed = SPEED_POINTS as u128 * remaining / u128::from(time_limit_ms);
    CORRECT_POINTS + speed as i64
}

/// XP for finishing in `placement`
pub fn placement_xp(placement: usize) -> i64 {
    match placement {
        1 => 50,
        2 => 30,
        3 => 20,
        _ => 10,
    }
}

/// Generate `count` opponents with distinct names
pub fn generate_opponents<R: Rng>(rng: &mut R, count: usize) -> Vec<Opponent> {
    let mut names: Vec<&str> = OPPONENT_NAMES.to_vec();
    (0..count)
        .map(|i| {
            let name = if names.is_empty() {
                format!("Rival{}", i + 1)
            } else {
                names.swap_remove(rng.gen_range(0..names.len())).to_string()
            };
            Opponent {
                name,
                skill: rng.gen_range(0.35..0.9),
            }
        })
        .collect()
}

/// Play one match against `opponents` fake players
pub fn simulate_match<R: Rng>(
    rng: &mut R,
    player_name: &str,
    answers: &[PlayerAnswer],
    opponents: usize,
    time_limit_ms: u64,
) -> ArenaResult {
    let time_limit_ms = time_limit_ms.clamp(MIN_RESPONSE_MS + 1, MAX_TIME_LIMIT_MS);
    let field = generate_opponents(rng, opponents);

    let mut standings = Vec::with_capacity(field.len() + 1);
    standings.push(Standing {
        name: player_name.to_string(),
        is_player: true,
        score: answers
            .iter()
            .map(|a| answer_points(a.correct, a.elapsed_ms, time_limit_ms))
            .sum(),
        correct: answers.iter().filter(|a| a.correct).count(),
    });

    for opponent in field {
        let mut score = 0;
        let mut correct = 0;
        for _ in answers {
            let is_correct = rng.gen_bool(opponent.skill);
            let elapsed = rng.gen_range(MIN_RESPONSE_MS..time_limit_ms);
            if is_correct {
                correct += 1;
            }
            score += answer_points(is_correct, elapsed, time_limit_ms);
        }
        standings.push(Standing {
            name: opponent.name,
            is_player: false,
            score,
            correct,
        });
    }

    // Stable sort keeps the player ahead on ties
    standings.sort_by(|a, b| b.score.cmp(&a.score));

    let placement = standings
        .iter()
        .position(|s| s.is_player)
        .map(|i| i + 1)
        .unwrap_or(standings.len());

    ArenaResult {
        standings,
        placement,
        xp: placement_xp(placement),
        won: placement == 1,
    }
}
