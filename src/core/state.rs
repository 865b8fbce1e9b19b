//! Quiz state: the current round and the running counters.
//!
//! ## GameState
//!
//! - `colors`: this round's swatches, replaced wholesale each round
//! - `correct_color`: one of `colors`, picked uniformly
//! - `score`: correct guesses so far, never decreases
//! - `round`: starts at 1, advanced only by the controller
//!
//! `start_new_round` touches neither counter. Scoring and round advancement
//! belong to whoever drives the session (see `QuizController`).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::config::QuizConfig;
use super::rng::{QuizRng, QuizRngState};
use crate::error::Result;

/// One round's swatches. Inline for the default four options.
pub type Swatches = SmallVec<[Color; 4]>;

/// Complete state of one quiz session.
#[derive(Clone, Debug)]
pub struct GameState {
    option_count: usize,
    colors: Swatches,
    correct_color: Option<Color>,
    score: u32,
    round: u32,
    rng: QuizRng,
}

impl GameState {
    /// Create a session at round 1 with score 0 and no round generated yet.
    ///
    /// Fails if `config.option_count < 2`.
    pub fn new(config: &QuizConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => QuizRng::new(seed),
            None => QuizRng::from_entropy(),
        };
        log::debug!(
            "new quiz session: {} options, seed {}",
            config.option_count,
            rng.seed()
        );

        Ok(Self {
            option_count: config.option_count,
            colors: Swatches::new(),
            correct_color: None,
            score: 0,
            round: 1,
            rng,
        })
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.option_count
    }

    /// This round's swatches, in display order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The target for this round. `None` until the first round is generated.
    #[must_use]
    pub fn correct_color(&self) -> Option<Color> {
        self.correct_color
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Draw six independent hex digits.
    ///
    /// Nothing prevents two swatches in one round from coming out equal.
    pub fn generate_random_color(&mut self) -> Color {
        let mut nibbles = [0u8; 6];
        for nibble in &mut nibbles {
            *nibble = self.rng.hex_digit();
        }
        Color::from_nibbles(nibbles)
    }

    /// Replace the swatches and pick a new target among them.
    pub fn start_new_round(&mut self) {
        let colors: Swatches = (0..self.option_count)
            .map(|_| self.generate_random_color())
            .collect();
        let correct_index = self.rng.index(self.option_count);

        self.correct_color = Some(colors[correct_index]);
        self.colors = colors;

        log::debug!(
            "round {} generated: {} options, target at index {}",
            self.round,
            self.colors.len(),
            correct_index
        );
    }

    /// Record a correct guess.
    pub fn award_point(&mut self) {
        self.score += 1;
    }

    /// Move the round counter forward by one.
    pub fn next_round(&mut self) {
        self.round += 1;
    }

    /// Exact canonical match against the current target.
    #[must_use]
    pub fn is_correct(&self, chosen: Color) -> bool {
        self.correct_color == Some(chosen)
    }

    /// RNG state, for reproducing the rest of the session.
    #[must_use]
    pub fn rng_state(&self) -> QuizRngState {
        self.rng.state()
    }

    /// Read-only copy of what a player can see.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.score,
            round: self.round,
            colors: self.colors.to_vec(),
            correct_color: self.correct_color,
        }
    }
}

/// Serializable view of a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub score: u32,
    pub round: u32,
    pub colors: Vec<Color>,
    pub correct_color: Option<Color>,
}
