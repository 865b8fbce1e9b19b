//! Core quiz types: colors, RNG, configuration and session state.
//!
//! Nothing in here knows how a round is displayed. The `display` and
//! `controller` modules build on these types.

pub mod color;
pub mod rng;
pub mod config;
pub mod state;

pub use color::{Color, HEX_DIGITS};
pub use rng::{QuizRng, QuizRngState};
pub use config::{QuizConfig, DEFAULT_OPTION_COUNT, MIN_OPTION_COUNT};
pub use state::{GameSnapshot, GameState, Swatches};
