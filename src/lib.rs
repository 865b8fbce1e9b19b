//! # color-quiz
//!
//! A color-matching quiz. Each round shows a target color code and a set
//! of swatches, exactly one of which is guaranteed to carry that code.
//! The player gets one guess per round and the score counts correct guesses.
//!
//! ## Design Principles
//!
//! 1. **Surface-Agnostic**: The quiz drives a `DisplaySurface` trait and never
//!    assumes a particular UI toolkit.
//!
//! 2. **Owned Session**: A `QuizController` owns its `GameState`. There is no
//!    global game; hosts hold the controller and feed it events.
//!
//! 3. **Exact Matching**: Colors compare by their canonical `#RRGGBB` string.
//!
//! ## Modules
//!
//! - `core`: Colors, RNG, configuration, session state
//! - `display`: Display surface trait and an in-memory surface
//! - `controller`: Rendering, guesses, round advancement
//! - `error`: Error type
//!
//! ## Example
//!
//! ```
//! use color_quiz::{Element, HeadlessSurface, InputEvent, QuizConfig, QuizController};
//!
//! let config = QuizConfig::new().with_seed(42);
//! let mut quiz = QuizController::from_config(&config, HeadlessSurface::new()).unwrap();
//! quiz.dispatch(&InputEvent::SessionStart);
//!
//! let tag = quiz.surface().swatch_tag(Element::Options, 0).unwrap().to_string();
//! let feedback = quiz.dispatch(&InputEvent::option(tag));
//! assert!(feedback.is_some());
//!
//! quiz.dispatch(&InputEvent::AdvanceClicked);
//! assert_eq!(quiz.state().round(), 2);
//! ```

pub mod core;
pub mod display;
pub mod controller;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Color, GameSnapshot, GameState, QuizConfig, QuizRng, QuizRngState};

pub use crate::display::{DisplaySurface, Element, HeadlessSurface, Swatch};

pub use crate::controller::{Feedback, InputEvent, QuizController, RoundPhase};

pub use crate::error::{QuizError, Result};
