//! Session controller: rendering and input handling.
//!
//! `QuizController` is the only owner of a session's `GameState`. Hosts
//! forward their events to it, either through the individual callbacks or
//! through `dispatch`.

pub mod event;
pub mod quiz;

pub use event::{Feedback, InputEvent};
pub use quiz::{QuizController, RoundPhase};
