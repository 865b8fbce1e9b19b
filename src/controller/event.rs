//! Input events and guess feedback.
//!
//! Hosts translate whatever their platform delivers (DOM events, key
//! presses, test calls) into `InputEvent`s and feed them to
//! `QuizController::dispatch` in arrival order.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Something the player (or the host) did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The host is ready; show the first round.
    SessionStart,

    /// A click somewhere inside the options container.
    ///
    /// `tag` is the tag of the swatch the click landed on, or `None` when it
    /// hit the container itself or anything that is not a swatch.
    OptionClicked { tag: Option<String> },

    /// The advance control was clicked.
    AdvanceClicked,
}

impl InputEvent {
    /// A click on the swatch carrying `tag`.
    pub fn option(tag: impl Into<String>) -> Self {
        Self::OptionClicked { tag: Some(tag.into()) }
    }

    /// A click inside the container that missed every swatch.
    pub fn option_background() -> Self {
        Self::OptionClicked { tag: None }
    }
}

/// Result of a resolved guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    #[must_use]
    pub fn is_positive(self) -> bool {
        matches!(self, Feedback::Correct)
    }

    /// Text shown in the feedback region.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Correct => "Correct!",
            Feedback::Incorrect => "Incorrect!",
        }
    }

    /// Text color for the message.
    #[must_use]
    pub fn tone(self) -> Color {
        match self {
            Feedback::Correct => Color::from_rgb(0x28, 0xA7, 0x45),
            Feedback::Incorrect => Color::from_rgb(0xDC, 0x35, 0x45),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback() {
        assert!(Feedback::Correct.is_positive());
        assert!(!Feedback::Incorrect.is_positive());

        assert_eq!(Feedback::Correct.message(), "Correct!");
        assert_eq!(Feedback::Incorrect.message(), "Incorrect!");
        assert_eq!(Feedback::Correct.tone().to_string(), "#28A745");
        assert_eq!(Feedback::Incorrect.tone().to_string(), "#DC3545");
    }

    #[test]
    fn test_event_constructors() {
        assert_eq!(
            InputEvent::option("#ABCDEF"),
            InputEvent::OptionClicked { tag: Some("#ABCDEF".to_string()) }
        );
        assert_eq!(InputEvent::option_background(), InputEvent::OptionClicked { tag: None });
    }
}
