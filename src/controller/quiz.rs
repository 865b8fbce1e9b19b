//! Quiz controller.
//!
//! Owns the session's `GameState` and a `DisplaySurface`, projects the
//! state onto the surface and turns input events back into state changes.
//!
//! ## Round lifecycle
//!
//! ```text
//! session start ──► AwaitingChoice ──(swatch click)──► Resolved
//!                        ▲                                │
//!                        └──────(advance click)───────────┘
//! ```
//!
//! There is no terminal phase; the session lasts until the host drops it.

use crate::core::{Color, GameState, QuizConfig};
use crate::display::{DisplaySurface, Element, Swatch, VISIBLE_CLASS};
use crate::error::Result;

use super::event::{Feedback, InputEvent};

/// Where the current round stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// Swatches accept a guess.
    #[default]
    AwaitingChoice,
    /// A guess was made; only advancing does anything.
    Resolved,
}

/// Drives one quiz session on one display surface.
pub struct QuizController<S: DisplaySurface> {
    state: GameState,
    surface: S,
    phase: RoundPhase,
}

impl<S: DisplaySurface> QuizController<S> {
    /// Take ownership of a session and a surface, and subscribe to clicks.
    ///
    /// Nothing is shown until `on_session_start`.
    pub fn new(state: GameState, mut surface: S) -> Self {
        surface.listen_clicks(Element::Options);
        surface.listen_clicks(Element::AdvanceButton);

        Self {
            state,
            surface,
            phase: RoundPhase::AwaitingChoice,
        }
    }

    /// Build the session from a config. Fails on an invalid config.
    pub fn from_config(config: &QuizConfig, surface: S) -> Result<Self> {
        Ok(Self::new(GameState::new(config)?, surface))
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Give back the session and the surface.
    pub fn into_parts(self) -> (GameState, S) {
        (self.state, self.surface)
    }

    /// Single entry point for host events.
    ///
    /// Returns the feedback when the event resolved a guess.
    pub fn dispatch(&mut self, event: &InputEvent) -> Option<Feedback> {
        match event {
            InputEvent::SessionStart => {
                self.on_session_start();
                None
            }
            InputEvent::OptionClicked { tag } => self.on_option_clicked(tag.as_deref()),
            InputEvent::AdvanceClicked => {
                self.on_advance_clicked();
                None
            }
        }
    }

    /// Generate the first round and show it.
    pub fn on_session_start(&mut self) {
        log::info!("session started at round {}", self.state.round());
        self.state.start_new_round();
        self.render();
        self.reset_round_controls();
    }

    /// Delegated click inside the options container.
    ///
    /// Clicks that did not land on a swatch, or whose tag is not a color
    /// code, are ignored.
    pub fn on_option_clicked(&mut self, tag: Option<&str>) -> Option<Feedback> {
        let Some(tag) = tag else {
            log::debug!("ignoring click outside any swatch");
            return None;
        };

        match tag.parse::<Color>() {
            Ok(chosen) => self.handle_choice(chosen),
            Err(err) => {
                log::debug!("ignoring click on untagged element: {err}");
                None
            }
        }
    }

    /// Click on the advance control. Ignored while it is hidden.
    pub fn on_advance_clicked(&mut self) {
        if self.phase != RoundPhase::Resolved {
            log::debug!("ignoring advance before the round is resolved");
            return;
        }
        self.advance_round();
    }

    /// Show score, round, target code and one swatch per color.
    ///
    /// Previously shown swatches are removed first, so rendering the same
    /// state twice leaves the surface unchanged.
    pub fn render(&mut self) {
        let target = self
            .state
            .correct_color()
            .map(Color::canonical)
            .unwrap_or_default();

        self.surface.set_text(Element::Score, &self.state.score().to_string());
        self.surface.set_text(Element::Round, &self.state.round().to_string());
        self.surface.set_text(Element::ColorCode, &target);

        self.surface.clear_children(Element::Options);
        for &color in self.state.colors() {
            self.surface.append_swatch(Element::Options, Swatch::for_color(color));
        }
    }

    /// Resolve a guess for the current round.
    ///
    /// Only the first guess of a round counts. Later ones, and guesses made
    /// before any round exists, return `None` without touching anything.
    pub fn handle_choice(&mut self, chosen: Color) -> Option<Feedback> {
        if self.phase == RoundPhase::Resolved {
            log::debug!("ignoring guess {chosen}: round {} already resolved", self.state.round());
            return None;
        }
        if self.state.correct_color().is_none() {
            log::debug!("ignoring guess {chosen}: no round in progress");
            return None;
        }

        self.phase = RoundPhase::Resolved;
        self.surface.set_interactive(Element::Options, false);

        let feedback = if self.state.is_correct(chosen) {
            self.state.award_point();
            self.surface.set_text(Element::Score, &self.state.score().to_string());
            Feedback::Correct
        } else {
            Feedback::Incorrect
        };

        log::info!(
            "round {}: guessed {chosen}, {} (score {})",
            self.state.round(),
            feedback.message(),
            self.state.score()
        );

        self.surface.set_text(Element::Feedback, feedback.message());
        self.surface.set_text_color(Element::Feedback, feedback.tone());
        self.surface.add_class(Element::AdvanceButton, VISIBLE_CLASS);

        Some(feedback)
    }

    /// Move to the next round and reopen input.
    ///
    /// The only place the round counter moves.
    pub fn advance_round(&mut self) {
        self.state.next_round();
        self.state.start_new_round();
        self.render();
        self.reset_round_controls();

        log::info!("advanced to round {}", self.state.round());
    }

    fn reset_round_controls(&mut self) {
        self.surface.set_text(Element::Feedback, "");
        self.surface.remove_class(Element::AdvanceButton, VISIBLE_CLASS);
        self.surface.set_interactive(Element::Options, true);
        self.phase = RoundPhase::AwaitingChoice;
    }
}
