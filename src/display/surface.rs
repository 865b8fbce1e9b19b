//! The display surface contract.
//!
//! The quiz never draws anything itself. It talks to a `DisplaySurface`,
//! which might be a web page, a terminal, a GUI toolkit or the in-memory
//! `HeadlessSurface` used in tests. The surface only has to support a
//! handful of primitive operations on a fixed set of named elements.

use crate::core::Color;

/// Class put on every swatch element.
pub const SWATCH_CLASS: &str = "color-option";

/// Class that shows the advance control.
pub const VISIBLE_CLASS: &str = "visible";

/// Named elements the quiz addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// Text region showing the target color code.
    ColorCode,
    /// Text region showing the score.
    Score,
    /// Text region showing the round number.
    Round,
    /// Text region for "Correct!" / "Incorrect!".
    Feedback,
    /// Container holding the swatches. Clicks inside it are delegated.
    Options,
    /// Button that moves to the next round.
    AdvanceButton,
}

/// A clickable color choice.
///
/// `tag` is an opaque identifier equal to the canonical color string. The
/// host hands it back on click, so the controller never has to recover
/// identity from the element's position or fill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub tag: String,
    pub fill: Color,
    pub class: &'static str,
}

impl Swatch {
    /// A swatch tagged and filled with `color`.
    #[must_use]
    pub fn for_color(color: Color) -> Self {
        Self {
            tag: color.canonical(),
            fill: color,
            class: SWATCH_CLASS,
        }
    }
}

/// Operations the quiz needs from whatever displays it.
///
/// Implementations are driven from a single thread of control: every call
/// completes before the next input event is delivered.
pub trait DisplaySurface {
    /// Replace the text content of an element.
    fn set_text(&mut self, element: Element, text: &str);

    /// Set the text color of an element.
    fn set_text_color(&mut self, element: Element, color: Color);

    /// Remove every child of a container.
    fn clear_children(&mut self, container: Element);

    /// Append a swatch to a container.
    fn append_swatch(&mut self, container: Element, swatch: Swatch);

    /// Add a class to an element. Adding a present class is a no-op.
    fn add_class(&mut self, element: Element, class: &str);

    /// Remove a class from an element. Removing an absent class is a no-op.
    fn remove_class(&mut self, element: Element, class: &str);

    /// Enable or disable pointer interaction on an element and its children.
    fn set_interactive(&mut self, element: Element, enabled: bool);

    /// Ask the host to deliver click events for an element.
    ///
    /// For a container this means delegated clicks: any click inside it is
    /// reported, along with the tag of the swatch it landed on, if any.
    fn listen_clicks(&mut self, element: Element);
}
