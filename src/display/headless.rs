//! In-memory display surface.
//!
//! Records everything the quiz asks it to show, so hosts without a screen
//! (and the tests) can inspect it. Two surfaces compare equal when they
//! would look and behave the same.

use rustc_hash::{FxHashMap, FxHashSet};

use super::surface::{DisplaySurface, Element, Swatch};
use crate::core::Color;

/// A `DisplaySurface` that keeps its contents in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadlessSurface {
    texts: FxHashMap<Element, String>,
    text_colors: FxHashMap<Element, Color>,
    children: FxHashMap<Element, Vec<Swatch>>,
    classes: FxHashSet<(Element, String)>,
    disabled: FxHashSet<Element>,
    listeners: FxHashSet<Element>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text content of an element, empty if never set.
    #[must_use]
    pub fn text(&self, element: Element) -> &str {
        self.texts.get(&element).map(String::as_str).unwrap_or("")
    }

    #[must_use]
    pub fn text_color(&self, element: Element) -> Option<Color> {
        self.text_colors.get(&element).copied()
    }

    /// Swatches currently inside a container.
    #[must_use]
    pub fn swatches(&self, container: Element) -> &[Swatch] {
        self.children.get(&container).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tag of the `index`th swatch in a container, as a click would report it.
    #[must_use]
    pub fn swatch_tag(&self, container: Element, index: usize) -> Option<&str> {
        self.swatches(container).get(index).map(|s| s.tag.as_str())
    }

    #[must_use]
    pub fn has_class(&self, element: Element, class: &str) -> bool {
        self.classes.contains(&(element, class.to_string()))
    }

    /// Elements accept pointer input until disabled.
    #[must_use]
    pub fn is_interactive(&self, element: Element) -> bool {
        !self.disabled.contains(&element)
    }

    #[must_use]
    pub fn is_listening(&self, element: Element) -> bool {
        self.listeners.contains(&element)
    }
}

impl DisplaySurface for HeadlessSurface {
    fn set_text(&mut self, element: Element, text: &str) {
        self.texts.insert(element, text.to_string());
    }

    fn set_text_color(&mut self, element: Element, color: Color) {
        self.text_colors.insert(element, color);
    }

    fn clear_children(&mut self, container: Element) {
        self.children.remove(&container);
    }

    fn append_swatch(&mut self, container: Element, swatch: Swatch) {
        self.children.entry(container).or_default().push(swatch);
    }

    fn add_class(&mut self, element: Element, class: &str) {
        self.classes.insert((element, class.to_string()));
    }

    fn remove_class(&mut self, element: Element, class: &str) {
        self.classes.remove(&(element, class.to_string()));
    }

    fn set_interactive(&mut self, element: Element, enabled: bool) {
        if enabled {
            self.disabled.remove(&element);
        } else {
            self.disabled.insert(element);
        }
    }

    fn listen_clicks(&mut self, element: Element) {
        self.listeners.insert(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::surface::{SWATCH_CLASS, VISIBLE_CLASS};

    #[test]
    fn test_text_defaults_to_empty() {
        let mut surface = HeadlessSurface::new();
        assert_eq!(surface.text(Element::Score), "");

        surface.set_text(Element::Score, "3");
        assert_eq!(surface.text(Element::Score), "3");
        assert_eq!(surface.text(Element::Round), "");
    }

    #[test]
    fn test_children() {
        let mut surface = HeadlessSurface::new();
        let red = Color::from_rgb(0xFF, 0, 0);

        surface.append_swatch(Element::Options, Swatch::for_color(red));
        surface.append_swatch(Element::Options, Swatch::for_color(red));
        assert_eq!(surface.swatches(Element::Options).len(), 2);
        assert_eq!(surface.swatch_tag(Element::Options, 1), Some("#FF0000"));
        assert_eq!(surface.swatches(Element::Options)[0].class, SWATCH_CLASS);
        assert_eq!(surface.swatch_tag(Element::Options, 2), None);

        surface.clear_children(Element::Options);
        assert!(surface.swatches(Element::Options).is_empty());
    }

    #[test]
    fn test_classes() {
        let mut surface = HeadlessSurface::new();

        surface.add_class(Element::AdvanceButton, VISIBLE_CLASS);
        surface.add_class(Element::AdvanceButton, VISIBLE_CLASS);
        assert!(surface.has_class(Element::AdvanceButton, VISIBLE_CLASS));

        surface.remove_class(Element::AdvanceButton, VISIBLE_CLASS);
        assert!(!surface.has_class(Element::AdvanceButton, VISIBLE_CLASS));

        // Removing again is harmless
        surface.remove_class(Element::AdvanceButton, VISIBLE_CLASS);
    }

    #[test]
    fn test_interactivity() {
        let mut surface = HeadlessSurface::new();
        assert!(surface.is_interactive(Element::Options));

        surface.set_interactive(Element::Options, false);
        assert!(!surface.is_interactive(Element::Options));
        assert!(surface.is_interactive(Element::AdvanceButton));

        surface.set_interactive(Element::Options, true);
        assert!(surface.is_interactive(Element::Options));
    }

    #[test]
    fn test_equality_ignores_operation_history() {
        let mut a = HeadlessSurface::new();
        let mut b = HeadlessSurface::new();

        a.set_text(Element::Feedback, "Correct!");
        a.set_text(Element::Feedback, "");
        a.add_class(Element::AdvanceButton, VISIBLE_CLASS);
        a.remove_class(Element::AdvanceButton, VISIBLE_CLASS);

        b.set_text(Element::Feedback, "");

        assert_eq!(a, b);
    }
}
