//! Display surface abstraction.
//!
//! `DisplaySurface` lists the primitive operations the quiz needs from a
//! screen. `HeadlessSurface` implements them in memory.

pub mod surface;
pub mod headless;

pub use surface::{DisplaySurface, Element, Swatch, SWATCH_CLASS, VISIBLE_CLASS};
pub use headless::HeadlessSurface;
