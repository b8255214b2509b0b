// Folio animation host
// Drives the per-element reveal lifecycle described by an `AnimationProfile`

pub mod easing;
pub mod engine;
pub mod reveal;

pub use easing::{CubicBezier, Ease};
pub use engine::{AnimationEngine, AnimationFrame};
pub use reveal::{RevealAnimation, RevealState};
