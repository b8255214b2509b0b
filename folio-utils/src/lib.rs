pub mod cli;
pub mod content;
pub mod reveal;

pub use reveal::{compute_profile, compute_profile_from_tag, AnimationProfile, Direction};
