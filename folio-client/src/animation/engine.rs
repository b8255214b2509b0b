// AnimationEngine trait and core types
use folio_utils::reveal::Offset;
use std::time::Duration;

/// Visual state of one element at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Seconds since the reveal was triggered
    pub elapsed: f64,
    pub opacity: f64,
    /// Displacement from rest position
    pub offset: Offset,
}

impl AnimationFrame {
    pub fn new(elapsed: f64, opacity: f64, offset: Offset) -> Self {
        Self {
            elapsed,
            opacity,
            offset,
        }
    }

    /// CSS `transform` value placing the element at this frame's offset
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.offset.x, self.offset.y)
    }
}

/// Frame-based animation interface
pub trait AnimationEngine: Send + Sync {
    /// Generate the next frame of animation
    /// Returns None once a finite animation is complete
    fn next_frame(&mut self) -> Option<AnimationFrame>;

    /// Get the target FPS for this animation
    fn target_fps(&self) -> u32;

    /// Get the frame duration based on target FPS
    fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps().max(1) as f64)
    }

    /// Reset animation to initial state
    fn reset(&mut self);
}
