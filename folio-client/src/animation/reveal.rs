// Reveal lifecycle for a single element
// Hidden -> Revealing -> Revealed, started by the first sufficient intersection

use super::easing::Ease;
use super::engine::{AnimationEngine, AnimationFrame};
use folio_utils::reveal::{AnimationProfile, Offset};
use log::debug;

/// Where an element is in its entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    /// Not yet triggered; drawn at the initial state
    Hidden,
    /// Triggered at `triggered_at` seconds on the host clock
    Revealing { triggered_at: f64 },
    /// At rest, fully opaque
    Revealed,
}

/// Applies an [`AnimationProfile`] to one element.
///
/// `observe` feeds visibility reports from the host; `frame_at` answers what the
/// element looks like at a host time. As an [`AnimationEngine`] it plays the
/// entrance from trigger to rest at a fixed frame rate.
pub struct RevealAnimation {
    profile: AnimationProfile,
    state: RevealState,
    fps: u32,
    frame_count: u64,
    finished: bool,
}

impl RevealAnimation {
    pub fn new(profile: AnimationProfile) -> Self {
        Self {
            profile,
            state: RevealState::Hidden,
            fps: 60,
            frame_count: 0,
            finished: false,
        }
    }

    /// Set custom FPS (for previews or tests)
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    pub fn profile(&self) -> &AnimationProfile {
        &self.profile
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Report how much of the element is visible at host time `now` (seconds).
    ///
    /// Returns true when this report started the reveal.
    pub fn observe(&mut self, visible_fraction: f64, now: f64) -> bool {
        let trigger = self.profile.visibility_trigger;
        if visible_fraction >= trigger.min_visible_fraction {
            if self.state == RevealState::Hidden {
                debug!("Folio: reveal triggered at {:.3}s ({:.0}% visible)", now, visible_fraction * 100.0);
                self.state = RevealState::Revealing { triggered_at: now };
                return true;
            }
        } else if !trigger.fire_once && self.state != RevealState::Hidden {
            self.state = RevealState::Hidden;
        }
        false
    }

    /// Element state at host time `now`; settles into `Revealed` once complete
    pub fn frame_at(&mut self, now: f64) -> AnimationFrame {
        match self.state {
            RevealState::Hidden => self.initial_frame(),
            RevealState::Revealing { triggered_at } => {
                let elapsed = now - triggered_at;
                if elapsed >= self.profile.timing.total_seconds() {
                    self.state = RevealState::Revealed;
                }
                self.sample(elapsed)
            },
            RevealState::Revealed => self.sample(self.profile.timing.total_seconds()),
        }
    }

    /// Element state `elapsed` seconds after the trigger
    pub fn sample(&self, elapsed: f64) -> AnimationFrame {
        let timing = &self.profile.timing;
        let active = elapsed - timing.delay_seconds;
        let progress = if timing.duration_seconds > 0.0 {
            (active / timing.duration_seconds).clamp(0.0, 1.0)
        } else if active >= 0.0 {
            1.0
        } else {
            0.0
        };
        // NaN timing holds the initial state
        let progress = if progress.is_nan() { 0.0 } else { progress };
        let eased = timing.easing.ease(progress);

        let profile = &self.profile;
        AnimationFrame::new(
            elapsed,
            lerp(profile.initial_opacity, profile.target_opacity, eased),
            Offset::new(
                lerp(profile.initial_offset.x, profile.target_offset.x, eased),
                lerp(profile.initial_offset.y, profile.target_offset.y, eased),
            ),
        )
    }

    fn initial_frame(&self) -> AnimationFrame {
        AnimationFrame::new(0.0, self.profile.initial_opacity, self.profile.initial_offset)
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    if t >= 1.0 {
        to
    } else {
        from + (to - from) * t
    }
}

impl AnimationEngine for RevealAnimation {
    fn next_frame(&mut self) -> Option<AnimationFrame> {
        if self.finished {
            return None;
        }
        let elapsed = self.frame_count as f64 * self.frame_duration().as_secs_f64();
        let frame = self.sample(elapsed);
        // A NaN or infinite delay never reaches rest; stop after the first frame
        let total = self.profile.timing.total_seconds();
        if !(elapsed < total) || !total.is_finite() {
            self.finished = true;
        }
        self.frame_count += 1;
        Some(frame)
    }

    fn target_fps(&self) -> u32 {
        self.fps
    }

    fn reset(&mut self) {
        self.frame_count = 0;
        self.finished = false;
        self.state = RevealState::Hidden;
    }
}
