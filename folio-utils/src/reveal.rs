// Folio reveal animations
//
// Declarative "fade + slide into view" parameters shared by every animated
// element on the page. The host (browser script or `folio-client`) consumes the
// profile; nothing here keeps state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance in layout units an element travels while revealing
pub const REVEAL_DISTANCE: f64 = 24.0;

/// Seconds from the start of a reveal to its resting state
pub const REVEAL_DURATION_SECONDS: f64 = 0.7;

/// Fraction of an element that must be on screen before it reveals
pub const MIN_VISIBLE_FRACTION: f64 = 0.2;

/// Direction an element slides in from, named by the way it travels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Direction {
    /// Starts below rest position and moves up
    #[default]
    Up,
    /// Starts above rest position and moves down
    Down,
    /// Starts right of rest position and moves left
    Left,
    /// Starts left of rest position and moves right
    Right,
    /// Fades in place
    None,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::None,
    ];

    /// Resolve a direction tag. Unrecognized tags resolve to `Up`; this never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "up" => Direction::Up,
            "down" => Direction::Down,
            "left" => Direction::Left,
            "right" => Direction::Right,
            "none" => Direction::None,
            _ => Direction::Up,
        }
    }

    /// Starting displacement from rest position
    pub fn initial_offset(&self) -> Offset {
        match self {
            Direction::Up => Offset::new(0.0, REVEAL_DISTANCE),
            Direction::Down => Offset::new(0.0, -REVEAL_DISTANCE),
            Direction::Left => Offset::new(REVEAL_DISTANCE, 0.0),
            Direction::Right => Offset::new(-REVEAL_DISTANCE, 0.0),
            Direction::None => Offset::ZERO,
        }
    }
}

impl From<String> for Direction {
    fn from(tag: String) -> Self {
        Direction::from_tag(&tag)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::None => write!(f, "none"),
        }
    }
}

/// 2D displacement in layout units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Timing curve applied between initial and target states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
}

impl Easing {
    /// Name understood by CSS `transition-timing-function`
    pub fn css_name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// When the host should start a reveal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityTrigger {
    /// Reveal at most once; never return to the hidden state
    pub fire_once: bool,
    /// Visible area fraction in `[0, 1]` that starts the reveal
    pub min_visible_fraction: f64,
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self {
            fire_once: true,
            min_visible_fraction: MIN_VISIBLE_FRACTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    pub duration_seconds: f64,
    pub easing: Easing,
    pub delay_seconds: f64,
}

impl Timing {
    /// Seconds from trigger until the target state is reached
    pub fn total_seconds(&self) -> f64 {
        self.delay_seconds + self.duration_seconds
    }
}

/// Entrance animation parameters for one element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationProfile {
    pub initial_offset: Offset,
    pub initial_opacity: f64,
    pub target_opacity: f64,
    pub target_offset: Offset,
    pub visibility_trigger: VisibilityTrigger,
    pub timing: Timing,
}

impl AnimationProfile {
    /// JSON form handed to the browser host.
    ///
    /// serde_json writes non-finite numbers as `null`, so a NaN or infinite
    /// delay reaches the browser as `"delaySeconds": null`; the reveal script
    /// treats a non-numeric delay as zero. The profile holds only numbers, bools
    /// and unit enums, which serde_json always serializes, so the empty-string
    /// fallback is never taken.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for AnimationProfile {
    fn default() -> Self {
        compute_profile(Direction::default(), 0.0)
    }
}

/// Build the reveal profile for an element sliding in from `direction`,
/// starting `delay_seconds` after it becomes visible.
///
/// The delay is passed through as given; negative values are the caller's concern.
pub fn compute_profile(direction: Direction, delay_seconds: f64) -> AnimationProfile {
    AnimationProfile {
        initial_offset: direction.initial_offset(),
        initial_opacity: 0.0,
        target_opacity: 1.0,
        target_offset: Offset::ZERO,
        visibility_trigger: VisibilityTrigger::default(),
        timing: Timing {
            duration_seconds: REVEAL_DURATION_SECONDS,
            easing: Easing::EaseOut,
            delay_seconds,
        },
    }
}

/// Same as [`compute_profile`], for untyped input: a missing or unknown tag
/// means `up`, a missing delay means zero.
pub fn compute_profile_from_tag(tag: Option<&str>, delay_seconds: Option<f64>) -> AnimationProfile {
    let direction = tag.map(Direction::from_tag).unwrap_or_default();
    compute_profile(direction, delay_seconds.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_profile_matches_reference() {
        let profile = compute_profile(Direction::Up, 0.0);
        assert_eq!(profile.initial_offset, Offset::new(0.0, 24.0));
        assert_eq!(profile.initial_opacity, 0.0);
        assert_eq!(profile.target_opacity, 1.0);
        assert_eq!(profile.target_offset, Offset::ZERO);
        assert!(profile.visibility_trigger.fire_once);
        assert_eq!(profile.visibility_trigger.min_visible_fraction, 0.2);
        assert_eq!(profile.timing.duration_seconds, 0.7);
        assert_eq!(profile.timing.easing, Easing::EaseOut);
        assert_eq!(profile.timing.delay_seconds, 0.0);
    }

    #[test]
    fn test_right_profile_with_delay() {
        let profile = compute_profile(Direction::Right, 0.06);
        assert_eq!(profile.initial_offset, Offset::new(-24.0, 0.0));
        assert_eq!(profile.timing.delay_seconds, 0.06);

        let up = compute_profile(Direction::Up, 0.06);
        assert_eq!(
            AnimationProfile {
                initial_offset: up.initial_offset,
                ..profile
            },
            up
        );
    }

    #[test]
    fn test_delay_passes_through() {
        for direction in Direction::ALL {
            for delay in [0.0, 0.05, 0.12, 3.5, -1.0] {
                assert_eq!(compute_profile(direction, delay).timing.delay_seconds, delay);
            }
        }
    }

    #[test]
    fn test_single_axis_offsets() {
        for direction in Direction::ALL {
            let offset = compute_profile(direction, 0.0).initial_offset;
            if direction == Direction::None {
                assert!(offset.is_zero());
                continue;
            }
            // Exactly one axis moves, always by the full distance
            assert!((offset.x == 0.0) != (offset.y == 0.0), "{direction}: {offset:?}");
            assert_eq!(offset.x.abs() + offset.y.abs(), REVEAL_DISTANCE);
        }
    }

    #[test]
    fn test_offset_signs() {
        assert_eq!(Direction::Up.initial_offset(), Offset::new(0.0, 24.0));
        assert_eq!(Direction::Down.initial_offset(), Offset::new(0.0, -24.0));
        assert_eq!(Direction::Left.initial_offset(), Offset::new(24.0, 0.0));
        assert_eq!(Direction::Right.initial_offset(), Offset::new(-24.0, 0.0));
    }

    #[test]
    fn test_unknown_tag_falls_back_to_up() {
        assert_eq!(Direction::from_tag("sideways"), Direction::Up);
        assert_eq!(Direction::from_tag(""), Direction::Up);
        assert_eq!(
            compute_profile_from_tag(Some("sideways"), None),
            compute_profile_from_tag(Some("up"), None)
        );
    }

    #[test]
    fn test_no_arguments_is_up_without_delay() {
        assert_eq!(compute_profile_from_tag(None, None), compute_profile(Direction::Up, 0.0));
        assert_eq!(AnimationProfile::default(), compute_profile(Direction::Up, 0.0));
    }

    #[test]
    fn test_tag_round_trip_through_display() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_tag(&direction.to_string()), direction);
        }
    }

    #[test]
    fn test_repeated_calls_are_equal() {
        assert_eq!(
            compute_profile(Direction::Left, 0.1),
            compute_profile(Direction::Left, 0.1)
        );
    }

    #[test]
    fn test_direction_deserializes_through_fallback() {
        let left: Direction = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(left, Direction::Left);
        let sideways: Direction = serde_json::from_str("\"sideways\"").unwrap();
        assert_eq!(sideways, Direction::Up);
        assert_eq!(serde_json::to_string(&Direction::None).unwrap(), "\"none\"");
    }

    #[test]
    fn test_non_finite_delay_serializes_as_null() {
        for delay in [f64::NAN, f64::INFINITY] {
            let profile = compute_profile(Direction::Up, delay);
            let json: serde_json::Value = serde_json::from_str(&profile.to_json()).unwrap();
            assert!(json["timing"]["delaySeconds"].is_null());
            assert_eq!(json["timing"]["durationSeconds"], 0.7);
        }
    }

    #[test]
    fn test_json_field_names() {
        let json: serde_json::Value =
            serde_json::from_str(&compute_profile(Direction::Up, 0.0).to_json()).unwrap();
        assert_eq!(json["initialOffset"]["y"], 24.0);
        assert_eq!(json["initialOpacity"], 0.0);
        assert_eq!(json["targetOpacity"], 1.0);
        assert_eq!(json["targetOffset"]["x"], 0.0);
        assert_eq!(json["visibilityTrigger"]["fireOnce"], true);
        assert_eq!(json["visibilityTrigger"]["minVisibleFraction"], 0.2);
        assert_eq!(json["timing"]["durationSeconds"], 0.7);
        assert_eq!(json["timing"]["easing"], "ease-out");
        assert_eq!(json["timing"]["delaySeconds"], 0.0);
    }
}
