// Easing curves for reveal interpolation

use folio_utils::reveal::Easing;

/// Maps normalized progress in `[0, 1]` to eased progress in `[0, 1]`
pub trait Ease {
    fn ease(&self, t: f64) -> f64;
}

/// CSS-style cubic bezier with fixed endpoints (0, 0) and (1, 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// `ease-out` as defined by CSS Easing Functions
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

    const SOLVE_ITERATIONS: usize = 48;

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn component(p1: f64, p2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    /// Curve parameter whose x equals `x`. x(s) is monotonic for control
    /// points inside the unit square, so bisection converges.
    fn solve_for_x(&self, x: f64) -> f64 {
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..Self::SOLVE_ITERATIONS {
            let mid = (lo + hi) / 2.0;
            if Self::component(self.x1, self.x2, mid) < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo + hi) / 2.0
    }
}

impl Ease for CubicBezier {
    fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        Self::component(self.y1, self.y2, self.solve_for_x(t))
    }
}

impl Ease for Easing {
    fn ease(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::EaseOut => CubicBezier::EASE_OUT.ease(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::EaseOut] {
            assert_eq!(easing.ease(0.0), 0.0);
            assert_eq!(easing.ease(1.0), 1.0);
            assert_eq!(easing.ease(-0.5), 0.0);
            assert_eq!(easing.ease(1.5), 1.0);
        }
    }

    #[test]
    fn test_ease_out_is_front_loaded() {
        let mid = Easing::EaseOut.ease(0.5);
        assert!(mid > 0.5 && mid < 1.0, "ease-out(0.5) = {}", mid);
    }

    #[test]
    fn test_ease_out_is_monotonic() {
        let samples: Vec<f64> = (0..=100).map(|i| Easing::EaseOut.ease(i as f64 / 100.0)).collect();
        for pair in samples.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_identity_bezier_is_linear() {
        let linear = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for t in [0.1, 0.25, 0.5, 0.9] {
            assert!((linear.ease(t) - t).abs() < 1e-9);
        }
    }
}
