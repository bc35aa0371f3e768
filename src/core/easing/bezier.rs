//! Cubic Bézier easing curves.
//!
//! CSS easing is parameterized by elapsed-time fraction, so evaluating the
//! curve at progress `t` means solving `bezier_x(s) = t` for the curve
//! parameter `s`, then returning `bezier_y(s)`. The solver is a binary
//! subdivision with a fixed iteration cap: worst-case latency is bounded
//! at the cost of coarser precision on pathological control points.

use serde::{Deserialize, Serialize};

/// Residual tolerance for the x-solve.
const SOLVE_EPSILON: f64 = 1e-7;
/// Iteration cap for the binary subdivision.
const SOLVE_MAX_ITERATIONS: u32 = 12;

/// A cubic Bézier easing curve through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Both control points sit on the diagonal, so the curve is the
    /// identity line and no solving is needed.
    pub fn is_identity(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    /// One component of the curve at parameter `s`, for control values
    /// `0`, `p1`, `p2`, `1`.
    fn sample(p1: f64, p2: f64, s: f64) -> f64 {
        ((1.0 - 3.0 * p2 + 3.0 * p1) * s + (3.0 * p2 - 6.0 * p1)) * s * s + 3.0 * p1 * s
    }

    /// Find `s` such that `bezier_x(s)` is close to `t`, by binary
    /// subdivision over `[0, 1]`.
    fn solve_x(&self, t: f64) -> f64 {
        let mut lower = 0.0_f64;
        let mut upper = 1.0_f64;
        let mut s = t;
        for _ in 0..SOLVE_MAX_ITERATIONS {
            s = (lower + upper) / 2.0;
            let residual = Self::sample(self.x1, self.x2, s) - t;
            if residual.abs() <= SOLVE_EPSILON {
                break;
            }
            if residual > 0.0 {
                upper = s;
            } else {
                lower = s;
            }
        }
        s
    }

    /// Evaluate the curve at progress `t`, clamping `t <= 0` to `0` and
    /// `t >= 1` to `1` before solving.
    pub fn evaluate(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        if self.is_identity() {
            return t;
        }
        let s = self.solve_x(t);
        Self::sample(self.y1, self.y2, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fast_path() {
        let curve = CubicBezier::new(0.3, 0.3, 0.7, 0.7);
        assert!(curve.is_identity());
        assert_eq!(curve.evaluate(0.3), 0.3);
        assert_eq!(curve.evaluate(-2.0), 0.0);
        assert_eq!(curve.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_clamps_out_of_range_progress() {
        let curve = CubicBezier::new(0.25, 0.1, 0.25, 1.0);
        assert_eq!(curve.evaluate(-0.5), 0.0);
        assert_eq!(curve.evaluate(0.0), 0.0);
        assert_eq!(curve.evaluate(1.0), 1.0);
        assert_eq!(curve.evaluate(7.0), 1.0);
    }

    #[test]
    fn test_ease_midpoint() {
        // ease = cubic-bezier(0.25, 0.1, 0.25, 1); f(0.5) is ~0.8026
        let curve = CubicBezier::new(0.25, 0.1, 0.25, 1.0);
        let v = curve.evaluate(0.5);
        assert!((v - 0.8026).abs() < 1e-3, "got {}", v);
    }

    #[test]
    fn test_monotonic_on_standard_curve() {
        let curve = CubicBezier::new(0.42, 0.0, 0.58, 1.0);
        let mut last = 0.0;
        for i in 1..=10 {
            let v = curve.evaluate(i as f64 / 10.0);
            assert!(v >= last, "not monotonic at {}: {} < {}", i, v, last);
            last = v;
        }
        assert_eq!(last, 1.0);
    }
}
