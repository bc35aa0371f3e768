//! Runtime easing functions.
//!
//! [`Easing`] is the artifact handed to animation engines: immutable after
//! construction, no interior state, safe to evaluate from any number of
//! call sites. Construction from an [`EasingSpec`] is an exhaustive match,
//! so every grammar form has a visible evaluator.

use serde::{Deserialize, Serialize};

use super::bezier::CubicBezier;
use super::linear::LinearEasing;
use super::spec::{EasingKeyword, EasingSpec};
use super::steps::Steps;

/// A constructed easing function from progress `t` to an output value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Clamped identity: `0` below `0`, `1` above `1`, `t` otherwise.
    Identity,
    /// Hard step up immediately after `t = 0` (the `step-start` keyword).
    StepStart,
    /// Hard step up at `t = 1` (the `step-end` keyword).
    StepEnd,
    Bezier(CubicBezier),
    Steps(Steps),
    Linear(LinearEasing),
}

impl Easing {
    /// Build the evaluator for a recognized spec.
    ///
    /// Returns `None` only when the spec's parameters are rejected by an
    /// evaluator constructor (`steps()` with a NaN or non-positive count).
    pub fn from_spec(spec: &EasingSpec) -> Option<Easing> {
        match spec {
            EasingSpec::Keyword(keyword) => Some(Easing::from_keyword(*keyword)),
            EasingSpec::CubicBezier { x1, y1, x2, y2 } => {
                Some(Easing::bezier(*x1, *y1, *x2, *y2))
            }
            EasingSpec::Steps { count, position } => {
                Steps::new(*count, *position).map(Easing::Steps)
            }
            EasingSpec::Linear { stops } => {
                Some(Easing::Linear(LinearEasing::new(stops.clone())))
            }
        }
    }

    /// The precomputed curve for a named keyword.
    ///
    /// The `ease` family maps to its canonical Bézier control points;
    /// `step-start`/`step-end` map to hard steps, not general `steps()`
    /// instances.
    pub fn from_keyword(keyword: EasingKeyword) -> Easing {
        match keyword {
            EasingKeyword::Linear => Easing::Identity,
            EasingKeyword::Ease => Easing::bezier(0.25, 0.1, 0.25, 1.0),
            EasingKeyword::EaseIn => Easing::bezier(0.42, 0.0, 1.0, 1.0),
            EasingKeyword::EaseOut => Easing::bezier(0.0, 0.0, 0.58, 1.0),
            EasingKeyword::EaseInOut => Easing::bezier(0.42, 0.0, 0.58, 1.0),
            EasingKeyword::StepStart => Easing::StepStart,
            EasingKeyword::StepEnd => Easing::StepEnd,
        }
    }

    /// Bézier constructor with the degenerate fast path: control points on
    /// the diagonal collapse to the clamped identity, skipping the solver
    /// entirely.
    pub fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Easing {
        let curve = CubicBezier::new(x1, y1, x2, y2);
        if curve.is_identity() {
            Easing::Identity
        } else {
            Easing::Bezier(curve)
        }
    }

    /// Evaluate at progress `t`.
    pub fn evaluate(&self, t: f64) -> f64 {
        match self {
            Easing::Identity => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    t
                }
            }
            Easing::StepStart => {
                if t <= 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Easing::StepEnd => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Easing::Bezier(curve) => curve.evaluate(t),
            Easing::Steps(steps) => steps.evaluate(t),
            Easing::Linear(linear) => linear.evaluate(t),
        }
    }

    /// Evaluate at `n + 1` evenly spaced points across `[0, 1]`.
    pub fn sample(&self, n: usize) -> Vec<f64> {
        let divisions = n.max(1) as f64;
        (0..=n).map(|i| self.evaluate(i as f64 / divisions)).collect()
    }
}
