//! Stepped easing: quantizes progress into `count` intervals under one of
//! the four CSS jump positions.

use serde::{Deserialize, Serialize};

use super::spec::StepPosition;

/// A stepped easing function.
///
/// `count` is kept as a real number and fed straight into the quantization
/// arithmetic; validation rejects only NaN and non-positive counts.
/// `jump-none` with `count = 1` divides by zero and propagates the
/// resulting non-finite value, it is not guarded at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Steps {
    count: f64,
    position: StepPosition,
}

impl Steps {
    /// Build a stepped easing, rejecting a NaN or non-positive count.
    pub fn new(count: f64, position: StepPosition) -> Option<Steps> {
        if count.is_nan() || count <= 0.0 {
            return None;
        }
        Some(Steps { count, position })
    }

    pub fn count(&self) -> f64 {
        self.count
    }

    pub fn position(&self) -> StepPosition {
        self.position
    }

    /// Evaluate at progress `t`. Boundary progress short-circuits to the
    /// clamped endpoints; interior progress is quantized per position.
    pub fn evaluate(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let n = self.count;
        match self.position {
            StepPosition::JumpStart => (t * n).ceil() / n,
            StepPosition::JumpEnd => (t * n).floor() / n,
            StepPosition::JumpNone => (t * n).floor() / (n - 1.0),
            StepPosition::JumpBoth => ((t * n).floor() / (n + 1.0) + 1.0 / (n + 1.0)).min(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_counts() {
        assert!(Steps::new(0.0, StepPosition::JumpEnd).is_none());
        assert!(Steps::new(-3.0, StepPosition::JumpStart).is_none());
        assert!(Steps::new(f64::NAN, StepPosition::JumpBoth).is_none());
        assert!(Steps::new(4.0, StepPosition::JumpEnd).is_some());
    }

    #[test]
    fn test_jump_end() {
        let steps = Steps::new(4.0, StepPosition::JumpEnd).unwrap();
        assert_eq!(steps.evaluate(0.26), 0.25);
        assert_eq!(steps.evaluate(0.0), 0.0);
        assert_eq!(steps.evaluate(0.99), 0.75);
        assert_eq!(steps.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_jump_start() {
        let steps = Steps::new(4.0, StepPosition::JumpStart).unwrap();
        assert_eq!(steps.evaluate(0.26), 0.5);
        assert_eq!(steps.evaluate(0.0), 0.0);
        assert_eq!(steps.evaluate(0.01), 0.25);
        assert_eq!(steps.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_jump_none() {
        let steps = Steps::new(4.0, StepPosition::JumpNone).unwrap();
        assert_eq!(steps.evaluate(0.1), 0.0);
        assert_eq!(steps.evaluate(0.3), 1.0 / 3.0);
        assert_eq!(steps.evaluate(0.9), 1.0);
        assert_eq!(steps.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_jump_none_single_step_divides_by_zero() {
        // count = 1 is accepted; the division by zero propagates as NaN
        let steps = Steps::new(1.0, StepPosition::JumpNone).unwrap();
        assert!(steps.evaluate(0.5).is_nan());
        // Boundaries still short-circuit
        assert_eq!(steps.evaluate(0.0), 0.0);
        assert_eq!(steps.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_jump_both() {
        let steps = Steps::new(3.0, StepPosition::JumpBoth).unwrap();
        assert_eq!(steps.evaluate(0.0), 0.0);
        assert_eq!(steps.evaluate(0.1), 0.25);
        assert_eq!(steps.evaluate(0.5), 0.5);
        assert_eq!(steps.evaluate(0.9), 0.75);
        assert_eq!(steps.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_clamp_invariant() {
        let steps = Steps::new(3.0, StepPosition::JumpBoth).unwrap();
        assert_eq!(steps.evaluate(-0.5), 0.0);
        assert_eq!(steps.evaluate(2.0), 1.0);
    }
}
