//! Parsed representation of CSS easing expressions.
//!
//! The recognizer in [`parser`](super::parser) produces an [`EasingSpec`];
//! [`Easing::from_spec`](super::Easing::from_spec) turns it into a runtime
//! evaluator. Keeping the two apart makes "unsupported grammar" an
//! exhaustively matched case instead of a runtime fallthrough.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::utils::error::EvalError;

/// The seven named keywords of the CSS easing grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingKeyword {
    Ease,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    StepStart,
    StepEnd,
}

impl EasingKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            EasingKeyword::Ease => "ease",
            EasingKeyword::Linear => "linear",
            EasingKeyword::EaseIn => "ease-in",
            EasingKeyword::EaseOut => "ease-out",
            EasingKeyword::EaseInOut => "ease-in-out",
            EasingKeyword::StepStart => "step-start",
            EasingKeyword::StepEnd => "step-end",
        }
    }
}

impl fmt::Display for EasingKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the jump occurs in a stepped easing.
///
/// `start`/`end` are accepted as aliases for `jump-start`/`jump-end`,
/// matching the CSS grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepPosition {
    JumpStart,
    JumpEnd,
    JumpNone,
    JumpBoth,
}

static STEP_POSITIONS: phf::Map<&'static str, StepPosition> = phf_map! {
    "jump-start" => StepPosition::JumpStart,
    "start" => StepPosition::JumpStart,
    "jump-end" => StepPosition::JumpEnd,
    "end" => StepPosition::JumpEnd,
    "jump-none" => StepPosition::JumpNone,
    "jump-both" => StepPosition::JumpBoth,
};

impl StepPosition {
    /// Recognize a step-position keyword, or `None` for anything else.
    pub fn parse(ident: &str) -> Option<StepPosition> {
        STEP_POSITIONS.get(ident.trim()).copied()
    }

    /// Canonical (`jump-*`) spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepPosition::JumpStart => "jump-start",
            StepPosition::JumpEnd => "jump-end",
            StepPosition::JumpNone => "jump-none",
            StepPosition::JumpBoth => "jump-both",
        }
    }
}

impl fmt::Display for StepPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepPosition {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepPosition::parse(s)
            .ok_or_else(|| EvalError::parse(format!("unrecognized step position: {}", s)))
    }
}

/// One stop of a `linear()` easing: an output value and an optional input
/// position (a fraction of progress, `25%` parses to `0.25`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearStop {
    pub output: f64,
    pub position: Option<f64>,
}

impl LinearStop {
    pub fn new(output: f64, position: Option<f64>) -> Self {
        Self { output, position }
    }
}

/// A recognized easing expression, one variant per grammar form.
///
/// Immutable once produced; fully determines the behavior of the
/// [`Easing`](super::Easing) built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EasingSpec {
    Keyword(EasingKeyword),
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
    Steps { count: f64, position: StepPosition },
    Linear { stops: Vec<LinearStop> },
}

impl fmt::Display for EasingSpec {
    /// Canonical CSS text for this spec.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EasingSpec::Keyword(keyword) => write!(f, "{}", keyword),
            EasingSpec::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier(")?;
                fmt_number(f, *x1)?;
                write!(f, ", ")?;
                fmt_number(f, *y1)?;
                write!(f, ", ")?;
                fmt_number(f, *x2)?;
                write!(f, ", ")?;
                fmt_number(f, *y2)?;
                write!(f, ")")
            }
            EasingSpec::Steps { count, position } => {
                write!(f, "steps(")?;
                fmt_number(f, *count)?;
                write!(f, ", {})", position)
            }
            EasingSpec::Linear { stops } => {
                write!(f, "linear(")?;
                for (i, stop) in stops.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    fmt_number(f, stop.output)?;
                    if let Some(position) = stop.position {
                        write!(f, " ")?;
                        fmt_number(f, position * 100.0)?;
                        write!(f, "%")?;
                    }
                }
                write!(f, ")")
            }
        }
    }
}

impl FromStr for EasingSpec {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EasingSpec::parse(s)
            .ok_or_else(|| EvalError::parse(format!("unrecognized easing expression: {}", s)))
    }
}

/// Print integral values without a trailing `.0` so output reads like
/// authored CSS.
fn fmt_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_position_aliases() {
        assert_eq!(StepPosition::parse("start"), Some(StepPosition::JumpStart));
        assert_eq!(
            StepPosition::parse("jump-start"),
            Some(StepPosition::JumpStart)
        );
        assert_eq!(StepPosition::parse("end"), Some(StepPosition::JumpEnd));
        assert_eq!(StepPosition::parse("jump-up"), None);
    }

    #[test]
    fn test_display_cubic_bezier() {
        let spec = EasingSpec::CubicBezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0,
        };
        assert_eq!(spec.to_string(), "cubic-bezier(0.25, 0.1, 0.25, 1)");
    }

    #[test]
    fn test_display_steps() {
        let spec = EasingSpec::Steps {
            count: 4.0,
            position: StepPosition::JumpEnd,
        };
        assert_eq!(spec.to_string(), "steps(4, jump-end)");
    }

    #[test]
    fn test_display_linear() {
        let spec = EasingSpec::Linear {
            stops: vec![
                LinearStop::new(0.0, None),
                LinearStop::new(0.5, Some(0.25)),
                LinearStop::new(1.0, None),
            ],
        };
        assert_eq!(spec.to_string(), "linear(0, 0.5 25%, 1)");
    }

    #[test]
    fn test_from_str_round_trip() {
        let spec: EasingSpec = "steps(4, jump-end)".parse().unwrap();
        assert_eq!(spec.to_string(), "steps(4, jump-end)");

        let err = "bounce(3)".parse::<EasingSpec>().unwrap_err();
        assert!(err.to_string().contains("bounce"));
    }
}
