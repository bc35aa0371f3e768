//! # Ceaser
//!
//! CSS `<time>` and `<easing-function>` parsing and evaluation.
//!
//! Two independent parse → evaluate pipelines, no shared state, no I/O:
//!
//! - [`parse_time`] converts a CSS `<time>` literal to a whole number of
//!   milliseconds.
//! - [`parse_easing`] recognizes the CSS easing grammars (the seven named
//!   keywords, `cubic-bezier()`, `steps()`, `linear()`) and builds a
//!   reusable [`Easing`] evaluator.
//!
//! Malformed input never panics: time parsing yields `NaN`, easing
//! parsing yields `None`. Every [`Easing`] is immutable after
//! construction and safe to evaluate from any number of call sites.
//!
//! ```
//! use ceaser::{parse_easing, parse_time};
//!
//! assert_eq!(parse_time(Some("1.5s")), 1500.0);
//!
//! let steps = parse_easing("steps(4, jump-end)").unwrap();
//! assert_eq!(steps.evaluate(0.26), 0.25);
//! ```

pub mod core;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::easing::bezier::CubicBezier;
pub use crate::core::easing::linear::LinearEasing;
pub use crate::core::easing::spec::{EasingKeyword, EasingSpec, LinearStop, StepPosition};
pub use crate::core::easing::steps::Steps;
pub use crate::core::easing::Easing;
pub use crate::core::time::parse_time;
pub use crate::utils::error::{EvalError, EvalResult};

/// Recognize an easing expression and build its evaluator in one step.
///
/// `None` when the expression matches no grammar or its parameters are
/// rejected (e.g. `steps(0, end)`).
pub fn parse_easing(text: &str) -> Option<Easing> {
    let spec = EasingSpec::parse(text)?;
    Easing::from_spec(&spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_easing_composes_parse_and_construction() {
        assert!(parse_easing("ease-in-out").is_some());
        assert!(parse_easing("steps(0, end)").is_none());
        assert!(parse_easing("nonsense").is_none());
    }
}
