//! The CSS easing-function pipeline.
//!
//! `parser` recognizes the four grammar forms into an
//! [`EasingSpec`](spec::EasingSpec);
//! `function` builds the runtime [`Easing`] evaluator from it. The three
//! evaluator modules hold the numeric machinery: iterative Bézier
//! x-solving, directional step quantization, and piecewise-linear
//! interpolation with implicit-stop inference.

pub mod bezier;
pub mod function;
pub mod linear;
pub mod parser;
pub mod spec;
pub mod steps;

pub use self::function::Easing;
