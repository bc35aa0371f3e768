//! Core parse → evaluate pipelines.
//!
//! Two independent pipelines with no shared state: `time` converts CSS
//! `<time>` literals to milliseconds, `easing` recognizes and evaluates
//! CSS easing functions.

pub mod easing;
pub mod time;
