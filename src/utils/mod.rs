//! Utility modules.

pub mod error;

pub use self::error::{EvalError, EvalResult};
