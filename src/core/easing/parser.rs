//! Grammar recognition for CSS easing expressions.
//!
//! Classifies a raw string into one of the four easing forms and extracts
//! its numeric parameters. Recognition is forgiving about whitespace but
//! strict about shape: once a structural pattern matches, any parameter
//! that fails to convert to a finite number aborts the whole parse.
//! Parsing never panics; `None` is the sole failure signal.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;

use super::spec::{EasingKeyword, EasingSpec, LinearStop, StepPosition};

static KEYWORDS: phf::Map<&'static str, EasingKeyword> = phf_map! {
    "ease" => EasingKeyword::Ease,
    "linear" => EasingKeyword::Linear,
    "ease-in" => EasingKeyword::EaseIn,
    "ease-out" => EasingKeyword::EaseOut,
    "ease-in-out" => EasingKeyword::EaseInOut,
    "step-start" => EasingKeyword::StepStart,
    "step-end" => EasingKeyword::StepEnd,
};

lazy_static! {
    static ref CUBIC_BEZIER_RE: Regex = Regex::new(
        r"^cubic-bezier\(\s*([^,()]+),\s*([^,()]+),\s*([^,()]+),\s*([^,()]+)\)\s*;?$"
    )
    .unwrap();
    static ref STEPS_RE: Regex =
        Regex::new(r"^steps\(\s*([^,()]+),\s*([A-Za-z-]+)\s*\)\s*;?$").unwrap();
    static ref LINEAR_RE: Regex = Regex::new(r"^linear\((.*)\)\s*;?$").unwrap();
}

impl EasingSpec {
    /// Recognize an easing expression.
    ///
    /// The fixed keyword table is checked first, then the three structural
    /// patterns in order: `cubic-bezier(n, n, n, n)`, `steps(n, ident)`,
    /// `linear(term, ...)`. First match wins.
    pub fn parse(text: &str) -> Option<EasingSpec> {
        let text = text.trim();
        if let Some(keyword) = KEYWORDS.get(text) {
            return Some(EasingSpec::Keyword(*keyword));
        }
        if let Some(caps) = CUBIC_BEZIER_RE.captures(text) {
            return cubic_bezier_params(&caps);
        }
        if let Some(caps) = STEPS_RE.captures(text) {
            return steps_params(&caps);
        }
        if let Some(caps) = LINEAR_RE.captures(text) {
            return linear_stops(&caps[1]).map(|stops| EasingSpec::Linear { stops });
        }
        None
    }
}

fn cubic_bezier_params(caps: &regex::Captures<'_>) -> Option<EasingSpec> {
    let x1 = parse_number(&caps[1])?;
    let y1 = parse_number(&caps[2])?;
    let x2 = parse_number(&caps[3])?;
    let y2 = parse_number(&caps[4])?;
    Some(EasingSpec::CubicBezier { x1, y1, x2, y2 })
}

fn steps_params(caps: &regex::Captures<'_>) -> Option<EasingSpec> {
    let count = parse_number(&caps[1])?;
    let position = StepPosition::parse(&caps[2])?;
    Some(EasingSpec::Steps { count, position })
}

/// Parse the comma-separated stop list of `linear(...)`.
///
/// Each term is `n[ p%[ p%]]`. A term with two percentages expands into
/// two stops sharing the same output value (a flat plateau).
fn linear_stops(body: &str) -> Option<Vec<LinearStop>> {
    let body = body.trim();
    if body.is_empty() {
        return Some(Vec::new());
    }
    let mut stops = Vec::new();
    for term in body.split(',') {
        let mut parts = term.split_whitespace();
        let output = parse_number(parts.next()?)?;
        let first = match parts.next() {
            Some(token) => Some(parse_percentage(token)?),
            None => None,
        };
        let second = match parts.next() {
            Some(token) => Some(parse_percentage(token)?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }
        stops.push(LinearStop::new(output, first));
        if let Some(position) = second {
            stops.push(LinearStop::new(output, Some(position)));
        }
    }
    Some(stops)
}

/// Convert a parameter to a finite number, `None` otherwise.
fn parse_number(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

fn parse_percentage(token: &str) -> Option<f64> {
    let number = token.strip_suffix('%')?;
    Some(parse_number(number)? / 100.0)
}
