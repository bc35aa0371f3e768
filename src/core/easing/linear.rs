//! Piecewise-linear easing from `linear()` stop lists.
//!
//! Construction runs a position-inference pass so every stop carries a
//! concrete input position; evaluation is a linear scan over the resolved
//! stops. Degenerate stop lists (zero-width segments, decreasing
//! positions) are not pre-validated: the arithmetic propagates non-finite
//! values instead of panicking.

use serde::{Deserialize, Serialize};

use super::spec::LinearStop;

/// One stop after inference: a concrete input position and its output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct ResolvedStop {
    position: f64,
    output: f64,
}

/// A piecewise-linear easing function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearEasing {
    stops: Vec<ResolvedStop>,
}

impl LinearEasing {
    /// Build the easing, inferring any omitted input positions.
    ///
    /// An empty stop list produces the clamped identity.
    pub fn new(mut stops: Vec<LinearStop>) -> LinearEasing {
        resolve_positions(&mut stops);
        let stops = stops
            .into_iter()
            .map(|stop| ResolvedStop {
                // resolve_positions leaves no stop unpositioned
                position: stop.position.unwrap_or_default(),
                output: stop.output,
            })
            .collect();
        LinearEasing { stops }
    }

    /// Evaluate at progress `t`, clamped into `[0, 1]`.
    ///
    /// The segment before the first explicit stop interpolates from the
    /// implicit stop `(position 0, output 0)`; progress at or past every
    /// position returns the last output directly.
    pub fn evaluate(&self, t: f64) -> f64 {
        if self.stops.is_empty() {
            return if t <= 0.0 {
                0.0
            } else if t >= 1.0 {
                1.0
            } else {
                t
            };
        }
        let t = t.clamp(0.0, 1.0);
        let mut previous = ResolvedStop {
            position: 0.0,
            output: 0.0,
        };
        for stop in &self.stops {
            if stop.position > t {
                let fraction = (t - previous.position) / (stop.position - previous.position);
                return previous.output + (stop.output - previous.output) * fraction;
            }
            previous = *stop;
        }
        previous.output
    }
}

/// Fill in missing stop positions.
///
/// The first and last stops default to `0` and `1`. Interior gaps are
/// filled left to right by ordinal fraction between the surrounding
/// positioned stops. The fill value blends the surrounding *output*
/// values by that fraction; that is the observed upstream behavior and is
/// kept as-is (it coincides with even spacing whenever the surrounding
/// outputs are the usual 0 and 1).
fn resolve_positions(stops: &mut [LinearStop]) {
    if stops.is_empty() {
        return;
    }
    if stops[0].position.is_none() {
        stops[0].position = Some(0.0);
    }
    let last = stops.len() - 1;
    if stops[last].position.is_none() {
        stops[last].position = Some(1.0);
    }

    let mut index = 1;
    while index < last {
        if stops[index].position.is_some() {
            index += 1;
            continue;
        }
        // The last stop always carries a position after the boundary
        // fill, so this forward search cannot run off the end.
        let next = match (index + 1..=last).find(|&j| stops[j].position.is_some()) {
            Some(j) => j,
            None => unreachable!("last stop is positioned after the boundary fill"),
        };
        let anchor = index - 1;
        let gap = (next - anchor) as f64;
        let start_output = stops[anchor].output;
        let end_output = stops[next].output;
        for k in index..next {
            let fraction = (k - anchor) as f64 / gap;
            stops[k].position = Some(start_output + (end_output - start_output) * fraction);
        }
        index = next + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(output: f64, position: Option<f64>) -> LinearStop {
        LinearStop::new(output, position)
    }

    #[test]
    fn test_empty_is_clamped_identity() {
        let easing = LinearEasing::new(Vec::new());
        assert_eq!(easing.evaluate(-1.0), 0.0);
        assert_eq!(easing.evaluate(0.37), 0.37);
        assert_eq!(easing.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_boundary_inference() {
        // [[0], [1, 50%], [2]] infers positions 0 and 1 at the ends
        let easing = LinearEasing::new(vec![
            stop(0.0, None),
            stop(1.0, Some(0.5)),
            stop(2.0, None),
        ]);
        assert_eq!(easing.evaluate(0.5), 1.0);
        assert_eq!(easing.evaluate(0.25), 0.5);
        assert_eq!(easing.evaluate(1.0), 2.0);
        assert_eq!(easing.evaluate(0.0), 0.0);
    }

    #[test]
    fn test_interior_fill_blends_outputs() {
        // Outputs 0, 4, 2: the middle stop's missing position is filled by
        // blending the neighbor outputs (0 and 2), landing at 1.0 rather
        // than the evenly spaced 0.5.
        let easing = LinearEasing::new(vec![
            stop(0.0, None),
            stop(4.0, None),
            stop(2.0, None),
        ]);
        assert_eq!(easing.evaluate(0.5), 2.0);
        assert_eq!(easing.evaluate(1.0), 2.0);
    }

    #[test]
    fn test_plateau_from_double_percentage() {
        // linear(0, 0.5 25% 75%, 1) expands to four stops with a flat
        // middle segment
        let easing = LinearEasing::new(vec![
            stop(0.0, None),
            stop(0.5, Some(0.25)),
            stop(0.5, Some(0.75)),
            stop(1.0, None),
        ]);
        assert_eq!(easing.evaluate(0.25), 0.5);
        assert_eq!(easing.evaluate(0.5), 0.5);
        assert_eq!(easing.evaluate(0.75), 0.5);
        assert!(easing.evaluate(0.9) > 0.5);
    }

    #[test]
    fn test_before_first_explicit_stop() {
        // First explicit stop at 50%: the segment before it runs from the
        // implicit (0, 0)
        let easing = LinearEasing::new(vec![stop(1.0, Some(0.5)), stop(2.0, None)]);
        assert_eq!(easing.evaluate(0.25), 0.5);
        assert_eq!(easing.evaluate(0.75), 1.5);
    }

    #[test]
    fn test_single_stop() {
        let easing = LinearEasing::new(vec![stop(0.7, None)]);
        // Single stop defaults to position 0; everything at or past it
        // returns its output
        assert_eq!(easing.evaluate(0.0), 0.7);
        assert_eq!(easing.evaluate(0.5), 0.7);
        assert_eq!(easing.evaluate(1.0), 0.7);
    }
}
