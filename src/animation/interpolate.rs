use crate::animation::ease::Ease;
use crate::foundation::error::{CadenceError, CadenceResult};

/// What to do with values that fall outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Pin to the nearest output endpoint.
    Clamp,
    /// Continue the slope of the nearest boundary segment.
    #[default]
    Extend,
}

/// Per-call interpolation options. The default extends on both sides with a linear ease.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InterpolateOpts {
    /// Policy for values below the first input point.
    pub extrapolate_left: Extrapolate,
    /// Policy for values above the last input point.
    pub extrapolate_right: Extrapolate,
    /// Ease applied to the normalized position inside a segment.
    pub ease: Ease,
}

impl InterpolateOpts {
    /// Clamp on both sides, linear ease.
    pub fn clamped() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
            ease: Ease::Linear,
        }
    }

    /// Replace the ease.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Map `value` through the piecewise mapping `input -> output`.
///
/// `input` must be finite and strictly increasing, with the same length as `output` and at
/// least two points.
pub fn interpolate(
    value: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpolateOpts,
) -> CadenceResult<f64> {
    validate_ranges(input, output)?;
    Ok(map_unchecked(value, input, output, opts))
}

/// Clamped linear ramp from 0 at `start` to 1 at `end`.
///
/// A degenerate ramp (`end <= start`) is a hard step at `start`.
pub fn progress(value: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if value >= start { 1.0 } else { 0.0 };
    }
    if value <= start {
        return 0.0;
    }
    if value >= end {
        return 1.0;
    }
    (value - start) / (end - start)
}

/// A validated range mapping. Construction checks the ranges once so [`RangeMap::map`] cannot
/// fail.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RangeMapDef")]
pub struct RangeMap {
    input: Vec<f64>,
    output: Vec<f64>,
    extrapolate_left: Extrapolate,
    extrapolate_right: Extrapolate,
    ease: Ease,
}

impl RangeMap {
    /// Validate and build a mapping.
    pub fn new(input: Vec<f64>, output: Vec<f64>, opts: InterpolateOpts) -> CadenceResult<Self> {
        validate_ranges(&input, &output)?;
        Ok(Self {
            input,
            output,
            extrapolate_left: opts.extrapolate_left,
            extrapolate_right: opts.extrapolate_right,
            ease: opts.ease,
        })
    }

    /// Two-point mapping `[0, 1] -> [from, to]`.
    pub fn unit(from: f64, to: f64, opts: InterpolateOpts) -> Self {
        Self {
            input: vec![0.0, 1.0],
            output: vec![from, to],
            extrapolate_left: opts.extrapolate_left,
            extrapolate_right: opts.extrapolate_right,
            ease: opts.ease,
        }
    }

    /// Evaluate the mapping at `value`.
    pub fn map(&self, value: f64) -> f64 {
        map_unchecked(value, &self.input, &self.output, self.opts())
    }

    /// Input breakpoints.
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Output values, one per input breakpoint.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Options this mapping was built with.
    pub fn opts(&self) -> InterpolateOpts {
        InterpolateOpts {
            extrapolate_left: self.extrapolate_left,
            extrapolate_right: self.extrapolate_right,
            ease: self.ease,
        }
    }
}

#[derive(serde::Deserialize)]
struct RangeMapDef {
    #[serde(default = "unit_input")]
    input: Vec<f64>,
    output: Vec<f64>,
    #[serde(default)]
    extrapolate_left: Extrapolate,
    #[serde(default)]
    extrapolate_right: Extrapolate,
    #[serde(default)]
    ease: Ease,
}

fn unit_input() -> Vec<f64> {
    vec![0.0, 1.0]
}

impl TryFrom<RangeMapDef> for RangeMap {
    type Error = CadenceError;

    fn try_from(def: RangeMapDef) -> CadenceResult<Self> {
        Self::new(
            def.input,
            def.output,
            InterpolateOpts {
                extrapolate_left: def.extrapolate_left,
                extrapolate_right: def.extrapolate_right,
                ease: def.ease,
            },
        )
    }
}

fn validate_ranges(input: &[f64], output: &[f64]) -> CadenceResult<()> {
    if input.len() != output.len() {
        return Err(CadenceError::invalid_range(format!(
            "input has {} points but output has {}",
            input.len(),
            output.len()
        )));
    }
    if input.len() < 2 {
        return Err(CadenceError::invalid_range(
            "ranges need at least two points",
        ));
    }
    if let Some(v) = input.iter().find(|v| !v.is_finite()) {
        return Err(CadenceError::invalid_range(format!(
            "input point {v} is not finite"
        )));
    }
    if let Some(w) = input.windows(2).find(|w| w[0] >= w[1]) {
        return Err(CadenceError::invalid_range(format!(
            "input must be strictly increasing, found {} followed by {}",
            w[0], w[1]
        )));
    }
    Ok(())
}

fn map_unchecked(value: f64, input: &[f64], output: &[f64], opts: InterpolateOpts) -> f64 {
    let last = input.len() - 1;

    if value < input[0] {
        return match opts.extrapolate_left {
            Extrapolate::Clamp => output[0],
            Extrapolate::Extend => extend(value, input, output, 0),
        };
    }
    if value > input[last] {
        return match opts.extrapolate_right {
            Extrapolate::Clamp => output[last],
            Extrapolate::Extend => extend(value, input, output, last - 1),
        };
    }

    let seg = input
        .partition_point(|&x| x <= value)
        .saturating_sub(1)
        .min(last - 1);
    let t = (value - input[seg]) / (input[seg + 1] - input[seg]);
    // Breakpoints return their output exactly, without lerp rounding.
    if t <= 0.0 {
        return output[seg];
    }
    if t >= 1.0 {
        return output[seg + 1];
    }
    lerp(output[seg], output[seg + 1], opts.ease.apply(t))
}

// Extrapolated positions continue the raw segment slope; easing only applies inside.
fn extend(value: f64, input: &[f64], output: &[f64], seg: usize) -> f64 {
    let t = (value - input[seg]) / (input[seg + 1] - input[seg]);
    lerp(output[seg], output[seg + 1], t)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
