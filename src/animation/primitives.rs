//! Canonical animation idioms built from [`progress`](crate::progress),
//! [`RangeMap`](crate::RangeMap) and [`spring`](crate::spring).
//!
//! Every helper is a pure function of its arguments. Frames are signed so callers can pass
//! pre-start or post-end frames without guarding them.

use std::f64::consts::TAU;

use crate::animation::ease::Ease;
use crate::animation::interpolate::{InterpolateOpts, RangeMap, progress};
use crate::animation::spring::{SpringConfig, spring};
use crate::foundation::core::{Fps, Vec2};

/// Lower edge of the [`pulse`] band.
pub const PULSE_MIN: f64 = 0.95;
/// Upper edge of the [`pulse`] band.
pub const PULSE_MAX: f64 = 1.0;

/// Linear 0 -> 1 ramp over `[delay, delay + duration]`, clamped on both sides.
pub fn fade_in(frame: i64, delay: i64, duration: i64) -> f64 {
    ramp(frame, delay, duration)
}

/// Linear 1 -> 0 ramp over `[start_frame, start_frame + duration]`, clamped on both sides.
pub fn fade_out(frame: i64, start_frame: i64, duration: i64) -> f64 {
    1.0 - ramp(frame, start_frame, duration)
}

/// Delay for the `index`-th item of a staggered list.
pub fn stagger_delay(index: usize, base_delay: i64, stagger_amount: i64) -> i64 {
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    base_delay.saturating_add(index.saturating_mul(stagger_amount))
}

/// Periodic scale multiplier inside `[PULSE_MIN, PULSE_MAX]`.
///
/// `frequency` is in pulses per second. A non-positive or non-finite frequency rests at
/// `PULSE_MAX`.
pub fn pulse(frame: i64, fps: Fps, frequency: f64) -> f64 {
    let Some(p) = cycle_position(frame, fps, frequency) else {
        return PULSE_MAX;
    };
    let mid = 0.5 * (PULSE_MIN + PULSE_MAX);
    let amp = 0.5 * (PULSE_MAX - PULSE_MIN);
    (mid + amp * (p * TAU).sin()).clamp(PULSE_MIN, PULSE_MAX)
}

/// Periodic 2D jitter bounded by `intensity`. `y` runs a quarter period behind `x` at half the
/// amplitude.
pub fn shake(frame: i64, fps: Fps, intensity: f64, frequency: f64) -> Vec2 {
    let Some(p) = cycle_position(frame, fps, frequency) else {
        return Vec2::ZERO;
    };
    let phase = p * 2.0 * TAU;
    Vec2::new(phase.sin() * intensity, phase.cos() * intensity * 0.5)
}

/// Complementary opacities for an outgoing element `a` and incoming element `b`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CrossFade {
    /// Opacity of the outgoing element.
    pub opacity_a: f64,
    /// Opacity of the incoming element.
    pub opacity_b: f64,
}

/// Linear cross-fade over `[transition_start, transition_start + transition_duration]`.
///
/// `opacity_a + opacity_b == 1` at every frame.
pub fn cross_fade(frame: i64, transition_start: i64, transition_duration: i64) -> CrossFade {
    let p = ramp(frame, transition_start, transition_duration);
    CrossFade {
        opacity_a: 1.0 - p,
        opacity_b: p,
    }
}

/// Number of characters revealed by a typewriter running at `speed` characters per frame.
pub fn typewriter(frame: i64, total_chars: usize, delay: i64, speed: f64) -> usize {
    if !speed.is_finite() || speed <= 0.0 {
        return 0;
    }
    let elapsed = frame.saturating_sub(delay).max(0) as f64;
    let shown = (elapsed * speed).floor();
    if shown >= total_chars as f64 {
        total_chars
    } else {
        shown as usize
    }
}

/// Eased 0 -> 1 progress over `[start_frame, start_frame + duration]`, clamped.
///
/// [`Ease::OutCubic`] is the usual choice.
pub fn eased_progress(frame: i64, start_frame: i64, duration: i64, ease: Ease) -> f64 {
    ease.apply(ramp(frame, start_frame, duration))
}

/// Spring progress for a slide-in starting at `delay`.
pub fn slide_in(frame: i64, fps: Fps, delay: i64) -> f64 {
    spring(frame.saturating_sub(delay), fps, SpringConfig::DEFAULT)
}

/// Fast spring progress for a scale-in starting at `delay`.
pub fn scale_in(frame: i64, fps: Fps, delay: i64) -> f64 {
    spring(frame.saturating_sub(delay), fps, SpringConfig::FAST)
}

/// Bouncy spring progress starting at `delay`.
pub fn bounce_in(frame: i64, fps: Fps, delay: i64) -> f64 {
    spring(frame.saturating_sub(delay), fps, SpringConfig::BOUNCY)
}

/// Scale factor popping from 0.8 to 1. Spring overshoot carries through.
pub fn pop_in(frame: i64, fps: Fps, delay: i64) -> f64 {
    RangeMap::unit(0.8, 1.0, InterpolateOpts::default()).map(slide_in(frame, fps, delay))
}

/// Counter climbing linearly from 0 to `target` over `[start_frame, start_frame + duration]`,
/// rounded to the nearest integer.
pub fn count_up(frame: i64, start_frame: i64, duration: i64, target: f64) -> f64 {
    (ramp(frame, start_frame, duration) * target).round()
}

fn ramp(frame: i64, start: i64, duration: i64) -> f64 {
    let end = start.saturating_add(duration.max(0));
    progress(frame as f64, start as f64, end as f64)
}

// Position inside the current cycle, in [0, 1).
fn cycle_position(frame: i64, fps: Fps, frequency: f64) -> Option<f64> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return None;
    }
    let period = fps.as_f64() / frequency;
    Some((frame as f64).rem_euclid(period) / period)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/primitives.rs"]
mod tests;
