use std::collections::BTreeMap;

use crate::animation::ease::Ease;
use crate::animation::interpolate::{InterpolateOpts, RangeMap};
use crate::animation::primitives::eased_progress;
use crate::animation::spring::{SpringConfig, spring};
use crate::foundation::core::{Fps, Vec2};
use crate::foundation::error::{CadenceError, CadenceResult};

/// A visual quantity an element exposes to the presentation layer.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Element opacity, normally in `[0, 1]`.
    Opacity,
    /// Horizontal offset in pixels.
    TranslateX,
    /// Vertical offset in pixels.
    TranslateY,
    /// Uniform scale factor.
    Scale,
    /// Named derived scalar (counters, bar lengths, ...).
    Value(String),
}

/// How an element's progress advances once its delay has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// Damped spring from 0 towards 1.
    Spring(SpringConfig),
    /// Eased linear ramp over `duration` frames.
    Tween {
        /// Ramp length in frames.
        duration: u64,
        /// Ease applied to the ramp.
        #[serde(default)]
        ease: Ease,
    },
    /// Jumps from 0 to 1 when the delay elapses.
    Cut,
}

impl Motion {
    /// Progress at `relative_frame` frames after the element starts.
    pub fn progress(self, relative_frame: i64, fps: Fps) -> f64 {
        match self {
            Self::Spring(cfg) => spring(relative_frame, fps, cfg),
            Self::Tween { duration, ease } => eased_progress(
                relative_frame,
                0,
                i64::try_from(duration).unwrap_or(i64::MAX),
                ease,
            ),
            Self::Cut => {
                if relative_frame >= 0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// When an element's clock starts, relative to its scene, and how it advances.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementTiming {
    /// Scene-local frame at which the element's own clock reads 0.
    #[serde(default)]
    pub delay_frames: i64,
    /// Progress driver.
    pub motion: Motion,
}

impl ElementTiming {
    /// Spring-driven element starting at `delay_frames`.
    pub fn spring(delay_frames: i64, config: SpringConfig) -> Self {
        Self {
            delay_frames,
            motion: Motion::Spring(config),
        }
    }

    /// Tween-driven element starting at `delay_frames`.
    pub fn tween(delay_frames: i64, duration: u64, ease: Ease) -> Self {
        Self {
            delay_frames,
            motion: Motion::Tween { duration, ease },
        }
    }

    /// Element with no spring: it appears at `delay_frames` and stays.
    pub fn cut(delay_frames: i64) -> Self {
        Self {
            delay_frames,
            motion: Motion::Cut,
        }
    }

    /// The element's own frame for a scene-local frame.
    pub fn relative_frame(self, local_frame: i64) -> i64 {
        local_frame.saturating_sub(self.delay_frames)
    }

    /// Element progress at a scene-local frame.
    pub fn progress(self, local_frame: i64, fps: Fps) -> f64 {
        self.motion.progress(self.relative_frame(local_frame), fps)
    }
}

/// Maps element progress onto one property.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Channel {
    /// Property written by this channel.
    pub property: Property,
    /// Mapping from progress to the property's value.
    pub map: RangeMap,
    /// Round the mapped value to the nearest integer (counters).
    #[serde(default)]
    pub round: bool,
}

impl Channel {
    /// Channel with an explicit mapping.
    pub fn new(property: Property, map: RangeMap) -> Self {
        Self {
            property,
            map,
            round: false,
        }
    }

    /// Round every mapped value to the nearest integer, halves away from zero.
    pub fn rounded(mut self) -> Self {
        self.round = true;
        self
    }

    /// Property value at element progress `progress`.
    pub fn value_at(&self, progress: f64) -> f64 {
        let v = self.map.map(progress);
        if self.round { v.round() } else { v }
    }

    /// Opacity `0 -> 1`, clamped so spring overshoot never exceeds full opacity.
    pub fn opacity() -> Self {
        Self::new(
            Property::Opacity,
            RangeMap::unit(0.0, 1.0, InterpolateOpts::clamped()),
        )
    }

    /// Horizontal offset `from -> 0`.
    pub fn translate_x(from: f64) -> Self {
        Self::new(
            Property::TranslateX,
            RangeMap::unit(from, 0.0, InterpolateOpts::default()),
        )
    }

    /// Vertical offset `from -> 0`.
    pub fn translate_y(from: f64) -> Self {
        Self::new(
            Property::TranslateY,
            RangeMap::unit(from, 0.0, InterpolateOpts::default()),
        )
    }

    /// Scale `from -> 1`.
    pub fn scale(from: f64) -> Self {
        Self::new(
            Property::Scale,
            RangeMap::unit(from, 1.0, InterpolateOpts::default()),
        )
    }

    /// Named scalar `from -> to`, clamped.
    pub fn value(name: impl Into<String>, from: f64, to: f64) -> Self {
        Self::new(
            Property::Value(name.into()),
            RangeMap::unit(from, to, InterpolateOpts::clamped()),
        )
    }
}

/// One animated element of a scene: its timing plus the properties it drives.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementSpec {
    id: String,
    timing: ElementTiming,
    channels: Vec<Channel>,
}

impl ElementSpec {
    /// Element with no channels yet.
    pub fn new(id: impl Into<String>, timing: ElementTiming) -> Self {
        Self {
            id: id.into(),
            timing,
            channels: Vec::new(),
        }
    }

    /// Add a channel. Each property may be driven by at most one channel.
    pub fn channel(mut self, channel: Channel) -> CadenceResult<Self> {
        if self.channels.iter().any(|c| c.property == channel.property) {
            return Err(CadenceError::validation(format!(
                "element '{}' drives {:?} twice",
                self.id, channel.property
            )));
        }
        self.channels.push(channel);
        Ok(self)
    }

    /// Element identifier, unique within its scene.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Element timing.
    pub fn timing(&self) -> ElementTiming {
        self.timing
    }

    /// Channels in declaration order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Evaluate this element at a scene-local frame.
    pub fn evaluate(&self, local_frame: i64, fps: Fps) -> ElementState {
        let progress = self.timing.progress(local_frame, fps);
        let mut state = ElementState::at_rest(&self.id, progress);
        for c in &self.channels {
            let v = c.value_at(progress);
            match &c.property {
                Property::Opacity => state.opacity = v,
                Property::TranslateX => state.translate.x = v,
                Property::TranslateY => state.translate.y = v,
                Property::Scale => state.scale = v,
                Property::Value(name) => {
                    state.values.insert(name.clone(), v);
                }
            }
        }
        state
    }
}

/// Evaluated style record for one element at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementState {
    /// Element identifier.
    pub id: String,
    /// Raw element progress before channel mapping.
    pub progress: f64,
    /// Element opacity (1 unless a channel drives it).
    pub opacity: f64,
    /// Translation offset in pixels (zero unless driven).
    pub translate: Vec2,
    /// Uniform scale (1 unless driven).
    pub scale: f64,
    /// Named derived scalars.
    pub values: BTreeMap<String, f64>,
}

impl ElementState {
    fn at_rest(id: &str, progress: f64) -> Self {
        Self {
            id: id.to_owned(),
            progress,
            opacity: 1.0,
            translate: Vec2::ZERO,
            scale: 1.0,
            values: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/element.rs"]
mod tests;
