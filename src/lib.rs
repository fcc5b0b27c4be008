//! Cadence is a deterministic frame-timing engine for programmatic motion graphics.
//!
//! Every animated value is a pure function of an integer frame number and a frame rate:
//!
//! - [`interpolate`] / [`RangeMap`] map a number through piecewise-linear ranges
//! - [`spring`] solves a damped spring in closed form
//! - [`fade_in`], [`pulse`], [`stagger_delay`] and friends cover the common idioms
//! - a [`Timeline`] partitions a video into contiguous scene windows
//! - [`compose_scene`] evaluates a [`SceneSpec`] at a scene-local frame
//! - a [`Composition`] ties scenes to a timeline and evaluates global frames
//!
//! Nothing here draws pixels. The output of [`Composition::evaluate`] is a [`FrameState`]
//! that a presentation layer turns into a picture.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod compose;
pub(crate) mod composition;
pub(crate) mod eval;
/// Built-in explainer storyboard.
pub mod storyboard;
pub(crate) mod timeline;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Vec2};
pub use crate::foundation::error::{CadenceError, CadenceResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{
    Extrapolate, InterpolateOpts, RangeMap, interpolate, progress,
};
pub use crate::animation::primitives::{
    CrossFade, PULSE_MAX, PULSE_MIN, bounce_in, count_up, cross_fade, eased_progress, fade_in,
    fade_out, pop_in, pulse, scale_in, shake, slide_in, stagger_delay, typewriter,
};
pub use crate::animation::spring::{SpringConfig, spring, spring_between};
pub use crate::compose::element::{
    Channel, ElementSpec, ElementState, ElementTiming, Motion, Property,
};
pub use crate::compose::scene::{SceneFrame, SceneSpec, compose_scene};
pub use crate::composition::def::{ChannelDef, CompositionDef, ElementDef, SceneDef};
pub use crate::composition::dsl::CompositionBuilder;
pub use crate::composition::model::{Composition, SceneRegistration};
pub use crate::eval::evaluator::{EvalOpts, FrameState};
pub use crate::eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::timeline::envelope::{SceneEnvelope, ScenePhase};
pub use crate::timeline::partition::{SceneCursor, SceneWindow, Timeline};
