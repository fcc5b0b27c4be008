use crate::animation::interpolate::{InterpolateOpts, RangeMap};
use crate::compose::element::{Channel, ElementSpec, ElementTiming, Motion, Property};
use crate::compose::scene::SceneSpec;
use crate::composition::dsl::CompositionBuilder;
use crate::composition::model::Composition;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{CadenceError, CadenceResult};
use crate::timeline::envelope::SceneEnvelope;

/// JSON-facing composition: the human-edited timing sheet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositionDef {
    /// Frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Scenes in playback order.
    pub scenes: Vec<SceneDef>,
}

/// One scene of a [`CompositionDef`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDef {
    /// Scene identifier, unique in the composition.
    pub id: String,
    /// Window length in frames.
    pub duration: u64,
    /// Boundary envelope; 20-frame fades when omitted.
    #[serde(default)]
    pub envelope: SceneEnvelope,
    /// Animated elements.
    #[serde(default)]
    pub elements: Vec<ElementDef>,
}

/// One element of a [`SceneDef`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementDef {
    /// Element identifier, unique in its scene.
    pub id: String,
    /// Scene-local start frame.
    #[serde(default)]
    pub delay: i64,
    /// Progress driver; the default spring when omitted.
    #[serde(default = "default_motion")]
    pub motion: Motion,
    /// Driven properties.
    #[serde(default)]
    pub channels: Vec<ChannelDef>,
}

fn default_motion() -> Motion {
    Motion::Spring(Default::default())
}

/// One channel of an [`ElementDef`].
///
/// Either `from`/`to` shorthand or a full `map`. Shorthand defaults follow the property:
/// opacity `0 -> 1`, translations `0 -> 0`, scale `0 -> 1`, values `0 -> to` (`to` required).
/// Opacity and values clamp, translations and scale carry spring overshoot through.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelDef {
    /// Driven property.
    pub property: Property,
    /// Value at progress 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    /// Value at progress 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
    /// Full multi-point mapping from progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<RangeMap>,
    /// Round mapped values to the nearest integer.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub round: bool,
}

impl ChannelDef {
    fn into_channel(self, element: &str) -> CadenceResult<Channel> {
        let round = self.round;
        self.into_unrounded(element)
            .map(|c| if round { c.rounded() } else { c })
    }

    fn into_unrounded(self, element: &str) -> CadenceResult<Channel> {
        if let Some(map) = self.map {
            if self.from.is_some() || self.to.is_some() {
                return Err(CadenceError::validation(format!(
                    "element '{element}': channel {:?} sets both 'map' and 'from'/'to'",
                    self.property
                )));
            }
            return Ok(Channel::new(self.property, map));
        }

        let (from, to, opts) = match &self.property {
            Property::Opacity => (0.0, 1.0, InterpolateOpts::clamped()),
            Property::TranslateX | Property::TranslateY => (0.0, 0.0, InterpolateOpts::default()),
            Property::Scale => (0.0, 1.0, InterpolateOpts::default()),
            Property::Value(name) => {
                let Some(to) = self.to else {
                    return Err(CadenceError::validation(format!(
                        "element '{element}': value channel '{name}' needs 'to'"
                    )));
                };
                (0.0, to, InterpolateOpts::clamped())
            }
        };
        let from = self.from.unwrap_or(from);
        let to = self.to.unwrap_or(to);
        if !from.is_finite() || !to.is_finite() {
            return Err(CadenceError::validation(format!(
                "element '{element}': channel {:?} endpoints must be finite",
                self.property
            )));
        }
        Ok(Channel::new(self.property, RangeMap::unit(from, to, opts)))
    }
}

impl TryFrom<ElementDef> for ElementSpec {
    type Error = CadenceError;

    fn try_from(def: ElementDef) -> CadenceResult<Self> {
        let timing = ElementTiming {
            delay_frames: def.delay,
            motion: def.motion,
        };
        let id = def.id;
        def.channels
            .into_iter()
            .try_fold(ElementSpec::new(id.clone(), timing), |el, c| {
                el.channel(c.into_channel(&id)?)
            })
    }
}

impl TryFrom<SceneDef> for SceneSpec {
    type Error = CadenceError;

    fn try_from(def: SceneDef) -> CadenceResult<Self> {
        let scene = SceneSpec::new(def.id, def.duration)?.envelope(def.envelope);
        def.elements
            .into_iter()
            .try_fold(scene, |s, e| s.element(ElementSpec::try_from(e)?))
    }
}

impl TryFrom<CompositionDef> for Composition {
    type Error = CadenceError;

    fn try_from(def: CompositionDef) -> CadenceResult<Self> {
        def.scenes
            .into_iter()
            .try_fold(CompositionBuilder::new(def.fps, def.canvas), |b, s| {
                b.scene(SceneSpec::try_from(s)?)
            })?
            .build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/def.rs"]
mod tests;
