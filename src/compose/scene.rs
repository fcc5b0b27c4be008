use crate::compose::element::{ElementSpec, ElementState};
use crate::foundation::core::Fps;
use crate::foundation::error::{CadenceError, CadenceResult};
use crate::timeline::envelope::{SceneEnvelope, ScenePhase};

/// A scene: a duration, a boundary envelope, and the elements animated on its local clock.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneSpec {
    id: String,
    duration: u64,
    envelope: SceneEnvelope,
    elements: Vec<ElementSpec>,
}

impl SceneSpec {
    /// Empty scene with the default envelope.
    pub fn new(id: impl Into<String>, duration: u64) -> CadenceResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CadenceError::validation("scene id must be non-empty"));
        }
        if duration == 0 {
            return Err(CadenceError::validation(format!(
                "scene '{id}' must last at least one frame"
            )));
        }
        Ok(Self {
            id,
            duration,
            envelope: SceneEnvelope::default(),
            elements: Vec::new(),
        })
    }

    /// Replace the envelope.
    pub fn envelope(mut self, envelope: SceneEnvelope) -> Self {
        self.envelope = envelope;
        self
    }

    /// Append an element. Element ids are unique within a scene.
    pub fn element(mut self, element: ElementSpec) -> CadenceResult<Self> {
        if element.id().trim().is_empty() {
            return Err(CadenceError::validation(format!(
                "scene '{}' has an element with an empty id",
                self.id
            )));
        }
        if self.elements.iter().any(|e| e.id() == element.id()) {
            return Err(CadenceError::validation(format!(
                "scene '{}' already has an element '{}'",
                self.id,
                element.id()
            )));
        }
        self.elements.push(element);
        Ok(self)
    }

    /// Scene identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Window length in frames.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Boundary envelope.
    pub fn scene_envelope(&self) -> SceneEnvelope {
        self.envelope
    }

    /// Elements in declaration order.
    pub fn elements(&self) -> &[ElementSpec] {
        &self.elements
    }
}

/// Everything a scene contributes at one local frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    /// Scene identifier.
    pub scene_id: String,
    /// Frame on the scene's own clock.
    pub local_frame: i64,
    /// Lifecycle phase.
    pub phase: ScenePhase,
    /// Scene-level opacity; the presentation layer multiplies element opacities by it.
    pub opacity: f64,
    /// Element states in declaration order.
    pub elements: Vec<ElementState>,
}

/// Evaluate every element of `scene` at `local_frame`.
///
/// Pure in its arguments: the same scene, frame and rate always produce the same record.
pub fn compose_scene(scene: &SceneSpec, local_frame: i64, fps: Fps) -> SceneFrame {
    SceneFrame {
        scene_id: scene.id.clone(),
        local_frame,
        phase: scene.envelope.phase(local_frame, scene.duration),
        opacity: scene.envelope.opacity(local_frame, scene.duration),
        elements: scene
            .elements
            .iter()
            .map(|e| e.evaluate(local_frame, fps))
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/scene.rs"]
mod tests;
