use crate::compose::scene::SceneSpec;
use crate::composition::model::Composition;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{CadenceError, CadenceResult};
use crate::timeline::partition::Timeline;

/// Programmatic composition construction; scenes play in the order they are added.
pub struct CompositionBuilder {
    fps: Fps,
    canvas: Canvas,
    scenes: Vec<SceneSpec>,
}

impl CompositionBuilder {
    /// Empty builder.
    pub fn new(fps: Fps, canvas: Canvas) -> Self {
        Self {
            fps,
            canvas,
            scenes: Vec::new(),
        }
    }

    /// Append a scene. Scene ids are unique in a composition.
    pub fn scene(mut self, scene: SceneSpec) -> CadenceResult<Self> {
        if self.scenes.iter().any(|s| s.id() == scene.id()) {
            return Err(CadenceError::validation(format!(
                "duplicate scene id '{}'",
                scene.id()
            )));
        }
        self.scenes.push(scene);
        Ok(self)
    }

    /// Validate and lay the scenes out on a timeline.
    pub fn build(self) -> CadenceResult<Composition> {
        let fps = Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(CadenceError::validation("canvas width/height must be > 0"));
        }
        if self.scenes.is_empty() {
            return Err(CadenceError::validation(
                "composition needs at least one scene",
            ));
        }
        // A scene may only bleed into its direct successor.
        for (i, s) in self.scenes.iter().enumerate() {
            let overlap = s.scene_envelope().overlap;
            let room = self.scenes.get(i + 1).map_or(0, SceneSpec::duration);
            if overlap > room {
                return Err(CadenceError::validation(format!(
                    "scene '{}' overlaps {overlap} frames but only {room} follow it",
                    s.id()
                )));
            }
        }

        let durations: Vec<u64> = self.scenes.iter().map(SceneSpec::duration).collect();
        let timeline = Timeline::from_durations(&durations)?;
        tracing::debug!(
            scenes = self.scenes.len(),
            duration = timeline.duration_frames(),
            fps = fps.as_f64(),
            "composition built"
        );
        Ok(Composition::from_parts(fps, self.canvas, self.scenes, timeline))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
