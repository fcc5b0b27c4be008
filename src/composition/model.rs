use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::compose::scene::SceneSpec;
use crate::composition::def::CompositionDef;
use crate::foundation::core::{Canvas, FrameIndex, Fps};
use crate::foundation::error::{CadenceError, CadenceResult};
use crate::timeline::partition::Timeline;

/// A validated composition: scenes laid end to end on one timeline.
#[derive(Clone, Debug)]
pub struct Composition {
    fps: Fps,
    canvas: Canvas,
    scenes: Vec<SceneSpec>,
    timeline: Timeline,
}

/// Where one scene sits in global frame space.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneRegistration {
    /// Scene identifier.
    pub scene_id: String,
    /// First global frame of the scene's window.
    pub start: FrameIndex,
    /// Window length in frames.
    pub duration: u64,
}

impl Composition {
    /// Parse and validate a composition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CadenceResult<Self> {
        let def: CompositionDef = serde_json::from_reader(r)
            .map_err(|e| CadenceError::serde(format!("parse composition JSON: {e}")))?;
        Self::try_from(def)
    }

    /// Parse and validate a composition from a JSON string.
    pub fn from_json_str(s: &str) -> CadenceResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a composition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CadenceResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            anyhow::Error::new(e).context(format!("open composition JSON '{}'", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub(crate) fn from_parts(
        fps: Fps,
        canvas: Canvas,
        scenes: Vec<SceneSpec>,
        timeline: Timeline,
    ) -> Self {
        Self {
            fps,
            canvas,
            scenes,
            timeline,
        }
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Scenes in playback order.
    pub fn scenes(&self) -> &[SceneSpec] {
        &self.scenes
    }

    /// Look up a scene by id.
    pub fn scene(&self, id: &str) -> Option<&SceneSpec> {
        self.scenes.iter().find(|s| s.id() == id)
    }

    /// Scene windows.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Total length in frames: the sum of scene durations.
    pub fn duration_frames(&self) -> u64 {
        self.timeline.duration_frames()
    }

    /// `(scene_id, start, duration)` for every scene, in playback order.
    pub fn registrations(&self) -> Vec<SceneRegistration> {
        self.scenes
            .iter()
            .zip(self.timeline.windows())
            .map(|(s, w)| SceneRegistration {
                scene_id: s.id().to_owned(),
                start: w.start,
                duration: w.len_frames(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
