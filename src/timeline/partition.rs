use smallvec::SmallVec;

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{CadenceError, CadenceResult};

/// A scene's half-open window `[start, end)` in global frame space.
pub type SceneWindow = FrameRange;

/// A scene addressed by a global frame, with the frame converted into scene-local space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneCursor {
    /// Position of the scene in the timeline.
    pub index: usize,
    /// `global - scene.start`. Negative before the scene, `>= duration` after it.
    pub local_frame: i64,
}

/// Ordered, contiguous, non-overlapping scene windows starting at frame 0.
///
/// The timeline only does addressing. Scenes clip their own visible output through their
/// envelope, so a scene may bleed into its successor for a designed cross-fade without the
/// windows themselves overlapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    windows: Vec<SceneWindow>,
}

impl Timeline {
    /// Lay scenes end to end: `[0, d0), [d0, d0 + d1), ...`.
    pub fn from_durations(durations: &[u64]) -> CadenceResult<Self> {
        let mut windows = Vec::with_capacity(durations.len());
        let mut start = 0u64;
        for (i, &d) in durations.iter().enumerate() {
            if d == 0 {
                return Err(CadenceError::validation(format!(
                    "scene {i} must last at least one frame"
                )));
            }
            let end = start.checked_add(d).ok_or_else(|| {
                CadenceError::validation(format!("scene {i} ends past the last addressable frame"))
            })?;
            windows.push(FrameRange::new(FrameIndex(start), FrameIndex(end))?);
            start = end;
        }
        tracing::debug!(scenes = windows.len(), duration = start, "timeline partitioned");
        Ok(Self { windows })
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Return `true` for a timeline with no scenes.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// All windows in timeline order.
    pub fn windows(&self) -> &[SceneWindow] {
        &self.windows
    }

    /// Window of scene `index`.
    pub fn window(&self, index: usize) -> Option<SceneWindow> {
        self.windows.get(index).copied()
    }

    /// Total frames covered by the timeline.
    pub fn duration_frames(&self) -> u64 {
        self.windows.last().map_or(0, |w| w.end.0)
    }

    /// The unique scene whose window contains `global`, or `None` past the end.
    pub fn current(&self, global: FrameIndex) -> Option<SceneCursor> {
        let index = self.windows.partition_point(|w| w.end.0 <= global.0);
        let window = self.windows.get(index).filter(|w| w.contains(global))?;
        Some(SceneCursor {
            index,
            local_frame: window.local_frame(global),
        })
    }

    /// `global` in the local frame space of scene `index`.
    pub fn local_frame(&self, index: usize, global: FrameIndex) -> Option<i64> {
        self.window(index).map(|w| w.local_frame(global))
    }

    /// Scenes contributing output at `global`, in timeline order.
    ///
    /// That is the current scene plus any earlier scene whose tail, extended by `bleed(index)`
    /// frames, still covers `global`.
    pub fn visible(
        &self,
        global: FrameIndex,
        bleed: impl Fn(usize) -> u64,
    ) -> SmallVec<[SceneCursor; 2]> {
        let mut out = SmallVec::new();
        let Some(current) = self.current(global) else {
            return out;
        };
        for (index, w) in self.windows[..current.index].iter().enumerate() {
            if global.0 < w.end.0.saturating_add(bleed(index)) {
                out.push(SceneCursor {
                    index,
                    local_frame: w.local_frame(global),
                });
            }
        }
        out.push(current);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/partition.rs"]
mod tests;
