use crate::animation::primitives::{fade_in, fade_out};

/// Where a scene is in its own lifecycle at a given local frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenePhase {
    /// Outside the scene's visible extent.
    Dormant,
    /// Inside the fade-in window at the head of the scene.
    Entering,
    /// Fully visible.
    Active,
    /// Inside the fade-out window at the tail of the scene.
    Exiting,
}

/// How a scene clips its own output at its boundaries.
///
/// The visible extent is `[0, duration + overlap)` in local frames. The fade-in covers its
/// first `fade_in` frames and the fade-out its last `fade_out` frames, so with `overlap > 0`
/// the tail of the scene plays over the head of the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneEnvelope {
    /// Fade-in length in frames, from local frame 0.
    #[serde(default = "default_fade")]
    pub fade_in: u64,
    /// Fade-out length in frames, ending at the end of the visible extent.
    #[serde(default = "default_fade")]
    pub fade_out: u64,
    /// Frames the scene keeps drawing past its window end.
    #[serde(default)]
    pub overlap: u64,
}

const DEFAULT_FADE_FRAMES: u64 = 20;

fn default_fade() -> u64 {
    DEFAULT_FADE_FRAMES
}

impl Default for SceneEnvelope {
    fn default() -> Self {
        Self {
            fade_in: DEFAULT_FADE_FRAMES,
            fade_out: DEFAULT_FADE_FRAMES,
            overlap: 0,
        }
    }
}

impl SceneEnvelope {
    /// An envelope that never fades.
    pub fn hard_cut() -> Self {
        Self {
            fade_in: 0,
            fade_out: 0,
            overlap: 0,
        }
    }

    /// Number of local frames during which the scene draws anything.
    pub fn visible_len(self, duration: u64) -> u64 {
        duration.saturating_add(self.overlap)
    }

    /// Lifecycle phase at `local_frame`.
    pub fn phase(self, local_frame: i64, duration: u64) -> ScenePhase {
        let len = to_i64(self.visible_len(duration));
        if local_frame < 0 || local_frame >= len {
            ScenePhase::Dormant
        } else if local_frame < to_i64(self.fade_in) {
            ScenePhase::Entering
        } else if local_frame >= len - to_i64(self.fade_out).min(len) {
            ScenePhase::Exiting
        } else {
            ScenePhase::Active
        }
    }

    /// Scene-level opacity multiplier at `local_frame`. Zero whenever the scene is dormant.
    pub fn opacity(self, local_frame: i64, duration: u64) -> f64 {
        if self.phase(local_frame, duration) == ScenePhase::Dormant {
            return 0.0;
        }
        let len = to_i64(self.visible_len(duration));
        let fo = to_i64(self.fade_out);
        fade_in(local_frame, 0, to_i64(self.fade_in)) * fade_out(local_frame, len - fo, fo)
    }
}

fn to_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/envelope.rs"]
mod tests;
