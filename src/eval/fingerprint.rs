use xxhash_rust::xxh3::Xxh3;

use crate::compose::element::ElementState;
use crate::compose::scene::SceneFrame;
use crate::eval::evaluator::FrameState;

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit fingerprint of an evaluated frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Hash every evaluated value of `state`.
///
/// Neither the global frame nor scene-local frames are hashed, so two frames that would draw
/// the same picture share a fingerprint.
pub fn fingerprint_frame(state: &FrameState) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(state.scenes.len() as u32);
    for s in &state.scenes {
        write_scene(&mut h, s);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_scene(h: &mut StableHasher, s: &SceneFrame) {
    h.write_str(&s.scene_id);
    h.write_f64(s.opacity);
    h.write_u32(s.elements.len() as u32);
    for e in &s.elements {
        write_element(h, e);
    }
}

fn write_element(h: &mut StableHasher, e: &ElementState) {
    h.write_str(&e.id);
    h.write_f64(e.opacity);
    h.write_f64(e.translate.x);
    h.write_f64(e.translate.y);
    h.write_f64(e.scale);
    h.write_u32(e.values.len() as u32);
    for (k, v) in &e.values {
        h.write_str(k);
        h.write_f64(*v);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
