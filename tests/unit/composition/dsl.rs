use super::*;
use crate::timeline::envelope::SceneEnvelope;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn canvas() -> Canvas {
    Canvas {
        width: 1920,
        height: 1080,
    }
}

fn scene(id: &str, duration: u64) -> SceneSpec {
    SceneSpec::new(id, duration).unwrap()
}

#[test]
fn builds_a_contiguous_timeline() {
    let comp = CompositionBuilder::new(fps30(), canvas())
        .scene(scene("a", 180))
        .unwrap()
        .scene(scene("b", 240))
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(comp.duration_frames(), 420);
    assert_eq!(comp.timeline().len(), 2);
    assert_eq!(comp.timeline().windows()[1].start.0, 180);
}

#[test]
fn rejects_duplicate_scene_ids() {
    let err = CompositionBuilder::new(fps30(), canvas())
        .scene(scene("a", 10))
        .unwrap()
        .scene(scene("a", 20))
        .err()
        .unwrap();
    assert!(matches!(err, CadenceError::Validation(_)));
}

#[test]
fn rejects_overlap_longer_than_the_next_scene() {
    let env = SceneEnvelope {
        overlap: 31,
        ..SceneEnvelope::default()
    };
    let r = CompositionBuilder::new(fps30(), canvas())
        .scene(scene("a", 100).envelope(env))
        .unwrap()
        .scene(scene("b", 30))
        .unwrap()
        .build();
    assert!(matches!(r, Err(CadenceError::Validation(_))));

    let env = SceneEnvelope {
        overlap: 30,
        ..SceneEnvelope::default()
    };
    CompositionBuilder::new(fps30(), canvas())
        .scene(scene("a", 100).envelope(env))
        .unwrap()
        .scene(scene("b", 30))
        .unwrap()
        .build()
        .unwrap();
}

#[test]
fn last_scene_cannot_overlap() {
    let env = SceneEnvelope {
        overlap: 1,
        ..SceneEnvelope::default()
    };
    let r = CompositionBuilder::new(fps30(), canvas())
        .scene(scene("a", 100).envelope(env))
        .unwrap()
        .build();
    assert!(r.is_err());
}

#[test]
fn rejects_empty_compositions_and_bad_rates() {
    assert!(CompositionBuilder::new(fps30(), canvas()).build().is_err());
    let bad_fps = Fps { num: 30, den: 0 };
    let r = CompositionBuilder::new(bad_fps, canvas())
        .scene(scene("a", 10))
        .unwrap()
        .build();
    assert!(r.is_err());
    let r = CompositionBuilder::new(
        fps30(),
        Canvas {
            width: 0,
            height: 1080,
        },
    )
    .scene(scene("a", 10))
    .unwrap()
    .build();
    assert!(r.is_err());
}
