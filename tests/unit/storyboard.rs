use super::*;
use crate::compose::element::Motion;
use crate::foundation::core::FrameIndex;

#[test]
fn explainer_matches_its_timing_sheet() {
    let comp = explainer().unwrap();
    assert_eq!(comp.duration_frames(), 2100);
    assert_eq!(comp.fps(), Fps::new(30, 1).unwrap());
    let starts: Vec<u64> = comp.registrations().iter().map(|r| r.start.0).collect();
    assert_eq!(starts, [0, 180, 360, 600, 900, 1200, 1650, 1950]);
    let ids: Vec<String> = comp
        .registrations()
        .into_iter()
        .map(|r| r.scene_id)
        .collect();
    let expected: Vec<&str> = EXPLAINER_SCENES.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn scenes_cut_in_and_fade_out_over_twenty_frames() {
    let comp = explainer().unwrap();
    let at = |f: u64| comp.evaluate(FrameIndex(f));
    assert_eq!(at(0).current().unwrap().opacity, 1.0);
    assert_eq!(at(170).current().unwrap().opacity, 0.5);
    let next = at(180);
    assert_eq!(next.scenes.len(), 1);
    assert_eq!(next.current().unwrap().scene_id, "insight");
    assert_eq!(next.current().unwrap().opacity, 1.0);
}

#[test]
fn every_frame_has_exactly_one_scene() {
    let comp = explainer().unwrap();
    for f in 0..2100 {
        assert_eq!(comp.evaluate(FrameIndex(f)).scenes.len(), 1, "frame {f}");
    }
    assert!(comp.evaluate(FrameIndex(2100)).scenes.is_empty());
}

#[test]
fn counter_climbs_to_its_target() {
    let comp = explainer().unwrap();
    let count = |f: u64| {
        comp.evaluate(FrameIndex(f))
            .scene("problem")
            .and_then(|s| s.elements.iter().find(|e| e.id == "no_show_counter"))
            .and_then(|e| e.values.get("count").copied())
            .unwrap()
    };
    assert_eq!(count(60), 0.0);
    assert_eq!(count(89), 61.0);
    assert_eq!(count(90), 64.0);
    assert_eq!(count(120), 127.0);
    assert_eq!(count(179), 127.0);
}

#[test]
fn value_features_are_staggered() {
    let comp = explainer().unwrap();
    let scene = comp.scene("value").unwrap();
    let delays: Vec<i64> = scene
        .elements()
        .iter()
        .filter(|e| e.id().starts_with("pro_feature_"))
        .map(|e| e.timing().delay_frames)
        .collect();
    assert_eq!(delays, [70, 75, 80, 85, 90]);
}

fn motion_of(comp: &Composition, scene: &str, element: &str) -> Motion {
    comp.scene(scene)
        .and_then(|s| s.elements().iter().find(|e| e.id() == element))
        .map(|e| e.timing().motion)
        .unwrap()
}

#[test]
fn elements_keep_their_own_springs() {
    let comp = explainer().unwrap();
    let cases = [
        ("insight", "highlight", SpringConfig::SNAPPY),
        ("insight", "arrow", SpringConfig::new(15.0, 100.0, 1.0).unwrap()),
        ("connect", "connect_button", SpringConfig::new(15.0, 80.0, 1.0).unwrap()),
        ("connect", "calendar", SpringConfig::DEFAULT),
        ("connect", "check", SpringConfig::new(10.0, 150.0, 1.0).unwrap()),
        ("protection", "protected_badge", SpringConfig::SNAPPY),
        ("confirmation", "click", SpringConfig::new(20.0, 200.0, 1.0).unwrap()),
        ("closing", "cta", SpringConfig::SNAPPY),
    ];
    for (scene, element, cfg) in cases {
        assert_eq!(
            motion_of(&comp, scene, element),
            Motion::Spring(cfg),
            "{scene}/{element}"
        );
    }
}

#[test]
fn underdamped_entrances_overshoot() {
    let comp = explainer().unwrap();
    let scale = |global: u64, scene: &str, element: &str| {
        comp.evaluate(FrameIndex(global))
            .scene(scene)
            .and_then(|s| s.elements.iter().find(|e| e.id == element))
            .map(|e| e.scale)
            .unwrap()
    };
    // connect starts at 360, protection at 600.
    assert!(scale(360 + 150, "connect", "check") > 1.1);
    assert!(scale(600 + 170, "protection", "protected_badge") > 1.0);
}
