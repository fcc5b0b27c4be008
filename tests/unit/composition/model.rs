use super::*;

const TWO_SCENES: &str = r#"{
    "fps": {"num": 30, "den": 1},
    "canvas": {"width": 1920, "height": 1080},
    "scenes": [
        {"id": "intro", "duration": 180},
        {"id": "outro", "duration": 150, "envelope": {"fade_in": 0}}
    ]
}"#;

#[test]
fn parses_and_registers_scenes() {
    let comp = Composition::from_json_str(TWO_SCENES).unwrap();
    assert_eq!(comp.fps(), Fps::new(30, 1).unwrap());
    assert_eq!(comp.duration_frames(), 330);
    let regs = comp.registrations();
    assert_eq!(
        regs,
        vec![
            SceneRegistration {
                scene_id: "intro".to_owned(),
                start: FrameIndex(0),
                duration: 180,
            },
            SceneRegistration {
                scene_id: "outro".to_owned(),
                start: FrameIndex(180),
                duration: 150,
            },
        ]
    );
    assert_eq!(comp.scene("outro").unwrap().scene_envelope().fade_in, 0);
    assert!(comp.scene("missing").is_none());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Composition::from_json_str("{\"fps\": ").unwrap_err();
    assert!(matches!(err, CadenceError::Serde(_)));
}

#[test]
fn zero_duration_scenes_are_rejected() {
    let json = TWO_SCENES.replace("\"duration\": 150", "\"duration\": 0");
    let err = Composition::from_json_str(&json).unwrap_err();
    assert!(matches!(err, CadenceError::Validation(_)));
}

#[test]
fn missing_files_surface_as_wrapped_io_errors() {
    let err = Composition::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, CadenceError::Other(_)));
    assert!(err.to_string().contains("not/here.json"));
}
