use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn peak(cfg: SpringConfig) -> f64 {
    (0..300)
        .map(|f| spring(f, fps30(), cfg))
        .fold(f64::MIN, f64::max)
}

#[test]
fn is_exactly_zero_before_and_at_start() {
    let cfg = SpringConfig::new(20.0, 100.0, 1.0).unwrap();
    assert_eq!(spring(-5, fps30(), cfg), 0.0);
    assert_eq!(spring(0, fps30(), cfg), 0.0);
    assert_eq!(spring(i64::MIN, fps30(), cfg), 0.0);
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    for cfg in [SpringConfig::DEFAULT, SpringConfig::BOUNCY, SpringConfig::SLOW] {
        for f in [1, 7, 29, 90] {
            assert_eq!(
                spring(f, fps30(), cfg).to_bits(),
                spring(f, fps30(), cfg).to_bits()
            );
        }
    }
}

#[test]
fn presets_converge_after_three_seconds_and_stay_there() {
    let fps = fps30();
    for cfg in [
        SpringConfig::DEFAULT,
        SpringConfig::FAST,
        SpringConfig::SLOW,
        SpringConfig::BOUNCY,
        SpringConfig::SNAPPY,
        SpringConfig::new(20.0, 200.0, 1.0).unwrap(),
        SpringConfig::new(15.0, 100.0, 1.0).unwrap(),
    ] {
        for f in 91..=1800 {
            let v = spring(f, fps, cfg);
            assert!((v - 1.0).abs() < 1e-3, "{cfg:?} at frame {f}: {v}");
        }
    }
}

#[test]
fn critically_damped_default_never_overshoots() {
    let mut prev = 0.0;
    for f in 0..200 {
        let v = spring(f, fps30(), SpringConfig::DEFAULT);
        assert!(v >= prev);
        assert!(v <= 1.0);
        prev = v;
    }
}

#[test]
fn overdamped_rises_monotonically() {
    let cfg = SpringConfig::new(60.0, 100.0, 1.0).unwrap();
    assert!(cfg.damping_ratio() > 1.0);
    let mut prev = 0.0;
    for f in 0..600 {
        let v = spring(f, fps30(), cfg);
        assert!(v >= prev);
        assert!(v <= 1.0);
        prev = v;
    }
    assert!((prev - 1.0).abs() < 1e-3);
}

#[test]
fn overshoot_grows_as_damping_falls() {
    let loose = SpringConfig::new(5.0, 100.0, 1.0).unwrap();
    let tight = SpringConfig::new(10.0, 100.0, 1.0).unwrap();
    assert!(peak(tight) > 1.0);
    assert!(peak(loose) > peak(tight));
}

#[test]
fn overshoot_grows_with_stiffness() {
    let soft = SpringConfig::new(10.0, 100.0, 1.0).unwrap();
    let stiff = SpringConfig::new(10.0, 400.0, 1.0).unwrap();
    assert!(peak(stiff) > peak(soft));
}

#[test]
fn settling_takes_longer_with_more_mass() {
    let light = SpringConfig::new(20.0, 100.0, 1.0).unwrap();
    let heavy = SpringConfig::new(20.0, 100.0, 3.0).unwrap();
    let fps = fps30();
    assert!(light.settle_frames(fps, 1e-3) < heavy.settle_frames(fps, 1e-3));
}

#[test]
fn settle_frames_is_a_lasting_guarantee() {
    let fps = fps30();
    for cfg in [SpringConfig::BOUNCY, SpringConfig::DEFAULT, SpringConfig::SLOW] {
        let from = cfg.settle_frames(fps, 1e-3) as i64;
        assert!(from > 0);
        for f in from..from + 600 {
            assert!((spring(f, fps, cfg) - 1.0).abs() <= 1e-3);
        }
    }
}

#[test]
fn spring_between_remaps_progress() {
    let fps = fps30();
    assert_eq!(spring_between(0, fps, SpringConfig::DEFAULT, 30.0, 0.0), 30.0);
    let late = spring_between(300, fps, SpringConfig::DEFAULT, 30.0, 0.0);
    assert!(late.abs() < 1e-6);
}

#[test]
fn rejects_non_positive_or_non_finite_parameters() {
    for (d, k, m) in [
        (0.0, 100.0, 1.0),
        (20.0, -1.0, 1.0),
        (20.0, 100.0, 0.0),
        (f64::NAN, 100.0, 1.0),
        (20.0, f64::INFINITY, 1.0),
    ] {
        let err = SpringConfig::new(d, k, m).unwrap_err();
        assert!(matches!(err, CadenceError::InvalidConfig(_)));
    }
}

#[test]
fn deserializes_params_and_presets() {
    let cfg: SpringConfig = serde_json::from_str(r#"{"damping": 20, "stiffness": 100}"#).unwrap();
    assert_eq!(cfg, SpringConfig::DEFAULT);

    let cfg: SpringConfig = serde_json::from_str(r#""bouncy""#).unwrap();
    assert_eq!(cfg, SpringConfig::BOUNCY);

    assert!(serde_json::from_str::<SpringConfig>(r#""wobbly""#).is_err());
    assert!(
        serde_json::from_str::<SpringConfig>(r#"{"damping": 0, "stiffness": 100}"#).is_err()
    );
}
