use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn fade_in_twenty_frame_ramp() {
    assert_eq!(fade_in(0, 0, 20), 0.0);
    assert_eq!(fade_in(10, 0, 20), 0.5);
    assert_eq!(fade_in(20, 0, 20), 1.0);
    assert_eq!(fade_in(-40, 0, 20), 0.0);
    assert_eq!(fade_in(4000, 0, 20), 1.0);
}

#[test]
fn fade_out_mirrors_fade_in() {
    assert_eq!(fade_out(160, 160, 20), 1.0);
    assert_eq!(fade_out(170, 160, 20), 0.5);
    assert_eq!(fade_out(180, 160, 20), 0.0);
    assert_eq!(fade_out(500, 160, 20), 0.0);
}

#[test]
fn zero_duration_fades_are_hard_cuts() {
    assert_eq!(fade_in(9, 10, 0), 0.0);
    assert_eq!(fade_in(10, 10, 0), 1.0);
    assert_eq!(fade_out(10, 10, 0), 0.0);
}

#[test]
fn stagger_is_strictly_increasing() {
    let delays: Vec<i64> = (0..20).map(|i| stagger_delay(i, 50, 5)).collect();
    assert_eq!(delays[0], 50);
    assert_eq!(delays[3], 65);
    assert!(delays.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn pulse_stays_in_band_and_repeats() {
    let fps = fps30();
    // 2 pulses per second at 30 fps: period of 15 frames.
    for f in -60..300 {
        let v = pulse(f, fps, 2.0);
        assert!((PULSE_MIN..=PULSE_MAX).contains(&v), "frame {f}: {v}");
        assert_eq!(v.to_bits(), pulse(f + 15, fps, 2.0).to_bits());
    }
    assert!((pulse(0, fps, 2.0) - 0.975).abs() < 1e-12);
}

#[test]
fn pulse_rests_without_a_frequency() {
    assert_eq!(pulse(7, fps30(), 0.0), PULSE_MAX);
    assert_eq!(pulse(7, fps30(), f64::NAN), PULSE_MAX);
}

#[test]
fn shake_is_bounded_and_out_of_phase() {
    let fps = fps30();
    let start = shake(0, fps, 5.0, 10.0);
    assert!(start.x.abs() < 1e-12);
    assert!((start.y - 2.5).abs() < 1e-12);
    for f in 0..120 {
        let v = shake(f, fps, 5.0, 10.0);
        assert!(v.x.abs() <= 5.0 + 1e-12);
        assert!(v.y.abs() <= 2.5 + 1e-12);
        // 10 Hz at 30 fps: period of 3 frames.
        assert_eq!(v, shake(f + 3, fps, 5.0, 10.0));
    }
}

#[test]
fn cross_fade_conserves_total_opacity() {
    for f in -30..80 {
        let cf = cross_fade(f, 10, 15);
        assert!((cf.opacity_a + cf.opacity_b - 1.0).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&cf.opacity_a));
    }
    assert_eq!(cross_fade(0, 10, 15).opacity_a, 1.0);
    assert_eq!(cross_fade(25, 10, 15).opacity_b, 1.0);
}

#[test]
fn typewriter_is_monotone_and_capped() {
    let mut prev = 0;
    for f in -10..200 {
        let n = typewriter(f, 42, 5, 2.0);
        assert!(n >= prev);
        assert!(n <= 42);
        prev = n;
    }
    assert_eq!(typewriter(5, 42, 5, 2.0), 0);
    assert_eq!(typewriter(8, 42, 5, 2.0), 6);
    assert_eq!(typewriter(199, 42, 5, 2.0), 42);
    assert_eq!(typewriter(100, 42, 0, 0.5), 42);
    assert_eq!(typewriter(11, 42, 0, 0.5), 5);
    assert_eq!(typewriter(100, 42, 0, -1.0), 0);
}

#[test]
fn eased_progress_defaults_to_cubic_out_shape() {
    assert_eq!(eased_progress(0, 0, 10, Ease::OutCubic), 0.0);
    assert_eq!(eased_progress(10, 0, 10, Ease::OutCubic), 1.0);
    let mid = eased_progress(5, 0, 10, Ease::OutCubic);
    assert!((mid - 0.875).abs() < 1e-12);
}

#[test]
fn spring_helpers_start_at_rest() {
    let fps = fps30();
    assert_eq!(slide_in(10, fps, 10), 0.0);
    assert_eq!(scale_in(3, fps, 10), 0.0);
    assert_eq!(bounce_in(0, fps, 0), 0.0);
    assert_eq!(pop_in(0, fps, 5), 0.8);
    assert!((pop_in(400, fps, 5) - 1.0).abs() < 1e-6);
}

#[test]
fn bounce_in_overshoots() {
    let fps = fps30();
    let peak = (0..60).map(|f| bounce_in(f, fps, 0)).fold(0.0, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn count_up_rounds_towards_target() {
    assert_eq!(count_up(0, 60, 60, 127.0), 0.0);
    assert_eq!(count_up(90, 60, 60, 127.0), 64.0);
    assert_eq!(count_up(500, 60, 60, 127.0), 127.0);
}
