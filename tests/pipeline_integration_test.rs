//! End-to-end tests for the filter -> smoother -> mapper pipeline and the
//! session state machine around it

use parallax_window::{
    confidence::{ConfidenceTracker, InputMode},
    config::Config,
    mapper::ParallaxMapper,
    session::TrackingSession,
    source::{DetectionSource, PointerSource, PositionSample, ScriptedSource},
};

const FRAME: f64 = 1.0 / 60.0;

fn make_session(detector: Option<Box<dyn DetectionSource>>, mode: InputMode) -> TrackingSession {
    TrackingSession::new(
        ParallaxMapper::new(2.0, 0.1, true),
        ConfidenceTracker::new(mode, 50.0),
        PointerSource::new(800.0, 600.0).unwrap(),
        detector,
    )
}

#[test]
fn test_camera_mapping_sign() {
    let mapper = ParallaxMapper::new(2.0, 0.1, false);
    let frame = mapper.map(0.5, 0.2);
    assert!((frame.camera.x - -1.0).abs() < 1e-12);
    assert!((frame.camera.y - -0.2).abs() < 1e-12);
}

#[test]
fn test_pipeline_output_bounded() {
    // Whatever the detector claims, camera output never exceeds the range
    // implied by the clamped smoothed position.
    let mut mapper = ParallaxMapper::new(5.0, 0.5, true);
    let inputs = [0.9, -1.0, 1.0, 7.5, -3.2, 0.0, 1.0, -1.0];

    for (i, &x) in inputs.iter().cycle().take(400).enumerate() {
        let frame = mapper.update(x, -x, Some(i as f64 * FRAME));
        assert!(frame.camera.x.abs() <= 5.0 + 1e-9);
        assert!(frame.camera.y.abs() <= 2.5 + 1e-9);
        let frustum = frame.frustum.unwrap();
        assert!(frustum.shift_x().abs() <= 0.5 + 1e-9);
        assert!(frustum.shift_y().abs() <= 0.25 + 1e-9);
    }
}

#[test]
fn test_confidence_flicker_immunity() {
    // A single missed cycle amid continuous detections must never cross the
    // default alert threshold.
    let mut tracker = ConfidenceTracker::default();
    let mut alerted = false;
    for i in 0..120 {
        tracker.update(i != 60);
        alerted |= tracker.is_low();
    }
    assert!(!alerted);
}

#[test]
fn test_confidence_decay_sequence() {
    let mut tracker = ConfidenceTracker::default();
    let mut previous = tracker.score();
    for i in 1..=20 {
        let score = tracker.update(false);
        assert_eq!(score, 100.0 - 5.0 * f64::from(i));
        assert!(score < previous);
        previous = score;
    }
    assert_eq!(tracker.score(), 0.0);
    assert_eq!(tracker.update(true), 100.0);
}

#[test]
fn test_session_dropout_alert_and_recovery() {
    // 30 missed frames drive the score from 100 to below 50; the first
    // detection afterwards clears the alert immediately.
    let detector = ScriptedSource::new(0.5, 120.0).with_dropout(10..40);
    let mut session = make_session(Some(Box::new(detector)), InputMode::Tracking);
    session.start();

    for i in 0..60u32 {
        let out = session.tick(Some(f64::from(i) * FRAME)).unwrap();
        // Misses start at frame 10; the 11th miss (frame 20) drops the
        // score to 45 and raises the alert.
        if i < 20 {
            assert!(!out.low_confidence, "alert fired early at frame {i}");
        }
        if (20..40).contains(&i) {
            assert!(out.low_confidence, "alert missing at frame {i}");
        }
        if i == 40 {
            assert_eq!(out.score, 100.0);
            assert!(!out.low_confidence);
        }
    }
}

#[test]
fn test_session_holds_last_position_through_dropout() {
    let detector = ScriptedSource::new(0.5, 120.0).with_dropout(30..35);
    let mut session = make_session(Some(Box::new(detector)), InputMode::Tracking);
    session.start();

    let mut last_camera_x = 0.0;
    for i in 0..30u32 {
        last_camera_x = session.tick(Some(f64::from(i) * FRAME)).unwrap().frame.camera.x;
    }
    // During the dropout the camera keeps easing toward the last good
    // position instead of snapping to center.
    for i in 30..35u32 {
        let out = session.tick(Some(f64::from(i) * FRAME)).unwrap();
        assert!((out.frame.camera.x - last_camera_x).abs() < 0.1);
        last_camera_x = out.frame.camera.x;
    }
}

#[test]
fn test_mode_round_trip_releases_detector() {
    let detector = ScriptedSource::new(0.5, 120.0);
    let mut session = make_session(Some(Box::new(detector)), InputMode::Tracking);
    session.start();
    session.tick(Some(0.0)).unwrap();

    assert_eq!(session.switch_mode(InputMode::Fallback).unwrap(), InputMode::Fallback);
    let out = session.tick(Some(FRAME)).unwrap();
    assert_eq!(out.mode, InputMode::Fallback);

    assert_eq!(session.switch_mode(InputMode::Tracking).unwrap(), InputMode::Tracking);
    let out = session.tick(Some(2.0 * FRAME)).unwrap();
    assert_eq!(out.mode, InputMode::Tracking);
}

#[test]
fn test_recenter_is_idempotent() {
    let mut session = make_session(None, InputMode::Fallback);
    session.start();
    session.pointer_moved(700.0, 500.0);
    for i in 0..30u32 {
        session.tick(Some(f64::from(i) * FRAME)).unwrap();
    }

    session.recenter();
    session.recenter();
    // Pointer still drives the next tick, but the smoothed state restarted
    // from origin: one step of lerp 0.1 from zero toward the pointer.
    session.pointer_moved(400.0, 300.0); // center -> (0, 0)
    let out = session.tick(Some(1.0)).unwrap();
    assert_eq!(out.frame.camera.x, 0.0);
    assert_eq!(out.frame.camera.y, 0.0);
}

#[test]
fn test_config_built_session_runs() {
    let config = Config::default();
    config.validate().unwrap();
    let mut session = TrackingSession::new(
        config.create_mapper(),
        config.create_tracker().unwrap(),
        PointerSource::new(1920.0, 1080.0).unwrap(),
        Some(Box::new(ScriptedSource::new(0.4, 90.0))),
    );
    session.start();
    for i in 0..90u32 {
        let out = session.tick(Some(f64::from(i) * FRAME)).unwrap();
        assert!(out.frame.camera.x.is_finite());
        assert!(out.frame.frustum.is_some());
        assert_eq!(out.score, 100.0);
    }
    session.stop();
    assert!(!session.is_running());
}

#[test]
fn test_manual_sample_feed() {
    // A host may bypass the session and drive the mapper with raw samples
    let mut mapper = ParallaxMapper::new(2.0, 0.2, false);
    let samples = [
        PositionSample::found(0.1, 0.0),
        PositionSample::found(0.12, 0.01),
        PositionSample::missed(),
        PositionSample::found(0.11, -0.01),
    ];

    let mut last = (0.0, 0.0);
    for (i, sample) in samples.iter().enumerate() {
        if sample.detected {
            last = (sample.x, sample.y);
        }
        let frame = mapper.update(last.0, last.1, Some(i as f64 * FRAME));
        assert!(frame.camera.x <= 0.0);
    }
}
