use tree_core::*;

fn ready_session() -> (Session, ScheduleHandle) {
    let mut session = Session::new();
    assert_eq!(session.set_started(true), SessionCommand::None);
    assert_eq!(session.set_gesture_enabled(true), SessionCommand::None);
    let handle = match session.detector_ready() {
        SessionCommand::AcquireCamera(h) => h,
        other => panic!("expected camera request, got {other:?}"),
    };
    (session, handle)
}

#[test]
fn status_reports_loading_until_the_detector_resolves() {
    let mut session = Session::new();
    assert_eq!(session.status(), StatusLabel::Loading);
    assert_eq!(session.status().as_str(), "Rendering...");
    session.detector_ready();
    assert_eq!(session.status(), StatusLabel::Disabled);
}

#[test]
fn camera_grant_activates_gesture_input() {
    let (mut session, handle) = ready_session();
    assert_eq!(session.camera(), CameraStatus::Requesting);
    assert!(!session.gesture_input_active());
    assert!(session.camera_granted(handle));
    assert!(session.gesture_input_active());
    assert_eq!(session.status().as_str(), "Active");
}

#[test]
fn frames_are_deduplicated_by_video_time() {
    let (mut session, handle) = ready_session();
    session.camera_granted(handle);
    assert!(session.accept_frame(handle, 0.5));
    assert!(!session.accept_frame(handle, 0.5));
    assert!(session.accept_frame(handle, 0.6));
}

#[test]
fn disabling_stops_the_loop_and_releases_the_camera() {
    let (mut session, handle) = ready_session();
    session.camera_granted(handle);
    assert_eq!(session.set_gesture_enabled(false), SessionCommand::ReleaseCamera);
    assert!(!session.is_current(handle));
    assert!(!session.accept_frame(handle, 1.0));
    assert_eq!(session.camera(), CameraStatus::Off);
    assert_eq!(session.status(), StatusLabel::Disabled);
}

#[test]
fn stopping_the_session_also_releases() {
    let (mut session, handle) = ready_session();
    session.camera_granted(handle);
    assert_eq!(session.set_started(false), SessionCommand::ReleaseCamera);
    assert!(!session.gesture_input_active());
}

#[test]
fn a_stale_grant_is_refused() {
    let (mut session, first) = ready_session();
    assert_eq!(session.set_gesture_enabled(false), SessionCommand::ReleaseCamera);
    let second = match session.set_gesture_enabled(true) {
        SessionCommand::AcquireCamera(h) => h,
        other => panic!("expected camera request, got {other:?}"),
    };
    assert_ne!(first, second);
    assert!(!session.camera_granted(first));
    assert!(session.camera_granted(second));
}

#[test]
fn camera_denial_falls_back_to_pointer_input() {
    let (mut session, handle) = ready_session();
    session.camera_denied(handle);
    assert_eq!(session.camera(), CameraStatus::Unavailable);
    assert!(!session.gesture_input_active());
    assert_eq!(session.status(), StatusLabel::NoCamera);

    assert_eq!(session.set_gesture_enabled(false), SessionCommand::None);
    assert!(matches!(
        session.set_gesture_enabled(true),
        SessionCommand::AcquireCamera(_)
    ));
}

#[test]
fn detector_failure_never_requests_the_camera() {
    let mut session = Session::new();
    session.set_started(true);
    session.set_gesture_enabled(true);
    assert_eq!(session.detector_failed(), SessionCommand::None);
    assert_eq!(session.detector(), DetectorStatus::Unavailable);
    assert!(!session.gesture_input_active());
    assert_eq!(session.set_gesture_enabled(true), SessionCommand::None);
}

#[test]
fn hints_follow_the_gesture() {
    let (session, _) = ready_session();
    assert_eq!(session.hint(GestureState::HandOpen), GestureHint::Exploding);
    assert_eq!(session.hint(GestureState::HeartShape), GestureHint::Heart);
    assert_eq!(
        session.hint(GestureState::HandClosed),
        GestureHint::GestureInstructions
    );
    assert_eq!(Session::new().hint(GestureState::Idle), GestureHint::DragInstructions);
}

#[test]
fn press_explodes_and_release_reassembles() {
    let mut pointer = PointerFallback::default();
    assert_eq!(pointer.press(100.0), GestureState::HandOpen);
    assert!(pointer.is_pressed());
    assert_eq!(pointer.release(), GestureState::HandClosed);
    assert!(!pointer.is_pressed());
}

#[test]
fn dragging_past_the_slop_feeds_rotation() {
    let mut pointer = PointerFallback::default();
    let mut channel = ManipulationDelta::new();
    pointer.press(100.0);
    assert_eq!(pointer.move_to(100.0 + DRAG_SLOP_PX * 0.5, &mut channel), None);
    assert_eq!(channel.rotation(), 0.0);

    assert_eq!(
        pointer.move_to(120.0, &mut channel),
        Some(GestureState::HandClosed)
    );
    assert!(pointer.is_dragging());
    let expected = (120.0 - (100.0 + DRAG_SLOP_PX * 0.5)) * DRAG_ROTATION_PER_PX;
    assert!((channel.rotation() - expected).abs() < 1e-6);

    assert_eq!(pointer.move_to(140.0, &mut channel), None);
    assert!((channel.rotation() - expected - 20.0 * DRAG_ROTATION_PER_PX).abs() < 1e-6);
}

#[test]
fn hover_without_press_does_nothing() {
    let mut pointer = PointerFallback::default();
    let mut channel = ManipulationDelta::new();
    assert_eq!(pointer.move_to(500.0, &mut channel), None);
    assert_eq!(channel.rotation(), 0.0);
}

#[test]
fn wheel_feeds_zoom() {
    let pointer = PointerFallback::default();
    let mut channel = ManipulationDelta::new();
    pointer.wheel(2.0, &mut channel);
    assert!((channel.zoom() - 2.0 * WHEEL_ZOOM_PER_LINE).abs() < 1e-6);
}
