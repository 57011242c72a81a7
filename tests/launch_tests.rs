// Host-side tests for the start gesture: audio access success and rejection.

mod support;

use mic_bloom::core::*;
use mic_bloom::input::PointerState;
use support::{install_logger, logged, FixedSource, RecordingScheduler};

#[test]
fn rejected_access_schedules_nothing_and_logs_once() {
    install_logger();
    let mut sched = RecordingScheduler::default();
    let mut started = false;
    let access: Result<AudioSampler<FixedSource>, _> =
        Err(AudioAccessError::from_dom_exception("NotAllowedError", "Permission denied"));

    let ok = launch("reject-case", access, |_sampler| {
        started = true;
        sched.schedule(Reschedule::NextFrame);
    });

    assert!(!ok);
    assert!(!started);
    assert!(sched.requests.is_empty());
    assert_eq!(logged(log::Level::Error, "[reject-case]"), 1);
    assert_eq!(logged(log::Level::Error, "permission denied"), 1);
}

#[test]
fn granted_access_arms_and_schedules_first_frame() {
    install_logger();
    let mut sched = RecordingScheduler::default();
    let mut state = SphereState::new(SphereConfig::default());
    let access = Ok(AudioSampler::new(FixedSource::flat(128, 256, 0)));

    let ok = launch("grant-case", access, |mut sampler| {
        state.arm();
        let v = state.tick(sampler.frequency_snapshot(), PointerState::default());
        assert!(v.is_some());
        sched.schedule(Reschedule::NextFrame);
    });

    assert!(ok);
    assert_eq!(state.phase, SpherePhase::Running);
    assert_eq!(sched.requests, vec![Reschedule::NextFrame]);
    assert_eq!(logged(log::Level::Error, "[grant-case]"), 0);
}

#[test]
fn missing_start_control_wires_nothing_and_logs_once() {
    install_logger();
    let mut wired = Vec::new();

    let ok = wire_start_control("no-button-case", None::<&str>, |c| wired.push(c));
    assert!(!ok);
    assert!(wired.is_empty());
    assert_eq!(logged(log::Level::Error, "[no-button-case] missing #start-button"), 1);

    let ok = wire_start_control("button-case", Some("start-button"), |c| wired.push(c));
    assert!(ok);
    assert_eq!(wired, vec!["start-button"]);
    assert_eq!(logged(log::Level::Error, "[button-case]"), 0);
}

#[test]
fn dom_exception_names_are_classified() {
    assert!(matches!(
        AudioAccessError::from_dom_exception("NotAllowedError", "x"),
        AudioAccessError::Denied(_)
    ));
    assert!(matches!(
        AudioAccessError::from_dom_exception("SecurityError", "x"),
        AudioAccessError::Denied(_)
    ));
    assert!(matches!(
        AudioAccessError::from_dom_exception("NotFoundError", "x"),
        AudioAccessError::NoDevice(_)
    ));
    assert!(matches!(
        AudioAccessError::from_dom_exception("OverconstrainedError", "x"),
        AudioAccessError::NoDevice(_)
    ));
    let other = AudioAccessError::from_dom_exception("AbortError", "gone");
    assert_eq!(
        other,
        AudioAccessError::Unavailable("AbortError: gone".to_string())
    );
    assert_eq!(
        other.to_string(),
        "audio input unavailable: AbortError: gone"
    );
}
