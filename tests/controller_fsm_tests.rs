use churn_form::{
    Error,
    controller::{SubmissionEvent, SubmissionState, SubmissionStateMachine, ViewState},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn loading_fsm() -> SubmissionStateMachine {
    let mut fsm = SubmissionStateMachine::new();
    fsm.transition(SubmissionEvent::Submit).unwrap();
    fsm
}

#[test]
fn test_fsm_initial_state() {
    let fsm = SubmissionStateMachine::new();
    assert_eq!(fsm.current_state(), SubmissionState::Idle);
    assert!(!fsm.is_pending());
    assert_eq!(ViewState::from(fsm.current_state()), ViewState::default());
}

#[rstest]
#[case(SubmissionEvent::ResponseSucceeded, SubmissionState::ShowingResult)]
#[case(SubmissionEvent::ResponseRejected, SubmissionState::ShowingError)]
#[case(SubmissionEvent::TransportFailed, SubmissionState::ShowingError)]
#[case(SubmissionEvent::Reset, SubmissionState::Loading)]
#[case(SubmissionEvent::Submit, SubmissionState::Loading)]
fn test_transitions_from_loading(
    #[case] event: SubmissionEvent,
    #[case] expected: SubmissionState,
) {
    let mut fsm = loading_fsm();
    assert_eq!(fsm.transition(event).unwrap(), expected);
    assert_eq!(fsm.current_state(), expected);
}

#[test]
fn test_submit_restarts_from_any_state() {
    let mut fsm = loading_fsm();
    fsm.transition(SubmissionEvent::ResponseRejected).unwrap();
    assert_eq!(
        fsm.transition(SubmissionEvent::Submit).unwrap(),
        SubmissionState::Loading
    );
    assert!(fsm.is_pending());
}

#[test]
fn test_reset_returns_to_idle() {
    let mut fsm = loading_fsm();
    fsm.transition(SubmissionEvent::ResponseSucceeded).unwrap();
    assert_eq!(
        fsm.transition(SubmissionEvent::Reset).unwrap(),
        SubmissionState::Idle
    );
    assert_eq!(
        fsm.transition(SubmissionEvent::Reset).unwrap(),
        SubmissionState::Idle
    );
}

#[rstest]
#[case(SubmissionEvent::ResponseSucceeded)]
#[case(SubmissionEvent::ResponseRejected)]
#[case(SubmissionEvent::TransportFailed)]
fn test_reply_without_submission_is_invalid(#[case] event: SubmissionEvent) {
    let mut fsm = SubmissionStateMachine::new();
    let err = fsm.transition(event).unwrap_err();
    assert!(matches!(err, Error::InvalidTransition { .. }));
    assert_eq!(fsm.current_state(), SubmissionState::Idle);
}

#[test]
fn test_second_reply_is_invalid() {
    let mut fsm = loading_fsm();
    fsm.transition(SubmissionEvent::ResponseSucceeded).unwrap();

    let err = fsm.transition(SubmissionEvent::TransportFailed).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid state transition: ShowingResult -> TransportFailed"
    );
}
