use crate::{Error, Result};
use tracing::{debug, info, warn};

// Submission states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    ShowingResult,
    ShowingError,
}

// Submission events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    Submit,
    ResponseSucceeded,
    ResponseRejected,
    TransportFailed,
    Reset,
}

#[derive(Debug, Default)]
pub struct SubmissionStateMachine {
    state: SubmissionState,
}

impl SubmissionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_state(&self) -> SubmissionState {
        self.state
    }

    pub fn transition(&mut self, event: SubmissionEvent) -> Result<SubmissionState> {
        let old_state = self.state;
        debug!("FSM processing event {:?} in state {:?}", event, old_state);

        let new_state = match (old_state, event) {
            // A new submission is always accepted, even over one in flight
            (_, SubmissionEvent::Submit) => SubmissionState::Loading,
            (SubmissionState::Loading, SubmissionEvent::ResponseSucceeded) => {
                SubmissionState::ShowingResult
            }
            (
                SubmissionState::Loading,
                SubmissionEvent::ResponseRejected | SubmissionEvent::TransportFailed,
            ) => SubmissionState::ShowingError,
            // Resetting hides the panels but cannot stop a pending request
            (SubmissionState::Loading, SubmissionEvent::Reset) => SubmissionState::Loading,
            (_, SubmissionEvent::Reset) => SubmissionState::Idle,
            _ => {
                warn!(
                    "Invalid FSM transition from {:?} with event {:?}",
                    old_state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", old_state),
                    requested: format!("{:?}", event),
                });
            }
        };

        if old_state != new_state {
            info!(
                "FSM state transition: {:?} -> {:?} (event: {:?})",
                old_state, new_state, event
            );
        }

        self.state = new_state;
        Ok(new_state)
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Loading
    }
}
