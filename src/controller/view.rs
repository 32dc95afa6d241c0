use super::fsm::SubmissionState;
use crate::dom::{DomPatch, ids};

/// Which of the three panels are on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub results_visible: bool,
    pub error_visible: bool,
}

impl From<SubmissionState> for ViewState {
    fn from(state: SubmissionState) -> Self {
        Self {
            loading: state == SubmissionState::Loading,
            results_visible: state == SubmissionState::ShowingResult,
            error_visible: state == SubmissionState::ShowingError,
        }
    }
}

impl ViewState {
    pub fn loading_patch(&self) -> DomPatch {
        toggle(ids::LOADING_SPINNER, self.loading)
    }

    pub fn panel_patches(&self) -> [DomPatch; 2] {
        [
            toggle(ids::RESULTS_SECTION, self.results_visible),
            toggle(ids::ERROR_SECTION, self.error_visible),
        ]
    }

    /// All three panels, spinner first.
    pub fn patches(&self) -> Vec<DomPatch> {
        let mut patches = Vec::with_capacity(3);
        patches.push(self.loading_patch());
        patches.extend(self.panel_patches());
        patches
    }
}

fn toggle(id: &str, visible: bool) -> DomPatch {
    if visible {
        DomPatch::show(id)
    } else {
        DomPatch::hide(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_view_follows_state() {
        assert_eq!(ViewState::from(SubmissionState::Idle), ViewState::default());
        assert_eq!(
            ViewState::from(SubmissionState::ShowingError),
            ViewState {
                loading: false,
                results_visible: false,
                error_visible: true,
            }
        );
    }

    #[test]
    fn test_loading_view_patches() {
        let patches = ViewState::from(SubmissionState::Loading).patches();
        assert_eq!(
            patches,
            vec![
                DomPatch::show(ids::LOADING_SPINNER),
                DomPatch::hide(ids::RESULTS_SECTION),
                DomPatch::hide(ids::ERROR_SECTION),
            ]
        );
    }
}
