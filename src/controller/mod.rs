pub mod fsm;
mod tracker;
mod view;

pub use fsm::{SubmissionEvent, SubmissionState, SubmissionStateMachine};
pub use tracker::{RequestToken, RequestTracker};
pub use view::ViewState;

use crate::{
    Result,
    config::UiConfig,
    dom::{Document, DomPatch, ScrollBlock, ids},
    form::{self, FormInput, SamplePreset, validation},
    prediction::{PredictionClient, PredictionResponse},
    render::{
        ErrorView, ResultView, Verdict,
        tooltip::{TITLE, TitleSwap},
    },
};
use tracing::{debug, info, warn};

/// A submission that has updated the page and is waiting for its reply.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub token: RequestToken,
    pub input: FormInput,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rendered(Verdict),
    Rejected(String),
    TransportFailed(String),
    /// A newer submission was started after this one; its reply was dropped.
    Stale,
}

/// Drives the prediction form: submission lifecycle, result and error
/// rendering, and the small field helpers the page exposes.
pub struct FormController<D: Document> {
    document: D,
    ui: UiConfig,
    fsm: SubmissionStateMachine,
    tracker: RequestTracker,
}

impl<D: Document> FormController<D> {
    pub fn new(document: D, ui: UiConfig) -> Self {
        Self {
            document,
            ui,
            fsm: SubmissionStateMachine::new(),
            tracker: RequestTracker::new(),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }

    pub fn state(&self) -> SubmissionState {
        self.fsm.current_state()
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::from(self.fsm.current_state())
    }

    pub fn in_flight(&self) -> Option<RequestToken> {
        self.tracker.in_flight()
    }

    pub fn collect_form_data(&self) -> Result<FormInput> {
        let entries = self.document.form_entries(ids::PREDICTION_FORM)?;
        Ok(form::collect_form_data(entries))
    }

    /// Runs one full submission against `client`.
    pub async fn submit(&mut self, client: &dyn PredictionClient) -> Result<SubmitOutcome> {
        let pending = self.begin_submit()?;
        let result = client.predict(&pending.input).await;
        self.complete_submit(pending.token, result)
    }

    /// Hides both panels, shows the spinner and snapshots the form.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission> {
        let state = self.fsm.transition(SubmissionEvent::Submit)?;
        self.document.apply_all(&ViewState::from(state).patches())?;

        let input = self.collect_form_data()?;
        let token = self.tracker.issue();
        info!("Submitting prediction request {} with {} fields", token, input.len());

        Ok(PendingSubmission { token, input })
    }

    /// Renders the reply for `token`. The spinner is hidden before either panel is drawn.
    pub fn complete_submit(
        &mut self,
        token: RequestToken,
        result: Result<PredictionResponse>,
    ) -> Result<SubmitOutcome> {
        if !self.tracker.settle(token) {
            debug!(
                "Dropping reply for request {}; a newer submission is pending",
                token
            );
            return Ok(SubmitOutcome::Stale);
        }

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!("Prediction request {} failed: {}", token, e);
                return self.show_transport_error();
            }
        };

        if !response.success {
            let view = ErrorView::rejected(response.error.as_deref(), &self.ui);
            info!("Prediction request {} rejected: {}", token, view.message);
            return self.show_error(SubmissionEvent::ResponseRejected, view);
        }

        match ResultView::from_response(&response) {
            Ok(view) => {
                info!(
                    "Prediction request {} succeeded: {}",
                    token,
                    view.verdict.label()
                );
                self.show_result(view)
            }
            Err(e) => {
                warn!("Prediction request {} returned an unusable reply: {}", token, e);
                self.show_transport_error()
            }
        }
    }

    fn show_result(&mut self, view: ResultView) -> Result<SubmitOutcome> {
        let state = self.fsm.transition(SubmissionEvent::ResponseSucceeded)?;
        let visibility = ViewState::from(state);

        self.document.apply(&visibility.loading_patch())?;
        self.document.apply_all(&view.patches(&self.ui))?;
        self.document.apply_all(&visibility.panel_patches())?;
        self.document.apply(&ResultView::scroll(&self.ui))?;

        Ok(SubmitOutcome::Rendered(view.verdict))
    }

    fn show_transport_error(&mut self) -> Result<SubmitOutcome> {
        let view = ErrorView::transport(&self.ui);
        self.show_error(SubmissionEvent::TransportFailed, view)
    }

    fn show_error(&mut self, event: SubmissionEvent, view: ErrorView) -> Result<SubmitOutcome> {
        let state = self.fsm.transition(event)?;
        let visibility = ViewState::from(state);

        self.document.apply(&visibility.loading_patch())?;
        self.document.apply_all(&view.patches())?;
        self.document.apply_all(&visibility.panel_patches())?;
        self.document.apply(&ErrorView::scroll(&self.ui))?;

        Ok(match event {
            SubmissionEvent::TransportFailed => SubmitOutcome::TransportFailed(view.message),
            _ => SubmitOutcome::Rejected(view.message),
        })
    }

    /// Clears every field back to its default, hides both panels and scrolls to the form.
    pub fn reset_form(&mut self) -> Result<()> {
        self.document.apply(&DomPatch::ResetForm {
            id: ids::PREDICTION_FORM.to_string(),
        })?;
        self.reset_results()
    }

    /// Hides both panels, keeping field values, and scrolls to the form.
    pub fn reset_results(&mut self) -> Result<()> {
        let state = self.fsm.transition(SubmissionEvent::Reset)?;
        self.document
            .apply_all(&ViewState::from(state).panel_patches())?;
        self.document.apply(&DomPatch::scroll_to(
            ids::PREDICTION_FORM,
            ScrollBlock::Start,
            self.ui.smooth_scroll,
        ))
    }

    /// Fills the inputs with a preset. Fields missing from the page are skipped.
    /// Returns how many fields were written.
    pub fn load_sample(&mut self, preset: SamplePreset) -> Result<usize> {
        let mut written = 0;
        for (feature, value) in preset.values() {
            if !self.document.has_element(feature.id()) {
                debug!("Sample field {} not on page, skipping", feature);
                continue;
            }
            self.document.apply(&DomPatch::SetValue {
                id: feature.id().to_string(),
                value: value.to_string(),
            })?;
            written += 1;
        }
        info!("Loaded '{}' sample into {} fields", preset.name(), written);
        Ok(written)
    }

    pub fn validate_form(&self) -> Result<bool> {
        self.document.check_validity(ids::PREDICTION_FORM)
    }

    pub fn field_blurred(&mut self, id: &str) -> Result<()> {
        let has_value = !self.document.value(id)?.is_empty();
        let valid = self.document.check_validity(id)?;
        let color = validation::on_blur(has_value, valid);
        self.document
            .apply(&DomPatch::style(id, "border-color", color.css()))
    }

    pub fn field_input(&mut self, id: &str) -> Result<()> {
        if let Some(color) = validation::on_input(self.document.check_validity(id)?) {
            self.document
                .apply(&DomPatch::style(id, "border-color", color.css()))?;
        }
        Ok(())
    }

    pub fn tooltip_hovered(&mut self, id: &str) -> Result<()> {
        let title = self.document.attribute(id, TITLE)?;
        if let Some(swap) = TitleSwap::decide(title.as_deref()) {
            self.document.apply_all(&swap.patches(id))?;
        }
        Ok(())
    }
}
