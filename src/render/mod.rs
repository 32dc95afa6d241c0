//! Pure decisions about what the result and error panels show.
//!
//! Nothing here touches a document; every view turns into a list of
//! [`DomPatch`]es that the controller hands to its [`crate::dom::Document`].

pub mod recommendations;
pub mod tooltip;

pub use recommendations::Recommendation;

use crate::{
    Error, Result,
    config::UiConfig,
    dom::{DomPatch, ScrollBlock, ids},
    prediction::PredictionResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Churn,
    NotChurn,
}

impl Verdict {
    /// `1` means churn; every other value is treated as not churn.
    pub fn from_prediction(prediction: f64) -> Self {
        if prediction == 1.0 {
            Verdict::Churn
        } else {
            Verdict::NotChurn
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Churn => "Customer Will Churn",
            Verdict::NotChurn => "Customer Will Not Churn",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Verdict::Churn => "#e74c3c",
            Verdict::NotChurn => "#27ae60",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Verdict::Churn => "High risk of customer churn detected",
            Verdict::NotChurn => "Low risk of customer churn",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Verdict::Churn => "fas fa-exclamation-circle icon-danger",
            Verdict::NotChurn => "fas fa-check-circle icon-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub verdict: Verdict,
    pub churn_text: String,
    pub not_churn_text: String,
    pub bar_width: String,
    pub recommendations: Vec<Recommendation>,
}

impl ResultView {
    /// Fails when a successful reply carries no probabilities.
    pub fn from_response(response: &PredictionResponse) -> Result<Self> {
        let probability = response
            .probability
            .ok_or_else(|| Error::transport("Prediction response is missing probabilities"))?;
        let verdict = Verdict::from_prediction(response.prediction);

        Ok(Self {
            verdict,
            churn_text: percent(probability.churn),
            not_churn_text: percent(probability.not_churn),
            bar_width: percent(probability.churn),
            recommendations: recommendations::recommendations(verdict, response),
        })
    }

    pub fn recommendation_html(&self) -> String {
        recommendations::to_html(&self.recommendations)
    }

    /// Content patches, including the delayed bar width. Panel visibility is not included.
    pub fn patches(&self, ui: &UiConfig) -> Vec<DomPatch> {
        vec![
            DomPatch::text(ids::PREDICTION_LABEL, self.verdict.label()),
            DomPatch::style(ids::PREDICTION_LABEL, "color", self.verdict.color()),
            DomPatch::text(ids::RESULT_DESCRIPTION, self.verdict.description()),
            DomPatch::SetClassName {
                id: ids::RESULT_ICON.to_string(),
                class_name: self.verdict.icon_class().to_string(),
            },
            DomPatch::text(ids::CHURN_PROB, self.churn_text.clone()),
            DomPatch::text(ids::NOT_CHURN_PROB, self.not_churn_text.clone()),
            // Delayed so the browser sees a width change and runs the transition
            DomPatch::deferred(
                ui.bar_animation_delay_ms,
                DomPatch::style(ids::CHURN_BAR, "width", self.bar_width.clone()),
            ),
            DomPatch::SetInnerHtml {
                id: ids::RECOMMENDATION.to_string(),
                html: self.recommendation_html(),
            },
        ]
    }

    pub fn scroll(ui: &UiConfig) -> DomPatch {
        DomPatch::scroll_to(ids::RESULTS_SECTION, ScrollBlock::Nearest, ui.smooth_scroll)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub message: String,
}

impl ErrorView {
    /// A `success: false` reply: the server's message, or the configured fallback.
    pub fn rejected(error: Option<&str>, ui: &UiConfig) -> Self {
        let message = match error {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => ui.application_error_fallback.clone(),
        };
        Self { message }
    }

    pub fn transport(ui: &UiConfig) -> Self {
        Self {
            message: ui.transport_error_message.clone(),
        }
    }

    pub fn patches(&self) -> Vec<DomPatch> {
        vec![DomPatch::text(ids::ERROR_MESSAGE, self.message.clone())]
    }

    pub fn scroll(ui: &UiConfig) -> DomPatch {
        DomPatch::scroll_to(ids::ERROR_SECTION, ScrollBlock::Nearest, ui.smooth_scroll)
    }
}

/// `value` followed by `%`, printed the way a browser prints a number.
pub fn percent(value: f64) -> String {
    format!("{}%", js_number(value))
}

fn js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
