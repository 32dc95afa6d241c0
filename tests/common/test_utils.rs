use churn_form::{
    FormController,
    config::UiConfig,
    dom::{FieldConstraints, MemoryDocument, ids},
    form::Feature,
    prediction::PredictionResponse,
};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Element ids of every non-input element the page provides.
pub const PANEL_IDS: [&str; 11] = [
    ids::RESULTS_SECTION,
    ids::PREDICTION_LABEL,
    ids::RESULT_DESCRIPTION,
    ids::RESULT_ICON,
    ids::CHURN_PROB,
    ids::NOT_CHURN_PROB,
    ids::CHURN_BAR,
    ids::RECOMMENDATION,
    ids::ERROR_SECTION,
    ids::ERROR_MESSAGE,
    ids::LOADING_SPINNER,
];

/// A page with the full markup contract: form, ten feature inputs, panels and one tooltip.
pub fn create_test_document() -> MemoryDocument {
    let mut doc = MemoryDocument::new().with_form(ids::PREDICTION_FORM);
    for feature in Feature::ALL {
        let constraints = match feature {
            Feature::ContractRenewal | Feature::DataPlan => {
                FieldConstraints::required().range(0.0, 1.0)
            }
            _ => FieldConstraints::required().range(0.0, 1000.0),
        };
        doc = doc.with_field(ids::PREDICTION_FORM, feature.id(), constraints);
    }
    for id in PANEL_IDS {
        doc = doc.with_element(id);
    }
    doc.with_attribute("accountWeeksTip", "title", "Number of weeks the account has been active")
}

pub fn create_test_controller() -> FormController<MemoryDocument> {
    FormController::new(create_test_document(), UiConfig::default())
}

/// Fills the form with the values a user would type.
pub fn fill_form(controller: &mut FormController<MemoryDocument>, values: &[(Feature, &str)]) {
    for (feature, value) in values {
        controller
            .document_mut()
            .set_value(feature.id(), value)
            .unwrap();
    }
}

pub fn create_success_response(
    prediction: i64,
    churn: f64,
    not_churn: f64,
    features: Value,
) -> PredictionResponse {
    let label = if prediction == 1 { "Churn" } else { "Not Churn" };
    serde_json::from_value(json!({
        "success": true,
        "prediction": prediction,
        "prediction_label": label,
        "probability": {"churn": churn, "not_churn": not_churn},
        "input_features": features,
    }))
    .unwrap()
}

pub fn create_error_response(error: Option<&str>) -> PredictionResponse {
    let mut body = json!({"success": false});
    if let Some(error) = error {
        body["error"] = json!(error);
    }
    serde_json::from_value(body).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
endpoint:
  base_url: "http://localhost:5000"
  predict_path: "/predict"

ui:
  bar_animation_delay_ms: 150
  smooth_scroll: false

logs:
  level: "debug"
"#;
