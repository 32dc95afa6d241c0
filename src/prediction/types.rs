use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Class probabilities on a 0-100 scale, as sent by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Probability {
    pub churn: f64,
    pub not_churn: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// A reply without this flag is treated as a rejection.
    #[serde(default)]
    pub success: bool,
    /// Any JSON number; `1` (or `1.0`) means churn.
    #[serde(default)]
    pub prediction: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_label: Option<String>,
    /// Absent on error replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<Probability>,
    #[serde(default)]
    pub input_features: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResponse {
    pub fn is_churn(&self) -> bool {
        self.prediction == 1.0
    }

    /// Numeric value of an echoed input feature. Missing or non-numeric entries give `None`.
    pub fn feature(&self, name: &str) -> Option<f64> {
        self.input_features.get(name).and_then(Value::as_f64)
    }
}
