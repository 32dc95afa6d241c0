use super::types::PredictionResponse;
use crate::{Error, Result, config::EndpointConfig, form::FormInput};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Sends one form submission to the prediction service.
///
/// The controller runs on a single-threaded event loop, so implementations are
/// not required to be `Send`.
#[async_trait(?Send)]
pub trait PredictionClient {
    async fn predict(&self, input: &FormInput) -> Result<PredictionResponse>;
}

pub struct HttpPredictionClient {
    client: reqwest::Client,
    url: String,
}

impl HttpPredictionClient {
    /// `origin` is used when the endpoint config has no base URL of its own.
    pub fn new(endpoint: &EndpointConfig, origin: Option<&str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: endpoint.predict_url(origin),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, input: &FormInput) -> Result<PredictionResponse> {
        debug!("Posting {} fields to {}", input.len(), self.url);

        let response = self
            .client
            .post(&self.url)
            .json(input)
            .send()
            .await
            .inspect_err(|e| warn!("Prediction request failed: {}", e))?;

        // Error replies still carry a JSON body with `success: false`, so the
        // status code is logged but not treated as a failure on its own.
        let status = response.status();
        debug!("Prediction endpoint answered with status {}", status);

        let body = response
            .text()
            .await
            .inspect_err(|e| warn!("Failed to read prediction response: {}", e))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("Prediction response was not valid JSON (status {}): {}", status, e);
            Error::transport(format!("Failed to parse prediction response: {}", e))
        })
    }
}
