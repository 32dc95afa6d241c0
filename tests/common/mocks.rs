use async_trait::async_trait;
use churn_form::{
    Error, Result,
    form::FormInput,
    prediction::{PredictionClient, PredictionResponse},
};
use std::sync::{Arc, Mutex};

/// Mock prediction client for testing
#[derive(Debug, Default)]
pub struct MockPredictionClient {
    pub responses: Arc<Mutex<Vec<PredictionResponse>>>,
    pub requests: Arc<Mutex<Vec<FormInput>>>,
    pub error: Option<String>,
}

impl MockPredictionClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, responses: Vec<PredictionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    /// Every call fails as if the network were down.
    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<FormInput> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl PredictionClient for MockPredictionClient {
    async fn predict(&self, input: &FormInput) -> Result<PredictionResponse> {
        self.requests.lock().unwrap().push(input.clone());

        if let Some(ref error) = self.error {
            return Err(Error::transport(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::transport("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}
