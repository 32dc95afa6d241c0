mod client;
mod types;

pub use client::{HttpPredictionClient, PredictionClient};
pub use types::{PredictionResponse, Probability};
