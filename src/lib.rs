pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod form;
pub mod prediction;
pub mod render;
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use controller::FormController;
pub use error::{Error, Result};
