//! Prediction-serving facade for pre-trained health risk models.
//!
//! Accepts loosely-typed feature inputs over HTTP, runs them through four
//! independent condition models (diabetes, heart, liver, mental health),
//! and returns a normalized risk score plus rule-based lifestyle advice.
//! Model artifacts are loaded once at startup; a missing artifact disables
//! only that condition.

pub mod api;
pub mod config;
pub mod error;
pub mod ml;
pub mod models;
pub mod recommendations;
