//! Report generation backed by a local Ollama model server

pub mod client;
pub mod generator;

pub use client::{InferenceError, OllamaClient};
pub use generator::ReportGenerator;
