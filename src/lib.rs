// HTTP server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod relay;
pub mod routes;
pub mod sse;

// Completion client layer
pub mod llm;
