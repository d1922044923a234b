// API layer module (adapters for controllers)
// Handlers translate HTTP requests into repository calls and map the
// outcomes onto JSON bodies and status codes

pub mod errors;
pub mod handlers;
pub mod routes;
