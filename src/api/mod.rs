// API layer module (adapters for the HTTP transport)

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;
