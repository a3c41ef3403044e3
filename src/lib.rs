//! Agent Relay Library
//!
//! A minimal store-and-forward relay for named agents: each agent
//! authenticates with a static token, posts messages addressed to another
//! agent, and retrieves (optionally destructively) its pending inbox.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
