use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::RelayError;

/// Header carrying the caller's agent credential
pub const AGENT_TOKEN_HEADER: &str = "x-agent-token";

/// Agent authentication extractor for protected routes
///
/// Resolves the `x-agent-token` header to a known agent name before the
/// handler runs. The wrapped value is the caller's resolved identity —
/// handlers never trust a caller-supplied sender.
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(
///     AgentAuth(agent): AgentAuth,
/// ) -> Result<String, ApiError> {
///     Ok(format!("Hello {}", agent))
/// }
/// ```
pub struct AgentAuth(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AgentAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AGENT_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(RelayError::MissingCredential)?;

        let state = AppState::from_ref(state);
        let agent = state
            .resolver
            .resolve(token)
            .ok_or(RelayError::InvalidCredential)?;

        Ok(AgentAuth(agent.to_string()))
    }
}
