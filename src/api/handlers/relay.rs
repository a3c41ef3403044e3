use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::AgentAuth;
use crate::api::state::AppState;
use crate::domain::{Message, RelayError};

/// Request body for sending a message
///
/// Both fields are optional at the deserialization layer so that a
/// missing field is reported as the relay's own invalid-request error
/// rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub to: Option<String>,
    pub message: Option<String>,
}

/// Response from a successful send
#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub success: bool,
    pub message_id: Uuid,
    pub queued: usize,
}

/// Query parameters for message retrieval
#[derive(Debug, Deserialize)]
pub struct RetrieveParams {
    /// Clear the queue after reading (default). Pass `clear=false` to
    /// read without consuming, like the peek endpoint.
    #[serde(default = "default_clear")]
    pub clear: bool,
}

fn default_clear() -> bool {
    true
}

/// An agent's pending inbox
#[derive(Debug, Serialize)]
pub struct InboxResponse {
    pub agent: String,
    pub count: usize,
    pub messages: Vec<Message>,
}

impl InboxResponse {
    fn new(agent: String, messages: Vec<Message>) -> Self {
        Self {
            agent,
            count: messages.len(),
            messages,
        }
    }
}

/// Send a message to another agent
///
/// POST /send
pub async fn send_message(
    State(state): State<AppState>,
    AgentAuth(sender): AgentAuth,
    Json(req): Json<SendRequest>,
) -> Result<Json<SendResponse>, ApiError> {
    let (to, message) = match (req.to, req.message) {
        (Some(to), Some(message)) => (to, message),
        _ => return Err(RelayError::InvalidRequest.into()),
    };

    let receipt = state.store.enqueue(&sender, &to, &message)?;

    Ok(Json(SendResponse {
        success: true,
        message_id: receipt.message_id,
        queued: receipt.queued,
    }))
}

/// Retrieve pending messages for the calling agent
///
/// GET /messages — drains the queue unless `clear=false` is passed
pub async fn retrieve_messages(
    State(state): State<AppState>,
    AgentAuth(agent): AgentAuth,
    Query(params): Query<RetrieveParams>,
) -> Json<InboxResponse> {
    let messages = if params.clear {
        state.store.drain(&agent)
    } else {
        state.store.peek(&agent)
    };

    Json(InboxResponse::new(agent, messages))
}

/// Peek at pending messages without clearing them
///
/// GET /messages/peek
pub async fn peek_messages(
    State(state): State<AppState>,
    AgentAuth(agent): AgentAuth,
) -> Json<InboxResponse> {
    let messages = state.store.peek(&agent);

    Json(InboxResponse::new(agent, messages))
}
