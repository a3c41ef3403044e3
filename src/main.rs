use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use agent_relay::api::handlers::{meta, relay};
use agent_relay::api::state::AppState;
use agent_relay::config::RelayConfig;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = RelayConfig::from_env();
    let state = AppState::from_config(&config);

    let agents: Vec<&str> = state.resolver.agent_names().collect();
    tracing::info!("Registered agents: {}", agents.join(", "));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Service metadata
        .route("/", get(meta::service_info))
        .route("/health", get(meta::health_check))
        // Relay routes
        .route("/send", post(relay::send_message))
        .route("/messages", get(relay::retrieve_messages))
        .route("/messages/peek", get(relay::peek_messages))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Agent Relay service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
