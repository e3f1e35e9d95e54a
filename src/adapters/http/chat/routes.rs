//! Axum routes for chat relay endpoints.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{create_thread, list_messages, root, send_message, ChatAppState};

/// Creates routes for chat endpoints.
///
/// Endpoints:
/// - POST /chat/new - Create a new conversation thread
/// - POST /chat/send - Append a user message and start a run
/// - POST /chat/list - Fetch messages, optionally with a run's status
pub fn chat_routes() -> Router<ChatAppState> {
    Router::new()
        .route("/chat/new", post(create_thread))
        .route("/chat/send", post(send_message))
        .route("/chat/list", post(list_messages))
}

/// Full application router: liveness probe plus chat routes, with permissive
/// CORS and request tracing.
pub fn chat_router(state: ChatAppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(chat_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAssistantProvider;
    use std::sync::Arc;

    #[test]
    fn chat_routes_creates_valid_router() {
        let _routes = chat_routes();
    }

    #[test]
    fn chat_router_creates_combined_router() {
        let state = ChatAppState::new(Arc::new(MockAssistantProvider::new()), "asst_test");
        let _router = chat_router(state);
    }
}
