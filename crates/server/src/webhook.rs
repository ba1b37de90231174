use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use leavedesk_actions::{ActionRequest, ActionResponse, ActionRuntime};
use leavedesk_core::errors::InterfaceError;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct WebhookState {
    runtime: Arc<ActionRuntime>,
}

pub fn router(runtime: Arc<ActionRuntime>) -> Router {
    Router::new().route("/webhook", post(webhook)).with_state(WebhookState { runtime })
}

pub async fn webhook(
    State(state): State<WebhookState>,
    Json(request): Json<ActionRequest>,
) -> (StatusCode, Json<ActionResponse>) {
    let correlation_id = Uuid::new_v4().simple().to_string();

    info!(
        event_name = "system.webhook.request",
        correlation_id = %correlation_id,
        session_id = %request.sender_id,
        action = %request.next_action,
        "action request received"
    );

    match state.runtime.handle(&request, &correlation_id).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(failure) => (status_for(&failure.error), Json(failure.response)),
    }
}

fn status_for(error: &InterfaceError) -> StatusCode {
    match error {
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
