//! HTTP routes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app::App;
use crate::use_cases::spawn::{RenderSpec, SpawnError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/spawn", post(spawn))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Spawn
// =============================================================================

/// Inbound spawn command.
#[derive(Debug, Deserialize)]
pub struct SpawnBody {
    #[serde(default)]
    pub description: String,
    /// Requesting user, for logs only.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default = "default_allow_custom")]
    pub allow_custom: bool,
}

fn default_allow_custom() -> bool {
    true
}

/// Reply with a chat message and the card it was rendered from.
#[derive(Debug, Serialize)]
pub struct SpawnReply {
    pub text: String,
    pub embed: RenderSpec,
}

async fn spawn(
    State(app): State<Arc<App>>,
    Json(body): Json<SpawnBody>,
) -> Result<Json<SpawnReply>, ApiError> {
    if body.description.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Describe the monster you want to summon.".to_string(),
        ));
    }

    tracing::info!(
        user = body.user.as_deref().unwrap_or("anonymous"),
        allow_custom = body.allow_custom,
        "Spawn requested"
    );

    let embed = app
        .use_cases
        .spawn
        .spawn
        .execute(&body.description, body.allow_custom)
        .await?;

    Ok(Json(SpawnReply {
        text: embed.to_chat_text(),
        embed,
    }))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Upstream generation failed; the message is already user-safe.
    BadGateway(&'static str),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    text: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { text: &msg })).into_response()
            }
            ApiError::BadGateway(msg) => {
                (StatusCode::BAD_GATEWAY, Json(ErrorBody { text: msg })).into_response()
            }
        }
    }
}

impl From<SpawnError> for ApiError {
    fn from(e: SpawnError) -> Self {
        tracing::warn!(error = %e, transport = e.is_transport(), "Spawn failed");
        ApiError::BadGateway(e.user_message())
    }
}
