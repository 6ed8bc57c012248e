//! HTTP surface of the callback service.
//!
//! `GET /callback/` answers platform health checks; `POST /callback/` is the
//! signed webhook. The route carries no CSRF or session middleware: the
//! caller is the platform's server, and authenticity rests on the body
//! signature alone.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header::HeaderName, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use uuid::Uuid;

use crate::line::LineClient;
use crate::signature::{verify_signature, SIGNATURE_HEADER};
use crate::talk::TalkClient;
use crate::webhook::{text_message, CallbackPayload};

#[derive(Clone)]
pub struct AppState {
    pub channel_secret: String,
    pub talk: TalkClient,
    pub line: LineClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/callback/", get(handle_health).post(handle_callback))
        .layer(middleware::from_fn(with_request_id))
        .with_state(state)
}

async fn handle_health() -> &'static str {
    "OK"
}

/// Verifies the signature over the exact body bytes, then dispatches every
/// text-message event through the reply pipeline in order.
async fn handle_callback(
    State(state): State<AppState>,
    request_id: Option<Extension<String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let rid = request_id
        .as_ref()
        .map(|Extension(id)| id.as_str())
        .unwrap_or("n/a");

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if signature.is_empty() || !verify_signature(&state.channel_secret, signature, &body) {
        tracing::warn!(request_id = %rid, "callback signature mismatch");
        return StatusCode::BAD_REQUEST.into_response();
    }

    let payload: CallbackPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(error) => {
            tracing::error!(request_id = %rid, "callback payload parse error: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    for event in &payload.events {
        let Some(message) = text_message(event) else {
            continue;
        };

        let reply = match state.talk.smalltalk(message.text).await {
            Ok(reply) => reply,
            Err(error) => {
                tracing::error!(request_id = %rid, "talk api error: {error}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        if let Err(error) = state.line.reply(message.reply_token, &reply).await {
            tracing::error!(request_id = %rid, "reply api error: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
        tracing::info!(request_id = %rid, reply_token = %message.reply_token, "reply dispatched");
    }

    (StatusCode::OK, "OK").into_response()
}

/// Tags the request with a fresh id for log correlation and echoes it as
/// `x-request-id` on the response.
pub async fn with_request_id(mut req: Request<Body>, next: Next) -> Response {
    let rid = Uuid::new_v4().to_string();
    req.extensions_mut().insert(rid.clone());

    let mut res = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&rid) {
        res.headers_mut()
            .insert(HeaderName::from_static("x-request-id"), value);
    }
    res
}
