//! Client for the platform reply (message delivery) API.

use reqwest::{header, StatusCode};
use serde::Serialize;
use thiserror::Error;

#[derive(Clone)]
pub struct LineClient {
    http: reqwest::Client,
    base_url: String,
    channel_access_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<ReplyMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ReplyMessage<'a> {
    r#type: &'static str,
    text: &'a str,
}

impl LineClient {
    pub fn new(
        http: reqwest::Client,
        channel_access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            channel_access_token: channel_access_token.into(),
        }
    }

    /// Pushes `text` back to the chat addressed by `reply_token`.
    pub async fn reply(&self, reply_token: &str, text: &str) -> Result<(), LineError> {
        let url = format!("{}/v2/bot/message/reply", self.base_url.trim_end_matches('/'));
        let payload = ReplyRequest {
            reply_token,
            messages: vec![ReplyMessage { r#type: "text", text }],
        };

        tracing::debug!(reply_token = %reply_token, "sending reply message");
        let res = self
            .http
            .post(url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.channel_access_token),
            )
            .json(&payload)
            .send()
            .await
            .map_err(LineError::Transport)?;

        classify_response(res).await
    }
}

async fn classify_response(res: reqwest::Response) -> Result<(), LineError> {
    let status = res.status();
    if status.is_success() {
        return Ok(());
    }

    let body = res.text().await.unwrap_or_else(|_| "<empty>".to_string());
    if status.is_server_error() {
        return Err(LineError::Server { status, body });
    }
    Err(LineError::Client { status, body })
}

#[derive(Debug, Error)]
pub enum LineError {
    #[error("server error {status}: {body}")]
    Server { status: StatusCode, body: String },
    #[error("client error {status}: {body}")]
    Client { status: StatusCode, body: String },
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
}
