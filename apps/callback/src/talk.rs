//! Client for the small-talk reply-generation API.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone)]
pub struct TalkClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct TalkResponse {
    status: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    results: Vec<TalkCandidate>,
}

#[derive(Debug, Deserialize)]
struct TalkCandidate {
    reply: String,
}

impl TalkClient {
    pub fn new(
        http: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Requests a conversational reply for `query` and returns the first
    /// candidate the service offers.
    pub async fn smalltalk(&self, query: &str) -> Result<String, TalkError> {
        let url = format!("{}/smalltalk", self.base_url.trim_end_matches('/'));
        let res = self
            .http
            .post(url)
            .form(&[("apikey", self.api_key.as_str()), ("query", query)])
            .send()
            .await
            .map_err(TalkError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(TalkError::Transport)?;
        if !status.is_success() {
            return Err(TalkError::Http { status, body });
        }

        let parsed: TalkResponse =
            serde_json::from_str(&body).map_err(|_| TalkError::Decode { body })?;
        first_reply(parsed)
    }
}

fn first_reply(res: TalkResponse) -> Result<String, TalkError> {
    if res.status != 0 {
        return Err(TalkError::Api {
            status: res.status,
            message: res.message.unwrap_or_default(),
        });
    }
    res.results
        .into_iter()
        .next()
        .map(|candidate| candidate.reply)
        .ok_or(TalkError::NoCandidates)
}

#[derive(Debug, Error)]
pub enum TalkError {
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    #[error("http error {status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("api status {status}: {message}")]
    Api { status: i64, message: String },
    #[error("undecodable response: {body}")]
    Decode { body: String },
    #[error("no reply candidates returned")]
    NoCandidates,
}
