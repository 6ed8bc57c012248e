//! Webhook relay service: verifies platform signatures on `/callback/` and
//! answers each text message through the small-talk API.

use anyhow::{Context, Result};
use talkbot_callback::config::Config;
use talkbot_callback::line::LineClient;
use talkbot_callback::routes::{router, AppState};
use talkbot_callback::talk::TalkClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent(concat!("talkbot-callback/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let talk = TalkClient::new(
        http.clone(),
        config.talk_api_key.clone(),
        config.talk_api_base.clone(),
    );
    let line = LineClient::new(
        http,
        config.channel_access_token.clone(),
        config.line_api_base.clone(),
    );
    let state = AppState {
        channel_secret: config.channel_secret.clone(),
        talk,
        line,
    };

    let addr: std::net::SocketAddr = config
        .bind
        .parse()
        .with_context(|| format!("invalid BIND address {}", config.bind))?;
    tracing::info!("callback listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
