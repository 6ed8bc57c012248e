use anyhow::Result;
use axum::{routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    let app = Router::new().route("/v2/bot/message/reply", post(handle));
    let listener = TcpListener::bind("0.0.0.0:9091").await?;
    tracing::info!("mock-line listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn handle(Json(payload): Json<Value>) -> Json<Value> {
    tracing::info!("LINE REPLY: {}", payload);
    Json(json!({}))
}
