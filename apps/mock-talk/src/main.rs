use anyhow::Result;
use axum::{extract::RawForm, routing::post, Json, Router};
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
    let app = Router::new().route("/smalltalk", post(handle));
    let listener = TcpListener::bind("0.0.0.0:9092").await?;
    tracing::info!("mock-talk listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn handle(RawForm(form): RawForm) -> Json<Value> {
    tracing::info!("TALK QUERY: {}", String::from_utf8_lossy(&form));
    Json(json!({
        "status": 0,
        "message": "ok",
        "results": [{ "perplexity": 0.5, "reply": "echo" }],
    }))
}
