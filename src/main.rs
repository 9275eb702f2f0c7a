#![recursion_limit = "256"]

mod llm;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let gemini = llm::GeminiClient::from_env().expect("HTTP client init failed");
    if gemini.has_api_key() {
        tracing::info!(model = gemini.model(), "Gemini reply client initialized");
    } else {
        tracing::warn!("GEMINI_API_KEY not set; chat replies will use the fallback text");
    }

    let state = state::AppState::new(Arc::new(gemini));

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "navchat listening");
    axum::serve(listener, app).await.expect("server failed");
}
