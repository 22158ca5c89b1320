mod handlers;
mod routes;
mod state;

use axum::{
    http::{header, HeaderValue, Method},
    response::Html,
    routing::get,
    Extension, Router,
};
use std::env;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use routes::analyze::analyze_routes;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = env::var("OPENROUTER_API_KEY").expect("OPENROUTER_API_KEY must be set");
    let state = AppState::new(api_key).expect("failed to build HTTP clients");

    let mut cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);
    // The UI is served same-origin; CLIENT_URL allows an external frontend.
    if let Ok(client_url) = env::var("CLIENT_URL") {
        cors = cors.allow_origin(client_url.parse::<HeaderValue>().unwrap());
    }

    let app = Router::new()
        .route("/", get(index))
        .nest("/api", analyze_routes())
        .layer(Extension(state))
        .layer(cors);

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    tracing::info!("listening on {}", addr);
    let listener = TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
