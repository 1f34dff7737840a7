use std::sync::{Arc, Mutex};

use anyhow::Context;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use fitness_studio::config::AppConfig;
use fitness_studio::db;
use fitness_studio::errors::AppError;
use fitness_studio::handlers;
use fitness_studio::services::chat::ChatResponder;
use fitness_studio::services::seed;
use fitness_studio::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    if config.database_url.trim().is_empty() {
        return Err(AppError::Config("DATABASE_URL must not be empty".to_string()).into());
    }

    let conn = db::init_db(&config.database_url)?;

    if config.seed_sample_data {
        seed::seed_sample_classes(
            &conn,
            &chrono::Utc::now().naive_utc(),
            config.studio_offset(),
            &config.studio_timezone,
        )?;
    }

    let responder = ChatResponder::new().context("failed to build chat rules")?;

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        responder,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/classes",
            get(handlers::classes::list_classes).post(handlers::classes::create_class),
        )
        .route(
            "/classes/:id",
            put(handlers::classes::update_class).delete(handlers::classes::delete_class),
        )
        .route("/book", post(handlers::bookings::book_class))
        .route("/bookings", get(handlers::bookings::get_bookings))
        .route("/bookings/:id", delete(handlers::bookings::cancel_booking))
        .route("/chat", post(handlers::chat::chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
