use axum::{Router, middleware, routing::get};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use trivia_api::{ApiConfig, ApiState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    trivia_api::tracing::init_tracing(&config.env);

    let metrics_handle = trivia_api::metrics::init_metrics()?;
    tracing::info!("Prometheus metrics exporter initialized");

    trivia_db::ensure_database(&config.database_url).await?;
    let pool = trivia_db::create_pool(&config.database_url, config.db_max_connections).await?;
    trivia_db::run_migrations(&pool).await?;

    if config.seed_sample_data {
        let inserted = trivia_db::seed_sample_questions(&pool).await?;
        tracing::info!(inserted, "Sample questions seeded");
    }

    let state = ApiState::new(&config, pool);

    let cors = trivia_api::middleware::cors::create_cors_layer(config.parsed_allowed_origins());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Separate state, so it stays off the API router
    let metrics_app = Router::new()
        .route("/metrics", get(trivia_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = trivia_api::router::router()
        .merge(metrics_app)
        .with_state(state.clone())
        .layer(cors)
        .layer(trace_layer)
        .layer(middleware::from_fn(trivia_api::metrics::track_metrics))
        .layer(middleware::from_fn(
            trivia_api::middleware::request_id::request_id_middleware,
        ));

    let app = trivia_api::middleware::security_headers::apply_security_headers(app, state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, environment = ?config.env, "Trivia API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
