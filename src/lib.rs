pub mod auth;
pub mod db;
pub mod domain;
pub mod errors;
pub mod http;
pub mod middleware;
pub mod models;
pub mod state;

use std::{net::SocketAddr, sync::Arc};

use axum::middleware as axum_middleware;
use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use sqlx::postgres::PgPoolOptions;

use crate::{
    db::rating::RedisRatingStore,
    domain::rating::RatingAggregator,
    middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let redis_url = std::env::var("REDIS_URL").expect("REDIS_URL must be set");
    let manager = RedisConnectionManager::new(redis_url).expect("Invalid REDIS_URL");
    let redis_pool = Pool::builder()
        .build(manager)
        .await
        .expect("Failed to build Redis pool");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let postgres = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres");

    sqlx::migrate!("./migrations")
        .run(&postgres)
        .await
        .expect("Failed to run migrations");

    let ratings = RatingAggregator::new(Arc::new(RedisRatingStore::new(redis_pool.clone())));

    let state = AppState {
        redis: redis_pool,
        postgres,
        ratings,
    };

    let global_rate_limiter = create_global_rate_limiter();

    let app = http::create_http_routes(state)
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer())
        .fallback(|| async { "404 Not Found" });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind address");

    tracing::info!("YouFlix backend listening on port {port}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server error");
}
