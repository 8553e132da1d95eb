use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use sqlx::PgPool;

use crate::domain::rating::RatingAggregator;

/// Collaborators are constructed once in `start_server` and handed out
/// through this state rather than reached as globals.
#[derive(Clone)]
pub struct AppState {
    pub redis: RedisClient,
    pub postgres: PgPool,
    pub ratings: RatingAggregator,
}

pub type RedisClient = Pool<RedisConnectionManager>;
