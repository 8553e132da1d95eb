use async_trait::async_trait;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db::{movie::get, redis_conn},
    domain::store::RatingStore,
    errors::AppError,
    models::{rating::RatingStats, redis::RedisKey},
    state::RedisClient,
};

/// Redis-backed rating store: one hash per movie, rater id as field, so the
/// composite (movie, rater) key gives last-write-wins for free.
pub struct RedisRatingStore {
    redis: RedisClient,
}

impl RedisRatingStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl RatingStore for RedisRatingStore {
    async fn movie_exists(&self, movie_id: Uuid) -> Result<bool, AppError> {
        get::movie_exists(movie_id, &self.redis).await
    }

    async fn upsert_rating(
        &self,
        movie_id: Uuid,
        rater_id: i64,
        value: f64,
    ) -> Result<(), AppError> {
        let mut conn = redis_conn(&self.redis).await?;

        let _: () = conn
            .hset(RedisKey::movie_ratings(movie_id), rater_id.to_string(), value)
            .await?;
        Ok(())
    }

    async fn rating_values(&self, movie_id: Uuid) -> Result<Vec<f64>, AppError> {
        let mut conn = redis_conn(&self.redis).await?;

        let values: Vec<f64> = conn.hvals(RedisKey::movie_ratings(movie_id)).await?;
        Ok(values)
    }

    async fn store_mean(&self, movie_id: Uuid, mean: f64) -> Result<(), AppError> {
        // Read-modify-write on the movie JSON; under concurrent raters the
        // last recompute wins.
        let mut movie = get::get_movie(movie_id, &self.redis).await?;
        movie.rating = mean;

        let mut conn = redis_conn(&self.redis).await?;
        let json = movie.to_store_json()?;
        let _: () = conn.set(RedisKey::movie(movie_id), json).await?;
        Ok(())
    }
}

/// The caller's own rating for a movie, if they have submitted one.
pub async fn get_user_rating(
    movie_id: Uuid,
    user_id: i64,
    redis: &RedisClient,
) -> Result<Option<f64>, AppError> {
    let mut conn = redis_conn(redis).await?;

    let value: Option<f64> = conn
        .hget(RedisKey::movie_ratings(movie_id), user_id.to_string())
        .await?;
    Ok(value)
}

pub async fn get_rating_stats(
    movie_id: Uuid,
    redis: &RedisClient,
) -> Result<RatingStats, AppError> {
    if !get::movie_exists(movie_id, redis).await? {
        return Err(AppError::NotFound(format!("Movie not found: {movie_id}")));
    }

    let mut conn = redis_conn(redis).await?;

    let values: Vec<f64> = conn.hvals(RedisKey::movie_ratings(movie_id)).await?;
    Ok(RatingStats::from_values(&values))
}
