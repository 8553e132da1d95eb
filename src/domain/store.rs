use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;

/// Storage operations the rating aggregator needs from its backing store.
///
/// The production implementation sits on Redis (`db::rating`); tests inject
/// an in-memory double.
#[async_trait]
pub trait RatingStore: Send + Sync {
    async fn movie_exists(&self, movie_id: Uuid) -> Result<bool, AppError>;

    /// Writes a rating under the composite key (movie, rater). A repeat
    /// write from the same rater replaces the previous value.
    async fn upsert_rating(
        &self,
        movie_id: Uuid,
        rater_id: i64,
        value: f64,
    ) -> Result<(), AppError>;

    /// Every rating value currently stored for the movie.
    async fn rating_values(&self, movie_id: Uuid) -> Result<Vec<f64>, AppError>;

    /// Persists the recomputed mean onto the movie record.
    async fn store_mean(&self, movie_id: Uuid, mean: f64) -> Result<(), AppError>;
}
