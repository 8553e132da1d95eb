use std::sync::Arc;

use uuid::Uuid;

use crate::{domain::store::RatingStore, errors::AppError};

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;

/// Maintains the mean rating stored on each movie record.
///
/// The store is injected rather than reached through a module-level client,
/// so the composition root owns its lifecycle and tests can swap it out.
#[derive(Clone)]
pub struct RatingAggregator {
    store: Arc<dyn RatingStore>,
}

impl RatingAggregator {
    pub fn new(store: Arc<dyn RatingStore>) -> Self {
        Self { store }
    }

    /// Records (or replaces) a rater's rating for a movie, refreshes the
    /// movie's stored mean, and returns the new mean.
    ///
    /// The rating write and the mean update are two store calls with a read
    /// between them; two raters hitting the same movie at once converge on
    /// whichever recompute lands last.
    pub async fn record_rating(
        &self,
        movie_id: Uuid,
        rater_id: i64,
        value: f64,
    ) -> Result<f64, AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(AppError::InvalidRating(value));
        }

        if !self.store.movie_exists(movie_id).await? {
            return Err(AppError::NotFound(format!("Movie not found: {movie_id}")));
        }

        self.store.upsert_rating(movie_id, rater_id, value).await?;

        // Full recompute over the current rating set on every write.
        // Incremental sum/count maintenance would change rounding behavior.
        let values = self.store.rating_values(movie_id).await?;
        let mean = if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        };

        self.store.store_mean(movie_id, mean).await?;

        tracing::debug!(
            "Recomputed rating for movie {}: mean {:.4} over {} ratings",
            movie_id,
            mean,
            values.len()
        );

        Ok(mean)
    }
}
