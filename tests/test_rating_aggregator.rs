use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use you_flix_be::domain::rating::RatingAggregator;
use you_flix_be::domain::store::RatingStore;
use you_flix_be::errors::AppError;

/// In-memory stand-in for the Redis-backed store.
#[derive(Default)]
struct MemoryRatingStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    // movie id -> persisted mean
    movies: HashMap<Uuid, f64>,
    // movie id -> rater id -> value
    ratings: HashMap<Uuid, HashMap<i64, f64>>,
}

impl MemoryRatingStore {
    async fn add_movie(&self, movie_id: Uuid) {
        self.inner.lock().await.movies.insert(movie_id, 0.0);
    }

    async fn stored_mean(&self, movie_id: Uuid) -> f64 {
        *self
            .inner
            .lock()
            .await
            .movies
            .get(&movie_id)
            .expect("movie not in store")
    }

    async fn rating_count(&self, movie_id: Uuid) -> usize {
        self.inner
            .lock()
            .await
            .ratings
            .get(&movie_id)
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl RatingStore for MemoryRatingStore {
    async fn movie_exists(&self, movie_id: Uuid) -> Result<bool, AppError> {
        Ok(self.inner.lock().await.movies.contains_key(&movie_id))
    }

    async fn upsert_rating(
        &self,
        movie_id: Uuid,
        rater_id: i64,
        value: f64,
    ) -> Result<(), AppError> {
        self.inner
            .lock()
            .await
            .ratings
            .entry(movie_id)
            .or_default()
            .insert(rater_id, value);
        Ok(())
    }

    async fn rating_values(&self, movie_id: Uuid) -> Result<Vec<f64>, AppError> {
        Ok(self
            .inner
            .lock()
            .await
            .ratings
            .get(&movie_id)
            .map(|r| r.values().copied().collect())
            .unwrap_or_default())
    }

    async fn store_mean(&self, movie_id: Uuid, mean: f64) -> Result<(), AppError> {
        self.inner.lock().await.movies.insert(movie_id, mean);
        Ok(())
    }
}

fn setup() -> (Arc<MemoryRatingStore>, RatingAggregator, Uuid) {
    let store = Arc::new(MemoryRatingStore::default());
    let aggregator = RatingAggregator::new(store.clone());
    (store, aggregator, Uuid::new_v4())
}

const TOLERANCE: f64 = 1e-9;

#[tokio::test]
async fn mean_tracks_the_full_rating_set() {
    let (store, aggregator, movie) = setup();
    store.add_movie(movie).await;

    // No ratings yet.
    assert_eq!(store.stored_mean(movie).await, 0.0);

    let mean = aggregator.record_rating(movie, 1, 8.0).await.unwrap();
    assert!((mean - 8.0).abs() < TOLERANCE);

    let mean = aggregator.record_rating(movie, 2, 4.0).await.unwrap();
    assert!((mean - 6.0).abs() < TOLERANCE);

    // Rater 1 resubmits: the 8 is replaced, not summed.
    let mean = aggregator.record_rating(movie, 1, 6.0).await.unwrap();
    assert!((mean - 5.0).abs() < TOLERANCE);
    assert_eq!(store.rating_count(movie).await, 2);
}

#[tokio::test]
async fn returned_mean_matches_the_persisted_mean() {
    let (store, aggregator, movie) = setup();
    store.add_movie(movie).await;

    let mean = aggregator.record_rating(movie, 7, 9.0).await.unwrap();
    assert!((store.stored_mean(movie).await - mean).abs() < TOLERANCE);

    let mean = aggregator.record_rating(movie, 8, 2.0).await.unwrap();
    assert!((store.stored_mean(movie).await - mean).abs() < TOLERANCE);
}

#[tokio::test]
async fn resubmission_replaces_instead_of_adding() {
    let (store, aggregator, movie) = setup();
    store.add_movie(movie).await;

    aggregator.record_rating(movie, 5, 3.0).await.unwrap();
    aggregator.record_rating(movie, 5, 9.0).await.unwrap();
    aggregator.record_rating(movie, 5, 7.0).await.unwrap();

    assert_eq!(store.rating_count(movie).await, 1);
    assert!((store.stored_mean(movie).await - 7.0).abs() < TOLERANCE);
}

#[tokio::test]
async fn boundary_values_are_accepted() {
    let (store, aggregator, movie) = setup();
    store.add_movie(movie).await;

    assert!(aggregator.record_rating(movie, 1, 1.0).await.is_ok());
    assert!(aggregator.record_rating(movie, 2, 10.0).await.is_ok());
    assert!((store.stored_mean(movie).await - 5.5).abs() < TOLERANCE);
}

#[tokio::test]
async fn out_of_range_values_are_rejected() {
    let (store, aggregator, movie) = setup();
    store.add_movie(movie).await;

    let result = aggregator.record_rating(movie, 1, 0.0).await;
    assert!(matches!(result, Err(AppError::InvalidRating(_))));

    let result = aggregator.record_rating(movie, 1, 11.0).await;
    assert!(matches!(result, Err(AppError::InvalidRating(_))));

    // Nothing was written.
    assert_eq!(store.rating_count(movie).await, 0);
    assert_eq!(store.stored_mean(movie).await, 0.0);
}

#[tokio::test]
async fn rating_an_unknown_movie_fails() {
    let (store, aggregator, movie) = setup();
    // Movie deliberately not added.

    let result = aggregator.record_rating(movie, 1, 5.0).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(store.rating_count(movie).await, 0);
}
