use uuid::Uuid;

pub struct RedisKey;

impl RedisKey {
    pub fn movie(movie_id: Uuid) -> String {
        format!("movie:{movie_id}")
    }

    /// Set of every movie id, backing the browse listing.
    pub fn movies() -> String {
        "movies".to_string()
    }

    pub fn movies_by_genre(genre: &str) -> String {
        let genre = genre.to_lowercase();
        format!("movies:genre:{genre}")
    }

    pub fn user_movies(user_id: i64) -> String {
        format!("user:{user_id}:movies")
    }

    /// Hash of rater id -> rating value. The composite key lives in the hash
    /// field, so a repeat rating from the same rater overwrites in place.
    pub fn movie_ratings(movie_id: Uuid) -> String {
        format!("movie:{movie_id}:ratings")
    }

    pub fn comment(comment_id: Uuid) -> String {
        format!("comment:{comment_id}")
    }

    /// Sorted set of comment ids scored by creation time.
    pub fn movie_comments(movie_id: Uuid) -> String {
        format!("movie:{movie_id}:comments")
    }

    pub fn user_comments(user_id: i64) -> String {
        format!("user:{user_id}:comments")
    }
}
