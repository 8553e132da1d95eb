use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        auth::{login_handler, register_handler},
        comment::{
            add_comment_handler, delete_comment_handler, edit_comment_handler,
            movie_comments_handler, user_comments_handler,
        },
        health_handler,
        movie::{
            browse_movies_handler, create_movie_handler, delete_movie_handler, get_movie_handler,
            update_movie_handler, user_movies_handler,
        },
        rating::{movie_rating_stats_handler, my_rating_handler, rate_movie_handler},
    },
    middleware::{create_auth_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let auth_rate_limiter = create_auth_rate_limiter();
    let auth_routes = Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(auth_rate_limiter.clone(), req, next)
        }));

    Router::new()
        .merge(auth_routes)
        .route("/health", get(health_handler))
        .route(
            "/movies",
            get(browse_movies_handler).post(create_movie_handler),
        )
        .route(
            "/movies/{movie_id}",
            get(get_movie_handler)
                .patch(update_movie_handler)
                .delete(delete_movie_handler),
        )
        .route("/movies/{movie_id}/rate", post(rate_movie_handler))
        .route("/movies/{movie_id}/ratings", get(movie_rating_stats_handler))
        .route("/movies/{movie_id}/ratings/me", get(my_rating_handler))
        .route("/movies/{movie_id}/comments", get(movie_comments_handler))
        .route("/comments", post(add_comment_handler))
        .route(
            "/comments/{comment_id}",
            axum::routing::patch(edit_comment_handler).delete(delete_comment_handler),
        )
        .route("/users/{user_id}/movies", get(user_movies_handler))
        .route("/users/{user_id}/comments", get(user_comments_handler))
        .with_state(state)
}
