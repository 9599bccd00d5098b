use axum::Router;

pub mod common;
pub mod movies;
pub mod system;
pub mod users;

/// Router for the record collections under `/api`.
pub fn router() -> Router {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/users", users::router())
}
