use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    handler::Handler,
    http::StatusCode,
    middleware::from_fn,
    response::Response,
    routing::get,
    Router,
};

use moviedb_core::{Movie, MovieFilter, MovieInput, NewMovie};

use crate::app::errors;
use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::middleware::validate_body;

pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            get(list_movies).post(create_movie.layer(from_fn(validate_body::<MovieInput>))),
        )
        .route(
            "/:id",
            get(get_movie)
                .put(replace_movie.layer(from_fn(validate_body::<MovieInput>)))
                .delete(delete_movie),
        )
}

pub async fn list_movies(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<MovieFilter>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(filter)) => common::list::<Movie>(services.movies.as_ref(), filter).await,
        Err(e) => errors::json_error(StatusCode::BAD_REQUEST, "invalid_query", e.body_text()),
    }
}

pub async fn get_movie(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    common::get::<Movie>(services.movies.as_ref(), &id).await
}

pub async fn create_movie(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(fields): Extension<NewMovie>,
) -> Response {
    common::create::<Movie>(services.movies.as_ref(), fields).await
}

pub async fn replace_movie(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(fields): Extension<NewMovie>,
    Path(id): Path<String>,
) -> Response {
    common::replace::<Movie>(services.movies.as_ref(), &id, fields).await
}

pub async fn delete_movie(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    common::delete::<Movie>(services.movies.as_ref(), &id).await
}
