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

use moviedb_core::{NewUser, User, UserFilter, UserInput};

use crate::app::errors;
use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::middleware::validate_body;

pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            get(list_users).post(create_user.layer(from_fn(validate_body::<UserInput>))),
        )
        .route(
            "/:id",
            get(get_user)
                .put(replace_user.layer(from_fn(validate_body::<UserInput>)))
                .delete(delete_user),
        )
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<UserFilter>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(filter)) => common::list::<User>(services.users.as_ref(), filter).await,
        Err(e) => errors::json_error(StatusCode::BAD_REQUEST, "invalid_query", e.body_text()),
    }
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    common::get::<User>(services.users.as_ref(), &id).await
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(fields): Extension<NewUser>,
) -> Response {
    common::create::<User>(services.users.as_ref(), fields).await
}

pub async fn replace_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(fields): Extension<NewUser>,
    Path(id): Path<String>,
) -> Response {
    common::replace::<User>(services.users.as_ref(), &id, fields).await
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    common::delete::<User>(services.users.as_ref(), &id).await
}
