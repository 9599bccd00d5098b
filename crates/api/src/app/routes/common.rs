//! Handler bodies shared by every collection.
//!
//! The per-collection modules only pick the repository and the input type;
//! status codes and error mapping live here.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use moviedb_core::Entity;
use moviedb_infra::Repository;

use crate::app::errors;

pub fn parse_id<E: Entity>(raw: &str) -> Result<E::Id, Response> {
    raw.parse::<E::Id>().map_err(errors::domain_error_to_response)
}

pub async fn list<E>(repo: &dyn Repository<E>, filter: E::Filter) -> Response
where
    E: Entity + Serialize,
{
    match repo.list(&filter).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => errors::store_error_to_response(E::KIND, e),
    }
}

pub async fn get<E>(repo: &dyn Repository<E>, raw_id: &str) -> Response
where
    E: Entity + Serialize,
{
    let id = match parse_id::<E>(raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match repo.get(id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => errors::not_found(E::KIND),
        Err(e) => errors::store_error_to_response(E::KIND, e),
    }
}

/// 201 with the stored record and a `Location` header.
pub async fn create<E>(repo: &dyn Repository<E>, fields: E::Fields) -> Response
where
    E: Entity + Serialize,
{
    match repo.insert(fields).await {
        Ok(record) => {
            let id = *record.id();
            tracing::info!(kind = E::KIND, %id, "record created");
            let location = format!("/api/{}/{}", E::COLLECTION, id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(record),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(E::KIND, e),
    }
}

pub async fn replace<E: Entity>(
    repo: &dyn Repository<E>,
    raw_id: &str,
    fields: E::Fields,
) -> Response {
    let id = match parse_id::<E>(raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match repo.replace(id, fields).await {
        Ok(true) => {
            tracing::info!(kind = E::KIND, %id, "record replaced");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => errors::not_found(E::KIND),
        Err(e) => errors::store_error_to_response(E::KIND, e),
    }
}

pub async fn delete<E: Entity>(repo: &dyn Repository<E>, raw_id: &str) -> Response {
    let id = match parse_id::<E>(raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match repo.delete(id).await {
        Ok(true) => {
            tracing::info!(kind = E::KIND, %id, "record deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => errors::not_found(E::KIND),
        Err(e) => errors::store_error_to_response(E::KIND, e),
    }
}
