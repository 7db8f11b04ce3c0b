//! Generic CRUD handlers: one pipeline, instantiated per resource kind.
//!
//! Each handler composes the same asynchronous stages (validate, look up,
//! mutate, persist, map, respond), and each stage runs only when the
//! previous one has completed. Expected outcomes (validation failure,
//! not-found) travel through the same `Result` channel as success values and
//! are turned into responses only in `errors.rs`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use taphouse_core::{DocumentId, ResourceKind, validation};
use taphouse_infra::{DocumentRepository, ResourceService};

use crate::app::errors;

/// Static dispatch table for one resource collection: fully registered
/// before the first request is served, no business logic of its own.
pub fn resource_router<K, R>(service: Arc<ResourceService<K, R>>) -> Router
where
    K: ResourceKind,
    R: DocumentRepository<K::Entity> + 'static,
{
    Router::new()
        .route("/", get(list::<K, R>).post(create::<K, R>))
        .route(
            "/:id",
            get(get_by_id::<K, R>)
                .put(update::<K, R>)
                .patch(patch::<K, R>)
                .delete(delete::<K, R>),
        )
        .layer(Extension(service))
}

/// An id that cannot be parsed was never assigned by the store, so it gets
/// the same answer as any other unknown id.
fn parse_id(raw: &str) -> Result<DocumentId, axum::response::Response> {
    raw.parse()
        .map_err(|_| StatusCode::NOT_FOUND.into_response())
}

async fn list<K, R>(
    Extension(service): Extension<Arc<ResourceService<K, R>>>,
    Query(filter): Query<K::Filter>,
) -> axum::response::Response
where
    K: ResourceKind,
    R: DocumentRepository<K::Entity>,
{
    match service.list(filter).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn get_by_id<K, R>(
    Extension(service): Extension<Arc<ResourceService<K, R>>>,
    Path(id): Path<String>,
) -> axum::response::Response
where
    K: ResourceKind,
    R: DocumentRepository<K::Entity>,
{
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.get_by_id(id).await {
        Ok(dto) => (StatusCode::OK, Json(dto)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn create<K, R>(
    Extension(service): Extension<Arc<ResourceService<K, R>>>,
    Json(dto): Json<K::Dto>,
) -> axum::response::Response
where
    K: ResourceKind,
    R: DocumentRepository<K::Entity>,
{
    // Validation gates persistence: on violation nothing is written.
    if let Err(e) = validation::validate::<K>(&dto) {
        return errors::service_error_to_response(e);
    }

    match service.create(dto).await {
        Ok(id) => {
            let location = format!("{}/{}", K::COLLECTION, id);
            (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn update<K, R>(
    Extension(service): Extension<Arc<ResourceService<K, R>>>,
    Path(id): Path<String>,
    Json(dto): Json<K::Dto>,
) -> axum::response::Response
where
    K: ResourceKind,
    R: DocumentRepository<K::Entity>,
{
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if let Err(e) = validation::validate::<K>(&dto) {
        return errors::service_error_to_response(e);
    }

    match service.update(id, dto).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn patch<K, R>(
    Extension(service): Extension<Arc<ResourceService<K, R>>>,
    Path(id): Path<String>,
    Json(dto): Json<K::Dto>,
) -> axum::response::Response
where
    K: ResourceKind,
    R: DocumentRepository<K::Entity>,
{
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    // Patch bodies are partial: only supplied fields are validated.
    if let Err(e) = validation::validate_patch::<K>(&dto) {
        return errors::service_error_to_response(e);
    }

    match service.patch(id, dto).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn delete<K, R>(
    Extension(service): Extension<Arc<ResourceService<K, R>>>,
    Path(id): Path<String>,
) -> axum::response::Response
where
    K: ResourceKind,
    R: DocumentRepository<K::Entity>,
{
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
