use std::sync::Arc;

use axum::Router;

use crate::app::routes::crud;
use crate::app::services::BeerService;

/// Routes for the beer collection: list (optionally filtered by `beerName`
/// and/or `beerStyle`), get, create, full update, patch, delete.
pub fn router(service: Arc<BeerService>) -> Router {
    crud::resource_router(service)
}
