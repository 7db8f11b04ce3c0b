use std::sync::Arc;

use axum::Router;

use crate::app::routes::crud;
use crate::app::services::CustomerService;

/// Routes for the customer collection: list (optionally filtered by
/// `customerName`), get, create, full update, patch, delete.
pub fn router(service: Arc<CustomerService>) -> Router {
    crud::resource_router(service)
}
