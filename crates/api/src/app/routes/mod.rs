use axum::Router;

use taphouse_catalog::BeerResource;
use taphouse_core::ResourceKind;
use taphouse_customers::CustomerResource;

use crate::app::services::AppServices;

pub mod beers;
pub mod crud;
pub mod customers;

/// Router for all resource collections, each nested at its collection path.
pub fn router(services: &AppServices) -> Router {
    Router::new()
        .nest(
            BeerResource::COLLECTION,
            beers::router(services.beers.clone()),
        )
        .nest(
            CustomerResource::COLLECTION,
            customers::router(services.customers.clone()),
        )
}
