//! Service wiring: one document store and one pipeline instance per
//! resource kind.

use std::sync::Arc;

use taphouse_catalog::{Beer, BeerResource};
use taphouse_customers::{Customer, CustomerResource};
use taphouse_infra::{InMemoryDocumentStore, ResourceService};

pub type BeerService = ResourceService<BeerResource, InMemoryDocumentStore<Beer>>;
pub type CustomerService = ResourceService<CustomerResource, InMemoryDocumentStore<Customer>>;

/// Shared handles to the per-resource pipelines.
#[derive(Clone)]
pub struct AppServices {
    pub beers: Arc<BeerService>,
    pub customers: Arc<CustomerService>,
}

impl AppServices {
    pub fn new() -> Self {
        Self {
            beers: Arc::new(ResourceService::new(InMemoryDocumentStore::new())),
            customers: Arc::new(ResourceService::new(InMemoryDocumentStore::new())),
        }
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}
