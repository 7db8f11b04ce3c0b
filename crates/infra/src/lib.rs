//! Infrastructure layer: document store access and the generic CRUD service.

pub mod repository;
pub mod service;

pub use repository::{DocumentRepository, InMemoryDocumentStore};
pub use service::ResourceService;
