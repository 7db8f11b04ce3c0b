//! Domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no transport or storage
//! concerns): identifiers, the document contract, the validation model, the
//! error taxonomy, and the `ResourceKind` trait that parameterizes the
//! generic CRUD pipeline over one resource kind.

pub mod document;
pub mod error;
pub mod id;
pub mod resource;
pub mod validation;

pub use document::Document;
pub use error::{ServiceError, ServiceResult, StoreError};
pub use id::DocumentId;
pub use resource::ResourceKind;
pub use validation::{Violation, Violations};
