//! The Customer resource: entity, transfer object,
//! list filter, and the pipeline rules that plug it into the generic CRUD
//! pipeline.

pub mod customer;

pub use customer::{Customer, CustomerDto, CustomerFilter, CustomerResource};
