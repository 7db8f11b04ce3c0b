//! The Beer resource: entity, transfer object,
//! list filter, and the pipeline rules (mapper, validation, merge) that
//! plug it into the generic CRUD pipeline.

pub mod beer;

pub use beer::{Beer, BeerDto, BeerFilter, BeerResource};
