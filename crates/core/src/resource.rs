//! Glue between one resource kind and the generic CRUD pipeline.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::document::Document;
use crate::validation::Violations;

/// Everything the generic pipeline needs to know about one resource kind:
/// its entity and transfer-object types, the mapper between them, the
/// validation rules, the full-replace and partial-patch merge rules, and the
/// list-filter predicate.
///
/// Implemented once per resource (Beer, Customer); the pipeline itself is
/// written once and instantiated per implementation.
pub trait ResourceKind: Send + Sync + 'static {
    type Entity: Document;
    type Dto: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;
    type Filter: DeserializeOwned + Send + Sync + 'static;

    /// Collection path this resource is served under (also the `Location`
    /// header prefix for created documents).
    const COLLECTION: &'static str;

    /// Entity → DTO. Pure and total.
    fn to_dto(entity: &Self::Entity) -> Self::Dto;

    /// DTO → new (unsaved) entity. Pure and total; the store assigns id and
    /// audit timestamps on save.
    fn to_entity(dto: Self::Dto) -> Self::Entity;

    /// Field-level validation rules for complete bodies (create and full
    /// replace). Empty result means the DTO is valid.
    fn validate(dto: &Self::Dto) -> Violations;

    /// Validation rules for partial (patch) bodies: only supplied fields
    /// are checked; absent fields are legitimate in a patch.
    fn validate_patch(dto: &Self::Dto) -> Violations;

    /// Full replace: overwrite every mutable field from the DTO. Identifier
    /// and created timestamp are immutable and never touched.
    fn replace(entity: &mut Self::Entity, dto: Self::Dto);

    /// Partial patch: copy only supplied fields (non-blank for text, present
    /// for numeric), leaving the rest of the entity unchanged.
    fn merge(entity: &mut Self::Entity, dto: Self::Dto);

    /// Whether the filter constrains anything. An empty (or unrecognized)
    /// filter yields the unfiltered set.
    fn filter_is_empty(filter: &Self::Filter) -> bool;

    /// List-filter predicate for one entity.
    fn matches(entity: &Self::Entity, filter: &Self::Filter) -> bool;
}
