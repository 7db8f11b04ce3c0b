//! DTO validation model.
//!
//! Validation is a stateless, reentrant gate: it either passes a DTO through
//! unchanged or produces a list of field/message violations. It holds no
//! mutable state, so it is safe under arbitrary request concurrency.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::resource::ResourceKind;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulated violations for one DTO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation when `value` is `None` or blank.
    pub fn require_text(&mut self, field: &str, value: Option<&str>) {
        if !has_text(value) {
            self.0.push(Violation::new(field, "must not be blank"));
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }
}

/// Whether an optional text field carries a non-blank value.
///
/// Patch semantics hinge on this: absent or blank text fields are left
/// untouched on the stored entity.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

/// Validate a DTO against its resource kind's rules.
///
/// Must run strictly before any persistence call for create/update/patch;
/// on violation the pipeline aborts and nothing is written.
pub fn validate<K: ResourceKind>(dto: &K::Dto) -> Result<(), ServiceError> {
    let violations = K::validate(dto);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(violations))
    }
}

/// Validate a partial (patch) DTO: only supplied fields are checked, so a
/// subset body passes while a supplied-but-blank required field does not.
pub fn validate_patch<K: ResourceKind>(dto: &K::Dto) -> Result<(), ServiceError> {
    let violations = K::validate_patch(dto);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(violations))
    }
}
