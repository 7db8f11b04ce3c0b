//! Contract between stored entities and the document store.

use chrono::{DateTime, Utc};

use crate::id::DocumentId;

/// A persistable entity with a store-assigned identity and audit timestamps.
///
/// The store layer owns both: it assigns the id on first save and refreshes
/// the modified timestamp on every save. Entities never set these themselves.
pub trait Document: Clone + Send + Sync + 'static {
    /// Identifier, `None` until the first save.
    fn id(&self) -> Option<DocumentId>;

    /// Assign the identifier on first save. The id is immutable afterwards.
    fn assign_id(&mut self, id: DocumentId);

    fn created_date(&self) -> Option<DateTime<Utc>>;

    fn last_modified_date(&self) -> Option<DateTime<Utc>>;

    /// Stamp the creation time (first save only).
    fn mark_created(&mut self, at: DateTime<Utc>);

    /// Stamp the modification time (every save).
    fn mark_modified(&mut self, at: DateTime<Utc>);
}
