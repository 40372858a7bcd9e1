//! Contact message domain record.
//!
//! # Responsibility
//! - Hold the four scalar fields of one contact-form submission.
//! - Expose one accessor/mutator pair per field.
//!
//! # Invariants
//! - `id` reads as unset until the storage layer stamps it on insert.
//! - Mutators overwrite unconditionally and perform no validation; this
//!   layer stores exactly what the caller hands it.

use serde::{Deserialize, Serialize};

/// Surrogate key assigned by the storage engine on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactMessageId = i64;

/// One contact-form submission, mapped 1:1 to a `contact_messages` row.
///
/// All fields start unset. Callers populate `name`/`email`/`message`; the
/// repository stamps `id` during create. After that the record is plain
/// immutable data as far as the store is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Store-assigned row id. `None` until the record is persisted.
    id: Option<ContactMessageId>,
    /// Submitter's name as typed into the form.
    name: Option<String>,
    /// Submitter's email. Format is not checked at this layer.
    email: Option<String>,
    /// Free-form message body.
    message: Option<String>,
}

impl ContactMessage {
    /// Creates a record with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the store-assigned id, or `None` before first persistence.
    pub fn id(&self) -> Option<ContactMessageId> {
        self.id
    }

    /// Overwrites the id.
    ///
    /// Normally only the repository calls this, right after insert. The id
    /// must not change once the record is persisted.
    pub fn set_id(&mut self, id: ContactMessageId) {
        self.id = Some(id);
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Returns whether the store has assigned this record an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Rehydrates a record from its stored column values.
    ///
    /// Only the repository read path uses this; it bypasses the mutators
    /// because stored rows already carry a valid id.
    pub(crate) fn from_row_parts(
        id: ContactMessageId,
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            email,
            message,
        }
    }
}
