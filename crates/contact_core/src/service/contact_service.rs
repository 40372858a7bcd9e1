//! Contact message use-case service.
//!
//! # Responsibility
//! - Provide stable submit/read entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::contact_message::{ContactMessage, ContactMessageId};
use crate::repo::contact_message_repo::{
    ContactMessageRepository, MessageListQuery, RepoResult,
};

/// Use-case service wrapper for contact message operations.
pub struct ContactMessageService<R: ContactMessageRepository> {
    repo: R,
}

impl<R: ContactMessageRepository> ContactMessageService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists one contact-form submission.
    ///
    /// # Contract
    /// - Field values are stored verbatim; no validation happens here.
    /// - Returns the record with its store-assigned id stamped in.
    pub fn submit_message(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> RepoResult<ContactMessage> {
        let mut record = ContactMessage::new();
        record.set_name(name);
        record.set_email(email);
        record.set_message(message);
        self.repo.create_message(&mut record)?;
        Ok(record)
    }

    /// Gets one message by its store-assigned id.
    pub fn get_message(&self, id: ContactMessageId) -> RepoResult<Option<ContactMessage>> {
        self.repo.get_message(id)
    }

    /// Lists messages newest first with optional pagination.
    pub fn list_messages(&self, query: &MessageListQuery) -> RepoResult<Vec<ContactMessage>> {
        self.repo.list_messages(query)
    }
}
