//! Persistence core for contact-form submissions.
//! This crate is the single source of truth for the `contact_messages`
//! storage contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact_message::{ContactMessage, ContactMessageId};
pub use repo::contact_message_repo::{
    ContactMessageRepository, MessageListQuery, RepoError, RepoResult,
    SqliteContactMessageRepository,
};
pub use service::contact_service::ContactMessageService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
