//! Domain model for contact-form submissions.
//!
//! # Responsibility
//! - Define the canonical record persisted from inbound contact forms.
//!
//! # Invariants
//! - `id` is assigned by the storage layer on insert, never by callers.
//! - Records carry no validation; field values are stored verbatim.

pub mod contact_message;
