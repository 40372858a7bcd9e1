//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - `id` is assigned exactly once, by the store, during create.
//! - Repository APIs return semantic errors (`AlreadyPersisted`) in
//!   addition to DB transport errors.

pub mod contact_message_repo;
