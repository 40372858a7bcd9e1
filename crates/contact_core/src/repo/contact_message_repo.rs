//! Contact message repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/read APIs over the `contact_messages` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Create stamps the store-assigned row id into the record and never
//!   accepts a record that already carries one.
//! - Stored field values round-trip untransformed; this layer applies no
//!   validation or normalization.

use crate::db::DbError;
use crate::model::contact_message::{ContactMessage, ContactMessageId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MESSAGE_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    message
FROM contact_messages";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact message persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Create was called with a record the store already assigned an id to.
    AlreadyPersisted(ContactMessageId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::AlreadyPersisted(id) => {
                write!(f, "contact message {id} is already persisted")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::AlreadyPersisted(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing contact messages.
#[derive(Debug, Clone, Default)]
pub struct MessageListQuery {
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for contact message create/read operations.
///
/// The entity lifecycle deliberately has no update or delete: a submission
/// is written once and only read afterwards.
pub trait ContactMessageRepository {
    /// Inserts the record and stamps the store-assigned id into it.
    fn create_message(&self, message: &mut ContactMessage) -> RepoResult<ContactMessageId>;
    /// Fetches one record by its surrogate key.
    fn get_message(&self, id: ContactMessageId) -> RepoResult<Option<ContactMessage>>;
    /// Lists records newest first with optional pagination.
    fn list_messages(&self, query: &MessageListQuery) -> RepoResult<Vec<ContactMessage>>;
}

/// SQLite-backed contact message repository.
pub struct SqliteContactMessageRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactMessageRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ContactMessageRepository for SqliteContactMessageRepository<'_> {
    fn create_message(&self, message: &mut ContactMessage) -> RepoResult<ContactMessageId> {
        if let Some(id) = message.id() {
            return Err(RepoError::AlreadyPersisted(id));
        }

        self.conn.execute(
            "INSERT INTO contact_messages (name, email, message)
             VALUES (?1, ?2, ?3);",
            params![message.name(), message.email(), message.message()],
        )?;

        let id = self.conn.last_insert_rowid();
        message.set_id(id);
        Ok(id)
    }

    fn get_message(&self, id: ContactMessageId) -> RepoResult<Option<ContactMessage>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MESSAGE_SELECT_SQL} WHERE id = ?1;"))?;

        let message = stmt
            .query_row(params![id], parse_message_row)
            .optional()?;
        Ok(message)
    }

    fn list_messages(&self, query: &MessageListQuery) -> RepoResult<Vec<ContactMessage>> {
        let mut sql = format!("{MESSAGE_SELECT_SQL} ORDER BY id DESC");
        let mut bind_values: Vec<i64> = Vec::new();

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(i64::from(limit));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(i64::from(query.offset));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(i64::from(query.offset));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(rusqlite::params_from_iter(bind_values))?;
        let mut messages = Vec::new();

        while let Some(row) = rows.next()? {
            messages.push(parse_message_row(row)?);
        }

        Ok(messages)
    }
}

fn parse_message_row(row: &Row<'_>) -> rusqlite::Result<ContactMessage> {
    Ok(ContactMessage::from_row_parts(
        row.get("id")?,
        row.get("name")?,
        row.get("email")?,
        row.get("message")?,
    ))
}
