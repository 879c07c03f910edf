//! crate wide error type; the interactive layer only prints these,
//! the db and habits modules produce them

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HabitError
{
    /// habit id has no matching row; reported to the user, not fatal
    #[error("no habit with id {0}")]
    NotFound(i64),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// existing table doesn't match its creation query (see db::check)
    #[error("table {0} does not match the expected schema")]
    SchemaMismatch(&'static str),

    /// connection/write failure; ends the session when it reaches main
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// malformed date text retrieved from the store
    #[error("invalid date in store: {0}")]
    BadDate(#[from] chrono::ParseError),
}
