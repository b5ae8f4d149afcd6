//! SQLite storage for vacation plans and their activities.
//!
//! This is the local plan/activity store behind the
//! [`Planner`](crate::Planner). It owns the connection, the embedded schema
//! and the query modules; the itinerary engine itself never touches it.

use std::{fmt, io, path::Path, str::FromStr};

use jiff::civil::Date;
use rusqlite::{types::Type, Connection, Row};

use crate::error::{DatabaseResultExt, ItineraryError, Result};

pub mod activity_queries;
pub mod migrations;
pub mod plan_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, mostly useful for tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Converts an ID into an INTEGER parameter.
pub(crate) fn id_param(id: u64) -> Result<i64> {
    i64::try_from(id).map_err(|_| {
        ItineraryError::invalid_input("id").with_reason(format!("{id} exceeds {}", i64::MAX))
    })
}

/// Converts a date into its stored `YYYY-MM-DD` text.
///
/// Dates are compared as text in SQL, which only orders correctly for
/// four-digit unsigned years.
pub(crate) fn date_param(date: Date) -> Result<String> {
    if !(0..=9999).contains(&date.year()) {
        return Err(ItineraryError::invalid_input("date")
            .with_reason(format!("{date} is outside years 0000 to 9999")));
    }
    Ok(date.to_string())
}

/// Reads a text column and parses it with `FromStr`, reporting parse
/// failures as SQLite conversion errors on that column.
pub(crate) fn parse_column<T>(row: &Row<'_>, index: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: String = row.get(index)?;
    raw.parse::<T>()
        .map_err(|e| conversion_failure(index, format!("Invalid value '{raw}': {e}")))
}

/// Like [`parse_column`] for nullable columns.
pub(crate) fn parse_optional_column<T>(row: &Row<'_>, index: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = row.get(index)?;
    raw.map(|value| {
        value
            .parse::<T>()
            .map_err(|e| conversion_failure(index, format!("Invalid value '{value}': {e}")))
    })
    .transpose()
}

/// Reads an INTEGER id column as `u64`.
pub(crate) fn id_column(row: &Row<'_>, index: usize) -> rusqlite::Result<u64> {
    let value: i64 = row.get(index)?;
    u64::try_from(value).map_err(|e| conversion_failure(index, e.to_string()))
}

fn conversion_failure(index: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        Type::Text,
        Box::new(io::Error::new(io::ErrorKind::InvalidData, message)),
    )
}
