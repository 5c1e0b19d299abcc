//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use todolist_core::list::ListItem;

/// Convert a SQLite row to a ListItem.
///
/// Expected columns: id, list_name, title, description, status, created_at
pub fn row_to_list_item(row: &Row) -> rusqlite::Result<ListItem> {
    let id: i64 = row.get(0)?;
    let list_name: String = row.get(1)?;
    let title: String = row.get(2)?;
    let description: String = row.get(3)?;
    let status: String = row.get(4)?;
    let created_at: String = row.get(5)?;

    Ok(ListItem {
        id,
        list_name,
        title,
        description,
        status,
        created_at: parse_datetime(5, &created_at)?,
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}
