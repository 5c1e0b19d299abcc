//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Every statement that targets a single row is scoped by
//! `id`.

/// SQL statement to create the `list` table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS list (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    list_name TEXT NOT NULL DEFAULT '',
    title TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
"#;

pub const SELECT_ALL_LISTS: &str = r#"
SELECT id, list_name, title, description, status, created_at
FROM list
ORDER BY id ASC
"#;

pub const SELECT_LIST_BY_ID: &str = r#"
SELECT id, list_name, title, description, status, created_at
FROM list
WHERE id = ?1
"#;

pub const INSERT_LIST: &str = r#"
INSERT INTO list (list_name, title, description)
VALUES (?1, ?2, ?3)
"#;

/// `NULL` parameters keep the current column value.
pub const UPDATE_LIST: &str = r#"
UPDATE list
SET list_name = COALESCE(?2, list_name),
    title = COALESCE(?3, title),
    description = COALESCE(?4, description),
    status = COALESCE(?5, status)
WHERE id = ?1
"#;

pub const DELETE_LIST: &str = r#"
DELETE FROM list
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";
