//! SQLite repository implementation.
//!
//! Implements [`ListRepository`] from `todolist_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use todolist_core::list::{CreateListItem, ListItem, UpdateListItem};
use todolist_core::storage::{ListRepository, RepositoryError, Result};

use super::conversions::row_to_list_item;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Fetch a single row by ID on an open connection.
fn select_by_id(conn: &rusqlite::Connection, id: i64) -> tokio_rusqlite::Result<ListItem> {
    conn.query_row(schema::SELECT_LIST_BY_ID, [id], row_to_list_item)
        .map_err(wrap_err)
}

/// SQLite-based repository implementation.
///
/// The underlying connection runs on a dedicated background thread and
/// serializes calls, so a single repository can be shared by every request.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl ListRepository for SqliteRepository {
    async fn list_all(&self) -> Result<Vec<ListItem>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_LISTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_list_item).map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn insert(&self, item: &CreateListItem) -> Result<ListItem> {
        let list_name = item.list_name.clone().unwrap_or_default();
        let title = item.title.clone().unwrap_or_default();
        let description = item.description.clone().unwrap_or_default();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_LIST,
                    rusqlite::params![list_name, title, description],
                )
                .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                select_by_id(conn, id)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_by_id(&self, id: i64) -> Result<ListItem> {
        self.conn
            .call(move |conn| select_by_id(conn, id))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn update_by_id(&self, id: i64, update: &UpdateListItem) -> Result<ListItem> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let update = update.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_LIST,
                        rusqlite::params![
                            id,
                            update.list_name,
                            update.title,
                            update.description,
                            update.status
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                select_by_id(conn, id)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<ListItem> {
        self.conn
            .call(move |conn| {
                let snapshot = select_by_id(conn, id)?;
                conn.execute(schema::DELETE_LIST, [id]).map_err(wrap_err)?;
                Ok(snapshot)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_list_all_on_empty_table() {
        let repo = repo().await;

        let items = repo.list_all().await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_created_at() {
        let repo = repo().await;
        let request = CreateListItem::new()
            .with_list_name("A")
            .with_title("T")
            .with_description("D");

        let created = repo.insert(&request).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.list_name, "A");
        assert_eq!(created.title, "T");
        assert_eq!(created.description, "D");
        assert_eq!(created.status, "");

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_insert_with_missing_fields_uses_empty_strings() {
        let repo = repo().await;

        let created = repo.insert(&CreateListItem::new()).await.unwrap();

        assert_eq!(created.list_name, "");
        assert_eq!(created.title, "");
        assert_eq!(created.description, "");
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_listed_in_order() {
        let repo = repo().await;

        let first = repo
            .insert(&CreateListItem::new().with_title("one"))
            .await
            .unwrap();
        let second = repo
            .insert(&CreateListItem::new().with_title("two"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);

        let items = repo.list_all().await.unwrap();
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_get_missing_row_is_not_found() {
        let repo = repo().await;

        let err = repo.get_by_id(404).await.unwrap_err();

        assert_eq!(
            err,
            RepositoryError::NotFound {
                entity_type: "ListItem",
                id: 404,
            }
        );
    }

    #[tokio::test]
    async fn test_update_only_touches_provided_fields() {
        let repo = repo().await;
        let created = repo
            .insert(&CreateListItem::new().with_list_name("L").with_title("T1"))
            .await
            .unwrap();

        let updated = repo
            .update_by_id(created.id, &UpdateListItem::new().with_status("done"))
            .await
            .unwrap();

        assert_eq!(updated.title, "T1");
        assert_eq!(updated.list_name, "L");
        assert_eq!(updated.status, "done");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_is_scoped_to_one_row() {
        let repo = repo().await;
        let target = repo
            .insert(&CreateListItem::new().with_title("target"))
            .await
            .unwrap();
        let other = repo
            .insert(&CreateListItem::new().with_title("other"))
            .await
            .unwrap();

        repo.update_by_id(target.id, &UpdateListItem::new().with_title("changed"))
            .await
            .unwrap();

        let untouched = repo.get_by_id(other.id).await.unwrap();
        assert_eq!(untouched.title, "other");
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = repo().await;

        let err = repo
            .update_by_id(9, &UpdateListItem::new().with_title("x"))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound { id: 9, .. }));
    }

    #[tokio::test]
    async fn test_empty_update_returns_current_row() {
        let repo = repo().await;
        let created = repo
            .insert(&CreateListItem::new().with_title("same"))
            .await
            .unwrap();

        let updated = repo
            .update_by_id(created.id, &UpdateListItem::new())
            .await
            .unwrap();

        assert_eq!(updated, created);

        let err = repo
            .update_by_id(created.id + 100, &UpdateListItem::new())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_returns_snapshot_and_removes_row() {
        let repo = repo().await;
        let created = repo
            .insert(&CreateListItem::new().with_title("bye"))
            .await
            .unwrap();

        let deleted = repo.delete_by_id(created.id).await.unwrap();

        assert_eq!(deleted, created);
        assert!(matches!(
            repo.get_by_id(created.id).await,
            Err(RepositoryError::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete_by_id(created.id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = repo().await;

        repo.ping().await.unwrap();
    }
}
