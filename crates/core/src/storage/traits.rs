use async_trait::async_trait;

use crate::list::{CreateListItem, ListItem, UpdateListItem};

use super::Result;

/// Repository for list item operations.
///
/// Every method maps to a single row-level operation on the `list` table.
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Gets every list item, ordered by ID. An empty table yields an empty vector.
    async fn list_all(&self) -> Result<Vec<ListItem>>;

    /// Inserts a new list item and returns the stored row.
    async fn insert(&self, item: &CreateListItem) -> Result<ListItem>;

    /// Gets a list item by its ID.
    async fn get_by_id(&self, id: i64) -> Result<ListItem>;

    /// Applies the non-empty fields of `update` to one row and returns the result.
    async fn update_by_id(&self, id: i64, update: &UpdateListItem) -> Result<ListItem>;

    /// Deletes a list item by its ID, returning the row as it was before deletion.
    async fn delete_by_id(&self, id: i64) -> Result<ListItem>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<()>;
}
