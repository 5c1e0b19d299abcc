//! API request payloads for list operations.
//!
//! Every field is optional. An absent field, a `null` and an empty string
//! all decode to `None`, which means "use the column default" on create and
//! "leave unchanged" on update.

use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_string;

/// Request payload for creating a new list item.
///
/// `status`, `id` and `createdAt` are not accepted on create; unknown keys
/// in the body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListItem {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub list_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

impl CreateListItem {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list name.
    pub fn with_list_name(mut self, list_name: impl Into<String>) -> Self {
        self.list_name = Some(list_name.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for a partial update of a list item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListItem {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub list_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
}

impl UpdateListItem {
    /// Create an update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list name.
    pub fn with_list_name(mut self, list_name: impl Into<String>) -> Self {
        self.list_name = Some(list_name.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns true when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.list_name.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_from_camel_case_json() {
        let json = r#"{"listName": "A", "title": "T", "description": "D"}"#;
        let request: CreateListItem = serde_json::from_str(json).unwrap();

        assert_eq!(
            request,
            CreateListItem::new()
                .with_list_name("A")
                .with_title("T")
                .with_description("D")
        );
    }

    #[test]
    fn test_create_request_ignores_server_assigned_fields() {
        let json = r#"{"id": 99, "title": "T", "status": "done", "createdAt": "x"}"#;
        let request: CreateListItem = serde_json::from_str(json).unwrap();

        assert_eq!(request, CreateListItem::new().with_title("T"));
    }

    #[test]
    fn test_update_request_empty_strings_are_unchanged() {
        let json = r#"{"listName": "", "title": "", "description": "", "status": "done"}"#;
        let request: UpdateListItem = serde_json::from_str(json).unwrap();

        assert_eq!(request, UpdateListItem::new().with_status("done"));
        assert!(!request.is_empty());
    }

    #[test]
    fn test_update_request_empty_object_is_empty() {
        let request: UpdateListItem = serde_json::from_str("{}").unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn test_update_request_rejects_non_string_field() {
        let result: Result<UpdateListItem, _> = serde_json::from_str(r#"{"title": 1}"#);
        assert!(result.is_err());
    }
}
