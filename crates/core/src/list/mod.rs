mod requests;
mod types;

pub use requests::{CreateListItem, UpdateListItem};
pub use types::ListItem;
