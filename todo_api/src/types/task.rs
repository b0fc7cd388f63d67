//! Todo item as served by the `/todos` endpoints.

use serde::{Deserialize, Serialize};

/// Numeric identifier for a task.
pub type TaskID = u64;

/// Numeric identifier for the user owning a task.
pub type UserID = u64;

/// A single todo item.
///
/// All four fields are required on the wire. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Owner of the task.
    pub user_id: UserID,
    pub id: TaskID,
    pub title: String,
    pub completed: bool,
}
