mod task;
pub use self::task::{Task, TaskID, UserID};
