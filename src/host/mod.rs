pub mod launch;
pub mod results;

pub use launch::launch_detached;
pub use results::{placeholder_entry, project_entry, LaunchAction, ResultEntry};
