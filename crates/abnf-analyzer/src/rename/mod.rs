mod error;
mod planner;

pub use error::RenameError;
pub use planner::{RenameEdit, apply_edits, plan_edits};
