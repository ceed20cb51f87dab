pub mod content;
pub mod dispatches;
