pub mod archive;
pub mod content;
pub mod dispatches;
pub mod health;
