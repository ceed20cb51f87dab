pub mod archive;
pub mod dispatches;
pub mod notes;
