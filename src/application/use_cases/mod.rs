pub mod archive;
pub mod dispatches;
