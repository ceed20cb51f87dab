pub mod list_dispatches;
