pub mod archive_source;
pub mod dispatch_provider;
