pub mod dispatch;

pub use dispatch::{Dispatch, FilenameMeta, parse_filename, sort_newest_first, title_from_body};
