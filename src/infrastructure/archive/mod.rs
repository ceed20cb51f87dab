pub mod cache;
pub mod substack_fetcher;
