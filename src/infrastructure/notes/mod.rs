pub mod notion_provider;
