pub mod latest_posts;
