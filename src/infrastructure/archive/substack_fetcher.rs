use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::archive_source::ArchiveSource;

/// Fetches the published-post listing from a Substack archive endpoint.
/// The listing URL already encodes the newest-first sort.
pub struct SubstackArchiveFetcher {
    client: reqwest::Client,
    archive_url: String,
}

impl SubstackArchiveFetcher {
    pub fn new(archive_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            archive_url: archive_url.into(),
        }
    }
}

#[async_trait]
impl ArchiveSource for SubstackArchiveFetcher {
    async fn latest_posts(&self) -> anyhow::Result<Vec<Value>> {
        let resp = self.client.get(&self.archive_url).send().await?;
        if !resp.status().is_success() {
            anyhow::bail!("Substack archive returned {}", resp.status());
        }
        let body: Value = resp.json().await?;
        Ok(posts_from_body(body))
    }
}

/// Upstream is expected to return a JSON array; anything else is treated as
/// an empty listing rather than an error.
pub fn posts_from_body(body: Value) -> Vec<Value> {
    match body {
        Value::Array(posts) => posts,
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_body_passes_through() {
        let posts = posts_from_body(json!([{"title": "a"}, {"title": "b"}, {"title": "c"}]));
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0]["title"], "a");
    }

    #[test]
    fn object_body_is_empty() {
        assert!(posts_from_body(json!({"posts": [1, 2, 3]})).is_empty());
    }

    #[test]
    fn scalar_body_is_empty() {
        assert!(posts_from_body(json!("oops")).is_empty());
        assert!(posts_from_body(json!(null)).is_empty());
    }
}
