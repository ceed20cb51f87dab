use async_trait::async_trait;

/// Read-only view of the newsletter archive. Posts are opaque upstream
/// records; this crate never inspects their fields.
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    async fn latest_posts(&self) -> anyhow::Result<Vec<serde_json::Value>>;
}
