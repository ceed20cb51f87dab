use crate::application::ports::archive_source::ArchiveSource;

pub struct LatestArchivePosts<'a, S: ArchiveSource + ?Sized> {
    pub source: &'a S,
}

impl<'a, S: ArchiveSource + ?Sized> LatestArchivePosts<'a, S> {
    pub async fn execute(&self) -> anyhow::Result<Vec<serde_json::Value>> {
        self.source.latest_posts().await
    }
}
