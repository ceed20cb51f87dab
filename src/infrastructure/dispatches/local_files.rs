use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;

use crate::application::ports::dispatch_provider::DispatchProvider;
use crate::domain::dispatches::{
    Dispatch, parse_filename, sort_newest_first, title_from_body,
};

/// Reads dispatches from a directory of `YYYY-MM-DD-slug.md` files. A missing
/// directory is a valid empty source; unreadable files are skipped with a
/// warning rather than failing the whole listing.
pub struct LocalDispatchProvider {
    dir: PathBuf,
}

impl LocalDispatchProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn load_one(&self, path: &Path) -> anyhow::Result<Dispatch> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow::anyhow!("non-utf8 file name: {}", path.display()))?;

        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let meta = parse_filename(stem, &today);

        let raw = tokio::fs::read_to_string(path).await?;
        let title = title_from_body(&raw).unwrap_or(meta.title);

        Ok(Dispatch {
            id: meta.id,
            title,
            date: meta.date,
            content: raw,
        })
    }
}

#[async_trait]
impl DispatchProvider for LocalDispatchProvider {
    fn name(&self) -> &'static str {
        "local-files"
    }

    async fn fetch_current(&self) -> anyhow::Result<Vec<Dispatch>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut dispatches = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            match self.load_one(&path).await {
                Ok(dispatch) => dispatches.push(dispatch),
                Err(err) => {
                    warn!(file = %path.display(), error = ?err, "dispatch_file_skipped");
                }
            }
        }

        sort_newest_first(&mut dispatches);
        Ok(dispatches)
    }
}
