use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::application::ports::archive_source::ArchiveSource;

struct CachedPosts {
    fetched_at: Instant,
    posts: Vec<Value>,
}

/// Bounds upstream load by serving a recent listing for up to `ttl`.
/// Errors are never cached; a zero TTL disables caching entirely.
pub struct CachedArchiveSource {
    inner: Arc<dyn ArchiveSource>,
    ttl: Duration,
    slot: Mutex<Option<CachedPosts>>,
}

impl CachedArchiveSource {
    pub fn new(inner: Arc<dyn ArchiveSource>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            slot: Mutex::new(None),
        }
    }
}

#[async_trait]
impl ArchiveSource for CachedArchiveSource {
    async fn latest_posts(&self) -> anyhow::Result<Vec<Value>> {
        if self.ttl.is_zero() {
            return self.inner.latest_posts().await;
        }

        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.posts.clone());
            }
        }

        let posts = self.inner.latest_posts().await?;
        *slot = Some(CachedPosts {
            fetched_at: Instant::now(),
            posts: posts.clone(),
        });
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
        fail: bool,
    }

    impl Counting {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl ArchiveSource for Counting {
        async fn latest_posts(&self) -> anyhow::Result<Vec<Value>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("Substack archive returned 503");
            }
            Ok(vec![serde_json::json!({"title": "post"})])
        }
    }

    #[tokio::test]
    async fn serves_from_cache_within_ttl() {
        let upstream = Counting::new(false);
        let cache = CachedArchiveSource::new(upstream.clone(), Duration::from_secs(300));

        let first = cache.latest_posts().await.unwrap();
        let second = cache.latest_posts().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn zero_ttl_always_fetches() {
        let upstream = Counting::new(false);
        let cache = CachedArchiveSource::new(upstream.clone(), Duration::ZERO);

        cache.latest_posts().await.unwrap();
        cache.latest_posts().await.unwrap();
        assert_eq!(upstream.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let upstream = Counting::new(true);
        let cache = CachedArchiveSource::new(upstream.clone(), Duration::from_secs(300));

        assert!(cache.latest_posts().await.is_err());
        assert!(cache.latest_posts().await.is_err());
        assert_eq!(upstream.calls.load(Ordering::SeqCst), 2);
    }
}
