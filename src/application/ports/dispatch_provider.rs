use async_trait::async_trait;

use crate::domain::dispatches::Dispatch;

/// A single source of journal entries. Providers are tried in priority order
/// by the loader; each invocation performs at most one fetch and returns the
/// full current list, newest first.
#[async_trait]
pub trait DispatchProvider: Send + Sync {
    /// Stable name used in fallback logging.
    fn name(&self) -> &'static str;

    async fn fetch_current(&self) -> anyhow::Result<Vec<Dispatch>>;
}
