use std::sync::Arc;

use tracing::warn;

use crate::application::ports::dispatch_provider::DispatchProvider;
use crate::domain::dispatches::Dispatch;

/// Walks the configured providers in priority order and returns the first
/// successful result. Failures are logged and swallowed; callers can never
/// observe an error, only a (possibly empty) list.
pub struct ListDispatches<'a> {
    pub providers: &'a [Arc<dyn DispatchProvider>],
}

impl<'a> ListDispatches<'a> {
    pub async fn execute(&self) -> Vec<Dispatch> {
        for provider in self.providers {
            match provider.fetch_current().await {
                Ok(dispatches) => return dispatches,
                Err(err) => {
                    warn!(provider = provider.name(), error = ?err, "dispatch_provider_failed");
                }
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Failing;

    #[async_trait]
    impl DispatchProvider for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn fetch_current(&self) -> anyhow::Result<Vec<Dispatch>> {
            anyhow::bail!("upstream returned status 500")
        }
    }

    struct Fixed(Vec<Dispatch>);

    #[async_trait]
    impl DispatchProvider for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch_current(&self) -> anyhow::Result<Vec<Dispatch>> {
            Ok(self.0.clone())
        }
    }

    fn entry(id: &str) -> Dispatch {
        Dispatch {
            id: id.to_string(),
            title: id.to_string(),
            date: "2024-01-01".to_string(),
            content: String::new(),
        }
    }

    #[tokio::test]
    async fn falls_back_to_next_provider_on_failure() {
        let providers: Vec<Arc<dyn DispatchProvider>> = vec![
            Arc::new(Failing),
            Arc::new(Fixed(vec![entry("local-only")])),
        ];
        let uc = ListDispatches {
            providers: &providers,
        };
        let out = uc.execute().await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "local-only");
    }

    #[tokio::test]
    async fn first_success_short_circuits() {
        let providers: Vec<Arc<dyn DispatchProvider>> = vec![
            Arc::new(Fixed(vec![entry("remote")])),
            Arc::new(Fixed(vec![entry("local")])),
        ];
        let uc = ListDispatches {
            providers: &providers,
        };
        let out = uc.execute().await;
        assert_eq!(out[0].id, "remote");
    }

    #[tokio::test]
    async fn all_failing_yields_empty_list() {
        let providers: Vec<Arc<dyn DispatchProvider>> = vec![Arc::new(Failing), Arc::new(Failing)];
        let uc = ListDispatches {
            providers: &providers,
        };
        assert!(uc.execute().await.is_empty());
    }

    #[tokio::test]
    async fn no_providers_yields_empty_list() {
        let providers: Vec<Arc<dyn DispatchProvider>> = Vec::new();
        let uc = ListDispatches {
            providers: &providers,
        };
        assert!(uc.execute().await.is_empty());
    }
}
