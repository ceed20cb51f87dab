use std::sync::Arc;

use tracing::info;

use crate::application::ports::archive_source::ArchiveSource;
use crate::application::ports::dispatch_provider::DispatchProvider;
use crate::bootstrap::config::{Config, DispatchSourceSelection};
use crate::infrastructure::dispatches::local_files::LocalDispatchProvider;
use crate::infrastructure::notes::notion_provider::NotionDispatchProvider;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    dispatch_providers: Vec<Arc<dyn DispatchProvider>>,
    archive_source: Arc<dyn ArchiveSource>,
}

impl AppServices {
    pub fn new(
        dispatch_providers: Vec<Arc<dyn DispatchProvider>>,
        archive_source: Arc<dyn ArchiveSource>,
    ) -> Self {
        Self {
            dispatch_providers,
            archive_source,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    /// Priority-ordered: the loader tries these front to back.
    pub fn dispatch_providers(&self) -> &[Arc<dyn DispatchProvider>] {
        &self.services.dispatch_providers
    }

    pub fn archive_source(&self) -> Arc<dyn ArchiveSource> {
        self.services.archive_source.clone()
    }
}

/// Installs dispatch sources according to the configured selection. Under
/// `Auto`, missing credentials silently narrow the chain to local files;
/// `Remote` without credentials is rejected by `Config::from_env` before
/// this runs.
pub fn build_dispatch_providers(cfg: &Config) -> Vec<Arc<dyn DispatchProvider>> {
    let mut providers: Vec<Arc<dyn DispatchProvider>> = Vec::new();

    let remote = || -> Option<Arc<dyn DispatchProvider>> {
        match (cfg.notes_token.as_deref(), cfg.notes_database_id.as_deref()) {
            (Some(token), Some(db)) => Some(Arc::new(NotionDispatchProvider::new(token, db))),
            _ => None,
        }
    };

    match cfg.dispatch_source {
        DispatchSourceSelection::Auto => {
            if let Some(provider) = remote() {
                providers.push(provider);
            } else {
                info!("notes_credentials_absent_using_local_files");
            }
            providers.push(Arc::new(LocalDispatchProvider::new(&cfg.dispatches_dir)));
        }
        DispatchSourceSelection::Remote => {
            if let Some(provider) = remote() {
                providers.push(provider);
            }
        }
        DispatchSourceSelection::Local => {
            providers.push(Arc::new(LocalDispatchProvider::new(&cfg.dispatches_dir)));
        }
    }

    providers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(
        source: DispatchSourceSelection,
        token: Option<&str>,
        database_id: Option<&str>,
    ) -> Config {
        Config {
            api_port: 0,
            frontend_url: None,
            notes_token: token.map(str::to_string),
            notes_database_id: database_id.map(str::to_string),
            dispatch_source: source,
            dispatches_dir: "./dispatches".into(),
            archive_url: "http://localhost/archive".into(),
            archive_cache_secs: 0,
            is_production: false,
        }
    }

    fn names(providers: &[Arc<dyn DispatchProvider>]) -> Vec<&'static str> {
        providers.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn auto_with_credentials_chains_remote_then_local() {
        let cfg = config(DispatchSourceSelection::Auto, Some("secret"), Some("db"));
        assert_eq!(
            names(&build_dispatch_providers(&cfg)),
            ["notion", "local-files"]
        );
    }

    #[test]
    fn auto_without_credentials_is_local_only() {
        let cfg = config(DispatchSourceSelection::Auto, None, None);
        assert_eq!(names(&build_dispatch_providers(&cfg)), ["local-files"]);

        // One credential alone is not enough to install the remote source.
        let cfg = config(DispatchSourceSelection::Auto, Some("secret"), None);
        assert_eq!(names(&build_dispatch_providers(&cfg)), ["local-files"]);
    }

    #[test]
    fn remote_selection_installs_exactly_one_provider() {
        let cfg = config(DispatchSourceSelection::Remote, Some("secret"), Some("db"));
        assert_eq!(names(&build_dispatch_providers(&cfg)), ["notion"]);
    }

    #[test]
    fn local_selection_installs_exactly_one_provider() {
        let cfg = config(DispatchSourceSelection::Local, Some("secret"), Some("db"));
        assert_eq!(names(&build_dispatch_providers(&cfg)), ["local-files"]);
    }
}
