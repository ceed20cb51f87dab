use std::env;
use std::str::FromStr;

/// Which dispatch sources get installed, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchSourceSelection {
    /// Remote notes database when credentials are present, then local files.
    Auto,
    /// Remote notes database only.
    Remote,
    /// Local markdown files only.
    Local,
}

impl FromStr for DispatchSourceSelection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "remote" => Ok(Self::Remote),
            "local" => Ok(Self::Local),
            other => anyhow::bail!("invalid DISPATCH_SOURCE: {other} (expected auto|remote|local)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub frontend_url: Option<String>,
    pub notes_token: Option<String>,
    pub notes_database_id: Option<String>,
    pub dispatch_source: DispatchSourceSelection,
    pub dispatches_dir: String,
    pub archive_url: String,
    pub archive_cache_secs: u64,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8888);
        let frontend_url = env::var("FRONTEND_URL").ok();
        let notes_token = env::var("NOTION_TOKEN").ok().filter(|s| !s.trim().is_empty());
        let notes_database_id = env::var("NOTION_DATABASE_ID")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let dispatch_source = match env::var("DISPATCH_SOURCE") {
            Ok(raw) => raw.parse()?,
            Err(_) => DispatchSourceSelection::Auto,
        };
        let dispatches_dir = env::var("DISPATCHES_DIR").unwrap_or_else(|_| "./dispatches".into());
        let substack_url = env::var("SUBSTACK_URL")
            .unwrap_or_else(|_| "https://willreynoir.substack.com".into());
        let archive_url = format!(
            "{}/api/v1/archive?sort=new",
            substack_url.trim_end_matches('/')
        );
        let archive_cache_secs = env::var("ARCHIVE_CACHE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(300);
        let is_production = matches!(
            env::var("RUST_ENV").ok().as_deref(),
            Some("production") | Some("prod")
        );

        let cfg = Self {
            api_port,
            frontend_url,
            notes_token,
            notes_database_id,
            dispatch_source,
            dispatches_dir,
            archive_url,
            archive_cache_secs,
            is_production,
        };

        // Remote-only mode cannot degrade to local files, so the credentials
        // stop being optional.
        if cfg.dispatch_source == DispatchSourceSelection::Remote && !cfg.has_notes_credentials() {
            anyhow::bail!(
                "DISPATCH_SOURCE=remote requires both NOTION_TOKEN and NOTION_DATABASE_ID"
            );
        }

        if cfg.is_production
            && !cfg
                .frontend_url
                .as_deref()
                .is_some_and(|u| u.starts_with("http"))
        {
            anyhow::bail!(
                "FRONTEND_URL must be set to a full origin in production (e.g., https://room.example.com)"
            );
        }

        Ok(cfg)
    }

    /// Both credential values present is what makes the remote notes
    /// database a candidate source; their absence is a valid state, not an
    /// error.
    pub fn has_notes_credentials(&self) -> bool {
        self.notes_token.is_some() && self.notes_database_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_selection() {
        assert_eq!(
            "auto".parse::<DispatchSourceSelection>().unwrap(),
            DispatchSourceSelection::Auto
        );
        assert_eq!(
            "Remote".parse::<DispatchSourceSelection>().unwrap(),
            DispatchSourceSelection::Remote
        );
        assert_eq!(
            " local ".parse::<DispatchSourceSelection>().unwrap(),
            DispatchSourceSelection::Local
        );
        assert!("both".parse::<DispatchSourceSelection>().is_err());
    }
}
