use async_trait::async_trait;
use serde_json::{Value, json};

use crate::application::ports::dispatch_provider::DispatchProvider;
use crate::domain::dispatches::Dispatch;

const NOTION_API_BASE: &str = "https://api.notion.com";
const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, thiserror::Error)]
#[error("notes database query returned {status}: {body}")]
pub struct NotesQueryError {
    pub status: reqwest::StatusCode,
    pub body: String,
}

/// Fetches dispatches from a Notion database, sorted by the `Date` property
/// descending on the server side.
pub struct NotionDispatchProvider {
    client: reqwest::Client,
    base_url: String,
    token: String,
    database_id: String,
}

impl NotionDispatchProvider {
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: NOTION_API_BASE.to_string(),
            token: token.into(),
            database_id: database_id.into(),
        }
    }
}

#[async_trait]
impl DispatchProvider for NotionDispatchProvider {
    fn name(&self) -> &'static str {
        "notion"
    }

    async fn fetch_current(&self) -> anyhow::Result<Vec<Dispatch>> {
        let database_id = normalize_database_id(&self.database_id);
        let url = format!("{}/v1/databases/{}/query", self.base_url, database_id);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&json!({
                "sorts": [{ "property": "Date", "direction": "descending" }]
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotesQueryError { status, body }.into());
        }

        let payload: Value = resp.json().await?;
        Ok(dispatches_from_query(&payload))
    }
}

/// Notion accepts the dashed UUID form in URLs; integrations are often
/// configured with the bare 32-hex id copied from a page URL. Insert dashes
/// as 8-4-4-4-12 in that case and pass anything else through untouched.
pub fn normalize_database_id(raw: &str) -> String {
    let is_bare_hex = raw.len() == 32 && raw.bytes().all(|b| b.is_ascii_hexdigit());
    if !is_bare_hex {
        return raw.to_string();
    }
    format!(
        "{}-{}-{}-{}-{}",
        &raw[0..8],
        &raw[8..12],
        &raw[12..16],
        &raw[16..20],
        &raw[20..32]
    )
}

/// A payload without a `results` array is treated as empty, not as an error.
pub fn dispatches_from_query(payload: &Value) -> Vec<Dispatch> {
    payload["results"]
        .as_array()
        .map(|pages| pages.iter().map(dispatch_from_page).collect())
        .unwrap_or_default()
}

fn dispatch_from_page(page: &Value) -> Dispatch {
    let properties = &page["properties"];

    let title = {
        let joined = concat_plain_text(&properties["Name"]["title"], "");
        let joined = joined.trim();
        if joined.is_empty() {
            "Untitled entry".to_string()
        } else {
            joined.to_string()
        }
    };

    let date = properties["Date"]["date"]["start"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| {
            // Creation timestamps are RFC 3339; the calendar date is the
            // first 10 characters.
            let created = page["created_time"].as_str().unwrap_or_default();
            created.chars().take(10).collect()
        });

    let content = concat_plain_text(&properties["Content"]["rich_text"], "\n")
        .trim()
        .to_string();

    Dispatch {
        id: page["id"].as_str().unwrap_or_default().to_string(),
        title,
        date,
        content,
    }
}

fn concat_plain_text(fragments: &Value, separator: &str) -> String {
    fragments
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["plain_text"].as_str())
                .collect::<Vec<_>>()
                .join(separator)
        })
        .unwrap_or_default()
}
