pub mod error;
pub mod types;

pub use error::{NotionError, Result};
pub use types::{
    DatabaseQuery, FormulaResult, Page, Property, QueryResponse, RichTextSegment,
};

const BASE_URL: &str = "https://api.notion.com/v1";

/// API version pinned so property payload shapes stay stable.
const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionClient {
    client: reqwest::Client,
    token: String,
}

impl NotionClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
        }
    }

    /// Run a database query and return the matching pages. One outbound
    /// call, no retries; transport and API failures surface to the caller.
    pub async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> Result<Vec<Page>> {
        let url = format!("{}/databases/{}/query", BASE_URL, database_id);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotionError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let api_resp: QueryResponse = resp.json().await?;
        tracing::debug!(count = api_resp.results.len(), "Database query returned");
        Ok(api_resp.results)
    }
}
