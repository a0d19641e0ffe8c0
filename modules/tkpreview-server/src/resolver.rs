use async_trait::async_trait;
use notion_client::{DatabaseQuery, NotionClient, NotionError, Page};

use crate::model::PROP_SHORT_ID;

/// The one read path into the external database, behind a trait so the
/// request handler can be exercised against an in-memory stub.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// All pages whose short-id formula equals `short_id` exactly
    /// (case-sensitive, no partial match), in source-returned order.
    async fn query_by_short_id(&self, short_id: &str) -> Result<Vec<Page>, NotionError>;

    /// The most recently edited page in the collection, if any.
    async fn most_recently_edited(&self) -> Result<Option<Page>, NotionError>;
}

/// `RecordSource` backed by the Notion API: one database, one client.
pub struct NotionSource {
    client: NotionClient,
    database_id: String,
}

impl NotionSource {
    pub fn new(client: NotionClient, database_id: String) -> Self {
        Self {
            client,
            database_id,
        }
    }
}

#[async_trait]
impl RecordSource for NotionSource {
    async fn query_by_short_id(&self, short_id: &str) -> Result<Vec<Page>, NotionError> {
        tracing::info!(short_id, "Querying database by short id");
        let query = DatabaseQuery::formula_string_equals(PROP_SHORT_ID, short_id);
        self.client.query_database(&self.database_id, &query).await
    }

    async fn most_recently_edited(&self) -> Result<Option<Page>, NotionError> {
        tracing::info!("Querying database for most recently edited page");
        let query = DatabaseQuery::latest_edited();
        let results = self.client.query_database(&self.database_id, &query).await?;
        Ok(results.into_iter().next())
    }
}

/// Outcome of resolving a request to a single record. The two empty
/// outcomes stay distinct because they produce different banners.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(Page),
    NoMatch { requested: String },
    Empty,
}

/// Resolve an optional requested id to exactly one record.
///
/// With an id, the first match in source-returned order wins; the API
/// defines no tie-break for duplicate short ids and none is imposed
/// here. Without an id, the most recently edited record is used.
pub async fn resolve(
    source: &dyn RecordSource,
    requested: Option<&str>,
) -> Result<Resolution, NotionError> {
    match requested {
        Some(id) => {
            let matches = source.query_by_short_id(id).await?;
            tracing::info!(requested = id, count = matches.len(), "Short-id query returned");
            match matches.into_iter().next() {
                Some(page) => Ok(Resolution::Found(page)),
                None => Ok(Resolution::NoMatch {
                    requested: id.to_string(),
                }),
            }
        }
        None => match source.most_recently_edited().await? {
            Some(page) => Ok(Resolution::Found(page)),
            None => Ok(Resolution::Empty),
        },
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    /// In-memory source: pages keyed by short id plus a "latest" slot.
    pub(crate) struct StubSource {
        pub by_short_id: HashMap<String, Vec<Page>>,
        pub latest: Option<Page>,
        pub fail_with: Option<String>,
    }

    impl StubSource {
        pub fn empty() -> Self {
            Self {
                by_short_id: HashMap::new(),
                latest: None,
                fail_with: None,
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::empty()
            }
        }
    }

    #[async_trait]
    impl RecordSource for StubSource {
        async fn query_by_short_id(&self, short_id: &str) -> Result<Vec<Page>, NotionError> {
            if let Some(message) = &self.fail_with {
                return Err(NotionError::Network(message.clone()));
            }
            Ok(self.by_short_id.get(short_id).cloned().unwrap_or_default())
        }

        async fn most_recently_edited(&self) -> Result<Option<Page>, NotionError> {
            if let Some(message) = &self.fail_with {
                return Err(NotionError::Network(message.clone()));
            }
            Ok(self.latest.clone())
        }
    }

    pub(crate) fn page(id: &str) -> Page {
        Page {
            id: id.to_string(),
            last_edited_time: "2024-01-05T09:07:00.000Z".to_string(),
            properties: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn resolves_by_id_when_present() {
        let mut source = StubSource::empty();
        source
            .by_short_id
            .insert("Bloom.1012".to_string(), vec![page("a")]);

        let resolution = resolve(&source, Some("Bloom.1012")).await.unwrap();
        assert_eq!(resolution, Resolution::Found(page("a")));
    }

    #[tokio::test]
    async fn first_match_wins_on_duplicates() {
        let mut source = StubSource::empty();
        source
            .by_short_id
            .insert("Bloom.1012".to_string(), vec![page("first"), page("second")]);

        let resolution = resolve(&source, Some("Bloom.1012")).await.unwrap();
        assert_eq!(resolution, Resolution::Found(page("first")));
    }

    #[tokio::test]
    async fn missing_id_is_no_match_not_empty() {
        let mut source = StubSource::empty();
        source.latest = Some(page("latest"));

        let resolution = resolve(&source, Some("Nope.1")).await.unwrap();
        assert_eq!(
            resolution,
            Resolution::NoMatch {
                requested: "Nope.1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn no_id_falls_back_to_latest_edited() {
        let mut source = StubSource::empty();
        source.latest = Some(page("latest"));

        let resolution = resolve(&source, None).await.unwrap();
        assert_eq!(resolution, Resolution::Found(page("latest")));
    }

    #[tokio::test]
    async fn no_id_and_no_pages_is_empty() {
        let source = StubSource::empty();
        let resolution = resolve(&source, None).await.unwrap();
        assert_eq!(resolution, Resolution::Empty);
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let source = StubSource::failing("connection reset");
        let err = resolve(&source, None).await.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}
