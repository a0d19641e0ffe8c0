use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, warn};

use crate::components::render_preview;
use crate::model::DisplayModel;
use crate::resolver::{resolve, Resolution};
use crate::AppState;

pub const MISSING_CONFIG_BODY: &str =
    "Missing required configuration: NOTION_TOKEN or DATABASE_ID";

#[derive(serde::Deserialize)]
pub struct PreviewQuery {
    pub id: Option<String>,
}

/// `GET /`: fetch one record, render the two-card preview.
///
/// Resolution failures (no match, empty collection, upstream error) are
/// rendered as an in-page banner on a 200 so the authoring team sees
/// them in the browser; only missing configuration is a hard 500.
pub async fn preview_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PreviewQuery>,
) -> Response {
    let Some(source) = &state.source else {
        error!("NOTION_TOKEN or DATABASE_ID missing; cannot serve preview");
        return (StatusCode::INTERNAL_SERVER_ERROR, MISSING_CONFIG_BODY).into_response();
    };

    let requested = params
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    let model = match resolve(source.as_ref(), requested).await {
        Ok(Resolution::Found(page)) => DisplayModel::from_page(&page),
        Ok(Resolution::NoMatch { requested }) => {
            DisplayModel::from_error(format!("No record found for ID: {requested}"))
        }
        Ok(Resolution::Empty) => DisplayModel::from_error("No pages found in database."),
        Err(e) => {
            // Surfaced to the page as diagnostic text; this tool is
            // internal-facing and the operator is also the viewer.
            warn!(error = %e, "Fetch from Notion failed");
            DisplayModel::from_error(format!("Error: {e}"))
        }
    };

    Html(render_preview(&model)).into_response()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use axum::body::to_bytes;
    use notion_client::types::{Page, Property, RichTextSegment};

    use super::*;
    use crate::model::{PROP_LIVE_TILE, PROP_PENDING_MODAL, PROP_SHORT_ID};
    use crate::resolver::tests::StubSource;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn state_with(source: StubSource) -> Arc<AppState> {
        Arc::new(AppState {
            source: Some(Arc::new(source)),
        })
    }

    fn rich(text: &str) -> Property {
        Property::RichText {
            rich_text: vec![RichTextSegment::new(text)],
        }
    }

    fn content_page() -> Page {
        let mut properties = HashMap::new();
        properties.insert(
            PROP_SHORT_ID.to_string(),
            rich("Bloom.1012"),
        );
        properties.insert(PROP_LIVE_TILE.to_string(), rich("<div>live tile</div>"));
        // "Modal HTML" intentionally absent; builder modal present.
        properties.insert(
            PROP_PENDING_MODAL.to_string(),
            rich("<p>builder modal</p>"),
        );
        Page {
            id: "page-1".to_string(),
            last_edited_time: "2024-01-05T09:07:00.000Z".to_string(),
            properties,
        }
    }

    #[tokio::test]
    async fn missing_config_is_a_plain_500() {
        let state = Arc::new(AppState { source: None });
        let response = preview_page(
            State(state),
            Query(PreviewQuery {
                id: Some("Bloom.1012".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, MISSING_CONFIG_BODY);
    }

    #[tokio::test]
    async fn unknown_id_names_the_id_in_the_banner() {
        let state = state_with(StubSource::empty());
        let response = preview_page(
            State(state),
            Query(PreviewQuery {
                id: Some("Bloom.1012".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("No record found for ID: Bloom.1012"));
        assert!(!body.contains("No pages found in database."));
    }

    #[tokio::test]
    async fn empty_collection_gets_the_generic_banner() {
        let state = state_with(StubSource::empty());
        let response = preview_page(State(state), Query(PreviewQuery { id: None })).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("No pages found in database."));
        assert!(!body.contains("No record found for ID"));
    }

    #[tokio::test]
    async fn blank_id_param_behaves_like_no_id() {
        let state = state_with(StubSource::empty());
        let response = preview_page(
            State(state),
            Query(PreviewQuery {
                id: Some("   ".to_string()),
            }),
        )
        .await;
        let body = body_string(response).await;
        assert!(body.contains("No pages found in database."));
    }

    #[tokio::test]
    async fn upstream_failure_surfaces_its_message() {
        let state = state_with(StubSource::failing("connection reset"));
        let response = preview_page(State(state), Query(PreviewQuery { id: None })).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("connection reset"));
        assert!(body.contains("Error:"));
    }

    #[tokio::test]
    async fn found_record_renders_content_and_fallbacks() {
        let mut source = StubSource::empty();
        source.latest = Some(content_page());
        let response = preview_page(State(state_with(source)), Query(PreviewQuery { id: None })).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        // Live tile content made it through; missing live modal fell back.
        assert!(body.contains(r#""<div>live tile</div>""#));
        assert!(body.contains("No HTML found in <b>Modal HTML</b>"));
        // Builder modal carries its own content, not a fallback.
        assert!(body.contains(r#""<p>builder modal</p>""#));
        assert!(!body.contains("No HTML found in <b>Builder ⓵ MODAL</b>"));
        // Client name derived from the short id.
        assert!(body.contains("Bloom_LiveContent_tkid_01.05.24_09:07"));
    }
}
