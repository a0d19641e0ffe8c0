use chrono::DateTime;
use notion_client::types::Page;

use crate::extract::{extract_html, extract_text};
use crate::sanitize::sanitize;

/// Notion property names consumed by the preview. These are external
/// identifiers and must match the database schema glyph-for-glyph,
/// including the numbered marker in the builder fields.
pub const PROP_RECORD_ID: &str = "TK id";
pub const PROP_SHORT_ID: &str = "tkid1";
pub const PROP_LIVE_TILE: &str = "Tile HTML";
pub const PROP_LIVE_MODAL: &str = "Modal HTML";
pub const PROP_PENDING_TILE: &str = "Builder ⓵ TILE";
pub const PROP_PENDING_MODAL: &str = "Builder ⓵ MODAL";

/// Everything the page renderer needs, flattened to strings. Built once
/// per request and consumed once; nothing here survives the response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayModel {
    pub live_tile_html: String,
    pub live_modal_html: String,
    pub pending_tile_html: String,
    pub pending_modal_html: String,
    pub client_name: String,
    pub record_label: String,
    pub last_edited_formatted: String,
    pub error_banner: Option<String>,
}

impl DisplayModel {
    /// Extract, sanitize, and derive display values from a fetched page.
    pub fn from_page(page: &Page) -> Self {
        let props = &page.properties;

        let record_label = match extract_text(props.get(PROP_RECORD_ID)) {
            label if label.is_empty() => "tkid".to_string(),
            label => label,
        };
        let short_id = extract_text(props.get(PROP_SHORT_ID));

        Self {
            live_tile_html: sanitize(&extract_html(props.get(PROP_LIVE_TILE))),
            live_modal_html: sanitize(&extract_html(props.get(PROP_LIVE_MODAL))),
            pending_tile_html: sanitize(&extract_html(props.get(PROP_PENDING_TILE))),
            pending_modal_html: sanitize(&extract_html(props.get(PROP_PENDING_MODAL))),
            client_name: client_name_from_short_id(&short_id),
            record_label,
            last_edited_formatted: format_last_edited(&page.last_edited_time),
            error_banner: None,
        }
    }

    /// A model for the no-record and upstream-failure paths: empty
    /// content (the renderer substitutes placeholders) plus a banner.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error_banner: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn live_footer(&self) -> String {
        format!(
            "{}_LiveContent_{}_{}",
            self.client_name, self.record_label, self.last_edited_formatted
        )
    }

    pub fn pending_footer(&self) -> String {
        format!(
            "{}_BuilderContent_{}_{}",
            self.client_name, self.record_label, self.last_edited_formatted
        )
    }
}

/// The client name is the prefix of the short id before its first `.`
/// (`"Bloom.1012"` → `"Bloom"`). Ids without a separator get the
/// generic fallback.
pub fn client_name_from_short_id(short_id: &str) -> String {
    match short_id.split_once('.') {
        Some((client, _)) => client.to_string(),
        None => "Client".to_string(),
    }
}

/// Format a last-edited timestamp as `MM.DD.YY_HH:MM`, 24-hour,
/// zero-padded. The calendar fields of the timestamp's own offset are
/// used as-is; no timezone conversion. Unparseable input yields `""`.
pub fn format_last_edited(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%m.%d.%y_%H:%M").to_string(),
        Err(_) => String::new(),
    }
}
