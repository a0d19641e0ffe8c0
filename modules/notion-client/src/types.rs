use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// --- Database query request types ---

/// Body for `POST /v1/databases/{id}/query`. Only the fields this client
/// actually sends; the API treats missing fields as "no constraint".
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatabaseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<QueryFilter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<QuerySort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl DatabaseQuery {
    /// Exact-match filter on a formula-typed property's string value.
    pub fn formula_string_equals(property: &str, value: &str) -> Self {
        Self {
            filter: Some(QueryFilter {
                property: property.to_string(),
                formula: FormulaFilter {
                    string: StringCondition {
                        equals: value.to_string(),
                    },
                },
            }),
            ..Self::default()
        }
    }

    /// The single most-recently-edited page in the database.
    pub fn latest_edited() -> Self {
        Self {
            sorts: vec![QuerySort {
                timestamp: "last_edited_time".to_string(),
                direction: "descending".to_string(),
            }],
            page_size: Some(1),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryFilter {
    pub property: String,
    pub formula: FormulaFilter,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormulaFilter {
    pub string: StringCondition,
}

#[derive(Debug, Clone, Serialize)]
pub struct StringCondition {
    pub equals: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuerySort {
    pub timestamp: String,
    pub direction: String,
}

// --- Response types ---

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<Page>,
}

/// A single page (database record) as returned by the query endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    pub id: String,
    pub last_edited_time: String,
    #[serde(default)]
    pub properties: HashMap<String, Property>,
}

/// One property value on a page. The API tags each value with its type;
/// types this client does not consume deserialize to `Unknown` rather
/// than failing the whole page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Property {
    Title { title: Vec<RichTextSegment> },
    RichText { rich_text: Vec<RichTextSegment> },
    Formula { formula: FormulaResult },
    PlainText { plain_text: String },
    #[serde(other)]
    Unknown,
}

/// One segment of a title or rich-text value. `plain_text` carries the
/// rendered text of the segment, markup included when the author typed it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichTextSegment {
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichTextSegment {
    pub fn new(plain_text: impl Into<String>) -> Self {
        Self {
            plain_text: plain_text.into(),
            href: None,
        }
    }
}

/// The computed result of a formula property. String and number results
/// are nullable on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaResult {
    String { string: Option<String> },
    Number { number: Option<f64> },
    Boolean { boolean: Option<bool> },
    Date,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_property_deserializes() {
        let prop: Property = serde_json::from_value(json!({
            "type": "title",
            "title": [
                { "plain_text": "Bloom", "href": null },
                { "plain_text": ".1012", "href": null }
            ]
        }))
        .unwrap();
        match prop {
            Property::Title { title } => {
                assert_eq!(title.len(), 2);
                assert_eq!(title[0].plain_text, "Bloom");
            }
            other => panic!("expected title, got {other:?}"),
        }
    }

    #[test]
    fn formula_string_deserializes() {
        let prop: Property = serde_json::from_value(json!({
            "type": "formula",
            "formula": { "type": "string", "string": "Bloom.1012" }
        }))
        .unwrap();
        assert_eq!(
            prop,
            Property::Formula {
                formula: FormulaResult::String {
                    string: Some("Bloom.1012".to_string())
                }
            }
        );
    }

    #[test]
    fn formula_number_null_deserializes() {
        let prop: Property = serde_json::from_value(json!({
            "type": "formula",
            "formula": { "type": "number", "number": null }
        }))
        .unwrap();
        assert_eq!(
            prop,
            Property::Formula {
                formula: FormulaResult::Number { number: None }
            }
        );
    }

    #[test]
    fn unsupported_property_type_becomes_unknown() {
        let prop: Property = serde_json::from_value(json!({
            "type": "multi_select",
            "multi_select": [{ "name": "tag" }]
        }))
        .unwrap();
        assert_eq!(prop, Property::Unknown);
    }

    #[test]
    fn page_keeps_verbatim_field_names() {
        let page: Page = serde_json::from_value(json!({
            "id": "abc-123",
            "last_edited_time": "2024-01-05T09:07:00.000Z",
            "properties": {
                "Builder ⓵ TILE": {
                    "type": "rich_text",
                    "rich_text": [{ "plain_text": "<b>tile</b>" }]
                }
            }
        }))
        .unwrap();
        assert!(page.properties.contains_key("Builder ⓵ TILE"));
    }

    #[test]
    fn query_serializes_to_notion_wire_shape() {
        let query = DatabaseQuery::formula_string_equals("tkid1", "Bloom.1012");
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            json!({
                "filter": {
                    "property": "tkid1",
                    "formula": { "string": { "equals": "Bloom.1012" } }
                }
            })
        );

        let latest = serde_json::to_value(DatabaseQuery::latest_edited()).unwrap();
        assert_eq!(
            latest,
            json!({
                "page_size": 1,
                "sorts": [{ "timestamp": "last_edited_time", "direction": "descending" }]
            })
        );
    }
}
