use notion_client::types::{FormulaResult, Property, RichTextSegment};

/// Reduce a property to its plain-text display value. Used for label
/// fields (record id, short id) that end up in footers and filenames.
///
/// Absent, empty, and unsupported properties all reduce to `""`.
pub fn extract_text(prop: Option<&Property>) -> String {
    let Some(prop) = prop else {
        return String::new();
    };
    match prop {
        Property::Title { title } if !title.is_empty() => concat_segments(title),
        Property::RichText { rich_text } if !rich_text.is_empty() => concat_segments(rich_text),
        Property::Formula { formula } => match formula {
            FormulaResult::String { string: Some(s) } => s.clone(),
            FormulaResult::Number { number: Some(n) } => n.to_string(),
            _ => String::new(),
        },
        Property::PlainText { plain_text } => plain_text.clone(),
        _ => String::new(),
    }
}

/// Reduce a property to its HTML-bearing value. Segments of title and
/// rich-text properties may contain raw markup authored upstream; it is
/// passed through here and sanitized by the caller.
pub fn extract_html(prop: Option<&Property>) -> String {
    match prop {
        Some(Property::Title { title }) => concat_segments(title),
        Some(Property::RichText { rich_text }) => concat_segments(rich_text),
        Some(Property::Formula { formula }) => match formula {
            FormulaResult::String { string: Some(s) } => s.clone(),
            _ => String::new(),
        },
        Some(Property::PlainText { plain_text }) => plain_text.clone(),
        _ => String::new(),
    }
}

fn concat_segments(segments: &[RichTextSegment]) -> String {
    segments.iter().map(|s| s.plain_text.as_str()).collect()
}
