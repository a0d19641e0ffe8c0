use dioxus::prelude::*;

use crate::model::DisplayModel;

use super::assets::{INTERACTION_SCRIPT, STYLE};
use super::document;

/// Placeholder markup substituted whenever a sanitized field comes back
/// empty, so neither card ever shows a blank region. The wording names
/// the database field the author needs to fill in.
const LIVE_TILE_FALLBACK: &str =
    r#"<div style="padding:0.5em;color:#fff;background:#156eff;">No HTML found in <b>Tile HTML</b>.</div>"#;
const LIVE_MODAL_FALLBACK: &str =
    r#"<div style="padding:0.5em;color:#222;">No HTML found in <b>Modal HTML</b>.</div>"#;
const PENDING_TILE_FALLBACK: &str =
    r#"<div style="padding:0.5em;color:#fff;background:#156eff;">No HTML found in <b>Builder ⓵ TILE</b>.</div>"#;
const PENDING_MODAL_FALLBACK: &str =
    r#"<div style="padding:0.5em;color:#222;">No HTML found in <b>Builder ⓵ MODAL</b>.</div>"#;

const SECRET_INPUT_TITLE: &str = "Enter tkid1 value (e.g., Bloom.1012)\n\nKeyboard shortcuts:\n• Tab 3 times\n• Ctrl/Cmd + K\n• Press 'g' twice";

struct IconAction {
    id_prefix: &'static str,
    icon: &'static str,
    label: &'static str,
    tooltip: &'static str,
    branded: bool,
}

const ICON_ACTIONS: &[IconAction] = &[
    IconAction { id_prefix: "refreshBtn", icon: "refresh-ccw", label: "Refresh", tooltip: "Refresh page", branded: false },
    IconAction { id_prefix: "copyTile", icon: "copy", label: "Copy Tile", tooltip: "Copy tile as image", branded: false },
    IconAction { id_prefix: "copyModal", icon: "copy", label: "Copy Modal", tooltip: "Copy modal as image", branded: false },
    IconAction { id_prefix: "copyCard", icon: "camera", label: "Copy Full Card", tooltip: "Copy entire card as image", branded: false },
    IconAction { id_prefix: "download2up", icon: "download", label: "Download 2-Up", tooltip: "Download both cards as image", branded: false },
    IconAction { id_prefix: "exportHtml", icon: "file-code", label: "Export HTML", tooltip: "Export card as HTML file", branded: false },
    IconAction { id_prefix: "saveTileHtml", icon: "code", label: "Save Tile HTML", tooltip: "Download tile HTML file", branded: false },
    IconAction { id_prefix: "saveModalHtml", icon: "code-2", label: "Save Modal HTML", tooltip: "Download modal HTML file", branded: false },
    IconAction { id_prefix: "copyTileCode", icon: "clipboard-copy", label: "Copy Tile Code", tooltip: "Copy tile code for AUSTIN", branded: true },
    IconAction { id_prefix: "copyModalCode", icon: "clipboard-check", label: "Copy Modal Code", tooltip: "Copy modal code for AUSTIN", branded: true },
];

fn icon_btn_class(branded: bool) -> &'static str {
    if branded {
        "icon-btn tk-branded"
    } else {
        "icon-btn"
    }
}

fn fragment_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// The four content fragments travel to the browser as JSON string
/// literals assigned to `innerHTML`, never as page markup, so the
/// document parser only ever sees them as script data.
fn content_injection_script(model: &DisplayModel) -> String {
    let assign = |element_id: &str, html: &str| {
        format!(
            "document.getElementById('{}').innerHTML = {};",
            element_id,
            serde_json::to_string(html).unwrap_or_default()
        )
    };
    [
        assign(
            "tileHtmlPreview1",
            fragment_or(&model.live_tile_html, LIVE_TILE_FALLBACK),
        ),
        assign(
            "modalHtmlPreview1",
            fragment_or(&model.live_modal_html, LIVE_MODAL_FALLBACK),
        ),
        assign(
            "tileHtmlPreview2",
            fragment_or(&model.pending_tile_html, PENDING_TILE_FALLBACK),
        ),
        assign(
            "modalHtmlPreview2",
            fragment_or(&model.pending_modal_html, PENDING_MODAL_FALLBACK),
        ),
    ]
    .join("\n")
}

#[allow(non_snake_case)]
#[component]
fn Card(num: u8, pending: bool, footer: String, banner: Option<String>) -> Element {
    let header = if pending { "Pending Update" } else { "Currently Live" };
    let header_class = if pending { "card-pending-header" } else { "card-live-header" };
    let tile_class = if pending {
        "tile-html-preview-box pending"
    } else {
        "tile-html-preview-box"
    };
    let banner_text = banner.unwrap_or_default();

    rsx! {
        div { class: "preview-col", id: "col{num}",
            div { class: "card-content",
                div { class: header_class, "{header}" }
                if !banner_text.is_empty() {
                    div { style: "color:#c00; padding:1em;", "{banner_text}" }
                }
                div { class: "tile-preview-row",
                    div { class: "tile-preview-label", "Tile Preview" }
                    div { class: "tile-preview-controls",
                        button { id: "tileWidthMinus{num}", class: "tile-size-btn", "−" }
                        button { id: "tileWidthPlus{num}", class: "tile-size-btn", "+" }
                        div { class: "font-size-control",
                            button { id: "tileFontMinus{num}", class: "font-size-btn", "A-" }
                            span { id: "tileFontIndicator{num}", class: "font-size-indicator", "100%" }
                            button { id: "tileFontPlus{num}", class: "font-size-btn", "A+" }
                        }
                    }
                }
                div { id: "tileHtmlPreview{num}", class: tile_class }
                div { class: "light-divider" }
                div { class: "modal-preview-row",
                    div { class: "modal-label", "Modal Preview" }
                    div { class: "modal-preview-controls",
                        button { id: "modalWidthMinus{num}", class: "modal-size-btn", "−" }
                        button { id: "modalWidthPlus{num}", class: "modal-size-btn", "+" }
                        button { id: "modalHeightMinus{num}", class: "modal-size-btn", style: "margin-left:12px;", "↓" }
                        button { id: "modalHeightPlus{num}", class: "modal-size-btn", "↑" }
                        div { class: "font-size-control",
                            button { id: "modalFontMinus{num}", class: "font-size-btn", "A-" }
                            span { id: "modalFontIndicator{num}", class: "font-size-indicator", "100%" }
                            button { id: "modalFontPlus{num}", class: "font-size-btn", "A+" }
                        }
                    }
                }
                div { id: "modalHtmlPreview{num}", class: "modal-html-preview-box" }
            }
            div { class: "footer-bar", id: "footer{num}",
                if pending {
                    i { "{footer}" }
                } else {
                    "{footer}"
                }
            }
            div { class: "icon-bar",
                for action in ICON_ACTIONS.iter() {
                    button {
                        id: "{action.id_prefix}{num}",
                        class: icon_btn_class(action.branded),
                        aria_label: action.label,
                        i { "data-lucide": action.icon, style: "width:23px;height:23px;" }
                        span { class: "tooltip", "{action.tooltip}" }
                    }
                }
                button { id: "homeBtn{num}", class: "icon-btn", style: "margin-left:auto;",
                    aria_label: "Home",
                    i { "data-lucide": "home", style: "width:23px;height:23px;" }
                    span { class: "tooltip", "Go to last edited" }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn PreviewPage(model: DisplayModel) -> Element {
    let inject = content_injection_script(&model);
    let live_footer = model.live_footer();
    let pending_footer = model.pending_footer();

    rsx! {
        head {
            meta { charset: "UTF-8" }
            meta { name: "viewport", content: "width=device-width,initial-scale=1" }
            title { "tkAuto Notion Live Preview" }
            link { href: "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css", rel: "stylesheet" }
            link { href: "https://info.tripkicks.com/hubfs/system/mockup/tk-css.css", rel: "stylesheet" }
            script { src: "https://cdn.jsdelivr.net/npm/html2canvas@1.4.1/dist/html2canvas.min.js" }
            script { src: "https://unpkg.com/lucide@latest/dist/umd/lucide.js" }
            style { dangerous_inner_html: STYLE }
        }
        body {
            div { class: "copy-success", id: "copySuccess", "Copied to clipboard!" }
            div { class: "main-wrapper",
                div { class: "preview-row",
                    Card {
                        num: 1,
                        pending: false,
                        footer: live_footer,
                        banner: model.error_banner.clone(),
                    }
                    Card { num: 2, pending: true, footer: pending_footer }
                }
            }
            div { class: "secret-input-container",
                input {
                    r#type: "text",
                    id: "secretInput",
                    class: "secret-input",
                    placeholder: "Bloom.1012",
                    title: SECRET_INPUT_TITLE,
                }
            }
            script { dangerous_inner_html: inject }
            script { dangerous_inner_html: INTERACTION_SCRIPT }
        }
    }
}

/// Render the full preview document for one display model.
pub fn render_preview(model: &DisplayModel) -> String {
    let mut dom = VirtualDom::new_with_props(
        PreviewPage,
        PreviewPageProps {
            model: model.clone(),
        },
    );
    dom.rebuild_in_place();
    document(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_model() -> DisplayModel {
        DisplayModel {
            live_tile_html: "<div>live tile</div>".to_string(),
            live_modal_html: "<p>live modal</p>".to_string(),
            pending_tile_html: "<div>pending tile</div>".to_string(),
            pending_modal_html: "<p>pending modal</p>".to_string(),
            client_name: "Bloom".to_string(),
            record_label: "TK-0042".to_string(),
            last_edited_formatted: "01.05.24_09:07".to_string(),
            error_banner: None,
        }
    }

    #[test]
    fn renders_both_cards_with_footers() {
        let html = render_preview(&full_model());
        assert!(html.contains("Currently Live"));
        assert!(html.contains("Pending Update"));
        assert!(html.contains("Bloom_LiveContent_TK-0042_01.05.24_09:07"));
        assert!(html.contains("Bloom_BuilderContent_TK-0042_01.05.24_09:07"));
    }

    #[test]
    fn fragments_travel_as_json_string_literals() {
        let html = render_preview(&full_model());
        // JSON-encoded, inside the injection script, not as markup.
        assert!(html.contains(r#"document.getElementById('tileHtmlPreview1').innerHTML = "<div>live tile</div>";"#));
        assert!(html.contains(r#""<p>pending modal</p>""#));
    }

    #[test]
    fn empty_fields_fall_back_to_placeholders() {
        let mut model = full_model();
        model.live_modal_html = String::new();
        model.pending_tile_html = String::new();
        let html = render_preview(&model);
        assert!(html.contains("No HTML found in <b>Modal HTML</b>"));
        assert!(html.contains("No HTML found in <b>Builder ⓵ TILE</b>"));
        // Untouched fields still carry their content.
        assert!(html.contains(r#""<div>live tile</div>""#));
    }

    #[test]
    fn banner_text_is_escaped_not_parsed() {
        let model = DisplayModel::from_error("No record found for ID: <b>x</b>");
        let html = render_preview(&model);
        assert!(html.contains("No record found for ID:"));
        assert!(html.contains("&lt;b"));
        assert!(!html.contains("ID: <b>x"));
    }

    #[test]
    fn error_page_still_renders_all_placeholders() {
        let model = DisplayModel::from_error("No pages found in database.");
        let html = render_preview(&model);
        assert!(html.contains("No pages found in database."));
        assert!(html.contains("No HTML found in <b>Tile HTML</b>"));
        assert!(html.contains("No HTML found in <b>Modal HTML</b>"));
        assert!(html.contains("No HTML found in <b>Builder ⓵ TILE</b>"));
        assert!(html.contains("No HTML found in <b>Builder ⓵ MODAL</b>"));
    }

    #[test]
    fn secret_input_and_controls_are_present() {
        let html = render_preview(&full_model());
        assert!(html.contains("secretInput"));
        assert!(html.contains("tileWidthPlus1"));
        assert!(html.contains("modalHeightMinus2"));
        assert!(html.contains("copyTileCode2"));
    }
}
