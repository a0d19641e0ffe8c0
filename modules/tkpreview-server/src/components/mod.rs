use dioxus::prelude::VirtualDom;

mod assets;
pub mod preview;

pub use preview::render_preview;

/// Wrap a rendered VirtualDom in a complete HTML document.
fn document(dom: &VirtualDom) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus::ssr::render(dom)
    )
}
