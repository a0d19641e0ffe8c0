use std::sync::LazyLock;

use regex::Regex;

static JAVASCRIPT_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").unwrap());
static EVENT_HANDLER_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=").unwrap());

/// Strip `javascript:` scheme tokens and inline event-handler bindings
/// from authored HTML before it reaches the page.
///
/// This is deliberately a minimal filter, not an HTML sanitizer: it does
/// not parse the DOM, strip `<script>` tags, or neutralize `data:` URIs.
/// Content originates from a trusted internal authoring tool, and the
/// authored markup must otherwise survive verbatim. Removal (not
/// escaping) can leave a dangling quoted string behind an `onclick=`,
/// which the browser then treats as an unknown attribute value.
pub fn sanitize(html: &str) -> String {
    let without_scheme = JAVASCRIPT_SCHEME.replace_all(html, "");
    EVENT_HANDLER_ATTR.replace_all(&without_scheme, "").into_owned()
}
