//! Markdown to HTML fragment conversion.
//!
//! Wraps comrak with the GitHub Flavored Markdown extension set. Raw HTML
//! embedded in the source passes through unescaped: the servers only ever
//! read trusted local content.

use comrak::Options;

fn render_options() -> Options<'static> {
    let mut options = Options::default();

    // GFM extensions
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    // Auto-generated heading id attributes, no prefix
    options.extension.header_ids = Some(String::new());

    // Smart punctuation (quotes, dashes)
    options.parse.smart = true;

    // Trusted content: pass raw HTML through
    options.render.unsafe_ = true;

    options
}

/// Convert markdown source to an HTML fragment.
///
/// Conversion is best-effort and never fails: malformed markdown still
/// produces some HTML for any well-formed UTF-8 input.
pub fn to_html(source: &str) -> String {
    comrak::markdown_to_html(source, &render_options())
}
