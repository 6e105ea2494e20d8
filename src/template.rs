//! Page template
//!
//! Wraps a rendered HTML fragment in a fixed document shell. The shell is
//! compiled once at startup and injected into the dispatcher through
//! `ServerContext`; requests only ever read it.

/// Default stylesheet emitted inline when no `css` override is given.
const DEFAULT_STYLE: &str = include_str!("../assets/style.css");

/// Client-side script: lazy syntax highlighting plus breadcrumb navigation.
const PAGE_SCRIPT: &str = include_str!("../assets/page.js");

/// Per-request template input: document title (the request path), optional
/// external stylesheet URL, and the rendered HTML fragment.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub title: &'a str,
    pub css: Option<&'a str>,
    pub body: &'a str,
}

/// Immutable document shell shared by all requests.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    style: &'static str,
    script: &'static str,
}

impl PageTemplate {
    pub const fn new() -> Self {
        Self {
            style: DEFAULT_STYLE,
            script: PAGE_SCRIPT,
        }
    }

    /// Embed a fragment into a complete HTML document.
    ///
    /// The fragment is inserted as raw markup: the markdown renderer runs
    /// in unsafe mode and the template matches it, no escaping anywhere.
    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut doc = String::with_capacity(
            self.style.len() + self.script.len() + ctx.body.len() + 512,
        );

        doc.push_str("<!doctype html>\n<html>\n<head>\n");
        doc.push_str(
            "<link rel=\"shortcut icon\" type=\"image/x-icon\" href=\"data:image/x-icon;,\">\n",
        );
        doc.push_str("<title>");
        doc.push_str(ctx.title);
        doc.push_str("</title>\n");

        match ctx.css {
            Some(url) => {
                doc.push_str("<link rel=\"stylesheet\" href=\"");
                doc.push_str(url);
                doc.push_str("\">\n");
            }
            None => {
                doc.push_str("<style>\n");
                doc.push_str(self.style);
                doc.push_str("</style>\n");
            }
        }

        doc.push_str("</head>\n<body>\n\n");
        doc.push_str(ctx.body);
        doc.push_str("\n\n<script>\n");
        doc.push_str(self.script);
        doc.push_str("</script>\n</body>\n</html>\n");

        doc
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::new()
    }
}
