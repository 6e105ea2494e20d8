//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: path normalization and the
//! choice between markdown rendering, the single-page index, and raw
//! static file serving.

use crate::handler::static_files;
use crate::http;
use crate::logger;
use crate::markdown;
use crate::server::{ServeMode, ServerContext};
use crate::template::RenderContext;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::path::Path;
use std::sync::Arc;

/// Request context encapsulating information needed for dispatch.
pub struct RequestContext<'a> {
    /// Raw request path, not yet normalized.
    pub path: &'a str,
    /// Raw query string without the leading `?`.
    pub query: Option<&'a str>,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    ctx: Arc<ServerContext>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();

    if ctx.access_log {
        logger::log_request(method, uri);
    }

    if *method != Method::GET && *method != Method::HEAD {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return Ok(http::build_405_response());
    }

    let request = RequestContext {
        path: uri.path(),
        query: uri.query(),
        is_head: *method == Method::HEAD,
    };

    let response = dispatch(&ctx, &request).await;
    if ctx.access_log {
        logger::log_response(response.status().as_u16(), content_length(&response));
    }
    Ok(response)
}

/// Classify the request and route it to exactly one handling strategy.
pub async fn dispatch(
    ctx: &ServerContext,
    request: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let path = clean_request_path(request.path);

    match ctx.mode {
        ServeMode::Static => static_files::serve(&ctx.root, &path, request.is_head).await,
        ServeMode::Markdown => {
            if extension(&path) == Some("md") && !has_raw_param(request.query) {
                serve_markdown(ctx, &path, request).await
            } else {
                static_files::serve(&ctx.root, &path, request.is_head).await
            }
        }
        ServeMode::SinglePage => {
            if extension(&path).is_some() {
                static_files::serve(&ctx.root, &path, request.is_head).await
            } else {
                serve_single_page_index(ctx, request.is_head).await
            }
        }
    }
}

/// Render a markdown file under the content root and wrap it in the page
/// template. The title is the cleaned request path.
async fn serve_markdown(
    ctx: &ServerContext,
    path: &str,
    request: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let bytes = match static_files::read_file(&ctx.root, path).await {
        Ok(bytes) => bytes,
        Err(err) => return http::build_error_response(err.status(), &err.to_string()),
    };

    let source = String::from_utf8_lossy(&bytes);
    let fragment = markdown::to_html(&source);
    let document = ctx.template.render(&RenderContext {
        title: path,
        css: css_param(request.query),
        body: &fragment,
    });

    http::build_html_response(document, request.is_head)
}

/// Single-page fallback: every extensionless path returns the index
/// document, leaving routing to client-side code.
async fn serve_single_page_index(ctx: &ServerContext, is_head: bool) -> Response<Full<Bytes>> {
    match static_files::read_file(&ctx.root, "/index.html").await {
        Ok(bytes) => http::build_file_response(bytes, "text/html", is_head),
        Err(err) => http::build_error_response(err.status(), &err.to_string()),
    }
}

/// Normalize a request path: ensure a leading slash, then lexically clean
/// it. `.` and empty segments drop out, `..` pops and can never climb above
/// the root.
pub fn clean_request_path(raw: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut cleaned = String::with_capacity(raw.len() + 1);
    cleaned.push('/');
    cleaned.push_str(&segments.join("/"));
    cleaned
}

/// File extension of the cleaned path, if any.
fn extension(path: &str) -> Option<&str> {
    Path::new(path).extension().and_then(|e| e.to_str())
}

/// Whether a `raw` query parameter is present, with or without a value.
fn has_raw_param(query: Option<&str>) -> bool {
    query.is_some_and(|q| q.split('&').any(|kv| kv == "raw" || kv.starts_with("raw=")))
}

/// First `css` query parameter value, if any.
fn css_param(query: Option<&str>) -> Option<&str> {
    query?.split('&').find_map(|kv| kv.strip_prefix("css="))
}

fn content_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("Content-Length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path_prepends_slash() {
        assert_eq!(clean_request_path("doc.md"), "/doc.md");
        assert_eq!(clean_request_path("/doc.md"), "/doc.md");
    }

    #[test]
    fn test_clean_path_resolves_dots() {
        assert_eq!(clean_request_path("/a/./b"), "/a/b");
        assert_eq!(clean_request_path("/a/b/../c"), "/a/c");
        assert_eq!(clean_request_path("/../../etc/passwd"), "/etc/passwd");
    }

    #[test]
    fn test_clean_path_collapses_separators() {
        assert_eq!(clean_request_path("//a///b"), "/a/b");
        assert_eq!(clean_request_path("/"), "/");
        assert_eq!(clean_request_path(""), "/");
    }

    #[test]
    fn test_clean_path_never_escapes_root() {
        for raw in ["/..", "/../..", "../../../x/../..", "/a/../../.."] {
            let cleaned = clean_request_path(raw);
            assert!(cleaned.starts_with('/'), "{raw} -> {cleaned}");
            assert!(!cleaned.contains(".."), "{raw} -> {cleaned}");
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("/doc.md"), Some("md"));
        assert_eq!(extension("/app.js"), Some("js"));
        assert_eq!(extension("/foo/bar"), None);
        assert_eq!(extension("/"), None);
    }

    #[test]
    fn test_has_raw_param() {
        assert!(has_raw_param(Some("raw")));
        assert!(has_raw_param(Some("raw=1")));
        assert!(has_raw_param(Some("css=x&raw")));
        assert!(!has_raw_param(Some("rawr")));
        assert!(!has_raw_param(Some("css=raw")));
        assert!(!has_raw_param(None));
    }

    #[test]
    fn test_css_param() {
        assert_eq!(
            css_param(Some("css=http://x/style.css")),
            Some("http://x/style.css")
        );
        assert_eq!(css_param(Some("raw&css=a.css")), Some("a.css"));
        assert_eq!(css_param(Some("raw")), None);
        assert_eq!(css_param(None), None);
    }
}
