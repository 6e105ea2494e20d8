//! Static file delegate
//!
//! Serves files verbatim from the content root: root-confined path
//! resolution, MIME type inference, index files and directory listings.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// File access failure, classified by kind rather than message text.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("no such file or directory")]
    NotFound,
    #[error("{0}")]
    Io(String),
}

impl FileError {
    /// HTTP status the error maps to.
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Io(_) => 500,
        }
    }
}

impl From<std::io::Error> for FileError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound
        } else {
            Self::Io(err.to_string())
        }
    }
}

/// Serve the cleaned request path from the content root.
pub async fn serve(root: &Path, clean_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match load(root, clean_path).await {
        Ok((content, content_type)) => http::build_file_response(content, content_type, is_head),
        Err(err) => http::build_error_response(err.status(), &err.to_string()),
    }
}

/// Load the target file (or directory index/listing) under the root.
pub async fn load(root: &Path, clean_path: &str) -> Result<(Vec<u8>, &'static str), FileError> {
    let target = resolve_under_root(root, clean_path)?;

    if target.is_dir() {
        for index in INDEX_FILES {
            let candidate = target.join(index);
            if candidate.is_file() {
                let content = fs::read(&candidate).await?;
                return Ok((content, "text/html; charset=utf-8"));
            }
        }
        let listing = render_listing(&target, clean_path).await?;
        return Ok((listing.into_bytes(), "text/html; charset=utf-8"));
    }

    let content = fs::read(&target).await?;
    let content_type = mime::content_type(target.extension().and_then(|e| e.to_str()));
    Ok((content, content_type))
}

/// Read a single file under the root (no directory handling).
pub async fn read_file(root: &Path, clean_path: &str) -> Result<Vec<u8>, FileError> {
    let target = resolve_under_root(root, clean_path)?;
    if target.is_dir() {
        return Err(FileError::NotFound);
    }
    Ok(fs::read(&target).await?)
}

/// Resolve a cleaned request path under the root, rejecting anything that
/// escapes it. The root is canonical; the check also catches symlinks that
/// point outside.
fn resolve_under_root(root: &Path, clean_path: &str) -> Result<PathBuf, FileError> {
    let relative = clean_path.trim_start_matches('/');
    let joined = root.join(relative);

    let canonical = joined.canonicalize().map_err(FileError::from)?;
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path escapes content root, rejected: {clean_path} -> {}",
            canonical.display()
        ));
        return Err(FileError::NotFound);
    }
    Ok(canonical)
}

/// Generated directory listing for directories without an index file.
async fn render_listing(dir: &Path, request_path: &str) -> Result<String, FileError> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.path().is_dir() {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();

    let base = if request_path.ends_with('/') {
        request_path.to_owned()
    } else {
        format!("{request_path}/")
    };

    let mut page = String::with_capacity(256 + names.len() * 64);
    page.push_str("<!doctype html>\n<html>\n<head><title>");
    page.push_str(&html_escape(request_path));
    page.push_str("</title></head>\n<body>\n<h1>Index of ");
    page.push_str(&html_escape(request_path));
    page.push_str("</h1>\n<ul>\n");
    for name in &names {
        page.push_str("<li><a href=\"");
        page.push_str(&html_escape(&base));
        page.push_str(&html_escape(name));
        page.push_str("\">");
        page.push_str(&html_escape(name));
        page.push_str("</a></li>\n");
    }
    page.push_str("</ul>\n</body>\n</html>\n");
    Ok(page)
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn content_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        std_fs::write(dir.path().join("app.js"), "console.log(1);").expect("write");
        std_fs::create_dir(dir.path().join("docs")).expect("mkdir");
        std_fs::write(dir.path().join("docs/guide.md"), "# Guide").expect("write");
        dir
    }

    // Canonicalized root, matching what config::resolve_root produces.
    fn canonical(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().canonicalize().expect("canonicalize")
    }

    #[tokio::test]
    async fn test_load_file_with_content_type() {
        let dir = content_root();
        let (content, content_type) = load(&canonical(&dir), "/app.js").await.expect("load");
        assert_eq!(content, b"console.log(1);");
        assert_eq!(content_type, "application/javascript");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = content_root();
        let err = load(&canonical(&dir), "/missing.txt").await.unwrap_err();
        assert!(matches!(err, FileError::NotFound));
        assert_eq!(err.status(), 404);
    }

    #[tokio::test]
    async fn test_directory_listing() {
        let dir = content_root();
        let (content, content_type) = load(&canonical(&dir), "/").await.expect("load");
        let page = String::from_utf8(content).expect("utf8");
        assert_eq!(content_type, "text/html; charset=utf-8");
        assert!(page.contains("app.js"), "listing missing file: {page}");
        assert!(page.contains("docs/"), "listing missing dir: {page}");
    }

    #[tokio::test]
    async fn test_directory_index_file_preferred() {
        let dir = content_root();
        std_fs::write(dir.path().join("index.html"), "<p>home</p>").expect("write");
        let (content, content_type) = load(&canonical(&dir), "/").await.expect("load");
        assert_eq!(content, b"<p>home</p>");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_escape_rejected() {
        let dir = content_root();
        let outside = tempfile::tempdir().expect("tempdir");
        std_fs::write(outside.path().join("secret.txt"), "top secret").expect("write");
        std::os::unix::fs::symlink(outside.path().join("secret.txt"), dir.path().join("link.txt"))
            .expect("symlink");

        let err = load(&canonical(&dir), "/link.txt").await.unwrap_err();
        assert!(matches!(err, FileError::NotFound));
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(FileError::NotFound.status(), 404);
        assert_eq!(FileError::Io("denied".to_owned()).status(), 500);
    }

    #[test]
    fn test_io_error_classification() {
        let not_found = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(matches!(FileError::from(not_found), FileError::NotFound));

        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(FileError::from(denied), FileError::Io(_)));
    }
}
