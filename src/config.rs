//! Command line configuration.
//!
//! Each binary carries its own flag set; both resolve the content root the
//! same way. The root is canonicalized once at startup and is immutable for
//! the process lifetime.

use clap::Parser;
use std::path::{Path, PathBuf};

/// Flags for the markdown-aware server (`mdserve`).
#[derive(Debug, Clone, Parser)]
#[command(name = "mdserve", version, about = "Markdown-aware static content server")]
pub struct MarkdownServerConfig {
    /// Port number
    #[arg(long, default_value_t = 9000)]
    pub port: u16,

    /// Content path
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Serve a single page site (eg. react-router): every extensionless
    /// path returns index.html. Markdown rendering is unavailable.
    #[arg(long)]
    pub single: bool,
}

/// Flags for the verbatim static server (`staticd`).
#[derive(Debug, Clone, Parser)]
#[command(name = "staticd", version, about = "Plain static file server")]
pub struct StaticServerConfig {
    /// Port number
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Content path
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

/// Resolve and validate the content root.
///
/// The root must exist and be a directory; the returned path is absolute.
pub fn resolve_root(path: &Path) -> std::io::Result<PathBuf> {
    let root = path.canonicalize()?;
    if !root.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            format!("content path is not a directory: {}", root.display()),
        ));
    }
    Ok(root)
}

/// Additional startup check for single-page mode: the fallback document
/// must exist directly inside the root.
pub fn check_single_page_index(root: &Path) -> std::io::Result<()> {
    let index = root.join("index.html");
    if !index.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("single page mode requires {}", index.display()),
        ));
    }
    Ok(())
}
