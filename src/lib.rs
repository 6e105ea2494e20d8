//! Markdown-aware static content serving.
//!
//! Library shared by the two server binaries: `staticd` serves a directory
//! tree verbatim, `mdserve` additionally renders `.md` resources to HTML
//! (or serves a single-page index in `--single` mode).

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod markdown;
pub mod server;
pub mod template;
