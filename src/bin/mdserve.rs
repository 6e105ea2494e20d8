//! Markdown-aware static content server.
//!
//! Serves a directory tree, rendering `.md` resources to HTML unless a
//! `raw` query parameter is present. `--single` switches to single-page
//! mode where every extensionless path returns `index.html`.

use clap::Parser;
use mdserve::config::{self, MarkdownServerConfig};
use mdserve::logger;
use mdserve::server::{self, ServeMode, ServerContext};
use std::net::SocketAddr;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = MarkdownServerConfig::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger::log_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: MarkdownServerConfig) -> std::io::Result<()> {
    let root = config::resolve_root(&args.path)?;
    let mode = if args.single {
        config::check_single_page_index(&root)?;
        ServeMode::SinglePage
    } else {
        ServeMode::Markdown
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    server::run(addr, ServerContext::new(root, mode)).await
}
