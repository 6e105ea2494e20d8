//! Plain static file server.
//!
//! Serves files verbatim from a configured content root; a direct wrapper
//! over the static file delegate.

use clap::Parser;
use mdserve::config::{self, StaticServerConfig};
use mdserve::logger;
use mdserve::server::{self, ServeMode, ServerContext};
use std::net::SocketAddr;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = StaticServerConfig::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger::log_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: StaticServerConfig) -> std::io::Result<()> {
    let root = config::resolve_root(&args.path)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    server::run(addr, ServerContext::new(root, ServeMode::Static)).await
}
