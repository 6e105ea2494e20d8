//! Logger module
//!
//! Plain stdout/stderr logging helpers for the server binaries:
//! startup banner, access lines, warnings and errors.

use crate::server::ServeMode;
use chrono::Local;
use hyper::{Method, Uri};
use std::net::SocketAddr;
use std::path::Path;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, root: &Path, mode: ServeMode) {
    write_info("======================================");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Content root: {}", root.display()));
    let mode_name = match mode {
        ServeMode::Static => "static",
        ServeMode::Markdown => "markdown",
        ServeMode::SinglePage => "single page",
    };
    write_info(&format!("Serve mode: {mode_name}"));
    write_info("======================================\n");
}

/// Timestamped access line for an incoming request.
pub fn log_request(method: &Method, uri: &Uri) {
    write_info(&format!(
        "[{}] {} {}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
        method,
        uri
    ));
}

pub fn log_response(status: u16, body_bytes: usize) {
    write_info(&format!("  -> {status} ({body_bytes} bytes)"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}
