//! Server bootstrap
//!
//! Listener creation and the accept loop. Each connection is served by its
//! own spawned task; handlers are stateless and share only the immutable
//! `ServerContext`.

use crate::handler;
use crate::logger;
use crate::template::PageTemplate;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

/// Request handling strategy, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeMode {
    /// Serve every path verbatim from the content root.
    Static,
    /// Render `.md` paths to HTML, serve everything else verbatim.
    Markdown,
    /// Serve `index.html` for every extensionless path.
    SinglePage,
}

/// Immutable per-process state injected into the dispatcher.
#[derive(Debug)]
pub struct ServerContext {
    /// Canonical content root; trust boundary for all file access.
    pub root: PathBuf,
    pub mode: ServeMode,
    pub template: PageTemplate,
    pub access_log: bool,
}

impl ServerContext {
    pub fn new(root: PathBuf, mode: ServeMode) -> Self {
        Self {
            root,
            mode,
            template: PageTemplate::new(),
            access_log: true,
        }
    }
}

/// Run the server until the process exits.
///
/// Binding the listener is the only fatal failure; accept and connection
/// errors are logged and the loop continues.
pub async fn run(addr: SocketAddr, ctx: ServerContext) -> std::io::Result<()> {
    let listener = create_listener(addr)?;
    logger::log_server_start(&addr, &ctx.root, ctx.mode);

    let ctx = Arc::new(ctx);
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => handle_connection(stream, Arc::clone(&ctx)),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}

/// Serve a single connection in a spawned task.
fn handle_connection(stream: TcpStream, ctx: Arc<ServerContext>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let ctx = Arc::clone(&ctx);
                async move { handler::handle_request(req, ctx).await }
            }),
        );

        // A client disconnecting mid-response lands here; log and move on.
        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Create a `TcpListener` with `SO_REUSEADDR` enabled.
///
/// Allows rebinding the port while the previous socket is in TIME_WAIT.
fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
