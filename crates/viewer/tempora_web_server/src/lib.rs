//! Serves the clock dashboard: static files from a public directory, plus a small JSON API
//! backed by [`tempora_clock`].
//!
//! The dashboard never does clock arithmetic itself; it asks the API.

mod api;
mod files;
mod reply;

use std::fmt::Display;
use std::io::Read as _;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use tempora_clock::ClockBoard;
use tempora_log::ResultExt as _;

use self::files::PublicDir;
use self::reply::Reply;

pub const DEFAULT_WEB_SERVER_PORT: u16 = 4000;

/// API request bodies are cut off after this many bytes.
pub const MAX_API_BODY_BYTES: u64 = 64 * 1024;

/// The dashboard that ships with this crate.
pub const DEFAULT_PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// Failure to host the dashboard.
#[derive(thiserror::Error, Debug)]
pub enum WebServerError {
    #[error("Could not parse address: {0}")]
    AddrParseFailed(#[from] std::net::AddrParseError),

    #[error("Failed to create server at address {0}: {1}")]
    CreateServerFailed(String, Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("Public directory {path:?} is not accessible: {source}")]
    PublicDirMissing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Public directory {0:?} is not a directory")]
    PublicDirNotADirectory(PathBuf),
}

// ----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Typed port for use with [`WebServer`]
pub struct WebServerPort(pub u16);

impl WebServerPort {
    /// Port to use with [`WebServer::new`] when you want the OS to pick a port for you.
    ///
    /// This is defined as `0`.
    pub const AUTO: Self = Self(0);
}

impl Default for WebServerPort {
    fn default() -> Self {
        Self(DEFAULT_WEB_SERVER_PORT)
    }
}

impl Display for WebServerPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Needed for clap
impl FromStr for WebServerPort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u16>() {
            Ok(port) => Ok(Self(port)),
            Err(err) => Err(format!("Failed to parse port: {err}")),
        }
    }
}

/// HTTP host for the clock dashboard.
///
/// Owns the [`ClockBoard`] the dashboard edits through the API.
#[must_use = "Dropping this means stopping the server"]
pub struct WebServer {
    inner: Arc<WebServerInner>,
    thread_handle: Option<std::thread::JoinHandle<()>>,
}

struct WebServerInner {
    server: tiny_http::Server,
    shutdown: AtomicBool,
    num_requests: AtomicU64,
    public_dir: PublicDir,
    board: Mutex<ClockBoard>,
}

impl WebServer {
    /// Create a new [`WebServer`] serving `public_dir` on the given port.
    ///
    /// [`WebServerPort::AUTO`] will tell the OS choose any free port.
    ///
    /// The server will immediately start listening for incoming connections
    /// and stop doing so when the returned [`WebServer`] is dropped.
    ///
    /// ## Example
    /// ``` no_run
    /// # use tempora_web_server::{WebServer, WebServerPort, WebServerError, DEFAULT_PUBLIC_DIR};
    /// # fn example() -> Result<(), WebServerError> {
    /// let server = WebServer::new("0.0.0.0", WebServerPort::AUTO, DEFAULT_PUBLIC_DIR)?;
    /// let server_url = server.server_url();
    /// # Ok(()) }
    /// ```
    pub fn new(
        bind_ip: &str,
        port: WebServerPort,
        public_dir: impl AsRef<Path>,
    ) -> Result<Self, WebServerError> {
        let public_dir = PublicDir::new(public_dir.as_ref())?;
        let bind_addr = std::net::SocketAddr::new(bind_ip.parse()?, port.0);

        let server = tiny_http::Server::http(bind_addr)
            .map_err(|err| WebServerError::CreateServerFailed(bind_addr.to_string(), err))?;

        let inner = Arc::new(WebServerInner {
            server,
            shutdown: AtomicBool::new(false),
            num_requests: Default::default(),
            public_dir,
            board: Mutex::new(ClockBoard::town_square()),
        });

        let inner_copy = inner.clone();

        // A single thread is plenty for a handful of small files and tiny JSON bodies.
        let thread_handle = std::thread::Builder::new()
            .name("tempora_web_server".to_owned())
            .spawn(move || inner_copy.serve())
            .ok();

        tempora_log::debug!("Serving {:?} on {bind_addr}", inner.public_dir.root());

        Ok(Self {
            inner,
            thread_handle,
        })
    }

    /// Includes `http://` prefix
    pub fn server_url(&self) -> String {
        let local_addr = self.inner.server.server_addr();
        match local_addr.clone().to_ip() {
            Some(addr) if addr.ip().is_unspecified() => {
                format!("http://127.0.0.1:{}", addr.port())
            }
            _ => format!("http://{local_addr}"),
        }
    }

    /// The directory files are served from, fully resolved.
    pub fn public_dir(&self) -> &Path {
        self.inner.public_dir.root()
    }

    /// Blocks execution as long as the server is running.
    ///
    /// There's no way of shutting the server down from the outside right now.
    pub fn block(mut self) {
        if let Some(thread_handle) = self.thread_handle.take() {
            thread_handle.join().ok();
        }
    }

    /// Keeps the server running until the parent process shuts down.
    pub fn detach(mut self) {
        if let Some(thread_handle) = self.thread_handle.take() {
            // dropping the thread handle detaches the thread.
            drop(thread_handle);
        }
    }
}

impl Drop for WebServer {
    fn drop(&mut self) {
        if let Some(thread_handle) = self.thread_handle.take() {
            let num_requests = self.inner.num_requests.load(Ordering::Relaxed);
            tempora_log::debug!("Shutting down web server after {num_requests} request(s)");

            self.inner.shutdown.store(true, Ordering::Release);
            self.inner.server.unblock();
            thread_handle.join().ok();
        }
    }
}

impl WebServerInner {
    fn serve(&self) {
        loop {
            let request = self.server.recv();
            if self.shutdown.load(Ordering::Acquire) {
                return;
            }

            let Some(request) = request.warn_on_err_once("Failed to receive request") else {
                continue;
            };

            self.send_response(request).ok_or_log_error();
        }
    }

    fn send_response(&self, mut request: tiny_http::Request) -> Result<(), std::io::Error> {
        self.num_requests.fetch_add(1, Ordering::Relaxed);

        // Strip arguments from url so we get the actual path.
        let url = request.url().to_owned();
        let path = url.split('?').next().unwrap_or(&url);
        let method = request.method().clone();

        let reply = if let Some(endpoint) = path.strip_prefix("/api/") {
            let mut body = Vec::new();
            request
                .as_reader()
                .take(MAX_API_BODY_BYTES + 1)
                .read_to_end(&mut body)?;
            if body.len() as u64 > MAX_API_BODY_BYTES {
                Reply::text(413, "Payload Too Large")
            } else {
                api::handle(&self.board, &method, endpoint, &body)
            }
        } else if matches!(method, tiny_http::Method::Get | tiny_http::Method::Head) {
            self.public_dir.serve(path)
        } else {
            Reply::text(405, "Method Not Allowed")
        };

        tempora_log::debug!("{method} {path} -> {}", reply.status());

        request.respond(reply.into_response())
    }
}
