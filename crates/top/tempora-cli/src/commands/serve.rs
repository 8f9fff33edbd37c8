use std::path::PathBuf;

use anyhow::Context as _;
use tempora_web_server::{DEFAULT_PUBLIC_DIR, WebServer, WebServerPort};

#[derive(Debug, Clone, clap::Parser)]
pub struct ServeCommand {
    /// What IP address to bind to.
    #[clap(long, default_value = "0.0.0.0")]
    bind: String,

    /// What port to listen on. `0` lets the OS pick.
    #[clap(long, env = "PORT", default_value_t = WebServerPort::default())]
    port: WebServerPort,

    /// Directory to serve. Defaults to the dashboard that ships with `tempora`.
    #[clap(long, env = "TEMPORA_PUBLIC_DIR", default_value = DEFAULT_PUBLIC_DIR)]
    public_dir: PathBuf,
}

impl ServeCommand {
    pub fn run(self) -> anyhow::Result<()> {
        let Self {
            bind,
            port,
            public_dir,
        } = self;

        let server = WebServer::new(&bind, port, &public_dir)
            .with_context(|| format!("serving {public_dir:?} on {bind}:{port}"))?;

        println!("🕐 Tempora Clock Synchronization Web Server");
        println!("==========================================");
        println!("🚀 Server running at {}", server.server_url());
        println!("📁 Serving files from: {}", server.public_dir().display());
        println!("⌨️  Press Ctrl+C to stop the server");

        tempora_log::info!("Hosting the clock dashboard at {}", server.server_url());
        server.block();

        Ok(())
    }
}
