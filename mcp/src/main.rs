//! rxlab-mcp — stdio entry point.
//!
//! Reads one JSON-RPC message per line from stdin and writes responses to
//! stdout. Logs go to stderr (controlled by `RUST_LOG`), keeping stdout
//! clean for the protocol.

use std::io::{self, BufRead, Write};

use rxlab_mcp::LabServer;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "rxlab-mcp starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut server = LabServer::new();

    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(response) = server.handle_line(&line) {
            let mut out = stdout.lock();
            writeln!(out, "{response}")?;
            out.flush()?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}
