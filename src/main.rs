//! Snippetbox server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request_logging ──▶ secure_headers ──▶ route table
//!                                                               │
//!                          ┌────────────────────────────────────┤
//!                          ▼                                    ▼
//!                   handlers (method check,              /static/* ServeDir
//!                   query/form parsing)
//!                          │
//!                          ▼
//!                  SnippetRepository ──▶ SQLite pool (sqlx)
//!                          │
//!                          ▼
//!                  Renderer (maud) ──▶ Response
//! ```

use std::path::PathBuf;

use clap::Parser;

use snippetbox::config::{resolve_config, Overrides};
use snippetbox::lifecycle;
use snippetbox::observability::init_logging;

/// Snippetbox - share short text snippets that expire.
#[derive(Parser, Debug)]
#[command(name = "snippetbox")]
#[command(about = "Serve and store expiring text snippets", long_about = None)]
struct Args {
    /// Path to a TOML config file (optional).
    #[arg(short, long, env = "SNIPPETBOX_CONFIG")]
    config: Option<PathBuf>,

    /// HTTP network address, e.g. ":4000" or "127.0.0.1:4000".
    #[arg(long)]
    addr: Option<String>,

    /// sqlx SQLite URL for the snippet store.
    #[arg(long, env = "SNIPPETBOX_DSN")]
    dsn: Option<String>,

    /// Directory served under /static/.
    #[arg(long)]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(
        args.config.as_deref(),
        Overrides {
            bind_address: args.addr,
            database_url: args.dsn,
            static_dir: args.static_dir,
        },
    )?;

    init_logging(&config.observability);

    tracing::info!("snippetbox v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        database_url = %config.database.url,
        "Configuration loaded"
    );

    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
