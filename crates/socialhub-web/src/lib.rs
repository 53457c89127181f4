//! socialhub-web - HTTP frontend for socialhub using Axum

pub mod api;
pub mod gate;
pub mod router;
pub mod sse;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server
pub async fn run(state: AppState, host: &str, port: u16) -> Result<()> {
    let router = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Web server listening on http://{}", addr);
    println!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
