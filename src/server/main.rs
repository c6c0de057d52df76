//! This server exposes a static collection of notes over HTTP. The
//! collection is loaded from a JSON file once at startup and never
//! changes for the lifetime of the process.
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use notedeck::{config::ServerConfig, notes::store::NotesFile, router, state::AppState};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // setup logging
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("server=debug,notedeck=debug")
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global default")?;

    let config = ServerConfig::from_env()?;

    // The backing file must load before the port is opened. A missing
    // or malformed file aborts startup.
    let notes = match NotesFile::load(&config.notes_file) {
        Ok(notes) => notes,
        Err(err) => {
            error!("failed to load notes from {:?}: {}", config.notes_file, err);
            std::process::exit(1);
        }
    };

    info!(
        "serving {} notes from {:?}",
        notes.len(),
        config.notes_file
    );

    let state = Arc::new(AppState::new(notes));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on port {}", config.port);

    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await
        .context("server stopped unexpectedly")?;

    Ok(())
}
