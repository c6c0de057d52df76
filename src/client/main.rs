//! This client fetches the notes collection from the server and prints
//! a summary of it. An unreachable server is reported as a collection
//! of zero notes rather than as an error.
use std::path::Path;

use anyhow::{anyhow, Context};
use notedeck::{config::ClientConfig, notes::Note};
use tracing::debug;

/// Finds the location for this app's local configuration.
fn get_config_base_path() -> anyhow::Result<String> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        Ok(path)
    } else if let Some(home) = dirs::home_dir() {
        Ok(home
            .join(".config")
            .to_str()
            .ok_or_else(|| anyhow!("failed to find local config path"))?
            .to_owned())
    } else {
        Err(anyhow!("failed to find config file path"))
    }
}

/// Fetches the full notes collection from the configured endpoint.
fn fetch_notes(
    config: &ClientConfig,
    client: &reqwest::blocking::Client,
) -> anyhow::Result<Vec<Note>> {
    debug!("fetching notes from {}", config.api_url);

    let res = client
        .get(&config.api_url)
        .send()
        .context("request for notes failed")?;

    if res.status().is_success() {
        res.json::<Vec<Note>>()
            .context("failed to parse notes response")
    } else {
        Err(anyhow!("server answered with status {}", res.status()))
    }
}

fn main() -> anyhow::Result<()> {
    // setup logging
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("client=debug")
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global default")?;

    // determine the config file path
    let config_base_path = get_config_base_path().context("couldn't find the config base path")?;
    let config_file_path = Path::new(&config_base_path)
        .join("notedeck")
        .join("config.toml");

    debug!("config file path: {:?}", config_file_path);

    let config = ClientConfig::load(&config_file_path)?;

    // use the same http client for all requests
    let client = reqwest::blocking::Client::new();

    // A failed fetch is shown the same way the browser client shows an
    // unreachable server: zero notes.
    let notes = fetch_notes(&config, &client).unwrap_or_else(|err| {
        debug!("failed to fetch notes: {:#}", err);
        Vec::new()
    });

    println!("{} notes on server {}", notes.len(), config.api_url);

    for note in &notes {
        println!("{}: {}", note.id, note.content);
    }

    Ok(())
}
