//! Configuration for the server and client binaries.
use std::path::Path;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};

/// The port the server listens on when PORT is unset.
const DEFAULT_PORT: u16 = 5000;

/// The backing file the server loads when NOTES_FILE is unset,
/// relative to the working directory.
const DEFAULT_NOTES_FILE: &str = "db.json";

/// The endpoint the client fetches when no configuration supplies one.
const DEFAULT_API_URL: &str = "http://localhost:5000/api/notes";

/// Runtime configuration for the server binary, read from the
/// environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The port to bind the listening socket to.
    pub port: u16,
    /// The path of the static backing file.
    pub notes_file: String,
}

impl ServerConfig {
    /// Reads the server configuration from the PORT and NOTES_FILE
    /// environment variables, falling back to the defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT is not a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };
        let notes_file =
            std::env::var("NOTES_FILE").unwrap_or_else(|_| DEFAULT_NOTES_FILE.to_owned());

        Ok(ServerConfig { port, notes_file })
    }
}

/// Configuration for the client binary.
///
/// Loaded once in main and passed explicitly to the code that performs
/// requests, rather than being read from a process-wide global.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// The full URL of the notes endpoint.
    pub api_url: String,
}

impl ClientConfig {
    /// Loads the client configuration from an optional TOML file, with
    /// NOTEDECK_-prefixed environment variables taking precedence over
    /// the file and the built-in default.
    pub fn load(config_file_path: &Path) -> anyhow::Result<Self> {
        let config = Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .add_source(
                File::from(config_file_path.to_owned())
                    .required(false)
                    .format(FileFormat::Toml),
            )
            .add_source(Environment::with_prefix("NOTEDECK"))
            .build()
            .context("failed to load config file")?;
        let api_url = config
            .get::<String>("api_url")
            .context("property 'api_url' not found in config")?;

        Ok(ClientConfig { api_url })
    }
}
