//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.gleaner.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GLEANER_*`, with `ACCOUNT_USERNAME`,
//!    `ACCOUNT_PASSWORD` and `TARGET_POST_URL` accepted as fallbacks. A
//!    `.env` file is read first by [`load_dotenv`]; variables already set in
//!    the process environment are not overridden
//! 4. **Command-line arguments** – `--username`/`-u`, `--password`/`-p`,
//!    `--post-url`/`-l`, `--output-dir`/`-o`
//!
//! # Configuration File
//!
//! ```toml
//! username = "alice"
//! password = "hunter2"
//! post_url = "https://www.instagram.com/p/B-fKL9qpeab/"
//! output_dir = "output"
//! log_file = "gleaner.log"
//! comment_delay_ms = 500
//! ```

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_OUTPUT_DIR;
use crate::instagram::{DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT, HarvestError};
use crate::intake::CollectorSettings;

/// Fallback environment variable for the account username.
pub const USERNAME_ENV: &str = "ACCOUNT_USERNAME";
/// Fallback environment variable for the account password.
pub const PASSWORD_ENV: &str = "ACCOUNT_PASSWORD";
/// Fallback environment variable for the target post URL.
pub const POST_URL_ENV: &str = "TARGET_POST_URL";

/// Default log file path.
pub const DEFAULT_LOG_FILE: &str = "gleaner.log";

const DEFAULT_COMMENT_DELAY_MS: u64 = 500;
const DEFAULT_RETRY_DELAY_MS: u64 = 2_000;
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Application configuration supporting CLI, environment, and file sources.
///
/// `Debug` output redacts the password.
#[derive(Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GLEANER",
    discovery(
        dotfile_name = ".gleaner.toml",
        config_file_name = "gleaner.toml",
        app_name = "gleaner"
    )
)]
pub struct GleanerConfig {
    /// Account username.
    ///
    /// Can be provided via:
    /// - CLI: `--username <NAME>` or `-u <NAME>`
    /// - Environment: `GLEANER_USERNAME` or `ACCOUNT_USERNAME`
    /// - Config file: `username = "..."`
    #[ortho_config(cli_short = 'u')]
    pub username: Option<String>,

    /// Account password.
    ///
    /// Can be provided via:
    /// - CLI: `--password <SECRET>` or `-p <SECRET>`
    /// - Environment: `GLEANER_PASSWORD` or `ACCOUNT_PASSWORD`
    /// - Config file: `password = "..."`
    #[ortho_config(cli_short = 'p')]
    pub password: Option<String>,

    /// URL of the post whose comments are downloaded.
    ///
    /// Can be provided via:
    /// - CLI: `--post-url <URL>` or `-l <URL>`
    /// - Environment: `GLEANER_POST_URL` or `TARGET_POST_URL`
    /// - Config file: `post_url = "..."`
    #[ortho_config(cli_short = 'l')]
    pub post_url: Option<String>,

    /// Directory the artifacts are written to. Defaults to `output`.
    #[ortho_config(cli_short = 'o')]
    pub output_dir: String,

    /// Base URL of the remote API.
    #[ortho_config()]
    pub api_base: String,

    /// File that log lines are appended to, alongside the console.
    #[ortho_config()]
    pub log_file: String,

    /// Pause after each collected comment, in milliseconds.
    #[ortho_config()]
    pub comment_delay_ms: u64,

    /// Pause after re-authenticating on session expiry, in milliseconds.
    #[ortho_config()]
    pub retry_delay_ms: u64,

    /// Session expiries tolerated in one run.
    #[ortho_config()]
    pub max_retries: u32,

    /// HTTP request timeout, in seconds.
    #[ortho_config()]
    pub request_timeout_secs: u64,
}

impl Default for GleanerConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            post_url: None,
            output_dir: DEFAULT_OUTPUT_DIR.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
            log_file: DEFAULT_LOG_FILE.to_owned(),
            comment_delay_ms: DEFAULT_COMMENT_DELAY_MS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            max_retries: DEFAULT_MAX_RETRIES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }
}

impl fmt::Debug for GleanerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GleanerConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("post_url", &self.post_url)
            .field("output_dir", &self.output_dir)
            .field("api_base", &self.api_base)
            .field("log_file", &self.log_file)
            .field("comment_delay_ms", &self.comment_delay_ms)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("max_retries", &self.max_retries)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl GleanerConfig {
    /// Resolves the username from configuration or `ACCOUNT_USERNAME`.
    #[must_use]
    pub fn resolve_username(&self) -> Option<String> {
        self.username
            .clone()
            .or_else(|| env::var(USERNAME_ENV).ok())
    }

    /// Resolves the password from configuration or `ACCOUNT_PASSWORD`.
    #[must_use]
    pub fn resolve_password(&self) -> Option<String> {
        self.password
            .clone()
            .or_else(|| env::var(PASSWORD_ENV).ok())
    }

    /// Returns the post URL, falling back to `TARGET_POST_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::MissingPostUrl`] when no source provides a
    /// non-blank URL.
    pub fn require_post_url(&self) -> Result<String, HarvestError> {
        self.post_url
            .clone()
            .or_else(|| env::var(POST_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
            .ok_or(HarvestError::MissingPostUrl)
    }

    /// Pacing and retry limits for the collector.
    #[must_use]
    pub const fn collector_settings(&self) -> CollectorSettings {
        CollectorSettings {
            comment_delay: Duration::from_millis(self.comment_delay_ms),
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            max_retries: self.max_retries,
        }
    }

    /// HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Directory the artifacts are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Utf8Path {
        Utf8Path::new(&self.output_dir)
    }

    /// Path of the log file.
    #[must_use]
    pub fn log_file(&self) -> &Utf8Path {
        Utf8Path::new(&self.log_file)
    }
}

/// Loads variables from the nearest `.env` file, searching the current
/// directory and its parents.
///
/// Returns the path of the loaded file, or `None` when there is none.
///
/// # Errors
///
/// Returns [`HarvestError::Configuration`] when a `.env` file exists but
/// cannot be read or parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>, HarvestError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(error) if error.not_found() => Ok(None),
        Err(error) => Err(dotenv_error(&error)),
    }
}

/// Loads variables from the `.env`-formatted file at `path`.
///
/// # Errors
///
/// Returns [`HarvestError::Configuration`] when the file cannot be read or
/// parsed.
pub fn load_dotenv_from(path: &Path) -> Result<(), HarvestError> {
    dotenvy::from_path(path).map_err(|error| dotenv_error(&error))
}

fn dotenv_error(error: &dotenvy::Error) -> HarvestError {
    HarvestError::Configuration {
        message: format!("failed to load .env file: {error}"),
    }
}

#[cfg(test)]
mod tests;
