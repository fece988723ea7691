//! Gleaner CLI entrypoint for downloading a post's comments.
//!
//! The process always exits with status 0; the outcome is reported on
//! stdout.

use std::io::{self, Write};
use std::process::ExitCode;

use gleaner::config::load_dotenv;
use gleaner::{
    Authenticator, CommentDownloader, ExportWriter, GleanerConfig, HarvestError, InstagramGateway,
    logging,
};
use ortho_config::OrthoConfig;
use tracing::{debug, error};

const SUCCESS_MESSAGE: &str = "Successfully downloaded all comments!";
const FAILURE_MESSAGE: &str = "Failed to download comments";

fn main() -> ExitCode {
    let message = if run() {
        SUCCESS_MESSAGE
    } else {
        FAILURE_MESSAGE
    };
    if let Err(failure) = writeln!(io::stdout().lock(), "{message}") {
        error!("failed to write to stdout: {failure}");
    }
    ExitCode::SUCCESS
}

fn run() -> bool {
    let dotenv = match load_dotenv() {
        Ok(dotenv) => dotenv,
        Err(failure) => {
            report_before_logging(&failure);
            return false;
        }
    };
    let config = match load_config() {
        Ok(config) => config,
        Err(failure) => {
            report_before_logging(&failure);
            return false;
        }
    };
    if let Err(failure) = logging::init(config.log_file()) {
        report_before_logging(&failure);
        return false;
    }
    if let Some(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    match download(&config) {
        Ok(succeeded) => succeeded,
        Err(failure) => {
            error!("{failure}");
            false
        }
    }
}

fn download(config: &GleanerConfig) -> Result<bool, HarvestError> {
    let post_url = config.require_post_url()?;
    let gateway = InstagramGateway::new(config.api_base.clone(), config.request_timeout())?;
    let authenticator = Authenticator::new(
        &gateway,
        config.resolve_username(),
        config.resolve_password(),
    );
    let downloader = CommentDownloader::new(
        &gateway,
        authenticator,
        config.collector_settings(),
        ExportWriter::new(config.output_dir()),
    );

    Ok(downloader.download_comments(&post_url))
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`HarvestError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<GleanerConfig, HarvestError> {
    GleanerConfig::load().map_err(|error| HarvestError::Configuration {
        message: error.to_string(),
    })
}

/// Writes an error to stderr when no subscriber is installed yet.
fn report_before_logging(failure: &HarvestError) {
    // Nothing else can be done if stderr is gone.
    drop(writeln!(io::stderr().lock(), "{failure}"));
}
