//! Gleaner library crate for downloading the comments of a social-media post.
//!
//! The library logs in to the remote service, resolves a post URL to its
//! numeric identifier, pages through every comment with session-expiry
//! recovery, and writes the result as CSV, XLSX and JSON artifacts.

pub mod config;
pub mod downloader;
pub mod export;
pub mod instagram;
pub mod intake;
pub mod logging;
pub mod storage;
#[cfg(test)]
mod test_support;

pub use config::GleanerConfig;
pub use downloader::{CommentDownloader, DownloadReport};
pub use export::{CommentRecord, ExportPaths, ExportWriter};
pub use instagram::{
    CommentService, Credentials, HarvestError, InstagramGateway, PostId, PostLocator, Session,
};
pub use intake::{Authenticator, CollectorSettings, CommentCollector};
