//! End-to-end comment download for a single post.

use tracing::{error, info, warn};

use crate::export::{ExportPaths, ExportWriter};
use crate::instagram::{CommentService, HarvestError, PostId};
use crate::intake::{Authenticator, CollectorSettings, CommentCollector};

/// Outcome of a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    /// Identifier the post URL resolved to.
    pub post_id: PostId,
    /// Number of comments exported.
    pub comment_count: usize,
    /// Paths of the written artifacts.
    pub paths: ExportPaths,
}

/// Runs login, URL resolution, collection and export in sequence.
pub struct CommentDownloader<'client, S>
where
    S: CommentService,
{
    service: &'client S,
    authenticator: Authenticator<'client, S>,
    settings: CollectorSettings,
    writer: ExportWriter,
}

impl<'client, S> CommentDownloader<'client, S>
where
    S: CommentService,
{
    /// Creates a downloader from its collaborators.
    #[must_use]
    pub const fn new(
        service: &'client S,
        authenticator: Authenticator<'client, S>,
        settings: CollectorSettings,
        writer: ExportWriter,
    ) -> Self {
        Self {
            service,
            authenticator,
            settings,
            writer,
        }
    }

    /// Downloads every comment of the post at `post_url` and exports them.
    ///
    /// Nothing is written when the post has no comments.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::LoginFailed`] when no session could be opened,
    /// [`HarvestError::NoComments`] when collection produced nothing, the URL
    /// resolution error when `post_url` names no post, and
    /// [`HarvestError::Io`] when an artifact cannot be written.
    pub fn download(&self, post_url: &str) -> Result<DownloadReport, HarvestError> {
        let session = self.authenticator.login().ok_or(HarvestError::LoginFailed)?;
        let post_id = self.service.resolve_post_id(post_url)?;
        info!("Downloading comments for media ID: {post_id}");

        let collector = CommentCollector::new(self.service, &self.authenticator, self.settings);
        let records = collector.get_all_comments(session, &post_id);
        if records.is_empty() {
            return Err(HarvestError::NoComments);
        }

        let paths = self.writer.save_outputs(&records, post_id)?;
        Ok(DownloadReport {
            post_id,
            comment_count: records.len(),
            paths,
        })
    }

    /// Runs [`Self::download`] and reports success as a boolean.
    ///
    /// Every failure is logged; none propagates.
    pub fn download_comments(&self, post_url: &str) -> bool {
        match self.download(post_url) {
            Ok(report) => {
                info!(
                    "Saved {} comments for post {}:\n  CSV: {}\n  Excel: {}\n  JSON: {}",
                    report.comment_count,
                    report.post_id,
                    report.paths.csv,
                    report.paths.xlsx,
                    report.paths.json
                );
                true
            }
            Err(HarvestError::NoComments) => {
                warn!("No comments found");
                false
            }
            Err(failure) => {
                error!("Error downloading comments: {failure}");
                false
            }
        }
    }
}
