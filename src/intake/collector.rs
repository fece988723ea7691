//! Paginated comment collection with session-expiry recovery.

use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::export::CommentRecord;
use crate::instagram::{CommentPage, CommentService, Cursor, PostId, Session};

use super::authenticator::Authenticator;

/// Progress is logged every this many collected comments.
const PROGRESS_INTERVAL: usize = 100;

/// Pacing and retry limits for a collection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorSettings {
    /// Pause after each collected comment.
    pub comment_delay: Duration,
    /// Pause after re-authenticating on session expiry.
    pub retry_delay: Duration,
    /// Session expiries tolerated per run; reaching it stops collection.
    pub max_retries: u32,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            comment_delay: Duration::from_millis(500),
            retry_delay: Duration::from_secs(2),
            max_retries: 3,
        }
    }
}

impl CollectorSettings {
    /// Default limits with both pauses disabled.
    #[must_use]
    pub fn without_delays() -> Self {
        Self {
            comment_delay: Duration::ZERO,
            retry_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Mutable state of one collection run.
struct CollectionSession {
    session: Session,
    records: Vec<CommentRecord>,
    seen: HashSet<String>,
    cursor: Option<Cursor>,
    retries: u32,
}

impl CollectionSession {
    fn new(session: Session) -> Self {
        Self {
            session,
            records: Vec::new(),
            seen: HashSet::new(),
            cursor: None,
            retries: 0,
        }
    }
}

enum Step {
    Continue,
    Done,
}

/// Walks every page of a post's comments.
pub struct CommentCollector<'client, S>
where
    S: CommentService,
{
    service: &'client S,
    authenticator: &'client Authenticator<'client, S>,
    settings: CollectorSettings,
}

impl<'client, S> CommentCollector<'client, S>
where
    S: CommentService,
{
    /// Creates a collector that re-authenticates through `authenticator`.
    #[must_use]
    pub const fn new(
        service: &'client S,
        authenticator: &'client Authenticator<'client, S>,
        settings: CollectorSettings,
    ) -> Self {
        Self {
            service,
            authenticator,
            settings,
        }
    }

    /// Collects every comment of `post_id`, in the order the service returns
    /// them.
    ///
    /// Never fails: on an unrecoverable error the comments gathered so far
    /// are returned. A comment id already seen in this run is skipped.
    pub fn get_all_comments(&self, session: Session, post_id: &PostId) -> Vec<CommentRecord> {
        let mut state = CollectionSession::new(session);

        loop {
            let fetched = self.service.fetch_comments_page(
                &state.session,
                post_id,
                state.cursor.clone(),
            );
            let step = match fetched {
                Ok(page) => self.absorb_page(&mut state, page),
                Err(failure) if failure.is_session_expired() => self.recover_session(&mut state),
                Err(failure) => {
                    error!("Error getting comments: {failure}");
                    Step::Done
                }
            };
            if matches!(step, Step::Done) {
                break;
            }
        }

        state.records
    }

    fn absorb_page(&self, state: &mut CollectionSession, page: CommentPage) -> Step {
        let CommentPage {
            comments,
            next_cursor,
        } = page;

        for raw in comments {
            if state.seen.contains(&raw.comment_id) {
                continue;
            }
            let record = match CommentRecord::try_from(raw) {
                Ok(record) => record,
                Err(failure) => {
                    error!("Error getting comments: {failure}");
                    return Step::Done;
                }
            };
            state.seen.insert(record.comment_id.clone());
            state.records.push(record);

            if state.records.len().is_multiple_of(PROGRESS_INTERVAL) {
                info!("Downloaded {} comments...", state.records.len());
            }
            pause(self.settings.comment_delay);
        }

        match next_cursor {
            Some(cursor) => {
                state.cursor = Some(cursor);
                Step::Continue
            }
            None => Step::Done,
        }
    }

    fn recover_session(&self, state: &mut CollectionSession) -> Step {
        state.retries += 1;
        if state.retries >= self.settings.max_retries {
            error!("Max retries reached - failed to get comments");
            return Step::Done;
        }

        warn!(
            "Session expired, retrying {}/{}...",
            state.retries, self.settings.max_retries
        );
        match self.authenticator.login() {
            Some(session) => state.session = session,
            None => warn!("Re-authentication failed; retrying with the previous session"),
        }
        pause(self.settings.retry_delay);
        Step::Continue
    }
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
