//! Recency ordering for the spreadsheet artifact.
//!
//! Records are sorted by `created_at` (newest first), then by `likes` (most
//! liked first). The sort is stable, so records equal on both keys keep their
//! collection order.

use std::cmp::Ordering;

use super::model::CommentRecord;

/// Sorts records newest first, breaking ties by like count (descending).
pub fn sort_by_recency(records: &mut [CommentRecord]) {
    records.sort_by(compare_by_recency);
}

fn compare_by_recency(a: &CommentRecord, b: &CommentRecord) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.likes.cmp(&a.likes))
}
