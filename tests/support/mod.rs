//! Shared test utilities.

use camino::Utf8PathBuf;
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Post URL used across scenarios.
pub const POST_URL: &str = "https://www.instagram.com/p/B-fKL9qpeab/";

/// Numeric id [`POST_URL`] decodes to.
pub const POST_ID: u64 = 2_278_584_739_065_882_267;

/// Request path of the comments endpoint for [`POST_ID`].
pub fn comments_path() -> String {
    format!("/media/{POST_ID}/comments/")
}

/// Mock API server plus the runtime that drives it.
///
/// The library client is blocking, so requests are issued from the test
/// thread while the server runs on the runtime's worker threads. The server
/// is declared first so it is dropped before its runtime.
pub struct MockApi {
    pub server: MockServer,
    pub runtime: Runtime,
}

impl MockApi {
    /// Starts a fresh server.
    ///
    /// # Panics
    ///
    /// Panics if the Tokio runtime cannot be created.
    pub fn start() -> Self {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    /// Mounts every mock on the server.
    pub fn mount(&self, mocks: Vec<Mock>) {
        for mock in mocks {
            self.runtime.block_on(mock.mount(&self.server));
        }
    }

    /// Checks that every mounted expectation was met.
    pub fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }
}

/// Creates a temporary directory and returns it with a UTF-8 output path
/// inside it.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created or is not UTF-8.
pub fn create_output_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new()
        .unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"));
    let root = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("temporary path is not UTF-8: {}", path.display()));
    (temp_dir, root.join("output"))
}

/// Builds `count` raw comments with ids starting at `first_id`.
pub fn create_mock_comments(first_id: u64, count: u64) -> Vec<Value> {
    (first_id..first_id + count)
        .map(|id| {
            json!({
                "pk": id,
                "user": { "pk": 10_000 + id, "username": format!("user{id}") },
                "text": format!("comment {id}"),
                "created_at_utc": 1_700_000_000 + id,
                "comment_like_count": 3
            })
        })
        .collect()
}

/// Builds a comments page body.
pub fn create_page_body(comments: Vec<Value>, next_min_id: Option<&str>) -> Value {
    json!({ "comments": comments, "next_min_id": next_min_id })
}

/// Builds the JSON error body the service sends on failures.
pub fn create_error_body(message: &str) -> Value {
    json!({ "message": message, "status": "fail" })
}
