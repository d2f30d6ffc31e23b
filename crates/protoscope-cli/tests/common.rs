use protoscope_testing::{error, request, response, session, write_session_log};
use std::path::PathBuf;
use tempfile::TempDir;

/// A small recording with one coalescing run, one errored call, and one
/// still-pending call.
pub fn sample_session_log(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("session.jsonl");
    write_session_log(
        &path,
        &[
            session("2026-01-15T09:30:00Z", Some("checkout flow")),
            request(1, "Network", "getCookies", 0),
            request(2, "Network", "getCookies", 10),
            response(1, 15),
            response(2, 20),
            request(3, "DOM", "querySelector", 30),
            error(3, -32000, "node not found", 45),
            request(4, "Network", "loadResource", 60000),
        ],
    )
    .unwrap();
    path
}

pub fn empty_session_log(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("empty.jsonl");
    write_session_log(&path, &[]).unwrap();
    path
}
