use std::fs;
use std::path::Path;

use protoscope_types::ProtocolMessage;

use crate::{Error, Result, SessionStore};

/// Replay a JSONL session log into a store.
///
/// One `ProtocolMessage` per line, blank lines skipped. Parse and replay
/// failures carry the 1-based line number.
pub fn load_session(path: &Path) -> Result<SessionStore> {
    let contents = fs::read_to_string(path)?;
    parse_session(&contents)
}

/// Replay session log contents already in memory.
pub fn parse_session(contents: &str) -> Result<SessionStore> {
    let mut store = SessionStore::new();

    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let message: ProtocolMessage =
            serde_json::from_str(line).map_err(|source| Error::Parse {
                line: idx + 1,
                source,
            })?;

        store.apply(message).map_err(|err| err.at_line(idx + 1))?;
    }

    Ok(store)
}
