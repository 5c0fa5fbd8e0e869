pub mod file;

use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Calculator input piped on stdin, deserialised into the command's input type.
///
/// `None` when stdin is an interactive terminal or the pipe is empty, so the
/// caller can fall through to its usage error.
pub fn read_piped<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    tracing::debug!(bytes = trimmed.len(), "read calculator input from stdin");
    let parsed = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse stdin input: {e}"))?;
    Ok(Some(parsed))
}
