//! Newline-delimited JSON event input.

use crate::error::{Error, Result};
use crate::model::Event;
use crate::store::EventStore;
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
};

/// Naive formats tried after RFC 3339.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Deserialize)]
struct EventLine {
    timestamp: String,
    duration: u64,
}

/// Read every event of an input file into a store.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::InputFormat`] on the first malformed line.
pub fn read_events<P: AsRef<Path>>(file: P) -> Result<EventStore> {
    let path = file.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let store = parse_events(BufReader::new(file), path)?;
    log::info!("read {} events from {path:?}", store.len());

    Ok(store)
}

/// Parse one event per line of `reader`.
///
/// Every line, blank ones included, must hold an event. `path` only names
/// the source in read errors.
pub fn parse_events<R: BufRead>(reader: R, path: &Path) -> Result<EventStore> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| match source.kind() {
            ErrorKind::InvalidData => Error::InputFormat {
                line: idx + 1,
                reason: source.to_string(),
            },
            _ => Error::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        events.push(parse_event(&line).map_err(|reason| Error::InputFormat {
            line: idx + 1,
            reason,
        })?);
    }
    Ok(EventStore::from_events(events))
}

fn parse_event(line: &str) -> std::result::Result<Event, String> {
    let EventLine {
        timestamp,
        duration,
    } = serde_json::from_str(line).map_err(|err| err.to_string())?;
    let timestamp = parse_timestamp(&timestamp)
        .ok_or_else(|| format!("unrecognized timestamp {timestamp:?}"))?;
    Ok(Event::new(timestamp, duration))
}

/// Parse a timestamp, converting zoned ones to UTC.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.naive_utc());
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}
