//! Event and output data types.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;

/// Timestamped delivery time measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    timestamp: NaiveDateTime,
    duration: u64,
}

impl Event {
    /// Create a new event observed at `timestamp` that took `duration`.
    pub fn new(timestamp: NaiveDateTime, duration: u64) -> Self {
        Self {
            timestamp,
            duration,
        }
    }

    /// Get the instant the event was observed.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Get the delivery time of the event.
    pub fn duration(&self) -> u64 {
        self.duration
    }
}

/// Order events by timestamp only, ignoring their duration.
pub fn by_timestamp(a: &Event, b: &Event) -> Ordering {
    a.timestamp.cmp(&b.timestamp)
}

/// Average delivery time of the window ending at `date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Average {
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDateTime,

    /// Always written as a JSON float, `0.0` for windows without events.
    pub average_delivery_time: f64,
}

fn serialize_date<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(date)
}
