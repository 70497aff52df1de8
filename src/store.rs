use crate::error::{Error, Result};
use crate::model::{Event, by_timestamp};
use chrono::NaiveDateTime;
use std::cmp::Ordering;

/// Events kept in ascending timestamp order.
///
/// Events sharing a timestamp keep their insertion order. Lookups by
/// timestamp use binary search over the sorted storage.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from events in any order.
    pub fn from_events(mut events: Vec<Event>) -> Self {
        events.sort_by(by_timestamp);
        Self { events }
    }

    /// Insert an event after every event with a timestamp not later than its own.
    pub fn insert(&mut self, event: Event) {
        let idx = self
            .events
            .partition_point(|other| by_timestamp(other, &event) != Ordering::Greater);
        self.events.insert(idx, event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get the earliest event.
    pub fn first(&self) -> Option<&Event> {
        self.events.first()
    }

    /// Get the latest event.
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Select the events whose timestamp lies within the given bounds.
    ///
    /// Both bounds are inclusive and either may be omitted, but not both.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if both bounds are missing or if
    /// `lower` is later than `upper`.
    pub fn select(
        &self,
        lower: Option<NaiveDateTime>,
        upper: Option<NaiveDateTime>,
    ) -> Result<&[Event]> {
        match (lower, upper) {
            (Some(lower), Some(upper)) => {
                if lower > upper {
                    return Err(Error::InvalidRange(format!(
                        "lower bound {lower} is later than upper bound {upper}"
                    )));
                }
                Ok(&self.events[self.lower_bound(lower)..self.upper_bound(upper)])
            }
            (Some(lower), None) => Ok(&self.events[self.lower_bound(lower)..]),
            (None, Some(upper)) => Ok(&self.events[..self.upper_bound(upper)]),
            (None, None) => Err(Error::InvalidRange(
                "at least one bound is required".to_string(),
            )),
        }
    }

    // Index of the first event not earlier than `timestamp`.
    fn lower_bound(&self, timestamp: NaiveDateTime) -> usize {
        self.events
            .partition_point(|event| event.timestamp() < timestamp)
    }

    // Index of the first event later than `timestamp`.
    fn upper_bound(&self, timestamp: NaiveDateTime) -> usize {
        self.events
            .partition_point(|event| event.timestamp() <= timestamp)
    }
}
