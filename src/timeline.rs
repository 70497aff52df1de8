use crate::error::{Error, Result};
use chrono::{NaiveDateTime, TimeDelta, Timelike};
use std::ops::Deref;

/// One timestamp per whole minute, in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct MinuteTimeline {
    minutes: Vec<NaiveDateTime>,
}

impl MinuteTimeline {
    /// Cover every minute touched by the range from `start` to `end`.
    ///
    /// The first entry is `start` floored to its minute and the last is
    /// `end` rounded up to the following minute.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `start` is later than `end`.
    pub fn spanning(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange(format!(
                "start {start} is later than end {end}"
            )));
        }
        Self::between(floor_minute(start)?, ceil_minute(end)?)
    }

    /// Every minute from `first` to `last`, both included.
    ///
    /// Both ends must already be aligned to whole minutes.
    pub fn between(first: NaiveDateTime, last: NaiveDateTime) -> Result<Self> {
        if first > last {
            return Err(Error::InvalidRange(format!(
                "first minute {first} is later than last minute {last}"
            )));
        }

        let n_minutes = (last - first).num_minutes() + 1;
        let minutes = (0..n_minutes)
            .map(|idx| first + TimeDelta::minutes(idx))
            .collect();

        Ok(Self { minutes })
    }

    pub fn first(&self) -> NaiveDateTime {
        self.minutes[0]
    }

    pub fn last(&self) -> NaiveDateTime {
        self.minutes[self.minutes.len() - 1]
    }
}

impl Deref for MinuteTimeline {
    type Target = [NaiveDateTime];

    fn deref(&self) -> &Self::Target {
        &self.minutes
    }
}

/// Truncate `timestamp` to the start of its minute.
pub fn floor_minute(timestamp: NaiveDateTime) -> Result<NaiveDateTime> {
    timestamp
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .ok_or_else(|| Error::InvalidRange(format!("cannot truncate {timestamp} to its minute")))
}

/// Start of the minute following the one `timestamp` falls in.
pub fn ceil_minute(timestamp: NaiveDateTime) -> Result<NaiveDateTime> {
    let next = timestamp
        .checked_add_signed(TimeDelta::minutes(1))
        .ok_or_else(|| Error::InvalidRange(format!("{timestamp} is out of range")))?;
    floor_minute(next)
}
