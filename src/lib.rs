//! Per-minute moving averages of event durations.
//!
//! Events are loaded into an [`EventStore`], the minutes they span are laid
//! out on a [`MinuteTimeline`], and every minute anchors a sliding window
//! whose events are averaged by [`moving_averages`].

pub mod average;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod store;
pub mod timeline;
pub mod window;

pub use average::moving_averages;
pub use error::{Error, Result};
pub use model::{Average, Event};
pub use store::EventStore;
pub use timeline::MinuteTimeline;
