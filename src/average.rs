use crate::error::{Error, Result};
use crate::model::{Average, Event};
use crate::store::EventStore;
use crate::timeline::MinuteTimeline;
use crate::window::sliding_windows;

/// Compute the moving average delivery time for every minute spanned by `store`.
///
/// Each minute of the timeline anchors one window covering it and the
/// `window_minutes - 1` minutes before it. The average of a window is the
/// mean duration of the events whose timestamp lies between its first and
/// last minute, both included, or zero when there are none.
///
/// # Errors
/// Returns [`Error::EmptyInput`] if the store holds no events and
/// [`Error::InvalidWindowSize`] if `window_minutes` is zero.
pub fn moving_averages(store: &EventStore, window_minutes: usize) -> Result<Vec<Average>> {
    let (Some(earliest), Some(latest)) = (store.first(), store.last()) else {
        return Err(Error::EmptyInput);
    };

    let timeline = MinuteTimeline::spanning(earliest.timestamp(), latest.timestamp())?;
    log::info!(
        "averaging {} events over {} minutes from {} to {}",
        store.len(),
        timeline.len(),
        timeline.first(),
        timeline.last()
    );

    let mut averages = Vec::with_capacity(timeline.len());
    for window in sliding_windows(&timeline[..], window_minutes)? {
        let lower = *window.earliest();
        let upper = *window.latest();

        let events = store.select(Some(lower), Some(upper))?;
        let average_delivery_time = mean_duration(events);
        log::debug!(
            "window {lower} - {upper}: {} events, average {average_delivery_time}",
            events.len()
        );

        averages.push(Average {
            date: upper,
            average_delivery_time,
        });
    }

    Ok(averages)
}

fn mean_duration(events: &[Event]) -> f64 {
    if events.is_empty() {
        return 0.0;
    }
    events.iter().map(|event| event.duration() as f64).sum::<f64>() / events.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{ceil_minute, floor_minute};
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};

    fn at(h: u32, m: u32, s: u32, us: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 12, 26)
            .unwrap()
            .and_hms_micro_opt(h, m, s, us)
            .unwrap()
    }

    fn sample_store() -> EventStore {
        EventStore::from_events(vec![
            Event::new(at(18, 11, 8, 509654), 20),
            Event::new(at(18, 15, 19, 903159), 31),
            Event::new(at(18, 23, 19, 903159), 54),
        ])
    }

    #[test]
    fn sample_averages() {
        let averages = moving_averages(&sample_store(), 10).unwrap();

        let values: Vec<_> = averages.iter().map(|a| a.average_delivery_time).collect();
        assert_eq!(
            values,
            vec![0.0, 20.0, 20.0, 20.0, 20.0, 25.5, 25.5, 25.5, 25.5, 25.5, 31.0, 31.0, 31.0, 42.5]
        );

        assert_eq!(averages[0].date, at(18, 11, 0, 0));
        assert_eq!(averages[13].date, at(18, 24, 0, 0));
        for pair in averages.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, TimeDelta::minutes(1));
        }
    }

    #[test]
    fn one_average_per_spanned_minute() {
        let store = sample_store();
        let first = floor_minute(store.first().unwrap().timestamp()).unwrap();
        let last = ceil_minute(store.last().unwrap().timestamp()).unwrap();
        let n_minutes = (last - first).num_minutes() as usize + 1;

        for window_minutes in [1, 2, 5, 10, 60] {
            let averages = moving_averages(&store, window_minutes).unwrap();
            assert_eq!(averages.len(), n_minutes);
            assert!(averages.iter().all(|a| a.date.second() == 0 && a.date.nanosecond() == 0));
        }
    }

    #[test]
    fn windows_without_events_average_zero() {
        let averages = moving_averages(&sample_store(), 1).unwrap();
        let non_zero: Vec<_> = averages
            .iter()
            .filter(|a| a.average_delivery_time != 0.0)
            .collect();
        assert!(non_zero.is_empty());
    }

    #[test]
    fn events_on_minute_boundaries_are_included() {
        let store = EventStore::from_events(vec![
            Event::new(at(10, 0, 0, 0), 4),
            Event::new(at(10, 1, 0, 0), 6),
            Event::new(at(10, 1, 0, 0), 11),
        ]);
        let averages = moving_averages(&store, 1).unwrap();
        let values: Vec<_> = averages.iter().map(|a| a.average_delivery_time).collect();
        assert_eq!(values, vec![4.0, 8.5, 0.0]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let store = sample_store();
        assert_eq!(
            moving_averages(&store, 3).unwrap(),
            moving_averages(&store, 3).unwrap()
        );
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(matches!(
            moving_averages(&EventStore::new(), 10),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            moving_averages(&sample_store(), 0),
            Err(Error::InvalidWindowSize(0))
        ));
    }
}
