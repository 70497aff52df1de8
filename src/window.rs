//! Left-padded sliding windows.
//!
//! A sequence `s` of length `n` is padded in front with `size - 1` absent
//! slots and then walked with a window of `size` slots, so exactly `n`
//! windows are produced and the i-th window ends at `s[i]`:
//!
//! ```text
//! size = 3, s = [a, b, c, d]
//! [_, _, a]  [_, a, b]  [a, b, c]  [b, c, d]
//! ```

use crate::error::{Error, Result};

/// Content of a single window position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<T> {
    /// Padding in front of the sequence.
    Absent,
    Present(T),
}

impl<T> Slot<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }
}

/// Fixed-size view over the padded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a, T> {
    n_absent: usize,
    items: &'a [T],
}

impl<'a, T> Window<'a, T> {
    /// Number of slots, absent ones included.
    pub fn size(&self) -> usize {
        self.n_absent + self.items.len()
    }

    /// Iterate over every slot, padding first.
    pub fn slots(&self) -> impl Iterator<Item = Slot<&'a T>> + '_ {
        std::iter::repeat_n(Slot::Absent, self.n_absent)
            .chain(self.items.iter().map(Slot::Present))
    }

    /// The present items, in order.
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// First present item.
    pub fn earliest(&self) -> &'a T {
        &self.items[0]
    }

    /// Last present item, the one the window is anchored to.
    pub fn latest(&self) -> &'a T {
        &self.items[self.items.len() - 1]
    }
}

/// Iterator over the windows of a sequence.
///
/// Created by [`sliding_windows`].
#[derive(Debug, Clone)]
pub struct SlidingWindows<'a, T> {
    seq: &'a [T],
    size: usize,
    next_idx: usize,
}

/// Walk `seq` with windows of `size` slots, padding the front.
///
/// # Errors
/// Returns [`Error::InvalidWindowSize`] if `size` is zero and
/// [`Error::EmptyInput`] if `seq` is empty.
pub fn sliding_windows<T>(seq: &[T], size: usize) -> Result<SlidingWindows<'_, T>> {
    if size < 1 {
        return Err(Error::InvalidWindowSize(size));
    }
    if seq.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(SlidingWindows {
        seq,
        size,
        next_idx: 0,
    })
}

impl<'a, T> Iterator for SlidingWindows<'a, T> {
    type Item = Window<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.next_idx;
        if end >= self.seq.len() {
            return None;
        }
        self.next_idx += 1;

        // Window covers seq[end + 1 - size..=end] with negative indices absent.
        let start = (end + 1).saturating_sub(self.size);
        Some(Window {
            n_absent: self.size - (end + 1 - start),
            items: &self.seq[start..=end],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len() - self.next_idx;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for SlidingWindows<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(window: Window<'_, char>) -> String {
        window
            .slots()
            .map(|slot| match slot {
                Slot::Absent => '_',
                Slot::Present(&c) => c,
            })
            .collect()
    }

    #[test]
    fn front_is_padded_and_back_is_not() {
        let seq = ['a', 'b', 'c', 'd'];
        let windows: Vec<_> = sliding_windows(&seq, 3).unwrap().map(render).collect();
        assert_eq!(windows, vec!["__a", "_ab", "abc", "bcd"]);
    }

    #[test]
    fn one_window_per_element() {
        let seq: Vec<u32> = (0..25).collect();
        for size in 1..40 {
            let windows = sliding_windows(&seq, size).unwrap();
            assert_eq!(windows.len(), seq.len());
            for (idx, window) in windows.enumerate() {
                assert_eq!(window.size(), size);
                assert_eq!(*window.latest(), seq[idx]);
                assert_eq!(*window.earliest(), seq[(idx + 1).saturating_sub(size)]);
                assert!(window.slots().filter(Slot::is_present).count() >= 1);
            }
        }
    }

    #[test]
    fn window_larger_than_sequence() {
        let seq = [1, 2];
        let windows: Vec<_> = sliding_windows(&seq, 5).unwrap().collect();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].items(), &[1, 2]);
        assert_eq!(windows[1].slots().filter(|slot| !slot.is_present()).count(), 3);
    }

    #[test]
    fn size_one_yields_single_items() {
        let seq = [7, 8, 9];
        let windows: Vec<_> = sliding_windows(&seq, 1)
            .unwrap()
            .map(|window| window.items().to_vec())
            .collect();
        assert_eq!(windows, vec![vec![7], vec![8], vec![9]]);
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        assert!(matches!(
            sliding_windows(&[1], 0),
            Err(Error::InvalidWindowSize(0))
        ));
        assert!(matches!(
            sliding_windows::<u32>(&[], 3),
            Err(Error::EmptyInput)
        ));
    }
}
