// SPDX-License-Identifier: MPL-2.0
//! Navigation state over the viewer's local snapshot of the pulse sequence.
//!
//! The snapshot is an owned copy: callers hand in a slice and the state
//! clones it, so later mutation of the caller's collection cannot alias what
//! the viewer renders. The index is re-clamped every time the snapshot is
//! replaced.

use crate::domain::pulse::Pulse;

/// One segment of the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Already seen or currently shown.
    Filled,
    /// Not reached yet.
    Empty,
}

impl Segment {
    #[must_use]
    pub fn is_filled(self) -> bool {
        matches!(self, Segment::Filled)
    }
}

/// Local snapshot plus the currently displayed position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    snapshot: Vec<Pulse>,
    index: usize,
}

impl ViewState {
    /// Copies `pulses` and starts at `initial_index`, clamped into range.
    #[must_use]
    pub fn new(pulses: &[Pulse], initial_index: usize) -> Self {
        let mut state = Self {
            snapshot: pulses.to_vec(),
            index: initial_index,
        };
        state.clamp_index();
        state
    }

    /// Replaces the snapshot with a fresh copy and re-clamps the index.
    ///
    /// Returns `true` if the index had to move.
    pub fn replace_snapshot(&mut self, pulses: &[Pulse]) -> bool {
        self.snapshot = pulses.to_vec();
        self.clamp_index()
    }

    fn clamp_index(&mut self) -> bool {
        let last = self.snapshot.len().saturating_sub(1);
        if self.index > last {
            self.index = last;
            true
        } else {
            false
        }
    }

    /// The pulse at the current index, or `None` when the snapshot is empty.
    #[must_use]
    pub fn current(&self) -> Option<&Pulse> {
        self.snapshot.get(self.index)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    #[must_use]
    pub fn snapshot(&self) -> &[Pulse] {
        &self.snapshot
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.snapshot.len()
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.index > 0 && !self.snapshot.is_empty()
    }

    /// Advances one position. No-op at the last pulse; never wraps.
    pub fn go_next(&mut self) -> bool {
        if self.can_go_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Steps back one position. No-op at the first pulse; never wraps.
    pub fn go_prev(&mut self) -> bool {
        if self.can_go_prev() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Progress indicator: filled up to and including the current index.
    #[must_use]
    pub fn progress(&self) -> Vec<Segment> {
        (0..self.snapshot.len())
            .map(|i| {
                if i <= self.index {
                    Segment::Filled
                } else {
                    Segment::Empty
                }
            })
            .collect()
    }
}
