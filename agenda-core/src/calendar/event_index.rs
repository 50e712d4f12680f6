//! Date-ordered multimap of event instances with positional lookup.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::debug;

use crate::day_key::DayKey;
use crate::event::CalendarEvent;

/// Event instances grouped per day, iterated in chronological day order.
///
/// Positions are absolute offsets into the flattened sequence: all of the
/// first day's instances, then all of the second day's, and so on.
#[derive(Debug, Clone)]
pub struct EventIndex<E> {
    days: BTreeMap<DayKey, Vec<E>>,
}

impl<E> Default for EventIndex<E> {
    fn default() -> Self {
        EventIndex {
            days: BTreeMap::new(),
        }
    }
}

impl<E: CalendarEvent> EventIndex<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group events by [`CalendarEvent::day_key`], keeping input order
    /// within each day.
    pub fn from_events(events: impl IntoIterator<Item = E>) -> Self {
        let mut index = Self::new();
        for event in events {
            index.push(event.day_key(), event);
        }
        index
    }

    pub(crate) fn push(&mut self, day: DayKey, event: E) {
        self.days.entry(day).or_default().push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    /// Total number of instances across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Number of days with an entry.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Instances on `day`, empty when the day has no entry.
    pub fn get(&self, day: DayKey) -> &[E] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_day(&self, day: DayKey) -> bool {
        self.days.contains_key(&day)
    }

    /// Day groups in chronological order.
    pub fn groups(&self) -> impl Iterator<Item = (DayKey, &[E])> {
        self.days.iter().map(|(day, events)| (*day, events.as_slice()))
    }

    /// All instances in chronological day order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.days.values().flatten()
    }

    /// Collect the flattened sequence. Linear in the instance count and
    /// recomputed on every call.
    pub fn flatten(&self) -> Vec<&E> {
        let start = Instant::now();
        let events: Vec<&E> = self.iter().collect();
        debug!(
            count = events.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "generated event list"
        );
        events
    }

    /// Instance at an absolute position, `None` past the end.
    pub fn event_at(&self, position: usize) -> Option<&E> {
        let mut position = position;
        for events in self.days.values() {
            if events.len() <= position {
                position -= events.len();
                continue;
            }
            return events.get(position);
        }
        None
    }

    /// First absolute position of `day`'s instances, `None` when the day has
    /// no entry.
    ///
    /// Preceding groups contribute their full size; the matched group
    /// contributes a single step from the starting offset of -1, so the
    /// result is a scroll target, not a slice boundary.
    pub fn index_for_day(&self, day: impl Into<DayKey>) -> Option<usize> {
        let day = day.into();
        let mut idx: isize = -1;
        for (key, events) in &self.days {
            if *key == day {
                idx += 1;
                return usize::try_from(idx).ok();
            }
            idx += events.len() as isize;
        }
        None
    }

    /// Day owning an absolute position.
    pub fn day_at(&self, position: usize) -> Option<DayKey> {
        let mut position = position;
        for (day, events) in &self.days {
            if events.len() <= position {
                position -= events.len();
                continue;
            }
            return Some(*day);
        }
        None
    }
}
