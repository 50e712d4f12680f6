//! Keeps the week grid and the agenda list pointed at the same date.
//!
//! Scroll requests are never applied inside the input callback that caused
//! them. They queue up here and the presentation layer drains them on its
//! next layout pass via [`ScrollSync::take_pending`].

use std::collections::VecDeque;

use tracing::debug;

use crate::calendar::CalendarIndex;
use crate::day_key::DayKey;
use crate::event::{CalendarEvent, WeekRef};

/// Default height of one agenda row, in the same unit as scroll offsets.
pub const DEFAULT_ROW_HEIGHT: i32 = 72;

/// Scroll distance per degree of indicator rotation.
const SCROLL_PER_DEGREE: i32 = 100;

/// Rotation limit of the floating "back to today" indicator, in degrees.
const MAX_INDICATOR_ANGLE: i32 = 85;

/// A scroll the presentation layer should perform on its next layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Put this absolute position at the top of the agenda list.
    Agenda { position: usize },
    /// Bring this grid cell into view.
    Grid { week: WeekRef, column: usize },
}

/// Rotation to animate on the floating indicator after an agenda scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorRotation {
    pub from: i32,
    pub to: i32,
    /// The list has moved away from today, so the indicator should show.
    pub visible: bool,
}

/// Tracks agenda scrolling relative to an anchor row (today's position).
///
/// The offset reported for a callback is based on the top row seen by the
/// previous callback, scaled by the row height. While the anchor row is
/// inside the previously visible range the offset is zero.
#[derive(Debug, Clone)]
pub struct ListScrollTracker {
    row_height: i32,
    anchor: Option<usize>,
    previous: Option<(usize, usize)>,
}

impl ListScrollTracker {
    pub fn new(row_height: i32) -> Self {
        ListScrollTracker {
            row_height,
            anchor: None,
            previous: None,
        }
    }

    pub fn set_anchor(&mut self, anchor: Option<usize>) {
        self.anchor = anchor;
        self.previous = None;
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn calculate_scroll_y(&mut self, first_visible: usize, visible_count: usize) -> i32 {
        let (previous_first, previous_count) = self
            .previous
            .replace((first_visible, visible_count))
            .unwrap_or((first_visible, visible_count));

        let Some(anchor) = self.anchor else {
            return 0;
        };

        if (previous_first..previous_first.saturating_add(previous_count)).contains(&anchor) {
            return 0;
        }

        let rows = i64::try_from(previous_first)
            .unwrap_or(i64::MAX)
            .saturating_sub(i64::try_from(anchor).unwrap_or(i64::MAX));
        let offset = rows.saturating_mul(i64::from(self.row_height));
        offset.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

/// Translates between grid cells and agenda positions and queues the
/// resulting scrolls.
#[derive(Debug, Clone)]
pub struct ScrollSync {
    pending: VecDeque<ScrollRequest>,
    tracker: ListScrollTracker,
    current_angle: i32,
}

impl Default for ScrollSync {
    fn default() -> Self {
        ScrollSync::new(DEFAULT_ROW_HEIGHT)
    }
}

impl ScrollSync {
    pub fn new(row_height: i32) -> Self {
        ScrollSync {
            pending: VecDeque::new(),
            tracker: ListScrollTracker::new(row_height),
            current_angle: 0,
        }
    }

    /// Measure agenda scrolling from today's position from now on.
    pub fn anchor_to_today<E: CalendarEvent>(&mut self, calendar: &CalendarIndex<E>) {
        let anchor = calendar.index_for_day(calendar.today());
        self.tracker.set_anchor(anchor);
        self.current_angle = 0;
    }

    /// Queue an agenda scroll to `day`. Returns the target position, or
    /// `None` (and queues nothing) when the day has no entries.
    pub fn request_agenda_scroll<E: CalendarEvent>(
        &mut self,
        calendar: &CalendarIndex<E>,
        day: impl Into<DayKey>,
    ) -> Option<usize> {
        let day = day.into();
        let position = calendar.index_for_day(day)?;
        debug!(%day, position, "queued agenda scroll");
        self.pending.push_back(ScrollRequest::Agenda { position });
        Some(position)
    }

    /// Queue a grid scroll to the cell of `day`.
    pub fn request_grid_scroll<E: CalendarEvent>(
        &mut self,
        calendar: &CalendarIndex<E>,
        day: impl Into<DayKey>,
    ) -> Option<(WeekRef, usize)> {
        let day = day.into();
        let (week, column) = calendar.grid_position(day)?;
        debug!(%day, week = week.0, column, "queued grid scroll");
        self.pending.push_back(ScrollRequest::Grid { week, column });
        Some((week, column))
    }

    /// Agenda position of the first entry for a grid cell.
    pub fn agenda_position_for_cell<E: CalendarEvent>(
        calendar: &CalendarIndex<E>,
        week: WeekRef,
        column: usize,
    ) -> Option<usize> {
        let day = calendar.week(week)?.days().get(column)?;
        calendar.index_for_day(day.key())
    }

    /// Grid cell of the day owning an agenda position.
    pub fn cell_for_agenda_position<E: CalendarEvent>(
        calendar: &CalendarIndex<E>,
        position: usize,
    ) -> Option<(WeekRef, usize)> {
        let day = calendar.events().day_at(position)?;
        calendar.grid_position(day)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drain queued scrolls in request order. Call once per layout pass.
    pub fn take_pending(&mut self) -> Vec<ScrollRequest> {
        self.pending.drain(..).collect()
    }

    /// React to an agenda scroll callback with the indicator rotation.
    pub fn on_agenda_scroll(&mut self, first_visible: usize, visible_count: usize) -> IndicatorRotation {
        let scroll_y = self.tracker.calculate_scroll_y(first_visible, visible_count);
        let to = (scroll_y / SCROLL_PER_DEGREE).clamp(-MAX_INDICATOR_ANGLE, MAX_INDICATOR_ANGLE);
        let rotation = IndicatorRotation {
            from: self.current_angle,
            to,
            visible: scroll_y != 0,
        };
        self.current_angle = to;
        rotation
    }
}
