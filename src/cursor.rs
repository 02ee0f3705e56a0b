use crate::{days::DaySelector, field::NumericField};
use tracing::{debug, trace};

/// Number of years searched past the starting one when no year ceiling is set.
///
/// The Gregorian calendar repeats every 400 years, so a date not found within this window never occurs.
pub(crate) const SEARCH_HORIZON_YEARS: i32 = 400;

/// Selected date found by [`DateCursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct DateAdvance {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

/// Selected time of day found by [`TimeCursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TimeAdvance {
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    /// No selected time is left in the current day.
    pub(crate) wrapped: bool,
}

/// Hour and minute fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct TimeCursor {
    hours: NumericField,
    minutes: NumericField,
}

impl TimeCursor {
    pub(crate) fn new(hours: NumericField, minutes: NumericField) -> Self {
        Self { hours, minutes }
    }

    /// Next selected time strictly after `hour:minute`.
    ///
    /// If the current hour isn't selected, the result is the first minute of the next selected hour.
    pub(crate) fn advance(&self, hour: u32, minute: u32) -> TimeAdvance {
        if self.hours.contains(hour) {
            let next = self.minutes.advance(minute);
            if !next.wrapped {
                return TimeAdvance {
                    hour,
                    minute: next.value,
                    wrapped: false,
                };
            }
        }

        let next = self.hours.advance(hour);
        TimeAdvance {
            hour: next.value,
            minute: self.minutes.min(),
            wrapped: next.wrapped,
        }
    }

    /// Earliest selected time of a day.
    #[inline]
    pub(crate) fn first(&self) -> (u32, u32) {
        (self.hours.min(), self.minutes.min())
    }

    #[inline]
    pub(crate) fn contains(&self, hour: u32, minute: u32) -> bool {
        self.hours.contains(hour) && self.minutes.contains(minute)
    }
}

/// Month and day fields with the optional year ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DateCursor {
    months: NumericField,
    days: DaySelector,
    max_year: Option<i32>,
}

impl DateCursor {
    pub(crate) fn new(months: NumericField, days: DaySelector, max_year: Option<i32>) -> Self {
        Self { months, days, max_year }
    }

    /// Next selected date strictly after `year-month-day`, or the first selected date
    /// starting from `year-month` if `day` is `None`.
    ///
    /// Returns `None` if the year ceiling is passed or nothing is found within the search horizon.
    pub(crate) fn advance(&self, year: i32, month: u32, day: Option<u32>) -> Option<DateAdvance> {
        let horizon = year.saturating_add(SEARCH_HORIZON_YEARS);
        let (mut year, mut month, mut day) = (year, month, day);

        if !self.months.contains(month) {
            (year, month) = self.next_month(year, month)?;
            day = None;
        }

        loop {
            if let Some(max_year) = self.max_year {
                if year > max_year {
                    debug!(year, max_year, "year ceiling is reached, giving up");
                    return None;
                }
            }
            if year > horizon {
                debug!(year, horizon, "no selected date within the search horizon, giving up");
                return None;
            }

            if let Some(day) = self.days.advance(year, month, day) {
                return Some(DateAdvance { year, month, day });
            }

            (year, month) = self.next_month(year, month)?;
            day = None;
            trace!(year, month, "moved to the next selected month");
        }
    }

    #[inline]
    pub(crate) fn contains(&self, year: i32, month: u32, day: u32) -> bool {
        self.months.contains(month) && self.days.contains(year, month, day)
    }

    fn next_month(&self, year: i32, month: u32) -> Option<(i32, u32)> {
        let next = self.months.advance(month);
        let year = if next.wrapped { year.checked_add(1)? } else { year };

        Some((year, next.value))
    }
}
