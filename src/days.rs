use crate::{
    options::DaySelectionMode,
    pattern::{ParsedField, SelectionSet},
    utils,
};
use std::collections::BTreeSet;

/// Day of month field: numeric days plus `L` and `<n>W`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DayOfMonthField {
    selection: SelectionSet,
    blank: bool,
    last_day: bool,
    nearest_weekdays: BTreeSet<u32>,
}

impl DayOfMonthField {
    pub(crate) fn new(parsed: ParsedField) -> Self {
        Self {
            selection: parsed.selection,
            blank: parsed.blank,
            last_day: parsed.last_day,
            nearest_weekdays: parsed.nearest_weekdays,
        }
    }

    #[inline]
    pub(crate) fn is_blank(&self) -> bool {
        self.blank
    }

    #[inline]
    pub(crate) fn is_wildcard(&self) -> bool {
        self.selection.is_wildcard()
    }

    /// Smallest selected day of the month after `after`, or the first selected day if `after` is `None`.
    ///
    /// Numeric days beyond the month's length never match.
    pub(crate) fn advance(&self, year: i32, month: u32, after: Option<u32>) -> Option<u32> {
        let last_day = utils::days_in_month(year, month);
        let lower = after.unwrap_or(0);

        let numeric = self.selection.after(lower);
        let last = self.last_day.then_some(last_day);
        let nearest = self
            .nearest_weekdays
            .iter()
            .map(|target| utils::nearest_weekday(year, month, *target));

        numeric
            .into_iter()
            .chain(last)
            .chain(nearest)
            .filter(|day| *day > lower && *day <= last_day)
            .min()
    }

    pub(crate) fn contains(&self, year: i32, month: u32, day: u32) -> bool {
        let last_day = utils::days_in_month(year, month);
        if day == 0 || day > last_day {
            return false;
        }

        self.selection.contains(day)
            || (self.last_day && day == last_day)
            || self
                .nearest_weekdays
                .iter()
                .any(|target| utils::nearest_weekday(year, month, *target) == day)
    }
}

/// Day of week field: weekdays plus `<wd>L` and `<wd>#<n>`.
///
/// Weekdays are stored as `0-6` with Sunday as `0` whatever numbering the expression uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DayOfWeekField {
    selection: SelectionSet,
    blank: bool,
    last_weekdays: BTreeSet<u32>,
    nth_weekdays: BTreeSet<(u32, u32)>,
}

impl DayOfWeekField {
    pub(crate) fn new(parsed: ParsedField) -> Self {
        let normalize = |dow: u32| if dow == 7 { 0 } else { dow };

        Self {
            selection: parsed.selection.map(normalize),
            blank: parsed.blank,
            last_weekdays: parsed.last_weekdays.into_iter().map(normalize).collect(),
            nth_weekdays: parsed
                .nth_weekdays
                .into_iter()
                .map(|(dow, n)| (normalize(dow), n))
                .collect(),
        }
    }

    #[inline]
    pub(crate) fn is_blank(&self) -> bool {
        self.blank
    }

    #[inline]
    pub(crate) fn is_wildcard(&self) -> bool {
        self.selection.is_wildcard()
    }

    /// Smallest day of the month after `after` (or from the first day if `None`)
    /// falling on a selected weekday.
    pub(crate) fn advance(&self, year: i32, month: u32, after: Option<u32>) -> Option<u32> {
        let last_day = utils::days_in_month(year, month);
        let start = after.map_or(1, |day| day + 1);
        if start > last_day {
            return None;
        }

        let start_dow = utils::day_of_week(year, month, start);
        let weekday = (0..7)
            .find(|offset| self.selection.contains((start_dow + offset) % 7))
            .map(|offset| start + offset);
        let last = self
            .last_weekdays
            .iter()
            .map(|dow| utils::last_dow(year, month, *dow));
        let nth = self
            .nth_weekdays
            .iter()
            .filter_map(|(dow, n)| utils::nth_dow(year, month, *dow, *n));

        weekday
            .into_iter()
            .chain(last)
            .chain(nth)
            .filter(|day| *day >= start && *day <= last_day)
            .min()
    }

    pub(crate) fn contains(&self, year: i32, month: u32, day: u32) -> bool {
        let last_day = utils::days_in_month(year, month);
        if day == 0 || day > last_day {
            return false;
        }

        let dow = utils::day_of_week(year, month, day);
        self.selection.contains(dow)
            || (self.last_weekdays.contains(&dow) && day + 7 > last_day)
            || self.nth_weekdays.contains(&(dow, (day - 1) / 7 + 1))
    }
}

/// Combination of both day fields under a [`DaySelectionMode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum DaySelector {
    /// Day of month decides alone.
    DayOfMonth(DayOfMonthField),
    /// Day of week decides alone.
    DayOfWeek(DayOfWeekField),
    /// A day matching any of the fields.
    Union(DayOfMonthField, DayOfWeekField),
    /// A day matching both fields.
    Intersection(DayOfMonthField, DayOfWeekField),
}

impl DaySelector {
    /// Returns `None` if `Either` mode is requested but not exactly one of the fields is `?`.
    pub(crate) fn new(
        day_of_month: DayOfMonthField,
        day_of_week: DayOfWeekField,
        mode: DaySelectionMode,
    ) -> Option<Self> {
        let selector = match mode {
            DaySelectionMode::Or if day_of_week.is_wildcard() => Self::DayOfMonth(day_of_month),
            DaySelectionMode::Or if day_of_month.is_wildcard() => Self::DayOfWeek(day_of_week),
            DaySelectionMode::Or => Self::Union(day_of_month, day_of_week),
            DaySelectionMode::And => Self::Intersection(day_of_month, day_of_week),
            DaySelectionMode::Either => match (day_of_month.is_blank(), day_of_week.is_blank()) {
                (false, true) => Self::DayOfMonth(day_of_month),
                (true, false) => Self::DayOfWeek(day_of_week),
                _ => return None,
            },
        };

        Some(selector)
    }

    /// Smallest selected day of the month after `after`, or the first selected day if `after` is `None`.
    pub(crate) fn advance(&self, year: i32, month: u32, after: Option<u32>) -> Option<u32> {
        match self {
            Self::DayOfMonth(dom) => dom.advance(year, month, after),
            Self::DayOfWeek(dow) => dow.advance(year, month, after),
            Self::Union(dom, dow) => {
                let by_dom = dom.advance(year, month, after);
                let by_dow = dow.advance(year, month, after);
                by_dom.into_iter().chain(by_dow).min()
            }
            Self::Intersection(dom, dow) => {
                let mut by_dom = dom.advance(year, month, after)?;
                let mut by_dow = dow.advance(year, month, after)?;
                while by_dom != by_dow {
                    if by_dom < by_dow {
                        by_dom = dom.advance(year, month, Some(by_dom))?;
                    } else {
                        by_dow = dow.advance(year, month, Some(by_dow))?;
                    }
                }
                Some(by_dom)
            }
        }
    }

    pub(crate) fn contains(&self, year: i32, month: u32, day: u32) -> bool {
        match self {
            Self::DayOfMonth(dom) => dom.contains(year, month, day),
            Self::DayOfWeek(dow) => dow.contains(year, month, day),
            Self::Union(dom, dow) => dom.contains(year, month, day) || dow.contains(year, month, day),
            Self::Intersection(dom, dow) => dom.contains(year, month, day) && dow.contains(year, month, day),
        }
    }
}
