use crate::{
    cursor::{DateCursor, TimeCursor},
    days::{DayOfMonthField, DayOfWeekField, DaySelector},
    error::{FieldError, FieldErrorKind, FieldErrors},
    field::NumericField,
    options::{DaySelectionMode, Options, SundayConvention},
    pattern::{Extension, FieldKind, FieldParser, ParsedField, WordTable},
    CronError, Result,
};
use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike};
use std::{fmt::Display, str::FromStr};
use tracing::debug;

/// Parsed cron expression with its evaluation methods.
///
/// For the expression syntax and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Schedule {
    expression: String,
    time: TimeCursor,
    date: DateCursor,
    options: Options,
}

impl Schedule {
    /// Parses and validates provided `expression` using default [`Options`].
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] in a case provided expression is unparsable or has format errors.
    #[inline]
    pub fn new(expression: impl AsRef<str>) -> Result<Self> {
        Self::with_options(expression, Options::default())
    }

    /// Parses and validates provided `expression` with specific [`Options`].
    ///
    /// Fields are checked in their order: minute, hour, day of month, month, day of week.
    /// The first invalid field is reported with errors of all its elements.
    pub fn with_options(expression: impl AsRef<str>, options: Options) -> Result<Self> {
        let expression = expression.as_ref();
        let fields: Vec<&str> = expression.split_whitespace().collect();
        let &[minute, hour, day_of_month, month, day_of_week] = fields.as_slice() else {
            return Err(CronError::InvalidFieldCount {
                expression: expression.to_owned(),
                count: fields.len(),
            });
        };

        let (dom_extension, dow_extension) = match options.day_selection_mode {
            DaySelectionMode::Either => (Extension::DayOfMonth, Extension::DayOfWeek),
            DaySelectionMode::Or | DaySelectionMode::And => (Extension::None, Extension::None),
        };
        let (dow_min, dow_max) = options.sunday_convention.day_of_week_range();
        let dow_words = match options.sunday_convention {
            SundayConvention::SundayIs0 => WordTable::DAYS_OF_WEEK,
            SundayConvention::SundayIs7 => WordTable::DAYS_OF_WEEK_SUNDAY_LAST,
        };
        let aliases = |words: WordTable| options.use_word_aliases.then_some(words);

        let minutes = numeric_field(FieldKind::Minute, minute, FieldParser::new(0, 59))?;
        let hours = numeric_field(FieldKind::Hour, hour, FieldParser::new(0, 23))?;
        let dom = parse_field(
            FieldKind::DayOfMonth,
            day_of_month,
            FieldParser::new(1, 31).with_extension(dom_extension),
        )?;
        let months = numeric_field(
            FieldKind::Month,
            month,
            FieldParser::new(1, 12).with_words(aliases(WordTable::MONTHS)),
        )?;
        let dow = parse_field(
            FieldKind::DayOfWeek,
            day_of_week,
            FieldParser::new(dow_min, dow_max)
                .with_words(aliases(dow_words))
                .with_extension(dow_extension),
        )?;

        let days = DaySelector::new(
            DayOfMonthField::new(dom),
            DayOfWeekField::new(dow),
            options.day_selection_mode,
        )
        .ok_or_else(|| CronError::InvalidDaysPattern {
            day_of_month: day_of_month.to_owned(),
            day_of_week: day_of_week.to_owned(),
        })?;

        let schedule = Self {
            expression: fields.join(" "),
            time: TimeCursor::new(hours, minutes),
            date: DateCursor::new(months, days, options.max_year),
            options,
        };
        debug!(expression = %schedule, ?options, "schedule is constructed");

        Ok(schedule)
    }

    /// Options the schedule was constructed with.
    #[inline]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Returns the first selected time strictly after `current`.
    ///
    /// Seconds and fractions of `current` are ignored, all results have zero seconds.
    ///
    /// Returns `None` if there is no such time before the end of the configured
    /// [max year](Options::max_year), or within 400 years if the max year isn't set.
    pub fn next(&self, current: &NaiveDateTime) -> Option<NaiveDateTime> {
        let (year, month, day) = (current.year(), current.month(), current.day());
        if self.options.max_year.is_some_and(|max_year| year > max_year) {
            return None;
        }

        let time = self.time.advance(current.hour(), current.minute());
        if !time.wrapped && self.date.contains(year, month, day) {
            return date_time(year, month, day, time.hour, time.minute);
        }

        let date = self.date.advance(year, month, Some(day))?;
        let (hour, minute) = self.time.first();
        date_time(date.year, date.month, date.day, hour, minute)
    }

    /// Returns up to `length` successive selected times after `current`.
    ///
    /// The list is shorter than requested only if the search is exhausted.
    pub fn next_list(&self, current: &NaiveDateTime, length: usize) -> Vec<NaiveDateTime> {
        self.iter(current).take(length).collect()
    }

    /// Returns the first selected time strictly after `current`, evaluated on the wall clock of its timezone.
    ///
    /// Selected local times which don't exist in the timezone (skipped by a DST transition) are passed over.
    /// A local time which occurs twice resolves to its earliest occurrence later than `current`.
    /// Returns `None` under the same conditions as [`Schedule::next`].
    pub fn upcoming<Tz: TimeZone>(&self, current: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let local = current.naive_local();
        let following = self.upcoming_from(current, local, None);

        // Inside the first pass of a repeated hour, its second pass up to `local` is still ahead.
        let repeated = match current.timezone().from_local_datetime(&local) {
            LocalResult::Ambiguous(_, latest) if latest > *current => {
                let start = current.with_timezone(&latest.offset().fix()).naive_local();
                self.upcoming_from(current, start, Some(local))
            }
            _ => None,
        };

        [following, repeated].into_iter().flatten().min()
    }

    fn upcoming_from<Tz: TimeZone>(
        &self,
        current: &DateTime<Tz>,
        mut local: NaiveDateTime,
        until: Option<NaiveDateTime>,
    ) -> Option<DateTime<Tz>> {
        let timezone = current.timezone();

        loop {
            local = self.next(&local)?;
            if until.is_some_and(|until| local > until) {
                return None;
            }

            let candidates = timezone.from_local_datetime(&local);
            let found = [candidates.clone().earliest(), candidates.latest()]
                .into_iter()
                .flatten()
                .find(|candidate| candidate > current);
            if found.is_some() {
                return found;
            }
        }
    }

    /// Returns `true` if `current` (with seconds ignored) is a selected time.
    pub fn includes(&self, current: &NaiveDateTime) -> bool {
        let year = current.year();

        !self.options.max_year.is_some_and(|max_year| year > max_year)
            && self.time.contains(current.hour(), current.minute())
            && self.date.contains(year, current.month(), current.day())
    }

    /// Returns iterator of selected times after `current`.
    #[inline]
    pub fn iter(&self, current: &NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
        ScheduleIterator {
            schedule: self.clone(),
            next: self.next(current),
        }
    }

    /// Consumes [`Schedule`] and returns iterator of selected times after `current`.
    #[inline]
    pub fn into_iter(self, current: &NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
        let next = self.next(current);
        ScheduleIterator { schedule: self, next }
    }
}

/// Contains iterator state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScheduleIterator {
    schedule: Schedule,
    next: Option<NaiveDateTime>,
}

impl Iterator for ScheduleIterator {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.schedule.next(&current);
        Some(current)
    }
}

fn parse_field(kind: FieldKind, input: &str, parser: FieldParser) -> Result<ParsedField> {
    parser.parse(input).map_err(|errors| CronError::InvalidField {
        kind,
        input: input.to_owned(),
        errors: FieldErrors::new(errors),
    })
}

fn numeric_field(kind: FieldKind, input: &str, parser: FieldParser) -> Result<NumericField> {
    let parsed = parse_field(kind, input, parser)?;

    NumericField::new(parsed.selection).ok_or_else(|| CronError::InvalidField {
        kind,
        input: input.to_owned(),
        errors: FieldErrors::new(vec![FieldError::new(input, FieldErrorKind::UnrecognizedPattern)]),
    })
}

#[inline]
fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.expression
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
