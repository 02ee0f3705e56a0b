use crate::{
    error::{FieldError, FieldErrorKind},
    series::SeriesWithStep,
    utils,
};
use std::{collections::BTreeSet, fmt::Display};

/// One of the five fields of a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    /// Minutes, `0-59`.
    Minute,
    /// Hours, `0-23`.
    Hour,
    /// Days of month, `1-31`.
    DayOfMonth,
    /// Months, `1-12` or `JAN-DEC`.
    Month,
    /// Days of week, `0-6` or `1-7` depending on the Sunday convention, or `SUN-SAT`.
    DayOfWeek,
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day of month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day of week",
        };
        write!(f, "{name}")
    }
}

/// Mnemonic aliases of field values: `names[i]` stands for `first + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct WordTable {
    names: &'static [&'static str],
    first: u32,
}

impl WordTable {
    pub(crate) const MONTHS: Self = Self {
        names: &[
            "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
        ],
        first: 1,
    };
    pub(crate) const DAYS_OF_WEEK: Self = Self {
        names: &["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"],
        first: 0,
    };
    /// Weekday names when Sunday is numbered `7`.
    pub(crate) const DAYS_OF_WEEK_SUNDAY_LAST: Self = Self {
        names: &["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"],
        first: 1,
    };

    fn lookup(&self, input: &str) -> Option<u32> {
        utils::parse_string_value(input, self.names).map(|i| i + self.first)
    }
}

/// Extended day tokens accepted on top of the standard grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Extension {
    None,
    /// `?`, `L` and `<n>W`.
    DayOfMonth,
    /// `?`, `<weekday>L` and `<weekday>#<n>`.
    DayOfWeek,
}

/// Ordered, duplicate-free set of selected values.
///
/// `wildcard` is set when at least one element was a bare `*`, which means "no constraint"
/// for day matching even though the values are the full range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct SelectionSet {
    values: BTreeSet<u32>,
    wildcard: bool,
}

impl SelectionSet {
    #[inline]
    pub(crate) fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }

    #[inline]
    pub(crate) fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    pub(crate) fn first(&self) -> Option<u32> {
        self.values.first().copied()
    }

    /// Smallest selected value strictly greater than `value`.
    pub(crate) fn after(&self, value: u32) -> Option<u32> {
        self.values.range(value.saturating_add(1)..).next().copied().filter(|v| *v > value)
    }

    /// Applies `f` to every value, keeping the wildcard flag.
    pub(crate) fn map(self, f: impl Fn(u32) -> u32) -> Self {
        Self {
            values: self.values.into_iter().map(f).collect(),
            wildcard: self.wildcard,
        }
    }
}

/// Result of a successful field parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct ParsedField {
    pub(crate) selection: SelectionSet,
    /// The field was exactly `?`.
    pub(crate) blank: bool,
    /// `L` in day of month.
    pub(crate) last_day: bool,
    /// `<n>W` targets.
    pub(crate) nearest_weekdays: BTreeSet<u32>,
    /// `<weekday>L` weekdays.
    pub(crate) last_weekdays: BTreeSet<u32>,
    /// `<weekday>#<n>` pairs of weekday and ordinal.
    pub(crate) nth_weekdays: BTreeSet<(u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Element {
    All,
    Values(Vec<u32>),
    Blank,
    LastDay,
    NearestWeekday(u32),
    LastWeekday(u32),
    NthWeekday(u32, u32),
}

/// Parser of a single comma-separated cron field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FieldParser {
    min: u32,
    max: u32,
    words: Option<WordTable>,
    extension: Extension,
}

impl FieldParser {
    pub(crate) const MAX_WEEK_NUMBER: u32 = 5;

    pub(crate) fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max,
            words: None,
            extension: Extension::None,
        }
    }

    pub(crate) fn with_words(mut self, words: Option<WordTable>) -> Self {
        self.words = words;
        self
    }

    pub(crate) fn with_extension(mut self, extension: Extension) -> Self {
        self.extension = extension;
        self
    }

    /// Parses every element of `input` and returns either the combined selection
    /// or the errors of all failed elements.
    pub(crate) fn parse(&self, input: &str) -> Result<ParsedField, Vec<FieldError>> {
        let mut parsed = ParsedField::default();
        let mut errors = vec![];

        for element in input.split(',') {
            let item = match self.parse_standard(element) {
                Some(item) => item,
                None => self.parse_extended(element, input),
            };

            match item {
                Ok(Element::All) => {
                    parsed.selection.wildcard = true;
                    parsed.selection.values.extend(self.min..=self.max);
                }
                Ok(Element::Values(values)) => parsed.selection.values.extend(values),
                Ok(Element::Blank) => parsed.blank = true,
                Ok(Element::LastDay) => parsed.last_day = true,
                Ok(Element::NearestWeekday(day)) => {
                    parsed.nearest_weekdays.insert(day);
                }
                Ok(Element::LastWeekday(dow)) => {
                    parsed.last_weekdays.insert(dow);
                }
                Ok(Element::NthWeekday(dow, n)) => {
                    parsed.nth_weekdays.insert((dow, n));
                }
                Err(kind) => errors.push(FieldError::new(element, kind)),
            }
        }

        if errors.is_empty() {
            Ok(parsed)
        } else {
            Err(errors)
        }
    }

    /// Standard grammar: `*`, `N`, `N-M`, each optionally followed by `/S`.
    ///
    /// Returns `None` if `element` doesn't match the grammar at all.
    fn parse_standard(&self, element: &str) -> Option<Result<Element, FieldErrorKind>> {
        let (base, step) = match element.split_once('/') {
            Some((base, step)) if is_digits(step) => (base, Some(digits_value(step))),
            Some(_) => return None,
            None => (element, None),
        };

        let (begin, end) = if base == "*" {
            (None, None)
        } else if let Some((begin, end)) = base.split_once('-') {
            (Some(self.value(begin)?), Some(self.value(end)?))
        } else {
            (Some(self.value(base)?), None)
        };

        Some(self.evaluate_standard(begin, end, step))
    }

    fn evaluate_standard(
        &self,
        begin: Option<u32>,
        end: Option<u32>,
        step: Option<u32>,
    ) -> Result<Element, FieldErrorKind> {
        if let Some(value) = begin {
            self.check_range(value)?;
        }
        if let Some(value) = end {
            self.check_range(value)?;
        }
        if step == Some(0) {
            return Err(FieldErrorKind::BadStep);
        }
        if let (Some(begin), Some(end)) = (begin, end) {
            if end < begin {
                return Err(FieldErrorKind::InvalidRange { begin, end });
            }
        }

        let element = match (begin, end, step) {
            (None, _, None) => Element::All,
            (Some(begin), None, None) => Element::Values(vec![begin]),
            (Some(begin), Some(end), None) => Element::Values((begin..=end).collect()),
            (begin, end, Some(step)) => Element::Values(
                SeriesWithStep::new(begin.unwrap_or(self.min), end.unwrap_or(self.max), step).collect(),
            ),
        };

        Ok(element)
    }

    /// Extended day grammar, tried for elements the standard grammar doesn't recognize.
    fn parse_extended(&self, element: &str, input: &str) -> Result<Element, FieldErrorKind> {
        match self.extension {
            Extension::None => Err(FieldErrorKind::UnrecognizedPattern),
            _ if element == "?" => {
                if input == "?" {
                    Ok(Element::Blank)
                } else {
                    Err(FieldErrorKind::MisplacedBlank)
                }
            }
            Extension::DayOfMonth if element == "L" => Ok(Element::LastDay),
            Extension::DayOfMonth => {
                let target = element
                    .strip_suffix('W')
                    .filter(|target| is_digits(target))
                    .ok_or(FieldErrorKind::UnrecognizedPattern)?;
                let target = digits_value(target);
                self.check_range(target)?;
                Ok(Element::NearestWeekday(target))
            }
            Extension::DayOfWeek => {
                if let Some(dow) = element.strip_suffix('L') {
                    let dow = self.value(dow).ok_or(FieldErrorKind::UnrecognizedPattern)?;
                    self.check_range(dow)?;
                    Ok(Element::LastWeekday(dow))
                } else if let Some((dow, n)) = element.split_once('#') {
                    let dow = self.value(dow).ok_or(FieldErrorKind::UnrecognizedPattern)?;
                    if !is_digits(n) {
                        return Err(FieldErrorKind::UnrecognizedPattern);
                    }
                    let n = digits_value(n);
                    self.check_range(dow)?;
                    if !(1..=Self::MAX_WEEK_NUMBER).contains(&n) {
                        return Err(FieldErrorKind::OutOfRange {
                            value: n,
                            min: 1,
                            max: Self::MAX_WEEK_NUMBER,
                        });
                    }
                    Ok(Element::NthWeekday(dow, n))
                } else {
                    Err(FieldErrorKind::UnrecognizedPattern)
                }
            }
        }
    }

    /// Numeric value of a single bound: digits or, if enabled, a mnemonic alias.
    fn value(&self, token: &str) -> Option<u32> {
        if is_digits(token) {
            Some(digits_value(token))
        } else {
            self.words.and_then(|words| words.lookup(token))
        }
    }

    fn check_range(&self, value: u32) -> Result<(), FieldErrorKind> {
        if value < self.min || value > self.max {
            Err(FieldErrorKind::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        } else {
            Ok(())
        }
    }
}

#[inline]
fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Value of a digits-only string, saturated so that huge numbers are reported as out of range.
#[inline]
fn digits_value(input: &str) -> u32 {
    utils::parse_digital_value(input).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn plain(min: u32, max: u32) -> FieldParser {
        FieldParser::new(min, max)
    }

    fn day_of_month() -> FieldParser {
        FieldParser::new(1, 31).with_extension(Extension::DayOfMonth)
    }

    fn day_of_week() -> FieldParser {
        FieldParser::new(0, 6)
            .with_words(Some(WordTable::DAYS_OF_WEEK))
            .with_extension(Extension::DayOfWeek)
    }

    fn values(parsed: &ParsedField) -> Vec<u32> {
        parsed.selection.values.iter().copied().collect()
    }

    fn kinds(errors: &[FieldError]) -> Vec<FieldErrorKind> {
        errors.iter().map(|e| e.kind).collect()
    }

    #[rstest]
    #[case("*", true, (0..=10).collect())]
    #[case("5", false, vec![5])]
    #[case("2-6", false, vec![2, 3, 4, 5, 6])]
    #[case("0-10", false, (0..=10).collect())]
    #[case("*/3", false, vec![0, 3, 6, 9])]
    #[case("1/3", false, vec![1, 4, 7, 10])]
    #[case("1-9/3", false, vec![1, 4, 7])]
    #[case("10/3", false, vec![10])]
    #[case("1,0", false, vec![0, 1])]
    #[case("0,0,0", false, vec![0])]
    #[case("0/3,1/3", false, vec![0, 1, 3, 4, 6, 7, 9, 10])]
    #[case("0,*", true, (0..=10).collect())]
    #[case("*,0-3", true, (0..=10).collect())]
    #[case("0/3,*", true, (0..=10).collect())]
    #[case("*/20", false, vec![0])]
    #[case("007", false, vec![7])]
    #[case("*/99999999999", false, vec![0])]
    #[case("2-8/99999999999", false, vec![2])]
    fn test_parse_standard_valid(#[case] input: &str, #[case] wildcard: bool, #[case] expected: Vec<u32>) {
        let parsed = plain(0, 10).parse(input).unwrap();

        assert_eq!(values(&parsed), expected, "input = {input}");
        assert_eq!(parsed.selection.is_wildcard(), wildcard, "input = {input}");
        assert!(!parsed.blank);
    }

    #[rstest]
    #[case("0-1-2", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case(",", vec![FieldErrorKind::UnrecognizedPattern, FieldErrorKind::UnrecognizedPattern])]
    #[case("1, 2", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("*-5", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("5-", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("*/", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("0/-5", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("1/2/3", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("+5", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("L", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("?", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("*/0", vec![FieldErrorKind::BadStep])]
    #[case("7-3", vec![FieldErrorKind::InvalidRange { begin: 7, end: 3 }])]
    #[case("0", vec![FieldErrorKind::OutOfRange { value: 0, min: 1, max: 10 }])]
    #[case("11", vec![FieldErrorKind::OutOfRange { value: 11, min: 1, max: 10 }])]
    #[case("1-11", vec![FieldErrorKind::OutOfRange { value: 11, min: 1, max: 10 }])]
    #[case("0-11/0", vec![FieldErrorKind::OutOfRange { value: 0, min: 1, max: 10 }])]
    #[case("99999999999", vec![FieldErrorKind::OutOfRange { value: u32::MAX, min: 1, max: 10 }])]
    fn test_parse_standard_invalid(#[case] input: &str, #[case] expected: Vec<FieldErrorKind>) {
        let errors = plain(1, 10).parse(input).unwrap_err();
        assert_eq!(kinds(&errors), expected, "input = {input}");
    }

    #[test]
    fn test_parse_collects_all_errors() {
        let errors = plain(0, 10).parse("1,0-1-2,3,11,*/0,7-3").unwrap_err();

        assert_eq!(
            errors,
            vec![
                FieldError::new("0-1-2", FieldErrorKind::UnrecognizedPattern),
                FieldError::new(
                    "11",
                    FieldErrorKind::OutOfRange {
                        value: 11,
                        min: 0,
                        max: 10
                    }
                ),
                FieldError::new("*/0", FieldErrorKind::BadStep),
                FieldError::new("7-3", FieldErrorKind::InvalidRange { begin: 7, end: 3 }),
            ]
        );
    }

    #[rstest]
    #[case("Jan", vec![1])]
    #[case("jan", vec![1])]
    #[case("JAN", vec![1])]
    #[case("jAn", vec![1])]
    #[case("1,Feb", vec![1, 2])]
    #[case("Apr-Dec/2", vec![4, 6, 8, 10, 12])]
    #[case("mar/3", vec![3, 6, 9, 12])]
    #[case("nov-12", vec![11, 12])]
    fn test_parse_month_words(#[case] input: &str, #[case] expected: Vec<u32>) {
        let parser = plain(1, 12).with_words(Some(WordTable::MONTHS));
        assert_eq!(values(&parser.parse(input).unwrap()), expected, "input = {input}");
    }

    #[rstest]
    #[case("JanFeb")]
    #[case("*/Feb")]
    #[case("january")]
    fn test_parse_month_words_invalid(#[case] input: &str) {
        let parser = plain(1, 12).with_words(Some(WordTable::MONTHS));
        assert_eq!(
            kinds(&parser.parse(input).unwrap_err()),
            vec![FieldErrorKind::UnrecognizedPattern],
            "input = {input}"
        );
    }

    #[rstest]
    #[case("Mon-Fri")]
    #[case("Mon-5")]
    #[case("1-Fri")]
    #[case("1-5")]
    fn test_parse_weekday_word_ranges(#[case] input: &str) {
        let parser = plain(0, 6).with_words(Some(WordTable::DAYS_OF_WEEK));
        assert_eq!(values(&parser.parse(input).unwrap()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_parse_words_disabled() {
        assert_eq!(
            kinds(&plain(0, 6).parse("Mon").unwrap_err()),
            vec![FieldErrorKind::UnrecognizedPattern]
        );
    }

    #[test]
    fn test_parse_sunday_last_words() {
        let parser = plain(1, 7).with_words(Some(WordTable::DAYS_OF_WEEK_SUNDAY_LAST));

        assert_eq!(values(&parser.parse("sun").unwrap()), vec![7]);
        assert_eq!(values(&parser.parse("Fri-Sun").unwrap()), vec![5, 6, 7]);
        assert_eq!(
            kinds(&parser.parse("0").unwrap_err()),
            vec![FieldErrorKind::OutOfRange { value: 0, min: 1, max: 7 }]
        );
    }

    #[test]
    fn test_parse_day_of_month_extended() {
        let parsed = day_of_month().parse("*/10").unwrap();
        assert_eq!(values(&parsed), vec![1, 11, 21, 31]);
        assert!(!parsed.selection.is_wildcard());
        assert!(!parsed.blank);
        assert!(!parsed.last_day);
        assert!(parsed.nearest_weekdays.is_empty());

        let parsed = day_of_month().parse("?").unwrap();
        assert!(parsed.blank);
        assert!(parsed.selection.values.is_empty());

        let parsed = day_of_month().parse("L").unwrap();
        assert!(parsed.last_day);
        assert!(parsed.selection.values.is_empty());

        let parsed = day_of_month().parse("20W,10W,20W").unwrap();
        assert_eq!(parsed.nearest_weekdays.iter().copied().collect::<Vec<_>>(), vec![10, 20]);

        let parsed = day_of_month().parse("*/5,L,7W,14W,21W,28W").unwrap();
        assert_eq!(values(&parsed), vec![1, 6, 11, 16, 21, 26, 31]);
        assert!(parsed.last_day);
        assert_eq!(
            parsed.nearest_weekdays.iter().copied().collect::<Vec<_>>(),
            vec![7, 14, 21, 28]
        );
    }

    #[test]
    fn test_parse_nearest_weekday_range() {
        for target in 0..40 {
            let result = day_of_month().parse(&format!("{target}W"));
            if (1..=31).contains(&target) {
                assert_eq!(
                    result.unwrap().nearest_weekdays.into_iter().collect::<Vec<_>>(),
                    vec![target]
                );
            } else {
                assert_eq!(
                    kinds(&result.unwrap_err()),
                    vec![FieldErrorKind::OutOfRange {
                        value: target,
                        min: 1,
                        max: 31
                    }]
                );
            }
        }
    }

    #[rstest]
    #[case("?,*", vec![FieldError::new("?", FieldErrorKind::MisplacedBlank)])]
    #[case("1,?", vec![FieldError::new("?", FieldErrorKind::MisplacedBlank)])]
    #[case("?,?", vec![FieldError::new("?", FieldErrorKind::MisplacedBlank), FieldError::new("?", FieldErrorKind::MisplacedBlank)])]
    #[case("?,L,10W", vec![FieldError::new("?", FieldErrorKind::MisplacedBlank)])]
    #[case("5L", vec![FieldError::new("5L", FieldErrorKind::UnrecognizedPattern)])]
    #[case("W", vec![FieldError::new("W", FieldErrorKind::UnrecognizedPattern)])]
    #[case("1#1", vec![FieldError::new("1#1", FieldErrorKind::UnrecognizedPattern)])]
    #[case("l", vec![FieldError::new("l", FieldErrorKind::UnrecognizedPattern)])]
    fn test_parse_day_of_month_extended_invalid(#[case] input: &str, #[case] expected: Vec<FieldError>) {
        assert_eq!(day_of_month().parse(input).unwrap_err(), expected, "input = {input}");
    }

    #[rstest]
    #[case("?")]
    #[case("L")]
    #[case("10W")]
    fn test_parse_extended_requires_extension(#[case] input: &str) {
        assert!(day_of_month().parse(input).is_ok());
        assert!(plain(1, 31).parse(input).is_err());
    }

    #[test]
    fn test_parse_day_of_week_extended() {
        let parsed = day_of_week().parse("Sun,Sat").unwrap();
        assert_eq!(values(&parsed), vec![0, 6]);
        assert!(parsed.last_weekdays.is_empty());
        assert!(parsed.nth_weekdays.is_empty());

        let parsed = day_of_week().parse("5L,1L,5L,3L").unwrap();
        assert!(parsed.selection.values.is_empty());
        assert_eq!(parsed.last_weekdays.into_iter().collect::<Vec<_>>(), vec![1, 3, 5]);

        let parsed = day_of_week().parse("FriL,MONL,friL").unwrap();
        assert_eq!(parsed.last_weekdays.into_iter().collect::<Vec<_>>(), vec![1, 5]);

        let parsed = day_of_week().parse("0#1,2#3,4#5,6#1,2#3,1#2,3#4").unwrap();
        assert_eq!(
            parsed.nth_weekdays.into_iter().collect::<Vec<_>>(),
            vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (6, 1)]
        );

        let parsed = day_of_week().parse("Sat#4,SAT#2,sat#4").unwrap();
        assert_eq!(parsed.nth_weekdays.into_iter().collect::<Vec<_>>(), vec![(6, 2), (6, 4)]);

        let parsed = day_of_week().parse("Mon,Wed,Thu,Tue#2,Tue#4,FriL").unwrap();
        assert_eq!(values(&parsed), vec![1, 3, 4]);
        assert_eq!(parsed.last_weekdays.into_iter().collect::<Vec<_>>(), vec![5]);
        assert_eq!(parsed.nth_weekdays.into_iter().collect::<Vec<_>>(), vec![(2, 2), (2, 4)]);
    }

    #[test]
    fn test_parse_day_of_week_extended_ranges() {
        for dow in 0..10 {
            let result = day_of_week().parse(&format!("{dow}L"));
            assert_eq!(result.is_ok(), dow <= 6, "dow = {dow}");

            for n in 0..10 {
                let result = day_of_week().parse(&format!("{dow}#{n}"));
                assert_eq!(
                    result.is_ok(),
                    dow <= 6 && (1..=5).contains(&n),
                    "dow = {dow}, n = {n}"
                );
            }
        }
    }

    #[rstest]
    #[case("?,*", vec![FieldErrorKind::MisplacedBlank])]
    #[case("?,SatL,Mon#1", vec![FieldErrorKind::MisplacedBlank])]
    #[case("L", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("Mon#", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("#2", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("Mon#x", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("10W", vec![FieldErrorKind::UnrecognizedPattern])]
    #[case("7L", vec![FieldErrorKind::OutOfRange { value: 7, min: 0, max: 6 }])]
    #[case("1#6", vec![FieldErrorKind::OutOfRange { value: 6, min: 1, max: 5 }])]
    #[case("9#9,Mon#0", vec![FieldErrorKind::OutOfRange { value: 9, min: 0, max: 6 }, FieldErrorKind::OutOfRange { value: 0, min: 1, max: 5 }])]
    fn test_parse_day_of_week_extended_invalid(#[case] input: &str, #[case] expected: Vec<FieldErrorKind>) {
        assert_eq!(kinds(&day_of_week().parse(input).unwrap_err()), expected, "input = {input}");
    }

    #[test]
    fn test_parse_selection_is_sorted_and_bounded() {
        let inputs = ["*", "59,0,30", "*/7,1-5,40/9", "10-20/3,15,3"];
        for input in inputs {
            let parsed = plain(0, 59).parse(input).unwrap();
            let values = values(&parsed);
            assert!(values.windows(2).all(|w| w[0] < w[1]), "input = {input}");
            assert!(values.iter().all(|v| *v <= 59), "input = {input}");
        }
    }

    #[test]
    fn test_selection_set_after() {
        let parsed = plain(0, 59).parse("0,15,30,45").unwrap();
        let selection = parsed.selection;

        assert_eq!(selection.after(0), Some(15));
        assert_eq!(selection.after(14), Some(15));
        assert_eq!(selection.after(45), None);
        assert_eq!(selection.after(u32::MAX), None);
        assert_eq!(selection.first(), Some(0));
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::Minute.to_string(), "minute");
        assert_eq!(FieldKind::DayOfMonth.to_string(), "day of month");
        assert_eq!(FieldKind::DayOfWeek.to_string(), "day of week");
    }
}
