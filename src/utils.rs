/// Calendar arithmetic and value parsing helpers.

/// Converts string of ASCII digits into unsigned number.
///
/// Signs, spaces and empty strings aren't accepted. Returns `None` if the value doesn't fit into `u32`.
pub(crate) fn parse_digital_value(input: &str) -> Option<u32> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        input.parse::<u32>().ok()
    }
}

/// Converts string with mnemonic value representation into its index in `values`, ignoring case.
pub(crate) fn parse_string_value(input: &str, values: &[&str]) -> Option<u32> {
    if input.is_empty() {
        None
    } else {
        values
            .iter()
            .position(|x| x.eq_ignore_ascii_case(input))
            .map(|i| i as u32)
    }
}

/// Returns `true` if provided year is leap.
#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns number of days in specified month.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("Invalid month: {month}"),
    }
}

/// Calculates day of week for specified date, `0` is Sunday.
pub(crate) fn day_of_week(year: i32, month: u32, day: u32) -> u32 {
    if day == 0 || day > days_in_month(year, month) {
        panic!("Invalid date: {year:04}-{month:02}-{day:02}");
    }

    let month_offset: i64 = if is_leap_year(year) {
        [0, 3, 4, 0, 2, 5, 0, 3, 6, 1, 4, 6]
    } else {
        [0, 3, 3, 6, 1, 4, 6, 2, 5, 0, 3, 5]
    }[(month - 1) as usize];

    let year = i64::from(year) - 1;
    let days = i64::from(day)
        + month_offset
        + 5 * year.rem_euclid(4)
        + 4 * year.rem_euclid(100)
        + 6 * year.rem_euclid(400);

    days.rem_euclid(7) as u32
}

/// Returns day in the month of the last specified day of the week.
pub(crate) fn last_dow(year: i32, month: u32, dow: u32) -> u32 {
    let last_day = days_in_month(year, month);
    let last_day_dow = day_of_week(year, month, last_day);

    last_day - (last_day_dow + 7 - dow) % 7
}

/// Returns day in the month of the `n`-th (1-based) specified day of the week,
/// or `None` if the month is too short for it.
pub(crate) fn nth_dow(year: i32, month: u32, dow: u32, n: u32) -> Option<u32> {
    if n == 0 {
        return None;
    }

    let first_dow = day_of_week(year, month, 1);
    let day = 1 + (dow + 7 - first_dow) % 7 + 7 * (n - 1);

    (day <= days_in_month(year, month)).then_some(day)
}

/// Returns the weekday (Monday to Friday) nearest to the `target` day, never leaving the month.
///
/// A target beyond the end of the month is clamped to its last day first.
pub(crate) fn nearest_weekday(year: i32, month: u32, target: u32) -> u32 {
    let last_day = days_in_month(year, month);
    let day = target.clamp(1, last_day);

    match day_of_week(year, month, day) {
        // saturday
        6 if day == 1 => day + 2,
        6 => day - 1,
        // sunday
        0 if day == last_day => day - 2,
        0 => day + 1,
        _ => day,
    }
}
