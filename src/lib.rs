//! Cron expression parser and evaluator with configurable day matching.
#![deny(unsafe_code, warnings, missing_docs)]

//! This crate is intended to:
//! - parse classic five-field cron expressions, optionally with `L`, `W`, `#` and `?` extensions;
//! - find the next time selected by an expression after any given time, or a series of such times.
//!
//! _This is not a cron jobs scheduler or runner._ It has no clock, timers or threads:
//! every query is a pure computation over the provided timestamp.
//!
//! ## Cron expression format
//!
//! An expression consists of exactly five whitespace-separated fields:
//! minutes, hours, days of month, months and days of week.
//! Seconds and years aren't supported, and neither are `@daily`-like aliases.
//!
//! | Field        | Allowed values                 | Allowed special characters |
//! |--------------|--------------------------------|----------------------------|
//! | Minutes      | 0-59                           | * , - /                    |
//! | Hours        | 0-23                           | * , - /                    |
//! | Day of Month | 1-31                           | * , - / ? L W              |
//! | Month        | 1-12 or JAN-DEC                | * , - /                    |
//! | Day of Week  | 0-6 (or 1-7) or SUN-SAT        | * , - / ? L #              |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`;
//! - `/` - repeating values, i.e. `*/12`, `10/5`, `30-59/2`;
//! - `L` - last day of the month (day of month field), or last particular day of the week in the month (day of week field), i.e. `L` or `5L`;
//! - `W` - the weekday (Monday to Friday) nearest to the specified day of month, never leaving the month, i.e. `22W`;
//! - `#` - n-th particular day of the week in the month, i.e. `fri#1`, `1#4`;
//! - `?` - the day field doesn't take part in matching, the other day field alone decides.
//!
//! Month and weekday names are case-insensitive and may be disabled with [`Options::use_word_aliases`].
//!
//! ## Day selection modes
//!
//! How the day of month and day of week fields are combined is defined by [`DaySelectionMode`]:
//! - [`Or`](DaySelectionMode::Or) (default) - classic cron rule: if one of the fields is `*`, the other
//!   field alone decides, otherwise a day matching either of the fields is selected;
//! - [`And`](DaySelectionMode::And) - a day must match both fields;
//! - [`Either`](DaySelectionMode::Either) - exactly one of the fields must be `?`, the other one decides.
//!
//! The `?`, `L`, `W` and `#` extensions are accepted in the `Either` mode only.
//!
//! With [`SundayConvention::SundayIs7`] days of week are numbered `1-7` and `SUN` stands for `7`.
//!
//! ## How to use
//!
//! The main entity of the crate is a [`Schedule`] structure, which has these basic methods:
//! - [new()](Schedule::new) and [with_options()](Schedule::with_options): constructors to parse and validate provided expression;
//! - [next()](Schedule::next): returns the next selected time after the provided timestamp;
//! - [next_list()](Schedule::next_list) and [iter()](Schedule::iter): produce series of selected times;
//! - [upcoming()](Schedule::upcoming): the same as `next` for a timezone-aware timestamp;
//! - [includes()](Schedule::includes): checks if a timestamp is selected.
//!
//! ### Example with `next`
//! ```rust
//! use chrono::NaiveDate;
//! use cronexp::{Result, Schedule};
//!
//! fn next() -> Result<()> {
//!     let schedule = Schedule::new("0 8,19 10/10 * *")?;
//!     let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//!     let next = schedule.next(&start);
//!     assert_eq!(next, NaiveDate::from_ymd_opt(2019, 1, 10).unwrap().and_hms_opt(8, 0, 0));
//!
//!     Ok(())
//! }
//! # next().unwrap();
//! ```
//!
//! ### Example with options
//! ```rust
//! use chrono::NaiveDate;
//! use cronexp::{DaySelectionMode, Options, Result, Schedule};
//!
//! fn last_friday() -> Result<()> {
//!     let options = Options::default()
//!         .with_day_selection_mode(DaySelectionMode::Either)
//!         .with_max_year(2019);
//!     let schedule = Schedule::with_options("30 17 ? * FriL", options)?;
//!     let start = NaiveDate::from_ymd_opt(2019, 11, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//!     // Last Fridays of November and December, then the year ceiling is reached.
//!     let list = schedule.next_list(&start, 10);
//!     assert_eq!(list.len(), 2);
//!     list.iter().for_each(|t| println!("next: {t}"));
//!
//!     Ok(())
//! }
//! # last_friday().unwrap();
//! ```
//!
//! ### Example with `upcoming`
//! ```rust
//! use chrono::Utc;
//! use cronexp::{Result, Schedule};
//!
//! fn upcoming() -> Result<()> {
//!     let schedule = Schedule::new("0 0 * * *")?;
//!     let now = Utc::now();
//!
//!     // Get the next event's timestamp starting from now
//!     let next = schedule.upcoming(&now);
//!     assert!(next.is_some());
//!
//!     println!("next: {:?}", next.unwrap());
//!
//!     Ok(())
//! }
//! # upcoming().unwrap();
//! ```
//!
//! ## Search limits
//!
//! A search never goes past the end of [`Options::max_year`].
//! Without a year ceiling, a search gives up after 400 years from the starting one:
//! the calendar repeats every 400 years, so expressions like `0 0 30 2 *` simply return `None`.
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Options`] and [`Schedule`].
//!   [`Schedule`] is represented by its expression string and is deserialized with default options.

mod cursor;
mod days;
/// Crate specific Error implementation.
pub mod error;
mod field;
/// Expression parsing and evaluation options.
pub mod options;
mod pattern;
/// Cron expression parser and next selected time finder.
pub mod schedule;
mod series;
mod utils;

// Re-export of public entities.
pub use error::{CronError, FieldError, FieldErrorKind, FieldErrors};
pub use options::{DaySelectionMode, Options, SundayConvention};
pub use pattern::FieldKind;
pub use schedule::Schedule;

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
