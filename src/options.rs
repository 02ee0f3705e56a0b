#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the day of month and day of week fields are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum DaySelectionMode {
    /// Classic cron behavior: if one of the day fields is `*`, the other one alone decides,
    /// otherwise a day matching either field is selected.
    #[default]
    Or,
    /// A day must match both fields.
    And,
    /// Exactly one of the day fields must be `?`, the other one alone decides.
    /// Enables the `L`, `W` and `#` extensions.
    Either,
}

/// Numbering of Sunday in the day of week field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum SundayConvention {
    /// Days of week are `0-6`, Sunday is `0`.
    #[default]
    SundayIs0,
    /// Days of week are `1-7`, Sunday is `7`.
    SundayIs7,
}

impl SundayConvention {
    pub(crate) fn day_of_week_range(&self) -> (u32, u32) {
        match self {
            SundayConvention::SundayIs0 => (0, 6),
            SundayConvention::SundayIs7 => (1, 7),
        }
    }
}

/// Parameters of the expression parsing and evaluation.
///
/// ```rust
/// use cronexp::{DaySelectionMode, Options, SundayConvention};
///
/// let options = Options::default()
///     .with_max_year(2030)
///     .with_day_selection_mode(DaySelectionMode::Either)
///     .with_sunday_convention(SundayConvention::SundayIs7);
///
/// assert_eq!(options.max_year, Some(2030));
/// assert!(options.use_word_aliases);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Options {
    /// Results after this year aren't produced.
    pub max_year: Option<i32>,
    /// Accept `JAN-DEC` and `SUN-SAT` aliases (case-insensitive) in the month and day of week fields.
    pub use_word_aliases: bool,
    /// Day fields combination policy.
    pub day_selection_mode: DaySelectionMode,
    /// Sunday numbering.
    pub sunday_convention: SundayConvention,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_year: None,
            use_word_aliases: true,
            day_selection_mode: DaySelectionMode::default(),
            sunday_convention: SundayConvention::default(),
        }
    }
}

impl Options {
    /// Sets the year ceiling.
    pub fn with_max_year(mut self, max_year: impl Into<Option<i32>>) -> Self {
        self.max_year = max_year.into();
        self
    }

    /// Enables or disables mnemonic aliases.
    pub fn with_word_aliases(mut self, use_word_aliases: bool) -> Self {
        self.use_word_aliases = use_word_aliases;
        self
    }

    /// Sets the day fields combination policy.
    pub fn with_day_selection_mode(mut self, mode: DaySelectionMode) -> Self {
        self.day_selection_mode = mode;
        self
    }

    /// Sets Sunday numbering.
    pub fn with_sunday_convention(mut self, convention: SundayConvention) -> Self {
        self.sunday_convention = convention;
        self
    }
}
