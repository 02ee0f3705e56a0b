/// Generator of stepped numbers series.

/// Generator (iterator) state: `start, start + step, ...` while not greater than `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SeriesWithStep {
    end: u32,
    step: u32,
    next: Option<u32>,
}

impl SeriesWithStep {
    /// Caller is responsible to ensure that `step` isn't zero.
    /// The series is empty if `start > end`; it stops early instead of overflowing.
    #[inline]
    pub(crate) fn new(start: u32, end: u32, step: u32) -> Self {
        debug_assert!(step > 0, "step value is 0");

        Self {
            end,
            step,
            next: (start <= end).then_some(start),
        }
    }
}

impl Iterator for SeriesWithStep {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|v| *v <= self.end)?;
        self.next = current.checked_add(self.step);
        Some(current)
    }
}
