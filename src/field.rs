use crate::pattern::SelectionSet;

/// Outcome of advancing a field past some value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FieldAdvance {
    pub(crate) value: u32,
    /// The field has no selected value after the current one and restarted from its first value,
    /// so the next coarser unit has to move on.
    pub(crate) wrapped: bool,
}

/// Minute, hour or month field: a plain non-empty set of selected values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct NumericField {
    selection: SelectionSet,
    min: u32,
}

impl NumericField {
    /// Returns `None` if nothing is selected.
    pub(crate) fn new(selection: SelectionSet) -> Option<Self> {
        let min = selection.first()?;

        Some(Self { selection, min })
    }

    /// Smallest selected value greater than `current`, or the first one with `wrapped` set.
    pub(crate) fn advance(&self, current: u32) -> FieldAdvance {
        match self.selection.after(current) {
            Some(value) => FieldAdvance { value, wrapped: false },
            None => FieldAdvance {
                value: self.min,
                wrapped: true,
            },
        }
    }

    #[inline]
    pub(crate) fn contains(&self, value: u32) -> bool {
        self.selection.contains(value)
    }

    #[inline]
    pub(crate) fn min(&self) -> u32 {
        self.min
    }
}
