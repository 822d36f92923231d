//! Progress value state.

/// Default for [`ValueModel::max_value`].
pub(crate) const DEFAULT_MAX_VALUE: i32 = 100;
/// Default for [`ValueModel::progress`].
pub(crate) const DEFAULT_PROGRESS: i32 = 50;

/// Result of a value mutation.
///
/// The widget layer fires the progress change callback only for `Changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProgressChange {
    /// Stored progress did not change after clamping.
    Unchanged,
    /// Stored progress changed to the new clamped value.
    Changed(i32),
}
/// The widget's logical value, always clamped.
///
/// Out of range inputs are never rejected, only clamped, so mutation
/// cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValueModel {
    progress: i32,
    max_value: i32,
}
impl Default for ValueModel {
    fn default() -> Self {
        Self {
            progress: DEFAULT_PROGRESS,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}
impl ValueModel {
    pub(crate) fn progress(&self) -> i32 {
        self.progress
    }

    pub(crate) fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Clamp `value` into `[0, max_value]` and store it.
    pub(crate) fn set_progress(&mut self, value: i32) -> ProgressChange {
        let value = value.clamp(0, self.max_value);
        if value != self.progress {
            self.progress = value;
            ProgressChange::Changed(value)
        } else {
            ProgressChange::Unchanged
        }
    }

    /// Clamp `value` to `>= 1` and store it, lowering the progress first if
    /// it exceeds the new maximum.
    pub(crate) fn set_max_value(&mut self, value: i32) -> ProgressChange {
        let value = value.max(1);
        let change = if self.progress > value {
            self.set_progress(value)
        } else {
            ProgressChange::Unchanged
        };
        self.max_value = value;
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_to_bounds() {
        let mut v = ValueModel::default();
        assert_eq!(v.set_progress(-10), ProgressChange::Changed(0));
        assert_eq!(v.progress(), 0);

        assert_eq!(v.set_progress(150), ProgressChange::Changed(100));
        assert_eq!(v.progress(), 100);

        assert_eq!(v.set_progress(75), ProgressChange::Changed(75));
        assert_eq!(v.progress(), 75);
    }

    #[test]
    fn progress_set_to_same_value_is_unchanged() {
        let mut v = ValueModel::default();
        v.set_progress(75);
        assert_eq!(v.set_progress(75), ProgressChange::Unchanged);
        // clamped duplicate too
        assert_eq!(v.set_progress(75), ProgressChange::Unchanged);
        v.set_progress(100);
        assert_eq!(v.set_progress(130), ProgressChange::Unchanged);
    }

    #[test]
    fn max_value_clamps_to_one() {
        let mut v = ValueModel::default();
        v.set_max_value(0);
        assert_eq!(v.max_value(), 1);
        v.set_max_value(-5);
        assert_eq!(v.max_value(), 1);
    }

    #[test]
    fn lowering_max_value_lowers_progress_once() {
        let mut v = ValueModel::default();
        v.set_progress(75);
        assert_eq!(v.set_max_value(50), ProgressChange::Changed(50));
        assert_eq!(v.max_value(), 50);
        assert_eq!(v.progress(), 50);

        // progress already within the new bound
        assert_eq!(v.set_max_value(60), ProgressChange::Unchanged);
        assert_eq!(v.progress(), 50);
    }
}
