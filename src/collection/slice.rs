use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

/// A `start:stop:step` selection over a sequence.
///
/// Missing bounds default to the start and end of the sequence; the step
/// defaults to 1 and a step of 0 is treated as 1.
///
/// # Examples
///
/// ```
/// use model_collections::Slice;
///
/// let every_other = Slice::from(1..).step_by(2);
/// assert_eq!(every_other.indices(6).collect::<Vec<_>>(), [1, 3, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: Option<usize>,
    pub stop: Option<usize>,
    pub step: usize,
}

impl Slice {
    pub fn new(start: Option<usize>, stop: Option<usize>) -> Self {
        Self {
            start,
            stop,
            step: 1,
        }
    }

    /// Selects every `step`-th index.
    #[must_use]
    pub fn step_by(mut self, step: usize) -> Self {
        self.step = step.max(1);
        self
    }

    /// Indices selected in a sequence of length `len`, clamped to the sequence.
    pub fn indices(&self, len: usize) -> std::iter::StepBy<Range<usize>> {
        let stop = self.stop.unwrap_or(len).min(len);
        let start = self.start.unwrap_or(0).min(stop);
        (start..stop).step_by(self.step.max(1))
    }

    /// Indices an assignment to this slice writes to, without clamping.
    ///
    /// Explicit bounds past the end stay out of range so that the write can be
    /// refused instead of silently shortened.
    pub fn assignment_indices(&self, len: usize) -> std::iter::StepBy<Range<usize>> {
        let (start, stop) = self.assignment_bounds(len);
        (start..stop).step_by(self.step.max(1))
    }

    /// Number of indices [`assignment_indices`](Self::assignment_indices) yields.
    pub fn assignment_len(&self, len: usize) -> usize {
        let (start, stop) = self.assignment_bounds(len);
        (stop - start).div_ceil(self.step.max(1))
    }

    /// First index of the assignment that lies at or past `len`, if any.
    pub fn first_out_of_range(&self, len: usize) -> Option<usize> {
        let (start, stop) = self.assignment_bounds(len);
        let step = self.step.max(1);
        let first = if start >= len {
            start
        } else {
            let offset = (len - start).div_ceil(step).checked_mul(step)?;
            start.checked_add(offset)?
        };
        (first < stop).then_some(first)
    }

    fn assignment_bounds(&self, len: usize) -> (usize, usize) {
        let start = self.start.unwrap_or(0);
        let stop = self.stop.unwrap_or(len).max(start);
        (start, stop)
    }
}

impl From<Range<usize>> for Slice {
    fn from(range: Range<usize>) -> Self {
        Self::new(Some(range.start), Some(range.end))
    }
}

impl From<RangeInclusive<usize>> for Slice {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(Some(*range.start()), Some(range.end().saturating_add(1)))
    }
}

impl From<RangeFrom<usize>> for Slice {
    fn from(range: RangeFrom<usize>) -> Self {
        Self::new(Some(range.start), None)
    }
}

impl From<RangeTo<usize>> for Slice {
    fn from(range: RangeTo<usize>) -> Self {
        Self::new(None, Some(range.end))
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::new(None, None)
    }
}
