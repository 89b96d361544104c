use std::{fmt, slice, vec};
use crate::core::interval::{Interval, IntoInterval, InvalidIntervalError};

/// Sorted, pairwise disjoint intervals where no two neighbours touch:
/// for consecutive `a`, `b` it always holds that `b.start > a.end + 1`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self {
            intervals: Vec::new()
        }
    }

    /// Wraps intervals that are already sorted, disjoint and non-touching.
    /// Only debug builds check this.
    pub fn from_sorted(intervals: Vec<Interval>) -> Self {
        let set = Self { intervals };
        debug_assert!(set.is_normalized(), "unsorted or touching intervals: {}", set);
        set
    }

    /// Collapses arbitrary intervals into their minimal disjoint representation.
    ///
    /// Every element is validated before anything is merged, so an invalid
    /// element fails the whole call.
    pub fn merge_all<I>(intervals: I) -> Result<Self, InvalidIntervalError>
    where
        I: IntoIterator,
        I::Item: IntoInterval,
    {
        let mut sorted = intervals
            .into_iter()
            .map(IntoInterval::into_interval)
            .collect::<Result<Vec<_>, _>>()?;
        sorted.sort_unstable();

        let total = sorted.len();
        let mut merged: Vec<Interval> = Vec::with_capacity(total);
        for next in sorted {
            match merged.last_mut() {
                // sorted by start, so touching only means next.start <= last.end + 1
                Some(last) if last.touches(&next) => *last = last.hull(&next),
                _ => merged.push(next),
            }
        }

        log::debug!("merged {} intervals into {}", total, merged.len());
        Ok(Self { intervals: merged })
    }

    /// Adds `interval`, absorbing every existing interval it overlaps or is adjacent to.
    pub fn insert(&mut self, interval: Interval) {
        debug_assert!(self.is_normalized(), "unsorted or touching intervals: {}", self);

        // both predicates are monotone over a normalized set
        let lower = self.intervals.partition_point(|existing| existing.precedes(&interval));
        let upper = self.intervals.partition_point(|existing| !interval.precedes(existing));

        let merged = self.intervals[lower..upper]
            .iter()
            .fold(interval, |acc, existing| acc.hull(existing));
        self.intervals.splice(lower..upper, [merged]);
    }

    /// Same as `insert`, leaving `self` untouched.
    pub fn inserted(&self, interval: Interval) -> Self {
        let mut set = self.clone();
        set.insert(interval);
        set
    }

    pub fn contains(&self, value: i64) -> bool {
        let index = self.intervals.partition_point(|interval| interval.start() <= value);
        index > 0 && self.intervals[index - 1].contains(value)
    }

    /// Number of integers covered by the whole set.
    pub fn covered(&self) -> u64 {
        self.intervals.iter().fold(0u64, |total, interval| total.saturating_add(interval.len()))
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn into_vec(self) -> Vec<Interval> {
        self.intervals
    }

    pub fn is_normalized(&self) -> bool {
        self.intervals.windows(2).all(|pair| pair[0].precedes(&pair[1]))
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "]")
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut set = IntervalSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Interval> for IntervalSet {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl IntoIterator for IntervalSet {
    type Item = Interval;
    type IntoIter = vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}
