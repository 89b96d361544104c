use std::{error, fmt, io};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Raised when an interval is built from bounds with `start > end`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvalidIntervalError {
    start: i64,
    end: i64,
}

impl InvalidIntervalError {
    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }
}

impl fmt::Display for InvalidIntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid interval {}-{}: start is greater than end", self.start, self.end)
    }
}

impl error::Error for InvalidIntervalError {}

impl From<InvalidIntervalError> for io::Error {
    fn from(err: InvalidIntervalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Closed range `[start, end]` of integers, always `start <= end`.
///
/// Ordering is by `start`, then by `end`, which is the order `IntervalSet::merge_all`
/// sorts its input in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Result<Self, InvalidIntervalError> {
        if start > end {
            return Err(InvalidIntervalError { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn point(value: i64) -> Self {
        Self { start: value, end: value }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Number of integers covered. Saturates for the full `i64` range.
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start).saturating_add(1)
    }

    /// True when the two intervals overlap or are separated by a gap of exactly one.
    pub fn touches(&self, other: &Interval) -> bool {
        other.start <= self.end.saturating_add(1) && other.end >= self.start.saturating_sub(1)
    }

    /// True when `self` lies entirely below `other` with a gap greater than one.
    pub fn precedes(&self, other: &Interval) -> bool {
        self.end.saturating_add(1) < other.start
    }

    /// Smallest interval covering both.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for Interval {
    type Err = io::Error;

    /// Parses the `start-end` notation, e.g. `3-5` or `-10--2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || io::Error::new(io::ErrorKind::InvalidInput, format!("malformed interval {:?}", s));

        // the first character may be the sign of start
        let (split, _) = s.char_indices().skip(1).find(|&(_, c)| c == '-').ok_or_else(malformed)?;
        let start = s[..split].trim().parse::<i64>().map_err(|_| malformed())?;
        let end = s[split + 1..].trim().parse::<i64>().map_err(|_| malformed())?;
        Ok(Interval::new(start, end)?)
    }
}

impl From<Interval> for RangeInclusive<i64> {
    fn from(interval: Interval) -> Self {
        interval.start..=interval.end
    }
}

/// Anything `IntervalSet::merge_all` accepts as an input element.
pub trait IntoInterval {
    fn into_interval(self) -> Result<Interval, InvalidIntervalError>;
}

impl IntoInterval for Interval {
    fn into_interval(self) -> Result<Interval, InvalidIntervalError> {
        Ok(self)
    }
}

impl IntoInterval for &Interval {
    fn into_interval(self) -> Result<Interval, InvalidIntervalError> {
        Ok(*self)
    }
}

impl IntoInterval for (i64, i64) {
    fn into_interval(self) -> Result<Interval, InvalidIntervalError> {
        Interval::new(self.0, self.1)
    }
}

impl IntoInterval for RangeInclusive<i64> {
    fn into_interval(self) -> Result<Interval, InvalidIntervalError> {
        let (start, end) = self.into_inner();
        Interval::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use super::{Interval, IntoInterval};

    #[test]
    fn test_new_rejects_reversed_bounds() {
        assert!(Interval::new(3, 3).is_ok());
        assert!(Interval::new(-7, 2).is_ok());

        let err = Interval::new(5, 4).unwrap_err();
        assert_eq!(err.start(), 5);
        assert_eq!(err.end(), 4);
        assert_eq!(err.to_string(), "invalid interval 5-4: start is greater than end");

        let err: io::Error = err.into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_touches_counts_adjacency() {
        let base = Interval::new(10, 20).unwrap();
        let cases = [
            ((15, 25), true),
            ((21, 25), true),
            ((22, 25), false),
            ((1, 9), true),
            ((1, 8), false),
            ((12, 14), true),
            ((0, 100), true),
        ];
        for ((start, end), expected) in cases {
            let other = Interval::new(start, end).unwrap();
            assert_eq!(base.touches(&other), expected, "{} vs {}", base, other);
            assert_eq!(other.touches(&base), expected, "{} vs {}", other, base);
        }

        assert!(Interval::new(1, 8).unwrap().precedes(&base));
        assert!(!Interval::new(1, 9).unwrap().precedes(&base));
    }

    #[test]
    fn test_bounds_do_not_overflow() {
        let top = Interval::new(i64::MAX - 1, i64::MAX).unwrap();
        let bottom = Interval::new(i64::MIN, i64::MIN + 1).unwrap();
        assert!(!top.touches(&bottom));
        assert!(!bottom.touches(&top));
        assert!(bottom.precedes(&top));
        assert!(!top.precedes(&bottom));

        let everything = Interval::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(everything.len(), u64::MAX);
        assert!(everything.touches(&top));
        assert_eq!(Interval::point(0).len(), 1);
        assert_eq!(Interval::new(3, 5).unwrap().len(), 3);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("3-5".parse::<Interval>().unwrap(), Interval::new(3, 5).unwrap());
        assert_eq!(" 12 - 18 ".parse::<Interval>().unwrap(), Interval::new(12, 18).unwrap());
        assert_eq!("-10--2".parse::<Interval>().unwrap(), Interval::new(-10, -2).unwrap());
        assert_eq!("-3-4".parse::<Interval>().unwrap(), Interval::new(-3, 4).unwrap());
        assert_eq!(Interval::new(1188511880, 1188511890).unwrap().to_string(), "1188511880-1188511890");

        for malformed in ["", "-", "5", "5-", "a-b", "1-2-3"] {
            let err = malformed.parse::<Interval>().unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{:?}", malformed);
        }
        assert!("9-1".parse::<Interval>().is_err());
    }

    #[test]
    fn test_into_interval_sources() {
        let expected = Interval::new(2, 6).unwrap();
        assert_eq!((2i64, 6i64).into_interval().unwrap(), expected);
        assert_eq!((2i64..=6).into_interval().unwrap(), expected);
        assert_eq!((&expected).into_interval().unwrap(), expected);
        assert!((6i64, 2i64).into_interval().is_err());
        assert_eq!(std::ops::RangeInclusive::from(expected), 2..=6);
    }
}
