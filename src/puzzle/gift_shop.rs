use std::io;
use crate::core::interval::Interval;
use crate::puzzle::{invalid_input, Puzzle};
use crate::utils::common::count_digits;
use crate::utils::input::Input;

/// Day 2: sum the product IDs inside the given ranges whose digits are one
/// sequence repeated.
pub struct GiftShop;

impl Puzzle for GiftShop {
    fn day(&self) -> u32 {
        2
    }

    fn name(&self) -> &'static str {
        "Gift Shop"
    }

    fn part_one(&self, input: &Input) -> io::Result<u64> {
        sum_matching(&parse_ranges(input)?, repeated_twice)
    }

    fn part_two(&self, input: &Input) -> io::Result<u64> {
        sum_matching(&parse_ranges(input)?, repeated_at_least_twice)
    }
}

/// Comma separated `start-end` ranges, possibly wrapped over several lines.
fn parse_ranges(input: &Input) -> io::Result<Vec<Interval>> {
    let mut ranges = Vec::new();
    for part in input.text().split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let range = part.parse::<Interval>()?;
        if range.start() < 0 {
            return Err(invalid_input(format!("negative product id in range {}", range)));
        }
        ranges.push(range);
    }
    Ok(ranges)
}

fn sum_matching(ranges: &[Interval], matches: fn(u64) -> bool) -> io::Result<u64> {
    let mut sum = 0u64;
    for range in ranges {
        // parse_ranges rejected negative starts
        let (start, end) = (range.start() as u64, range.end() as u64);
        for id in (start..=end).filter(|&id| matches(id)) {
            sum = sum.checked_add(id).ok_or_else(|| invalid_input("sum of invalid ids overflows"))?;
        }
    }
    Ok(sum)
}

/// `6464`, `123123`: the first half of the digits equals the second half.
fn repeated_twice(id: u64) -> bool {
    let digits = count_digits(id);
    if digits % 2 != 0 {
        return false;
    }
    let base = 10u64.pow(digits / 2);
    id / base == id % base
}

/// `111`, `12121212`, `123123`: some digit sequence repeated two or more times.
fn repeated_at_least_twice(id: u64) -> bool {
    let digits = count_digits(id);
    (1..=digits / 2)
        .filter(|width| digits % width == 0)
        .any(|width| {
            let base = 10u64.pow(width);
            let pattern = id % base;
            // a pattern with a leading zero rebuilds to fewer digits and never matches
            let rebuilt = (0..digits / width).fold(0u64, |acc, _| acc.wrapping_mul(base).wrapping_add(pattern));
            rebuilt == id
        })
}
