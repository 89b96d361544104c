use std::io;
use crate::core::interval::Interval;
use crate::core::set::IntervalSet;
use crate::puzzle::{invalid_input, Puzzle};
use crate::utils::input::Input;

/// Day 5: a database of fresh ingredient ID ranges followed by the IDs on hand.
pub struct Cafeteria;

struct Inventory {
    fresh: IntervalSet,
    available: Vec<i64>,
}

impl Inventory {
    fn parse(input: &Input) -> io::Result<Self> {
        let lines = input.lines().collect::<Vec<_>>();
        let blank = lines
            .iter()
            .position(|line| line.is_empty())
            .ok_or_else(|| invalid_input("missing blank line between fresh ranges and available ids"))?;

        let ranges = lines[..blank]
            .iter()
            .map(|line| line.parse::<Interval>())
            .collect::<io::Result<Vec<_>>>()?;
        let fresh = IntervalSet::merge_all(ranges)?;

        let mut available = Vec::with_capacity(lines.len() - blank - 1);
        for line in lines[blank + 1..].iter().filter(|line| !line.is_empty()) {
            let id = line.trim().parse::<i64>().map_err(|_| invalid_input(format!("malformed ingredient id {:?}", line)))?;
            available.push(id);
        }

        log::debug!("{} fresh ranges, {} available ids", fresh.len(), available.len());
        Ok(Self { fresh, available })
    }
}

impl Puzzle for Cafeteria {
    fn day(&self) -> u32 {
        5
    }

    fn name(&self) -> &'static str {
        "Cafeteria"
    }

    /// How many of the available ingredient IDs are fresh.
    fn part_one(&self, input: &Input) -> io::Result<u64> {
        let inventory = Inventory::parse(input)?;
        Ok(inventory.available.iter().filter(|&&id| inventory.fresh.contains(id)).count() as u64)
    }

    /// How many ingredient IDs the fresh ranges consider fresh at all.
    fn part_two(&self, input: &Input) -> io::Result<u64> {
        Ok(Inventory::parse(input)?.fresh.covered())
    }
}
