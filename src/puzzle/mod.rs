use std::io;
use crate::utils::input::Input;

pub mod cafeteria;
pub mod gift_shop;

/// One day of the puzzle calendar: a name and two answers computed from the same input.
pub trait Puzzle {
    fn day(&self) -> u32;
    fn name(&self) -> &'static str;
    fn part_one(&self, input: &Input) -> io::Result<u64>;
    fn part_two(&self, input: &Input) -> io::Result<u64>;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Answer {
    pub part_one: u64,
    pub part_two: u64,
}

pub fn all() -> Vec<Box<dyn Puzzle>> {
    vec![
        Box::new(gift_shop::GiftShop),
        Box::new(cafeteria::Cafeteria),
    ]
}

pub fn find(day: u32) -> Option<Box<dyn Puzzle>> {
    all().into_iter().find(|puzzle| puzzle.day() == day)
}

pub fn solve(puzzle: &dyn Puzzle, input: &Input) -> io::Result<Answer> {
    if puzzle.day() != input.day() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput,
                                  format!("day {} input given to the day {} puzzle", input.day(), puzzle.day())));
    }

    let answer = Answer {
        part_one: puzzle.part_one(input)?,
        part_two: puzzle.part_two(input)?,
    };
    log::info!("Solved day {} ({}): part one {}, part two {}",
        puzzle.day(), puzzle.name(), answer.part_one, answer.part_two);
    Ok(answer)
}

fn invalid_input<T: AsRef<str>>(msg: T) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg.as_ref().to_string())
}

#[cfg(test)]
mod tests {
    use std::io;
    use crate::utils::input::Input;
    use super::{find, solve, Answer};

    #[test]
    fn test_find_registered_days() {
        assert_eq!(find(2).unwrap().name(), "Gift Shop");
        assert_eq!(find(5).unwrap().name(), "Cafeteria");
        assert!(find(1).is_none());
        assert!(find(26).is_none());
    }

    #[test]
    fn test_solve_checks_day() {
        let puzzle = find(5).unwrap();
        let input = Input::new(5, "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n");
        assert_eq!(solve(puzzle.as_ref(), &input).unwrap(), Answer { part_one: 3, part_two: 14 });

        let input = Input::new(2, "11-22");
        let err = solve(puzzle.as_ref(), &input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
