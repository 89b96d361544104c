use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum InputKind {
    Puzzle,
    Example,
}

fn make_file_name(inputs_dir: &str, day: u32, suffix: &str) -> OsString {
    let mut path = PathBuf::from(inputs_dir);
    path.push(format!("day_{:02}{}", day, suffix));
    path.into_os_string()
}

pub fn make_input_file_name(inputs_dir: &str, day: u32, kind: InputKind) -> OsString {
    match kind {
        InputKind::Puzzle => make_file_name(inputs_dir, day, ".txt"),
        InputKind::Example => make_file_name(inputs_dir, day, ".example.txt"),
    }
}

pub fn parse_input_file_name(filename: &str) -> Option<(InputKind, u32)> {
    let rest = filename.strip_prefix("day_")?;
    let (number, kind) = if let Some(number) = rest.strip_suffix(".example.txt") {
        (number, InputKind::Example)
    } else {
        (rest.strip_suffix(".txt")?, InputKind::Puzzle)
    };

    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((kind, number.parse::<u32>().ok()?))
}
