use std::{fs, io};
use std::path::Path;
use crate::Options;
use crate::utils::common::checksum;
use crate::utils::filename::{self, InputKind};

/// The text of one puzzle day, as read from the inputs directory.
#[derive(Clone, Debug)]
pub struct Input {
    day: u32,
    text: String,
    checksum: u32,
}

impl Input {
    pub fn new<T: Into<String>>(day: u32, text: T) -> Self {
        let text = text.into();
        let checksum = checksum(text.as_bytes());
        Self { day, text, checksum }
    }

    pub fn load(options: &Options, day: u32) -> io::Result<Self> {
        let path = filename::make_input_file_name(&options.inputs_dir, day, input_kind(options));
        let text = fs::read_to_string(&path).map_err(|err| {
            io::Error::new(err.kind(), format!("cannot read input {}: {}", Path::new(&path).display(), err))
        })?;

        let input = Self::new(day, text);
        log::info!("Loaded day {} input {}: {} bytes, crc32c={:08x}",
            day, Path::new(&path).display(), input.text.len(), input.checksum);
        Ok(input)
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Lines without trailing whitespace, so `\r\n` files read like `\n` ones.
    pub fn lines(&self) -> impl Iterator<Item=&str> {
        self.text.lines().map(str::trim_end)
    }
}

fn input_kind(options: &Options) -> InputKind {
    if options.example { InputKind::Example } else { InputKind::Puzzle }
}

/// Days that have an input file of the configured kind, ascending.
pub fn available_days(options: &Options) -> io::Result<Vec<u32>> {
    let kind = input_kind(options);
    let mut days = Vec::new();
    for entry in fs::read_dir(&options.inputs_dir)? {
        let name = entry?.file_name();
        match name.to_str().and_then(filename::parse_input_file_name) {
            Some((found, day)) if found == kind => days.push(day),
            _ => {}
        }
    }
    days.sort_unstable();
    days.dedup();
    Ok(days)
}
