mod core;
mod utils;
pub mod puzzle;

pub use crate::core::interval::{IntoInterval, Interval, InvalidIntervalError};
pub use crate::core::set::IntervalSet;
pub use crate::utils::input::{available_days, Input};

#[derive(Clone, Debug)]
pub struct Options {
    /// Directory holding the `day_NN.txt` input files.
    pub inputs_dir: String,
    /// log4rs YAML configuration, read by the binary only.
    pub log_config: String,
    /// Read `day_NN.example.txt` instead of the real input.
    pub example: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            inputs_dir: String::from("input"),
            log_config: String::from("log4rs.yaml"),
            example: false,
        }
    }
}
