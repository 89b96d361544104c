pub mod common;
pub mod filename;
pub mod input;
