pub mod interval;
pub mod set;
