// Service exports
pub mod input;

pub use input::{load_names, parse_names, InputError};
