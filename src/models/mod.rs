// Model exports
pub mod domain;
pub mod report;

pub use domain::{Pairing, BlockingPair};
pub use report::MatchReport;
