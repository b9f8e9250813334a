// Core algorithm exports
pub mod factors;
pub mod matcher;
pub mod scoring;
pub mod stability;

pub use factors::{divisors, shares_factor};
pub use matcher::{Matcher, MatchResult};
pub use scoring::{ctr, LetterCounts};
pub use stability::{blocking_pairs, is_stable};
