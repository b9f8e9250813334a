//! Ad Matcher - stable assignment of advertisers to people
//!
//! Every advertiser ranks every person by a click-through rate (CTR) derived
//! from the two names, then advertisers propose in rank order until each is
//! matched or has run out of people (Gale-Shapley deferred acceptance).

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod services;

// Re-export commonly used types
pub use crate::core::{ctr, blocking_pairs, is_stable, Matcher, MatchResult};
pub use models::{Pairing, BlockingPair, MatchReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::new(["Anna", "Bob"], ["Cat", "Dog"]);
        let result = matcher.run();
        assert!(is_stable(&matcher, &result));
        assert_eq!(ctr("Bob", "Cat"), 3.0);
    }
}
