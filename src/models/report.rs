use serde::{Deserialize, Serialize};

use crate::core::{MatchResult, Matcher};
use crate::models::domain::{BlockingPair, Pairing};

/// Serializable summary of a matching run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub pairings: Vec<Pairing>,
    #[serde(rename = "totalCtr")]
    pub total_ctr: f64,
    #[serde(rename = "unmatchedPeople")]
    pub unmatched_people: Vec<String>,
    #[serde(rename = "unmatchedAdvertisers")]
    pub unmatched_advertisers: Vec<String>,
    /// Present only when the stability audit ran
    #[serde(rename = "blockingPairs", skip_serializing_if = "Option::is_none", default)]
    pub blocking_pairs: Option<Vec<BlockingPair>>,
}

impl MatchReport {
    pub fn new(matcher: &Matcher, result: &MatchResult) -> Self {
        let mut person_matched = vec![false; matcher.people().len()];
        let mut advertiser_matched = vec![false; matcher.advertisers().len()];
        for pairing in &result.pairings {
            person_matched[pairing.person_index] = true;
            advertiser_matched[pairing.advertiser_index] = true;
        }

        Self {
            pairings: result.pairings.clone(),
            total_ctr: result.total_ctr,
            unmatched_people: unmatched(matcher.people(), &person_matched),
            unmatched_advertisers: unmatched(matcher.advertisers(), &advertiser_matched),
            blocking_pairs: None,
        }
    }

    pub fn with_blocking_pairs(mut self, blocking_pairs: Vec<BlockingPair>) -> Self {
        self.blocking_pairs = Some(blocking_pairs);
        self
    }
}

fn unmatched(names: &[String], matched: &[bool]) -> Vec<String> {
    names
        .iter()
        .zip(matched)
        .filter(|(_, is_matched)| !**is_matched)
        .map(|(name, _)| name.clone())
        .collect()
}
