use serde::{Deserialize, Serialize};

/// A person engaged to an advertiser in the final matching
///
/// Indices address the slot in the input lists, so repeated names stay
/// distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    #[serde(rename = "personIndex")]
    pub person_index: usize,
    pub person: String,
    #[serde(rename = "advertiserIndex")]
    pub advertiser_index: usize,
    pub advertiser: String,
    pub ctr: f64,
}

/// An (advertiser, person) pair that would both rather be matched together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockingPair {
    #[serde(rename = "advertiserIndex")]
    pub advertiser_index: usize,
    pub advertiser: String,
    #[serde(rename = "personIndex")]
    pub person_index: usize,
    pub person: String,
    /// CTR of the person for the blocking advertiser
    pub ctr: f64,
}
