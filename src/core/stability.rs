use crate::core::matcher::{MatchResult, Matcher};
use crate::models::BlockingPair;

/// Find every blocking pair in a matching
///
/// An advertiser and a person block when each is either unmatched or strictly
/// prefers the other over its current partner. Ties never block, which mirrors
/// the incumbent-wins rule of the proposal loop.
pub fn blocking_pairs(matcher: &Matcher, result: &MatchResult) -> Vec<BlockingPair> {
    let people = matcher.people();
    let advertisers = matcher.advertisers();

    let mut person_partner: Vec<Option<usize>> = vec![None; people.len()];
    let mut advertiser_partner: Vec<Option<usize>> = vec![None; advertisers.len()];
    for pairing in &result.pairings {
        person_partner[pairing.person_index] = Some(pairing.advertiser_index);
        advertiser_partner[pairing.advertiser_index] = Some(pairing.person_index);
    }

    let mut blocking = Vec::new();

    for (advertiser, current_person) in advertiser_partner.iter().enumerate() {
        for person in 0..people.len() {
            if *current_person == Some(person) {
                continue;
            }

            let candidate = matcher.ctr_of(person, advertiser);

            let advertiser_prefers = match current_person {
                None => true,
                Some(current) => candidate > matcher.ctr_of(*current, advertiser),
            };
            if !advertiser_prefers {
                continue;
            }

            let person_prefers = match person_partner[person] {
                None => true,
                Some(current) => candidate > matcher.ctr_of(person, current),
            };

            if person_prefers {
                blocking.push(BlockingPair {
                    advertiser_index: advertiser,
                    advertiser: advertisers[advertiser].clone(),
                    person_index: person,
                    person: people[person].clone(),
                    ctr: candidate,
                });
            }
        }
    }

    if !blocking.is_empty() {
        tracing::warn!("Matching has {} blocking pairs", blocking.len());
    }

    blocking
}

/// `true` when no blocking pair exists
pub fn is_stable(matcher: &Matcher, result: &MatchResult) -> bool {
    blocking_pairs(matcher, result).is_empty()
}
