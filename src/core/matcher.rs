use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::core::scoring::ctr;
use crate::models::Pairing;

/// Result of the matching process
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Final pairs, in the order each person was first engaged
    pub pairings: Vec<Pairing>,
    pub total_ctr: f64,
    /// Number of proposals made (cursor advances across all advertisers)
    pub proposals: usize,
    /// Number of passes over the free advertisers
    pub rounds: usize,
    /// Advertisers that ran out of people without a match, in the order they gave up
    pub exhausted: Vec<usize>,
}

impl MatchResult {
    /// Advertiser slot a person slot ended up with
    pub fn advertiser_for(&self, person_index: usize) -> Option<usize> {
        self.pairings
            .iter()
            .find(|p| p.person_index == person_index)
            .map(|p| p.advertiser_index)
    }

    /// Person slot an advertiser slot ended up with
    pub fn person_for(&self, advertiser_index: usize) -> Option<usize> {
        self.pairings
            .iter()
            .find(|p| p.advertiser_index == advertiser_index)
            .map(|p| p.person_index)
    }
}

/// Stable matching of advertisers to people - advertisers propose, people accept
///
/// Construction scores every (advertiser, person) pair once and sorts each
/// advertiser's preference list by descending CTR. Equal scores keep the
/// input order of the people list.
///
/// # Matching Rules
/// 1. Every free advertiser proposes once per pass, to the next person on its list
/// 2. An unengaged person accepts
/// 3. An engaged person switches only for a strictly higher CTR; the old advertiser becomes free
/// 4. An advertiser that has proposed to everyone is exhausted and leaves the pool
#[derive(Debug, Clone)]
pub struct Matcher {
    people: Vec<String>,
    advertisers: Vec<String>,
    /// `ctr_table[advertiser][person]`
    ctr_table: Vec<Vec<f64>>,
    /// Person indices per advertiser, best first
    preferences: Vec<Vec<usize>>,
}

impl Matcher {
    pub fn new<P, A>(people: P, advertisers: A) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let people: Vec<String> = people.into_iter().map(Into::into).collect();
        let advertisers: Vec<String> = advertisers.into_iter().map(Into::into).collect();

        let ctr_table: Vec<Vec<f64>> = advertisers
            .iter()
            .map(|advertiser| people.iter().map(|person| ctr(person, advertiser)).collect())
            .collect();

        let preferences = ctr_table.iter().map(|row| rank_people(row)).collect();

        debug!(
            people = people.len(),
            advertisers = advertisers.len(),
            "Built advertiser preference lists"
        );

        Self {
            people,
            advertisers,
            ctr_table,
            preferences,
        }
    }

    pub fn people(&self) -> &[String] {
        &self.people
    }

    pub fn advertisers(&self) -> &[String] {
        &self.advertisers
    }

    /// Person indices in the order `advertiser` will propose to them
    pub fn preference_list(&self, advertiser: usize) -> &[usize] {
        &self.preferences[advertiser]
    }

    /// CTR of a person slot for an advertiser slot
    #[inline]
    pub fn ctr_of(&self, person: usize, advertiser: usize) -> f64 {
        self.ctr_table[advertiser][person]
    }

    /// Run deferred acceptance to completion
    ///
    /// All proposal state lives in the call, so repeated runs give identical results.
    pub fn run(&self) -> MatchResult {
        let people_count = self.people.len();

        let mut cursors = vec![0usize; self.advertisers.len()];
        let mut engaged: Vec<Option<usize>> = vec![None; people_count];
        let mut engagement_order = Vec::new();
        let mut exhausted = Vec::new();
        let mut free: Vec<usize> = (0..self.advertisers.len()).collect();
        let mut proposals = 0;
        let mut rounds = 0;

        while !free.is_empty() {
            rounds += 1;
            let pass = std::mem::take(&mut free);
            let mut displaced = Vec::new();

            debug!(round = rounds, free = pass.len(), "Starting proposal pass");

            for advertiser in pass {
                let cursor = cursors[advertiser];
                if cursor == people_count {
                    trace!(advertiser, "Advertiser exhausted its preference list");
                    exhausted.push(advertiser);
                    continue;
                }

                let person = self.preferences[advertiser][cursor];

                match engaged[person] {
                    None => {
                        trace!(advertiser, person, "Proposal accepted");
                        engaged[person] = Some(advertiser);
                        engagement_order.push(person);
                    }
                    Some(incumbent) => {
                        if self.ctr_of(person, advertiser) > self.ctr_of(person, incumbent) {
                            trace!(advertiser, person, incumbent, "Incumbent displaced");
                            engaged[person] = Some(advertiser);
                            displaced.push(incumbent);
                        } else {
                            trace!(advertiser, person, incumbent, "Proposal rejected");
                            free.push(advertiser);
                        }
                    }
                }

                cursors[advertiser] += 1;
                proposals += 1;
            }

            // Rejected advertisers keep their place ahead of the newly displaced
            free.extend(displaced);
        }

        let pairings: Vec<Pairing> = engagement_order
            .into_iter()
            .filter_map(|person| engaged[person].map(|advertiser| self.pairing(person, advertiser)))
            .collect();

        // Fold from +0.0: an empty f64 sum is -0.0
        let total_ctr = pairings.iter().fold(0.0_f64, |total, p| total + p.ctr);

        debug!(
            matched = pairings.len(),
            exhausted = exhausted.len(),
            proposals,
            rounds,
            total_ctr,
            "Matching complete"
        );

        MatchResult {
            pairings,
            total_ctr,
            proposals,
            rounds,
            exhausted,
        }
    }

    fn pairing(&self, person: usize, advertiser: usize) -> Pairing {
        Pairing {
            person_index: person,
            person: self.people[person].clone(),
            advertiser_index: advertiser,
            advertiser: self.advertisers[advertiser].clone(),
            ctr: self.ctr_of(person, advertiser),
        }
    }
}

/// Order person indices by descending CTR; the sort is stable so ties keep input order
fn rank_people(row: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..row.len()).collect();
    order.sort_by(|&a, &b| row[b].partial_cmp(&row[a]).unwrap_or(Ordering::Equal));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_lists_sorted_by_ctr() {
        // Against "Lisa" (even length): Anna 4.5, Bob 1.5, Eve 3.0
        let matcher = Matcher::new(["Anna", "Bob", "Eve"], ["Lisa"]);
        assert_eq!(matcher.preference_list(0), &[0, 2, 1]);
    }

    #[test]
    fn test_preference_ties_keep_input_order() {
        // Two consonants each, shared factor 3 with "Cat": all score 3.0
        let matcher = Matcher::new(["Ann", "Bob", "Tom"], ["Cat"]);
        assert_eq!(matcher.ctr_of(0, 0), 3.0);
        assert_eq!(matcher.ctr_of(1, 0), 3.0);
        assert_eq!(matcher.ctr_of(2, 0), 3.0);
        assert_eq!(matcher.preference_list(0), &[0, 1, 2]);
    }

    #[test]
    fn test_worked_example() {
        let matcher = Matcher::new(["Anna", "Bob"], ["Cat", "Dog"]);
        let result = matcher.run();

        assert_eq!(result.advertiser_for(1), Some(0)); // Bob -> Cat
        assert_eq!(result.advertiser_for(0), Some(1)); // Anna -> Dog
        assert_eq!(result.total_ctr, 5.0);
        assert_eq!(result.proposals, 3);
        assert_eq!(result.rounds, 2);
        assert!(result.exhausted.is_empty());

        // Bob was engaged first
        assert_eq!(result.pairings[0].person, "Bob");
        assert_eq!(result.pairings[1].person, "Anna");
    }

    #[test]
    fn test_strict_improvement_displaces_incumbent() {
        // Anna scores 2.0 for "Cat" and 4.5 for "Lisa"
        let matcher = Matcher::new(["Anna"], ["Cat", "Lisa"]);
        let result = matcher.run();

        assert_eq!(result.advertiser_for(0), Some(1));
        assert_eq!(result.total_ctr, 4.5);
        assert_eq!(result.exhausted, vec![0]);
        assert_eq!(result.rounds, 2);
    }

    #[test]
    fn test_equal_score_keeps_incumbent() {
        let matcher = Matcher::new(["Anna"], ["Cat", "Dog"]);
        let result = matcher.run();

        assert_eq!(result.advertiser_for(0), Some(0));
        assert_eq!(result.person_for(1), None);
        assert_eq!(result.exhausted, vec![1]);
    }

    #[test]
    fn test_empty_inputs() {
        let no_people = Matcher::new(Vec::<String>::new(), ["Cat", "Dog"]).run();
        assert!(no_people.pairings.is_empty());
        assert_eq!(no_people.total_ctr.to_bits(), 0.0f64.to_bits());
        assert_eq!(no_people.proposals, 0);
        assert_eq!(no_people.exhausted, vec![0, 1]);

        let no_advertisers = Matcher::new(["Anna", "Bob"], Vec::<String>::new()).run();
        assert!(no_advertisers.pairings.is_empty());
        assert_eq!(no_advertisers.total_ctr.to_bits(), 0.0f64.to_bits());
        assert_eq!(no_advertisers.rounds, 0);
    }

    #[test]
    fn test_duplicate_names_are_distinct_slots() {
        let matcher = Matcher::new(["Anna", "Anna"], ["Cat", "Cat"]);
        let result = matcher.run();

        assert_eq!(result.pairings.len(), 2);
        assert_eq!(result.advertiser_for(0), Some(0));
        assert_eq!(result.advertiser_for(1), Some(1));
        assert_eq!(result.total_ctr, 4.0);
    }

    #[test]
    fn test_proposals_bounded() {
        let people = ["Anna", "Bob", "Christopher", "Di", "Eve"];
        let advertisers = ["Cat", "Lisa", "Acme", "Widgets", "X", "Orbital", "Ba"];
        let matcher = Matcher::new(people, advertisers);
        let result = matcher.run();

        assert!(result.proposals <= people.len() * advertisers.len());
        assert_eq!(result.pairings.len(), people.len());
        assert_eq!(result.exhausted.len(), advertisers.len() - people.len());
    }

    #[test]
    fn test_run_is_repeatable() {
        let matcher = Matcher::new(["Anna", "Bob", "Eve"], ["Cat", "Lisa"]);
        assert_eq!(matcher.run(), matcher.run());
    }
}
