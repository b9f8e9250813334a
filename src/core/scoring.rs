use crate::core::factors::shares_factor;

/// Multiplier applied to the vowel count when the advertiser name length is even
const VOWEL_WEIGHT: f64 = 1.5;

/// Multiplier applied to the consonant count when the advertiser name length is odd
const CONSONANT_WEIGHT: f64 = 1.0;

/// Bonus applied when the two name lengths share a factor other than 1
const SHARED_FACTOR_BONUS: f64 = 1.5;

/// Letter counts of a name; anything that is not an ASCII letter is skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterCounts {
    pub vowels: usize,
    pub consonants: usize,
}

impl LetterCounts {
    pub fn of(name: &str) -> Self {
        name.chars().fold(Self::default(), |mut counts, c| {
            if is_vowel(c) {
                counts.vowels += 1;
            } else if c.is_ascii_alphabetic() {
                counts.consonants += 1;
            }
            counts
        })
    }
}

/// Calculate the click-through rate (CTR) of a person for an advertiser
///
/// Scoring formula:
/// base = (
///     1.5 * vowels(person)       # advertiser name length is even
///     1.0 * consonants(person)   # advertiser name length is odd
/// )
/// ctr = base * 1.5 if the two name lengths share a divisor other than 1
///
/// Total over every input: empty names score 0, never NaN or negative.
pub fn ctr(person: &str, advertiser: &str) -> f64 {
    let counts = LetterCounts::of(person);
    let person_len = name_len(person);
    let advertiser_len = name_len(advertiser);

    let base = if advertiser_len % 2 == 0 {
        VOWEL_WEIGHT * counts.vowels as f64
    } else {
        CONSONANT_WEIGHT * counts.consonants as f64
    };

    if shares_factor(person_len, advertiser_len) {
        base * SHARED_FACTOR_BONUS
    } else {
        base
    }
}

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

#[inline]
fn name_len(name: &str) -> usize {
    name.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_counts() {
        assert_eq!(LetterCounts::of("Anna"), LetterCounts { vowels: 2, consonants: 2 });
        assert_eq!(LetterCounts::of("BOB"), LetterCounts { vowels: 1, consonants: 2 });
        assert_eq!(LetterCounts::of(""), LetterCounts::default());
    }

    #[test]
    fn test_non_letters_ignored() {
        let counts = LetterCounts::of("Jo Ann-3!");
        assert_eq!(counts.vowels, 2);
        assert_eq!(counts.consonants, 3);

        // Non-ASCII letters are neither vowels nor consonants
        let accented = LetterCounts::of("Zoë");
        assert_eq!(accented, LetterCounts { vowels: 1, consonants: 1 });
    }

    #[test]
    fn test_odd_advertiser_counts_consonants() {
        // "Anna" (4) vs "Cat" (3): no shared factor
        assert_eq!(ctr("Anna", "Cat"), 2.0);
        // "Bob" (3) vs "Cat" (3): shared factor 3
        assert_eq!(ctr("Bob", "Cat"), 3.0);
    }

    #[test]
    fn test_even_advertiser_counts_vowels() {
        // "Anna" (4) vs "Lisa" (4): 1.5 * 2 vowels, shared factor 2
        assert_eq!(ctr("Anna", "Lisa"), 4.5);
        // "Bob" (3) vs "Lisa" (4): 1.5 * 1 vowel, no shared factor
        assert_eq!(ctr("Bob", "Lisa"), 1.5);
    }

    #[test]
    fn test_length_counts_spaces() {
        // "Al Bo" has length 5, "Acme!" has length 5
        assert_eq!(ctr("Al Bo", "Acme!"), 2.0 * 1.5);
        assert_eq!(ctr("Al Bo", "X"), 2.0);
    }

    #[test]
    fn test_empty_names() {
        assert_eq!(ctr("", ""), 0.0);
        assert_eq!(ctr("", "Cat"), 0.0);
        assert_eq!(ctr("Anna", ""), 3.0);
    }

    #[test]
    fn test_deterministic() {
        let first = ctr("Margaret Hamilton", "Acme Widgets");
        let second = ctr("Margaret Hamilton", "Acme Widgets");
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
