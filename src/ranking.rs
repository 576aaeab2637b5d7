//! Orderings applied to the candidate list of one query.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::distance::levenshtein;
use crate::frequency::FrequencyModel;

/// Which ordering the engine applies. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Exact word, then bigram count after the previous word, then unigram count.
    #[default]
    Frequency,
    /// Extensions of the typed word, then edit distance to it.
    Proximity,
}

impl RankingMode {
    /// Maps the on/off "smart ordering" switch onto a mode.
    pub fn from_smart(smart: bool) -> Self {
        if smart {
            RankingMode::Proximity
        } else {
            RankingMode::Frequency
        }
    }

    pub(crate) fn to_u8(self) -> u8 {
        match self {
            RankingMode::Frequency => 0,
            RankingMode::Proximity => 1,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            1 => RankingMode::Proximity,
            _ => RankingMode::Frequency,
        }
    }
}

/// A ranking bound to one query: the typed word, its previous word and the
/// statistics to consult.
#[derive(Debug, Clone, Copy)]
pub enum RankingPolicy<'a> {
    Frequency {
        current: &'a str,
        previous: Option<&'a str>,
        model: &'a FrequencyModel,
    },
    Proximity {
        current: &'a str,
    },
}

impl<'a> RankingPolicy<'a> {
    pub fn new(
        mode: RankingMode,
        current: &'a str,
        previous: Option<&'a str>,
        model: &'a FrequencyModel,
    ) -> Self {
        match mode {
            RankingMode::Frequency => RankingPolicy::Frequency {
                current,
                previous,
                model,
            },
            RankingMode::Proximity => RankingPolicy::Proximity { current },
        }
    }

    /// Sorts `candidates` in place. Every ordering ends on the candidate text
    /// itself, so equal-ranked candidates always land in the same order.
    pub fn rank(&self, candidates: &mut [String]) {
        match *self {
            RankingPolicy::Frequency {
                current,
                previous,
                model,
            } => {
                let previous = previous.unwrap_or("");
                candidates.sort_by_cached_key(|candidate| {
                    // split suggestions ("sun flower") are scored on their first word
                    let head = candidate.split(' ').next().unwrap_or(candidate.as_str());
                    (
                        candidate.as_str() != current,
                        Reverse(model.bigram_count(previous, head)),
                        Reverse(model.unigram_count(head)),
                        candidate.clone(),
                    )
                });
            }
            RankingPolicy::Proximity { current } => {
                // the key is computed once per candidate, which memoizes the distance
                candidates.sort_by_cached_key(|candidate| {
                    (
                        !candidate.starts_with(current),
                        levenshtein(candidate, current),
                        candidate.clone(),
                    )
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn ranked(policy: RankingPolicy<'_>, words: &[&str]) -> Vec<String> {
        let mut candidates = strings(words);
        policy.rank(&mut candidates);
        candidates
    }

    #[test]
    fn test_frequency_prefers_bigram() {
        let model = FrequencyModel::build(["the", "cat", "sat", "a", "hat"]);
        let policy = RankingPolicy::new(RankingMode::Frequency, "xat", Some("the"), &model);
        assert_eq!(ranked(policy, &["hat", "cat"]), strings(&["cat", "hat"]));
    }

    #[test]
    fn test_frequency_exact_word_first() {
        let model = FrequencyModel::build(["cat", "cat", "cat", "cot"]);
        let policy = RankingPolicy::new(RankingMode::Frequency, "cot", None, &model);
        assert_eq!(ranked(policy, &["cat", "cot"]), strings(&["cot", "cat"]));
    }

    #[test]
    fn test_frequency_unigram_then_lexical() {
        let model = FrequencyModel::build(["bat", "bat", "rat", "mat"]);
        let policy = RankingPolicy::new(RankingMode::Frequency, "zat", None, &model);
        assert_eq!(
            ranked(policy, &["rat", "mat", "bat", "vat"]),
            strings(&["bat", "mat", "rat", "vat"])
        );
    }

    #[test]
    fn test_frequency_bigram_beats_unigram() {
        let model = FrequencyModel::build(["big", "dog", "hot", "dig", "dig", "dig"]);
        let policy = RankingPolicy::new(RankingMode::Frequency, "dag", Some("big"), &model);
        assert_eq!(ranked(policy, &["dig", "dog"]), strings(&["dog", "dig"]));
    }

    #[test]
    fn test_frequency_blank_previous_is_ignored() {
        let model = FrequencyModel::build(["red", "ant", "ant"]);
        let policy = RankingPolicy::new(RankingMode::Frequency, "xnt", Some(" "), &model);
        assert_eq!(ranked(policy, &["red", "ant"]), strings(&["ant", "red"]));
    }

    #[test]
    fn test_frequency_split_candidate_uses_first_word() {
        let model = FrequencyModel::build(["sun", "sun", "sunflower"]);
        let policy = RankingPolicy::new(RankingMode::Frequency, "sunflowr", None, &model);
        assert_eq!(
            ranked(policy, &["sunflower", "sun flower"]),
            strings(&["sun flower", "sunflower"])
        );
    }

    #[test]
    fn test_proximity_prefers_extensions_then_distance() {
        let model = FrequencyModel::default();
        let policy = RankingPolicy::new(RankingMode::Proximity, "car", None, &model);
        assert_eq!(
            ranked(policy, &["bar", "carton", "cart", "cat", "car"]),
            strings(&["car", "cart", "carton", "bar", "cat"])
        );
    }

    #[test]
    fn test_proximity_ignores_frequency() {
        let model = FrequencyModel::build(["cot", "cot", "cot"]);
        let policy = RankingPolicy::new(RankingMode::Proximity, "cat", Some("cot"), &model);
        assert_eq!(ranked(policy, &["cot", "cut"]), strings(&["cot", "cut"]));
        assert_eq!(ranked(policy, &["cut", "cot"]), strings(&["cot", "cut"]));
    }

    #[test]
    fn test_mode_from_smart() {
        assert_eq!(RankingMode::from_smart(true), RankingMode::Proximity);
        assert_eq!(RankingMode::from_smart(false), RankingMode::Frequency);
        assert_eq!(RankingMode::default(), RankingMode::Frequency);
    }

    #[test]
    fn test_mode_u8_encoding() {
        for mode in [RankingMode::Frequency, RankingMode::Proximity] {
            assert_eq!(RankingMode::from_u8(mode.to_u8()), mode);
        }
    }
}
