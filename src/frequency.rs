use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct Gram {
    count: u32,
    followers: HashMap<String, u32>,
}

/// Unigram and previous-word bigram counts, built once from a corpus.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    grams: HashMap<String, Gram>,
}

impl FrequencyModel {
    /// Scans `words` once, in corpus order. Blank tokens are skipped and do
    /// not break the bigram chain.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grams: HashMap<String, Gram> = HashMap::new();
        let mut prev: Option<String> = None;

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }

            grams.entry(word.to_string()).or_default().count += 1;
            if let Some(prev) = prev.as_deref() {
                if let Some(gram) = grams.get_mut(prev) {
                    *gram.followers.entry(word.to_string()).or_insert(0) += 1;
                }
            }
            prev = Some(word.to_string());
        }

        FrequencyModel { grams }
    }

    /// Number of distinct words seen.
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    pub fn unigram_count(&self, word: &str) -> u32 {
        self.grams.get(word).map_or(0, |gram| gram.count)
    }

    /// Times `word` directly followed `prev`. Zero for a blank `prev`.
    pub fn bigram_count(&self, prev: &str, word: &str) -> u32 {
        let prev = prev.trim();
        if prev.is_empty() {
            return 0;
        }
        self.grams
            .get(prev)
            .and_then(|gram| gram.followers.get(word))
            .copied()
            .unwrap_or(0)
    }

    /// Words seen right after `prev`, most frequent first, ties in lexical order.
    pub fn successors(&self, prev: &str) -> Vec<(&str, u32)> {
        let Some(gram) = self.grams.get(prev.trim()) else {
            return Vec::new();
        };
        let mut followers: Vec<(&str, u32)> = gram
            .followers
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        followers.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        followers
    }
}
