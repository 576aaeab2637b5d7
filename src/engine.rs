use rayon::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

use crate::config::{EngineConfig, Settings};
use crate::error::Result;
use crate::frequency::FrequencyModel;
use crate::fuzzy;
use crate::normalize::Tokenizer;
use crate::ranking::{RankingMode, RankingPolicy};
use crate::trie::PrefixTree;

/// One word to correct, with the word typed before it if there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub word: String,
    pub previous: Option<String>,
}

impl Query {
    pub fn new(word: impl Into<String>, previous: Option<&str>) -> Self {
        Query {
            word: word.into(),
            previous: previous.map(str::to_string),
        }
    }
}

/// Candidates in first-seen order, duplicates dropped.
#[derive(Debug, Default)]
struct Candidates {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl Candidates {
    fn push(&mut self, candidate: String) {
        if self.seen.insert(candidate.clone()) {
            self.ordered.push(candidate);
        }
    }

    fn len(&self) -> usize {
        self.ordered.len()
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

impl Extend<String> for Candidates {
    fn extend<I: IntoIterator<Item = String>>(&mut self, candidates: I) {
        for candidate in candidates {
            self.push(candidate);
        }
    }
}

/// Vocabulary, corpus statistics and live settings behind `suggest`.
///
/// The vocabulary and statistics are fixed once built; only the settings
/// change afterwards, so a shared engine can serve queries from many threads.
#[derive(Debug)]
pub struct SuggestionEngine {
    vocabulary: PrefixTree,
    model: FrequencyModel,
    config: EngineConfig,
    tokenizer: Tokenizer,
}

impl SuggestionEngine {
    /// Builds from normalized corpus tokens, in corpus order.
    pub fn new<I, S>(corpus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = corpus.into_iter().collect();
        let vocabulary: PrefixTree = words
            .iter()
            .map(|word| word.as_ref().trim())
            .filter(|word| !word.is_empty())
            .collect();
        let model = FrequencyModel::build(words.iter().map(|word| word.as_ref()));
        debug!(
            tokens = words.len(),
            vocabulary = vocabulary.len(),
            "built suggestion engine"
        );

        SuggestionEngine {
            vocabulary,
            model,
            config: EngineConfig::default(),
            tokenizer: Tokenizer::default(),
        }
    }

    /// Builds from raw text lines, keeping apostrophes inside words.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_lines_with(lines, Tokenizer::default())
    }

    /// Builds from raw text lines split by `tokenizer`, which `suggest_line`
    /// then uses as well.
    pub fn from_lines_with<'a, I>(lines: I, tokenizer: Tokenizer) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::new(lines.into_iter().flat_map(|line| tokenizer.tokenize(line)))
            .with_tokenizer(tokenizer)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, Tokenizer::default())
    }

    pub fn from_reader_with<R: BufRead>(reader: R, tokenizer: Tokenizer) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            words.extend(tokenizer.tokenize(&line?));
        }
        Ok(Self::new(words).with_tokenizer(tokenizer))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loading corpus");
        Self::from_reader(BufReader::new(file))
    }

    pub fn with_settings(self, settings: &Settings) -> Self {
        self.config.apply(settings);
        self
    }

    /// Sets how `suggest_line` splits its input.
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }

    pub fn vocabulary(&self) -> &PrefixTree {
        &self.vocabulary
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn settings(&self) -> Settings {
        self.config.snapshot()
    }

    pub fn set_max_distance(&self, distance: i64) -> Result<()> {
        self.config.set_max_distance(distance)
    }

    pub fn set_autocomplete(&self, enabled: bool) {
        self.config.set_autocomplete(enabled);
    }

    pub fn set_whitespace(&self, enabled: bool) {
        self.config.set_whitespace(enabled);
    }

    pub fn set_ranking_mode(&self, mode: RankingMode) {
        self.config.set_ranking_mode(mode);
    }

    /// Every vocabulary word starting with `prefix`, in sorted order.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        match self.vocabulary.lookup(prefix) {
            Some(node) => self.vocabulary.enumerate(node, prefix).collect(),
            None => Vec::new(),
        }
    }

    /// Ways to read `word` as two vocabulary words, e.g. "sunflower" as "sun flower".
    pub fn splits(&self, word: &str) -> Vec<String> {
        word.char_indices()
            .skip(1)
            .filter_map(|(idx, _)| {
                let (head, tail) = word.split_at(idx);
                (self.vocabulary.contains(head) && self.vocabulary.contains(tail))
                    .then(|| format!("{} {}", head, tail))
            })
            .collect()
    }

    /// Ranked suggestions for `word` typed after `previous`.
    ///
    /// Candidates come from the exact word, then completions, then fuzzy
    /// matches, then splits, as enabled by the current settings. The full list
    /// is returned; cutting it down for display is up to the caller.
    pub fn suggest(&self, word: &str, previous: Option<&str>) -> Vec<String> {
        let word = word.trim();
        if word.is_empty() {
            return Vec::new();
        }
        let previous = previous.map(str::trim).filter(|prev| !prev.is_empty());
        let settings = self.config.snapshot();

        let mut candidates = Candidates::default();
        if self.vocabulary.contains(word) {
            candidates.push(word.to_string());
        }
        if settings.autocomplete {
            candidates.extend(self.completions(word));
        }
        if settings.max_distance > 0 {
            candidates.extend(fuzzy::search(&self.vocabulary, word, settings.max_distance));
        }
        if settings.whitespace {
            candidates.extend(self.splits(word));
        }
        trace!(
            word,
            ?previous,
            candidates = candidates.len(),
            ?settings,
            "collected candidates"
        );

        let mut ranked = candidates.into_vec();
        RankingPolicy::new(settings.ranking, word, previous, &self.model).rank(&mut ranked);
        ranked
    }

    /// Suggestions for the last word of a raw line, using the word before it
    /// as context. Each suggestion is returned with the earlier words of the
    /// line in front of it.
    pub fn suggest_line(&self, line: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(line);
        let Some((word, earlier)) = tokens.split_last() else {
            return Vec::new();
        };
        let previous = earlier.last().map(String::as_str);
        let lead = earlier.join(" ");

        self.suggest(word, previous)
            .into_iter()
            .map(|suggestion| {
                if lead.is_empty() {
                    suggestion
                } else {
                    format!("{} {}", lead, suggestion)
                }
            })
            .collect()
    }

    /// Runs independent queries in parallel; results line up with `queries`.
    pub fn suggest_batch(&self, queries: &[Query]) -> Vec<Vec<String>> {
        queries
            .par_iter()
            .map(|query| self.suggest(&query.word, query.previous.as_deref()))
            .collect()
    }
}
