//! Query-time settings.
//!
//! [`Settings`] is a plain value that can be read from or written to JSON.
//! [`EngineConfig`] is the live copy an engine consults: one atomic per flag,
//! so any flag can be changed while queries run. A query reads each flag once;
//! it may see one flag before a concurrent update and another after it.

use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::ranking::RankingMode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fuzzy search radius; 0 turns fuzzy search off.
    pub max_distance: usize,
    pub autocomplete: bool,
    pub whitespace: bool,
    pub ranking: RankingMode,
}

impl Settings {
    /// Parses a JSON settings document. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Default)]
pub struct EngineConfig {
    max_distance: AtomicUsize,
    autocomplete: AtomicBool,
    whitespace: AtomicBool,
    ranking: AtomicU8,
}

impl EngineConfig {
    pub fn new(settings: &Settings) -> Self {
        let config = EngineConfig::default();
        config.apply(settings);
        config
    }

    pub fn snapshot(&self) -> Settings {
        Settings {
            max_distance: self.max_distance(),
            autocomplete: self.autocomplete(),
            whitespace: self.whitespace(),
            ranking: self.ranking_mode(),
        }
    }

    /// Stores every flag of `settings`, one at a time.
    pub fn apply(&self, settings: &Settings) {
        self.max_distance.store(settings.max_distance, Ordering::Relaxed);
        self.autocomplete.store(settings.autocomplete, Ordering::Relaxed);
        self.whitespace.store(settings.whitespace, Ordering::Relaxed);
        self.ranking.store(settings.ranking.to_u8(), Ordering::Relaxed);
        debug!(?settings, "applied settings");
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance.load(Ordering::Relaxed)
    }

    /// Fails without touching the current bound if `distance` is negative.
    pub fn set_max_distance(&self, distance: i64) -> Result<()> {
        let Ok(distance) = usize::try_from(distance) else {
            warn!(distance, "rejected negative max edit distance");
            return Err(Error::NegativeDistance(distance));
        };
        self.max_distance.store(distance, Ordering::Relaxed);
        debug!(distance, "max edit distance set");
        Ok(())
    }

    pub fn autocomplete(&self) -> bool {
        self.autocomplete.load(Ordering::Relaxed)
    }

    pub fn set_autocomplete(&self, enabled: bool) {
        self.autocomplete.store(enabled, Ordering::Relaxed);
        debug!(enabled, "autocomplete toggled");
    }

    pub fn whitespace(&self) -> bool {
        self.whitespace.load(Ordering::Relaxed)
    }

    pub fn set_whitespace(&self, enabled: bool) {
        self.whitespace.store(enabled, Ordering::Relaxed);
        debug!(enabled, "whitespace splitting toggled");
    }

    pub fn ranking_mode(&self) -> RankingMode {
        RankingMode::from_u8(self.ranking.load(Ordering::Relaxed))
    }

    pub fn set_ranking_mode(&self, mode: RankingMode) {
        self.ranking.store(mode.to_u8(), Ordering::Relaxed);
        debug!(?mode, "ranking mode set");
    }
}
