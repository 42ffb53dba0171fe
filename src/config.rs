//! Accumulator settings, optionally loaded from a JSON file.
use crate::Error;
use std::fs;
use std::path::Path;
use tracing::debug;

/// What counts as "a document contains this term".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroFrequencyPolicy {
    /// Appearing in the profile's mapping is enough, even with a frequency of zero.
    CountPresence,
    /// Zero-frequency entries are dropped; they create no entry and move no counter.
    RequirePositive,
}

impl Default for ZeroFrequencyPolicy {
    fn default() -> Self {
        ZeroFrequencyPolicy::CountPresence
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsConfig {
    pub zero_frequency: ZeroFrequencyPolicy,
    /// Reject empty terms and overflowing counters before touching any state.
    /// When off, counters saturate.
    pub validate: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            zero_frequency: ZeroFrequencyPolicy::default(),
            validate: true,
        }
    }
}

impl StatsConfig {
    pub fn load(path: &Path) -> Result<StatsConfig, Error> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::from(e).with_context(format!("reading {:?}", path)))?;
        let config: StatsConfig = serde_json::from_str(&text)
            .map_err(|e| Error::from(e).with_context(format!("parsing {:?}", path)))?;
        debug!(?path, ?config, "loaded stats config");
        Ok(config)
    }
    pub(crate) fn counts(&self, frequency: u64) -> bool {
        frequency > 0 || self.zero_frequency == ZeroFrequencyPolicy::CountPresence
    }
}
