use crate::config::StatsConfig;
use crate::profile::TermProfile;
use crate::stats::CountStats;
use crate::{Error, HashMap, ProfileErr};
use tracing::{debug, trace, warn};

/// Collection-wide numbers for a single term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermStatEntry {
    term: String,
    /// Profiles this term appeared in.
    document_frequency: u64,
    /// Sum of this term's frequency over every profile.
    term_frequency: u64,
}

impl TermStatEntry {
    fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
            document_frequency: 0,
            term_frequency: 0,
        }
    }
    pub fn term(&self) -> &str {
        &self.term
    }
    pub fn document_frequency(&self) -> u64 {
        self.document_frequency
    }
    pub fn term_frequency(&self) -> u64 {
        self.term_frequency
    }
    fn observe(&mut self, frequency: u64) {
        self.document_frequency = self.document_frequency.saturating_add(1);
        self.term_frequency = self.term_frequency.saturating_add(frequency);
    }
    fn absorb(&mut self, other: &TermStatEntry) {
        self.document_frequency = self
            .document_frequency
            .saturating_add(other.document_frequency);
        self.term_frequency = self.term_frequency.saturating_add(other.term_frequency);
    }
    fn fits(&self, document_frequency: u64, term_frequency: u64) -> bool {
        self.document_frequency
            .checked_add(document_frequency)
            .is_some()
            && self.term_frequency.checked_add(term_frequency).is_some()
    }
}

/// Aggregated view of the term statistics of a stream of term profiles.
///
/// Ingestion takes `&mut self`, so a single writer is enforced by the borrow checker.
/// For parallel ingestion build partitions and [`merge`](Self::merge) them, see [`crate::parallel`].
#[derive(Debug, Clone, Default)]
pub struct CollectionTermStatistics {
    config: StatsConfig,
    /// Every term ever observed. Entries are never removed.
    index: HashMap<String, TermStatEntry>,
    /// How many profiles have been added.
    num_documents: u64,
    /// Sum of each profile's declared length.
    collection_length: u64,
}

impl CollectionTermStatistics {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(config: StatsConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Fold one profile into the collection.
    ///
    /// Either every counter moves or, if the profile is rejected, none do.
    pub fn add_document(&mut self, profile: &TermProfile) -> Result<(), Error> {
        if self.config.validate {
            if let Err(reason) = self.check_profile(profile) {
                warn!(
                    ?reason,
                    num_documents = self.num_documents,
                    "rejecting term profile"
                );
                return Err(reason.into());
            }
        }

        for (term, frequency) in profile.entries() {
            if !self.config.counts(frequency) {
                continue;
            }
            if let Some(entry) = self.index.get_mut(term) {
                entry.observe(frequency);
            } else {
                let mut entry = TermStatEntry::new(term);
                entry.observe(frequency);
                self.index.insert(term.to_string(), entry);
            }
        }
        self.num_documents = self.num_documents.saturating_add(1);
        self.collection_length = self.collection_length.saturating_add(profile.length());

        trace!(
            terms = profile.len(),
            length = profile.length(),
            num_documents = self.num_documents,
            "added term profile"
        );
        Ok(())
    }

    fn check_profile(&self, profile: &TermProfile) -> Result<(), ProfileErr> {
        if self.num_documents.checked_add(1).is_none()
            || self
                .collection_length
                .checked_add(profile.length())
                .is_none()
        {
            return Err(ProfileErr::Overflow(None));
        }
        for (term, frequency) in profile.entries() {
            if term.is_empty() {
                return Err(ProfileErr::EmptyTerm);
            }
            if !self.config.counts(frequency) {
                continue;
            }
            if let Some(entry) = self.index.get(term) {
                if !entry.fits(1, frequency) {
                    return Err(ProfileErr::Overflow(Some(term.to_string())));
                }
            }
        }
        Ok(())
    }

    /// Fold a partial accumulator into this one, as if its profiles had been added here.
    ///
    /// Both sides must share a config, otherwise `other` may hold entries this one would have refused.
    pub fn merge(&mut self, other: CollectionTermStatistics) -> Result<(), Error> {
        if self.config != other.config {
            warn!(
                mine = ?self.config,
                theirs = ?other.config,
                "refusing to merge statistics built under another config"
            );
            return Err(Error::ConfigMismatch);
        }
        if self.config.validate {
            if let Err(reason) = self.check_merge(&other) {
                warn!(?reason, "refusing to merge partial statistics");
                return Err(reason.into());
            }
        }
        debug!(
            documents = other.num_documents,
            terms = other.index.len(),
            "merging partial statistics"
        );
        self.num_documents = self.num_documents.saturating_add(other.num_documents);
        self.collection_length = self
            .collection_length
            .saturating_add(other.collection_length);
        for (term, entry) in other.index.into_iter() {
            if let Some(mine) = self.index.get_mut(&term) {
                mine.absorb(&entry);
            } else {
                self.index.insert(term, entry);
            }
        }
        Ok(())
    }

    fn check_merge(&self, other: &CollectionTermStatistics) -> Result<(), ProfileErr> {
        if self.num_documents.checked_add(other.num_documents).is_none()
            || self
                .collection_length
                .checked_add(other.collection_length)
                .is_none()
        {
            return Err(ProfileErr::Overflow(None));
        }
        for (term, entry) in other.index.iter() {
            if let Some(mine) = self.index.get(term) {
                if !mine.fits(entry.document_frequency, entry.term_frequency) {
                    return Err(ProfileErr::Overflow(Some(term.clone())));
                }
            }
        }
        Ok(())
    }

    /// Mean declared profile length; an error until something has been added.
    pub fn average_document_length(&self) -> Result<f64, Error> {
        if self.num_documents == 0 {
            return Err(Error::EmptyCollection);
        }
        Ok(self.collection_length as f64 / self.num_documents as f64)
    }

    /// Number of profiles containing `term`; zero if never seen.
    pub fn document_frequency(&self, term: &str) -> u64 {
        self.index
            .get(term)
            .map(|e| e.document_frequency)
            .unwrap_or(0)
    }

    /// Total occurrences of `term` across the collection; zero if never seen.
    pub fn term_frequency(&self, term: &str) -> u64 {
        self.index.get(term).map(|e| e.term_frequency).unwrap_or(0)
    }

    pub fn get(&self, term: &str) -> Option<&TermStatEntry> {
        self.index.get(term)
    }

    /// Every entry, in no particular order.
    pub fn all_term_stats(&self) -> impl Iterator<Item = &TermStatEntry> + '_ {
        self.index.values()
    }

    pub fn num_documents(&self) -> u64 {
        self.num_documents
    }
    pub fn collection_length(&self) -> u64 {
        self.collection_length
    }
    pub fn vocabulary_size(&self) -> usize {
        self.index.len()
    }

    /// Snapshot of what a scorer needs for `term`. Missing terms keep zero frequencies.
    pub fn count_stats(&self, term: &str) -> CountStats {
        let mut out = CountStats {
            collection_length: self.collection_length,
            document_count: self.num_documents,
            ..CountStats::default()
        };
        if let Some(entry) = self.index.get(term) {
            out.document_frequency = entry.document_frequency;
            out.collection_frequency = entry.term_frequency;
        }
        out
    }
}
