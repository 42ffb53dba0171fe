/// Everything a term-weighting function needs to know about one term in one collection.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountStats {
    pub collection_frequency: u64,
    pub document_frequency: u64,
    pub collection_length: u64,
    pub document_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsErr {
    BadFrequencies(CountStats),
    BadLengths(CountStats),
    BadDocProb(CountStats),
    BadTermProb(CountStats),
}

impl CountStats {
    /// Scorers want a number here; an empty collection averages to zero.
    pub fn average_doc_length(&self) -> f64 {
        if self.document_count == 0 {
            0.0
        } else {
            let cl = self.collection_length as f64;
            let dc = self.document_count as f64;
            cl / dc
        }
    }
    /// Background probability of this term, P(t|C).
    pub fn collection_probability(&self) -> f64 {
        if self.collection_length == 0 {
            0.0
        } else {
            self.collection_frequency as f64 / self.collection_length as f64
        }
    }
    /// Check the numbers are mutually consistent before scoring with them.
    ///
    /// Only meaningful for collections that never saw zero-frequency entries or zero-length documents.
    pub fn check(&self) -> Vec<StatsErr> {
        let mut errors = Vec::new();
        if self.collection_frequency < self.document_frequency {
            errors.push(StatsErr::BadFrequencies(self.clone()))
        }
        if self.collection_length < self.document_count {
            errors.push(StatsErr::BadLengths(self.clone()))
        }
        if self.document_frequency > self.document_count {
            errors.push(StatsErr::BadDocProb(self.clone()))
        }
        if self.collection_frequency > self.collection_length {
            errors.push(StatsErr::BadTermProb(self.clone()))
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_average_is_zero() {
        let stats = CountStats::default();
        assert_eq!(0.0, stats.average_doc_length());
        assert_eq!(0.0, stats.collection_probability());
    }

    #[test]
    fn average_and_probability() {
        let stats = CountStats {
            collection_frequency: 5,
            document_frequency: 2,
            collection_length: 60,
            document_count: 3,
        };
        assert_eq!(20.0, stats.average_doc_length());
        assert!((stats.collection_probability() - 5.0 / 60.0).abs() < 1e-12);
        assert!(stats.check().is_empty());
    }

    #[test]
    fn check_flags_inconsistent_counts() {
        let stats = CountStats {
            collection_frequency: 1,
            document_frequency: 4,
            collection_length: 2,
            document_count: 3,
        };
        let errors = stats.check();
        assert_eq!(
            vec![
                StatsErr::BadFrequencies(stats.clone()),
                StatsErr::BadLengths(stats.clone()),
                StatsErr::BadDocProb(stats.clone()),
            ],
            errors
        );
    }
}
