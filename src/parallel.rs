//! Partitioned ingestion: each worker fills its own accumulator, and partitions merge at the end.
use crate::collection::CollectionTermStatistics;
use crate::config::StatsConfig;
use crate::profile::TermProfile;
use crate::Error;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

/// Same result as adding every profile to one accumulator, in any order.
///
/// A rejected profile fails the whole batch; nothing partial is returned.
pub fn accumulate_parallel(
    profiles: &[TermProfile],
    config: &StatsConfig,
) -> Result<CollectionTermStatistics, Error> {
    let stats = profiles
        .par_iter()
        .try_fold(
            || CollectionTermStatistics::with_config(config.clone()),
            |mut partition, profile| {
                partition.add_document(profile)?;
                Ok::<_, Error>(partition)
            },
        )
        .try_reduce(
            || CollectionTermStatistics::with_config(config.clone()),
            |mut left, right| {
                left.merge(right)?;
                Ok(left)
            },
        )?;
    debug!(
        documents = stats.num_documents(),
        terms = stats.vocabulary_size(),
        "parallel accumulation finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfileErr;

    fn corpus() -> Vec<TermProfile> {
        let words = ["the", "cat", "dog", "fish", "bird", "tree"];
        (0..500)
            .map(|i| {
                let tokens = (0..(i % 17 + 1)).map(|j| words[(i * 7 + j * 3) % words.len()]);
                TermProfile::from_tokens(tokens)
            })
            .collect()
    }

    #[test]
    fn parallel_matches_sequential() {
        let profiles = corpus();
        let mut sequential = CollectionTermStatistics::new();
        for p in profiles.iter() {
            sequential.add_document(p).unwrap();
        }
        let parallel = accumulate_parallel(&profiles, &StatsConfig::default()).unwrap();

        assert_eq!(sequential.num_documents(), parallel.num_documents());
        assert_eq!(sequential.collection_length(), parallel.collection_length());
        assert_eq!(sequential.vocabulary_size(), parallel.vocabulary_size());
        for entry in sequential.all_term_stats() {
            assert_eq!(
                Some(entry),
                parallel.get(entry.term()),
                "mismatch for {}",
                entry.term()
            );
        }
        assert_eq!(
            sequential.average_document_length().unwrap(),
            parallel.average_document_length().unwrap()
        );
    }

    #[test]
    fn parallel_empty_input() {
        let empty: Vec<TermProfile> = Vec::new();
        let stats = accumulate_parallel(&empty, &StatsConfig::default()).unwrap();
        assert_eq!(0, stats.num_documents());
        assert!(stats.average_document_length().is_err());
    }

    #[test]
    fn parallel_rejects_bad_profile() {
        let mut profiles = corpus();
        let mut bad = TermProfile::new(1);
        bad.insert("", 1);
        profiles.push(bad);
        match accumulate_parallel(&profiles, &StatsConfig::default()) {
            Err(Error::InvalidProfile(ProfileErr::EmptyTerm)) => {}
            other => panic!("expected EmptyTerm, got {:?}", other.map(|s| s.num_documents())),
        }
    }
}
