use crate::HashMap;

/// One document's term counts, as handed over by whatever tokenized it.
///
/// `length` is declared rather than derived; it usually equals the sum of the counts but need not.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermProfile {
    terms: HashMap<String, u64>,
    length: u64,
}

impl TermProfile {
    pub fn new(length: u64) -> Self {
        Self {
            terms: HashMap::default(),
            length,
        }
    }
    /// Build from (term, count) pairs; the length is the sum of the counts.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut profile = TermProfile::default();
        for (term, frequency) in counts {
            profile.insert(term, frequency);
            profile.length = profile.length.saturating_add(frequency);
        }
        profile
    }
    /// Count already-normalized tokens. Nothing is lowercased or stemmed here.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut profile = TermProfile::default();
        for token in tokens {
            let token = token.as_ref();
            // assume term already exists; fast-path.
            if let Some(count) = profile.terms.get_mut(token) {
                *count += 1;
            } else {
                profile.terms.insert(token.to_string(), 1);
            }
            profile.length += 1;
        }
        profile
    }
    /// Adds to any count already present for this term; the declared length is untouched.
    pub fn insert<S>(&mut self, term: S, frequency: u64) -> &mut Self
    where
        S: Into<String>,
    {
        let count = self.terms.entry(term.into()).or_default();
        *count = count.saturating_add(frequency);
        self
    }
    pub fn set_length(&mut self, length: u64) -> &mut Self {
        self.length = length;
        self
    }
    pub fn length(&self) -> u64 {
        self.length
    }
    pub fn frequency(&self, term: &str) -> u64 {
        self.terms.get(term).cloned().unwrap_or(0)
    }
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.terms.iter().map(|(t, f)| (t.as_str(), *f))
    }
    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
