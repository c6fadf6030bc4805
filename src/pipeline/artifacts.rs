//! Pipeline artifacts.
//!
//! [`CandidateReport`] is the intermediate result between candidate
//! derivation and test sampling. Recoverable per-sentence problems are kept
//! here as data instead of only being logged.

use serde::Serialize;

use crate::question::SkipReason;
use crate::types::CandidateQuestion;

/// A sentence that produced no candidate, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSentence {
    /// Index of the sentence in document order
    pub index: usize,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Every candidate derived from a corpus plus the sentences that were skipped
#[derive(Debug, Clone, Default, Serialize)]
pub struct CandidateReport {
    /// Number of sentences the corpus was split into
    pub sentence_count: usize,
    /// Candidates in sentence order
    pub candidates: Vec<CandidateQuestion>,
    /// Skipped sentences in sentence order
    pub skipped: Vec<SkippedSentence>,
}

impl CandidateReport {
    /// Candidates whose shortest blanked word is longer than `min_answer_len`
    pub fn eligible(&self, min_answer_len: usize) -> impl Iterator<Item = &CandidateQuestion> {
        self.candidates
            .iter()
            .filter(move |c| c.key > min_answer_len)
    }

    /// Skipped sentences matching a predicate on the reason
    pub fn skipped_where<'a>(
        &'a self,
        pred: impl Fn(&SkipReason) -> bool + 'a,
    ) -> impl Iterator<Item = &'a SkippedSentence> + 'a {
        self.skipped.iter().filter(move |s| pred(&s.reason))
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
