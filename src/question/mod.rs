//! Question construction
//!
//! [`blank::BlankSelector`] turns one tagged sentence into a
//! [`CandidateQuestion`](crate::types::CandidateQuestion);
//! [`distractor::DistractorGenerator`] supplies wrong answer options.

pub mod blank;
pub mod distractor;

use serde::Serialize;

use crate::types::CandidateQuestion;

/// Why a sentence produced no candidate question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// First token is tagged `RB`
    LeadingAdverb,
    /// Fewer tokens than `min_sentence_tokens`
    TooShort { tokens: usize },
    /// No word could be chosen for blanking
    NothingToBlank,
    /// The chosen answer does not occur in the sentence text
    AnswerNotInSentence { answer: String },
    /// Tokenizing or tagging the sentence failed
    Annotation { message: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::LeadingAdverb => f.write_str("sentence starts with an adverb"),
            SkipReason::TooShort { tokens } => write!(f, "sentence has only {tokens} tokens"),
            SkipReason::NothingToBlank => f.write_str("no word to blank"),
            SkipReason::AnswerNotInSentence { answer } => {
                write!(f, "answer {answer:?} not found in sentence text")
            }
            SkipReason::Annotation { message } => write!(f, "annotation failed: {message}"),
        }
    }
}

/// Result of running the blank selector on one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlankOutcome {
    Candidate(CandidateQuestion),
    NotApplicable(SkipReason),
}

impl BlankOutcome {
    /// The candidate, if one was produced
    pub fn candidate(self) -> Option<CandidateQuestion> {
        match self {
            BlankOutcome::Candidate(candidate) => Some(candidate),
            BlankOutcome::NotApplicable(_) => None,
        }
    }

    pub fn is_candidate(&self) -> bool {
        matches!(self, BlankOutcome::Candidate(_))
    }
}
