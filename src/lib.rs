//! # rapid-cloze
//!
//! Fill-in-the-blank objective question generation from plain text.
//!
//! A corpus is split into sentences; each sentence is tagged, chunked into
//! noun phrases and turned into at most one candidate question whose blank
//! covers the first token or the phrase containing it. Single-word answers
//! get distractors from a lexical hierarchy. A test is a random sample of
//! non-trivial candidates with distinct question text.
//!
//! ```rust,ignore
//! use rapid_cloze::prelude::*;
//!
//! let generator = ObjectiveTestGenerator::from_path(
//!     "corpus.txt",
//!     RuleAnnotator::new(),
//!     InMemoryHierarchy::from_path("wordnet.json")?,
//! )?;
//! let test = generator.generate_test(3)?;
//! for (question, answer) in test.pairs() {
//!     println!("{question}\n  -> {answer}");
//! }
//! ```

// Logging goes through these so the `tracing` dependency stays optional.
macro_rules! warn_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)+);
    };
}

macro_rules! info_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::info!($($arg)+);
    };
}

macro_rules! debug_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)+);
    };
}

pub(crate) use {debug_event, info_event, warn_event};

pub mod errors;
pub mod lexicon;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod question;
pub mod types;

pub use errors::{AnnotationError, QuizError, Result};
pub use pipeline::config::GeneratorConfig;
pub use pipeline::runner::ObjectiveTestGenerator;
pub use types::{CandidateQuestion, ObjectiveTest, PosTag, TaggedToken};

/// Commonly used types and traits
pub mod prelude {
    pub use crate::errors::{AnnotationError, QuizError, Result};
    pub use crate::lexicon::{InMemoryHierarchy, LexicalHierarchy, WordClass};
    pub use crate::nlp::annotator::{Annotator, RuleAnnotator};
    pub use crate::nlp::tagger::LexiconTagger;
    pub use crate::phrase::chunker::NounPhraseChunker;
    pub use crate::pipeline::artifacts::{CandidateReport, SkippedSentence};
    pub use crate::pipeline::config::GeneratorConfig;
    pub use crate::pipeline::runner::ObjectiveTestGenerator;
    pub use crate::pipeline::sampling::{IndexSource, ScriptedIndices};
    pub use crate::question::blank::BlankSelector;
    pub use crate::question::distractor::DistractorGenerator;
    pub use crate::question::{BlankOutcome, SkipReason};
    pub use crate::types::{CandidateQuestion, ChunkSpan, ObjectiveTest, PosTag, TaggedToken};
}
