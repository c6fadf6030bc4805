//! Error types
//!
//! [`QuizError`] covers everything that can reach the caller of
//! [`generate_test`](crate::pipeline::runner::ObjectiveTestGenerator::generate_test).
//! [`AnnotationError`] is kept separate so annotator implementations only
//! depend on the failures they can actually produce.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by an [`Annotator`](crate::nlp::annotator::Annotator).
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("sentence splitting failed: {0}")]
    Sentence(String),

    #[error("tokenization failed for {sentence:?}: {reason}")]
    Tokenize { sentence: String, reason: String },

    #[error("tagging failed: {0}")]
    Tag(String),

    #[error("tagger returned {tags} tags for {tokens} tokens")]
    LengthMismatch { tokens: usize, tags: usize },
}

/// Top-level error for question generation.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load corpus from {path}")]
    CorpusLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    #[error("no broader category for the first noun sense of {word:?}")]
    NoBroaderCategory { word: String },

    #[error("requested {requested} questions but only {available} distinct candidates are available")]
    InsufficientCandidates { requested: usize, available: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load lexical hierarchy from {path}")]
    HierarchyLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexical hierarchy: {0}")]
    MalformedHierarchy(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
