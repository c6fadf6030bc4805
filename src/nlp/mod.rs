//! Natural Language Processing components
//!
//! This module provides the annotator seam plus a rule-based sentence
//! splitter, tokenizer and lexicon tagger.

pub mod annotator;
pub mod tagger;
