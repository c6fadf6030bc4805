//! Phrase extraction components
//!
//! This module provides noun phrase chunking over Penn-tagged tokens.

pub mod chunker;
