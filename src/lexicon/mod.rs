//! Lexical-semantic hierarchy
//!
//! The [`LexicalHierarchy`] trait exposes the small slice of a WordNet-style
//! sense graph that distractor generation needs: sense lookup, broader
//! categories (hypernyms), narrower terms (hyponyms) and surface forms.

pub mod memory;

use serde::{Deserialize, Serialize};

pub use memory::{InMemoryHierarchy, SenseId};

/// Word class used to restrict sense lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "r")]
    Adverb,
}

/// Read-only access to a sense hierarchy.
///
/// Every list is returned in the hierarchy's native order; the first sense
/// returned by [`senses`](LexicalHierarchy::senses) is the most common one.
pub trait LexicalHierarchy {
    /// Handle for one sense (synset)
    type Sense: Clone;

    /// Senses of `word` restricted to `class`, most common first
    fn senses(&self, word: &str, class: WordClass) -> Vec<Self::Sense>;

    /// Broader categories (hypernyms) of a sense
    fn broader_categories(&self, sense: &Self::Sense) -> Vec<Self::Sense>;

    /// Narrower terms (hyponyms) of a sense
    fn narrower_terms(&self, sense: &Self::Sense) -> Vec<Self::Sense>;

    /// Most common surface form; multi-word forms may use `_` separators
    fn surface_form(&self, sense: &Self::Sense) -> String;
}

impl<H: LexicalHierarchy + ?Sized> LexicalHierarchy for &H {
    type Sense = H::Sense;

    fn senses(&self, word: &str, class: WordClass) -> Vec<Self::Sense> {
        (**self).senses(word, class)
    }

    fn broader_categories(&self, sense: &Self::Sense) -> Vec<Self::Sense> {
        (**self).broader_categories(sense)
    }

    fn narrower_terms(&self, sense: &Self::Sense) -> Vec<Self::Sense> {
        (**self).narrower_terms(sense)
    }

    fn surface_form(&self, sense: &Self::Sense) -> String {
        (**self).surface_form(sense)
    }
}
