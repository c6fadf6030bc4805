//! Distractor generation
//!
//! Distractors are the siblings of a word's most common noun sense: take the
//! first sense, climb to its first hypernym, and list that hypernym's
//! hyponyms in hierarchy order.

use crate::errors::{QuizError, Result};
use crate::lexicon::{LexicalHierarchy, WordClass};

/// Generates alternative answer options from a lexical hierarchy
#[derive(Debug, Clone)]
pub struct DistractorGenerator<H> {
    hierarchy: H,
    max_distractors: usize,
}

impl<H: LexicalHierarchy> DistractorGenerator<H> {
    /// Create a generator returning at most `max_distractors` words
    pub fn new(hierarchy: H, max_distractors: usize) -> Self {
        Self {
            hierarchy,
            max_distractors,
        }
    }

    pub fn hierarchy(&self) -> &H {
        &self.hierarchy
    }

    /// Distractors for `word`, in hyponym enumeration order.
    ///
    /// Returns an empty list when the word has no noun sense, and
    /// [`QuizError::NoBroaderCategory`] when its first sense has no hypernym.
    pub fn generate(&self, word: &str) -> Result<Vec<String>> {
        let senses = self.hierarchy.senses(word, WordClass::Noun);
        let Some(sense) = senses.first() else {
            return Ok(Vec::new());
        };

        let broader = self.hierarchy.broader_categories(sense);
        let Some(category) = broader.first() else {
            return Err(QuizError::NoBroaderCategory {
                word: word.to_string(),
            });
        };

        let mut similar: Vec<String> = Vec::new();
        for sibling in self.hierarchy.narrower_terms(category) {
            if similar.len() >= self.max_distractors {
                break;
            }
            let form = self.hierarchy.surface_form(&sibling).replace('_', " ");
            if form.to_lowercase() != word.to_lowercase() && !similar.contains(&form) {
                similar.push(form);
            }
        }
        Ok(similar)
    }
}
