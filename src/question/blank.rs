//! Blank selection
//!
//! Decides which word or words of a sentence to blank out and builds the
//! candidate question record.
//!
//! Only the first token of the sentence is ever checked against the noun
//! phrases: if some phrase contains it, the last two words of that phrase are
//! blanked, otherwise the first token itself is. Changing this would change
//! the answer chosen for every sentence.

use regex::{NoExpand, RegexBuilder};

use super::distractor::DistractorGenerator;
use super::{BlankOutcome, SkipReason};
use crate::errors::{QuizError, Result};
use crate::lexicon::LexicalHierarchy;
use crate::phrase::chunker::NounPhraseChunker;
use crate::pipeline::config::GeneratorConfig;
use crate::types::{CandidateQuestion, PosTag, TaggedToken};

/// Builds a [`CandidateQuestion`] from one tagged sentence
#[derive(Debug, Clone)]
pub struct BlankSelector<H> {
    chunker: NounPhraseChunker,
    distractors: DistractorGenerator<H>,
    min_sentence_tokens: usize,
    blank_marker: String,
    strict_distractors: bool,
}

impl<H: LexicalHierarchy> BlankSelector<H> {
    pub fn new(hierarchy: H, config: &GeneratorConfig) -> Self {
        Self {
            chunker: NounPhraseChunker::new(),
            distractors: DistractorGenerator::new(hierarchy, config.max_distractors),
            min_sentence_tokens: config.min_sentence_tokens,
            blank_marker: config.blank_marker.clone(),
            strict_distractors: config.strict_distractors,
        }
    }

    pub fn distractors(&self) -> &DistractorGenerator<H> {
        &self.distractors
    }

    /// Select the blank for `sentence` (the text `tokens` were produced from).
    ///
    /// Returns [`BlankOutcome::NotApplicable`] for unsuitable sentences. Errors
    /// are only returned for conditions that must reach the caller: a missing
    /// broader category in strict mode.
    pub fn select(
        &self,
        sentence_index: usize,
        sentence: &str,
        tokens: &[TaggedToken],
    ) -> Result<BlankOutcome> {
        if let Some(reason) = self.ineligibility(tokens) {
            return Ok(BlankOutcome::NotApplicable(reason));
        }

        let phrases = self.chunker.extract_phrases(tokens);
        let words = choose_blank_words(tokens, &phrases);
        let Some(key) = words.iter().map(|w| w.chars().count()).min() else {
            return Ok(BlankOutcome::NotApplicable(SkipReason::NothingToBlank));
        };

        let answer = words.join(" ");
        let Some(question) = self.blank_out(sentence, &words)? else {
            return Ok(BlankOutcome::NotApplicable(
                SkipReason::AnswerNotInSentence { answer },
            ));
        };

        // Multi-word answers rarely have meaningful siblings in the hierarchy
        let similar = match words.as_slice() {
            [word] => self.similar_words(word)?,
            _ => Vec::new(),
        };

        Ok(BlankOutcome::Candidate(CandidateQuestion {
            sentence_index,
            question,
            answer,
            blanked_words: words,
            key,
            similar,
        }))
    }

    fn ineligibility(&self, tokens: &[TaggedToken]) -> Option<SkipReason> {
        match tokens.first() {
            None => Some(SkipReason::TooShort { tokens: 0 }),
            Some(first) if first.pos == PosTag::Adverb => Some(SkipReason::LeadingAdverb),
            Some(_) if tokens.len() < self.min_sentence_tokens => Some(SkipReason::TooShort {
                tokens: tokens.len(),
            }),
            Some(_) => None,
        }
    }

    /// Replace the first case-insensitive occurrence of `words` with one
    /// marker run per word. The words may be separated by any whitespace,
    /// line breaks included. `None` when they do not occur.
    fn blank_out(&self, sentence: &str, words: &[String]) -> Result<Option<String>> {
        let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
        let pattern = RegexBuilder::new(&escaped.join(r"\s+"))
            .case_insensitive(true)
            .build()?;
        if !pattern.is_match(sentence) {
            return Ok(None);
        }
        let blanks = self.blank_marker.repeat(words.len());
        Ok(Some(
            pattern
                .replacen(sentence, 1, NoExpand(&blanks))
                .into_owned(),
        ))
    }

    fn similar_words(&self, word: &str) -> Result<Vec<String>> {
        match self.distractors.generate(word) {
            Ok(similar) => Ok(similar),
            Err(QuizError::NoBroaderCategory { .. }) if !self.strict_distractors => {
                crate::warn_event!(word = %word, "no broader category, skipping distractors");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }
}

/// Pick the words to blank for a sentence.
///
/// Only the first token is examined. A phrase beginning with an apostrophe
/// ends the phrase scan without a match.
pub fn choose_blank_words(tokens: &[TaggedToken], phrases: &[String]) -> Vec<String> {
    let Some(first) = tokens.first() else {
        return Vec::new();
    };

    let mut words = Vec::new();
    for phrase in phrases {
        if phrase.starts_with('\'') {
            break;
        }
        if phrase.contains(first.word.as_str()) {
            let parts: Vec<&str> = phrase.split_whitespace().collect();
            let tail = &parts[parts.len().saturating_sub(2)..];
            words.extend(tail.iter().map(|w| w.to_string()));
            break;
        }
    }

    if words.is_empty() {
        words.push(first.word.clone());
    }
    words
}
