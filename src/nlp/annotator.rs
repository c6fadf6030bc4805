//! Linguistic annotation
//!
//! The [`Annotator`] trait is the seam between the question pipeline and
//! whatever performs sentence splitting, tokenization and POS tagging.
//! [`RuleAnnotator`] is a dependency-free implementation for English text.

use rustc_hash::FxHashSet;

use super::tagger::LexiconTagger;
use crate::errors::AnnotationError;
use crate::types::TaggedToken;

/// Sentence splitting, tokenization and tagging.
///
/// # Contract
///
/// - `split_into_sentences` preserves document order and returns each
///   sentence as a substring of the input (trimmed).
/// - `tag` returns exactly one [`TaggedToken`] per input token, in order.
pub trait Annotator {
    /// Split raw text into sentences.
    fn split_into_sentences(&self, text: &str) -> Result<Vec<String>, AnnotationError>;

    /// Split one sentence into word and punctuation tokens.
    fn tokenize(&self, sentence: &str) -> Result<Vec<String>, AnnotationError>;

    /// Assign a part-of-speech tag to each token.
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AnnotationError>;

    /// Tokenize and tag a sentence, checking the tagger kept every token.
    fn annotate(&self, sentence: &str) -> Result<Vec<TaggedToken>, AnnotationError> {
        let tokens = self.tokenize(sentence)?;
        let tagged = self.tag(&tokens)?;
        if tagged.len() != tokens.len() {
            return Err(AnnotationError::LengthMismatch {
                tokens: tokens.len(),
                tags: tagged.len(),
            });
        }
        Ok(tagged)
    }
}

impl<A: Annotator + ?Sized> Annotator for &A {
    fn split_into_sentences(&self, text: &str) -> Result<Vec<String>, AnnotationError> {
        (**self).split_into_sentences(text)
    }

    fn tokenize(&self, sentence: &str) -> Result<Vec<String>, AnnotationError> {
        (**self).tokenize(sentence)
    }

    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AnnotationError> {
        (**self).tag(tokens)
    }
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    fn split_into_sentences(&self, text: &str) -> Result<Vec<String>, AnnotationError> {
        (**self).split_into_sentences(text)
    }

    fn tokenize(&self, sentence: &str) -> Result<Vec<String>, AnnotationError> {
        (**self).tokenize(sentence)
    }

    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AnnotationError> {
        (**self).tag(tokens)
    }
}

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "no", "fig", "approx",
];

/// Rule-based annotator for English prose
#[derive(Debug, Clone)]
pub struct RuleAnnotator {
    tagger: LexiconTagger,
    abbreviations: FxHashSet<String>,
}

impl Default for RuleAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleAnnotator {
    pub fn new() -> Self {
        Self::with_tagger(LexiconTagger::new())
    }

    /// Use a custom tagger (e.g. one extended with domain vocabulary)
    pub fn with_tagger(tagger: LexiconTagger) -> Self {
        Self {
            tagger,
            abbreviations: ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Treat `word.` as an abbreviation rather than a sentence end
    pub fn add_abbreviation(&mut self, word: &str) {
        self.abbreviations
            .insert(word.trim_end_matches('.').to_lowercase());
    }

    pub fn tagger(&self) -> &LexiconTagger {
        &self.tagger
    }

    /// Whether the terminator run ending at byte `end` closes a sentence
    fn is_boundary(&self, text: &str, term_start: usize, end: usize) -> bool {
        let rest = &text[end..];
        if !rest.starts_with(char::is_whitespace) && !rest.is_empty() {
            return false;
        }

        // Only '.' is ambiguous; '!' and '?' always terminate
        let terminator = &text[term_start..end];
        if !terminator.starts_with('.') {
            return true;
        }

        let preceding = text[..term_start]
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if self.abbreviations.contains(&preceding) {
            return false;
        }
        // Single initials such as "J. Smith"
        if preceding.chars().count() == 1 && preceding.chars().all(char::is_alphabetic) {
            return false;
        }

        match rest.trim_start().chars().next() {
            Some(next) => !next.is_lowercase(),
            None => true,
        }
    }
}

impl Annotator for RuleAnnotator {
    fn split_into_sentences(&self, text: &str) -> Result<Vec<String>, AnnotationError> {
        let mut sentences = Vec::new();
        let mut sentence_start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((i, ch)) = chars.next() {
            if !matches!(ch, '.' | '!' | '?') {
                continue;
            }

            // Consume the whole terminator run plus closing quotes/brackets
            let mut end = i + ch.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if matches!(next, '.' | '!' | '?' | '"' | '\'' | ')' | ']' | '”' | '’') {
                    end = j + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            if self.is_boundary(text, i, end) {
                let sentence = text[sentence_start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                sentence_start = end;
            }
        }

        let tail = text[sentence_start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
        Ok(sentences)
    }

    fn tokenize(&self, sentence: &str) -> Result<Vec<String>, AnnotationError> {
        let mut tokens = Vec::new();
        let mut chars = sentence.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_whitespace() {
                continue;
            }

            if ch.is_alphanumeric() {
                let mut word = String::from(ch);
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() {
                        word.push(next);
                        chars.next();
                    } else if matches!(next, '\'' | '’' | '-') {
                        // Keep internal apostrophes and hyphens only when a
                        // letter or digit follows
                        let mut lookahead = chars.clone();
                        lookahead.next();
                        if lookahead.peek().is_some_and(|c| c.is_alphanumeric()) {
                            word.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    } else {
                        break;
                    }
                }
                tokens.push(word);
            } else if ch == '.' {
                let mut dots = String::from(ch);
                while chars.peek() == Some(&'.') {
                    dots.push('.');
                    chars.next();
                }
                tokens.push(dots);
            } else {
                tokens.push(ch.to_string());
            }
        }

        Ok(tokens)
    }

    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AnnotationError> {
        Ok(tokens
            .iter()
            .zip(self.tagger.tag(tokens))
            .map(|(word, pos)| TaggedToken::new(word.clone(), pos))
            .collect())
    }
}
