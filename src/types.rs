//! Core data types
//!
//! Tagged tokens, chunk spans, candidate question records and the final
//! objective test returned to callers.

use serde::{Deserialize, Serialize};

/// Part-of-speech tags from the Penn Treebank tagset.
///
/// The chunk grammar distinguishes singular, plural and proper nouns, so the
/// tags are kept at Penn granularity rather than collapsed to universal POS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// NN
    Noun,
    /// NNS
    PluralNoun,
    /// NNP
    ProperNoun,
    /// NNPS
    PluralProperNoun,
    /// VB, VBD, VBG, VBN, VBP, VBZ
    Verb,
    /// MD
    Modal,
    /// JJ, JJR, JJS
    Adjective,
    /// RB
    Adverb,
    /// RBR, RBS
    ComparativeAdverb,
    /// IN
    Preposition,
    /// DT
    Determiner,
    /// CC
    Conjunction,
    /// PRP, PRP$
    Pronoun,
    /// WDT, WP, WP$, WRB
    WhWord,
    /// CD
    Number,
    /// TO
    To,
    /// Punctuation marks
    Punctuation,
    /// Anything else (FW, SYM, UH, ...)
    Other,
}

impl PosTag {
    /// Parse a Penn Treebank tag string.
    pub fn from_penn(tag: &str) -> Self {
        match tag {
            "NN" => PosTag::Noun,
            "NNS" => PosTag::PluralNoun,
            "NNP" => PosTag::ProperNoun,
            "NNPS" => PosTag::PluralProperNoun,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => PosTag::Verb,
            "MD" => PosTag::Modal,
            "JJ" | "JJR" | "JJS" => PosTag::Adjective,
            "RB" => PosTag::Adverb,
            "RBR" | "RBS" => PosTag::ComparativeAdverb,
            "IN" => PosTag::Preposition,
            "DT" | "PDT" => PosTag::Determiner,
            "CC" => PosTag::Conjunction,
            "PRP" | "PRP$" => PosTag::Pronoun,
            "WDT" | "WP" | "WP$" | "WRB" => PosTag::WhWord,
            "CD" => PosTag::Number,
            "TO" => PosTag::To,
            "." | "," | ":" | "``" | "''" | "(" | ")" | "-LRB-" | "-RRB-" | "#" | "$" => {
                PosTag::Punctuation
            }
            _ => PosTag::Other,
        }
    }

    /// Canonical Penn tag for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NN",
            PosTag::PluralNoun => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::PluralProperNoun => "NNPS",
            PosTag::Verb => "VB",
            PosTag::Modal => "MD",
            PosTag::Adjective => "JJ",
            PosTag::Adverb => "RB",
            PosTag::ComparativeAdverb => "RBR",
            PosTag::Preposition => "IN",
            PosTag::Determiner => "DT",
            PosTag::Conjunction => "CC",
            PosTag::Pronoun => "PRP",
            PosTag::WhWord => "WP",
            PosTag::Number => "CD",
            PosTag::To => "TO",
            PosTag::Punctuation => ".",
            PosTag::Other => "FW",
        }
    }

    /// Any of the four noun tags
    pub fn is_noun(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::PluralNoun | PosTag::ProperNoun | PosTag::PluralProperNoun
        )
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A word paired with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface form as produced by the tokenizer
    pub word: String,
    /// Part-of-speech tag
    pub pos: PosTag,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, pos: PosTag) -> Self {
        Self {
            word: word.into(),
            pos,
        }
    }
}

/// A noun-phrase span within a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSpan {
    /// First token index (inclusive)
    pub start: usize,
    /// Last token index (exclusive)
    pub end: usize,
    /// Whitespace-joined surface text of the covered tokens
    pub text: String,
}

impl ChunkSpan {
    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A sentence turned into a fill-in-the-blank question.
///
/// Produced per sentence by the blank selector and consumed by the test
/// assembler. `similar` is only populated when a single word is blanked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateQuestion {
    /// Index of the source sentence in document order
    pub sentence_index: usize,
    /// Sentence text with the answer replaced by blank markers
    pub question: String,
    /// The blanked phrase, space-joined
    pub answer: String,
    /// The individual blanked words
    pub blanked_words: Vec<String>,
    /// Character count of the shortest blanked word
    pub key: usize,
    /// Distractor options for single-word answers
    pub similar: Vec<String>,
}

/// An objective test: parallel question, answer and option lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveTest {
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    /// Distractors for each answer (empty for multi-word answers)
    pub options: Vec<Vec<String>>,
}

impl ObjectiveTest {
    /// Number of questions in the test
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate over (question, answer) pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.questions
            .iter()
            .zip(self.answers.iter())
            .map(|(q, a)| (q.as_str(), a.as_str()))
    }

    /// Split into the `(questions, answers)` pair
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.questions, self.answers)
    }

    pub(crate) fn push(&mut self, candidate: &CandidateQuestion) {
        self.questions.push(candidate.question.clone());
        self.answers.push(candidate.answer.clone());
        self.options.push(candidate.similar.clone());
    }
}
