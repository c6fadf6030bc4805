//! Lexicon-based part-of-speech tagging
//!
//! Closed-class words (determiners, prepositions, pronouns, auxiliaries) are
//! looked up in a lexicon; everything else is tagged from capitalization and
//! suffix heuristics. Callers can extend the lexicon with domain terms.

use rustc_hash::FxHashMap;

use crate::types::PosTag;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "over",
    "under", "near", "since", "until", "upon", "within", "without", "across", "along", "among",
    "around", "behind", "beyond", "toward", "towards", "because", "if", "while", "as", "than",
    "whether", "although", "though",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
    "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "itself",
    "themselves",
];

const WH_WORDS: &[&str] = &["which", "who", "whom", "whose", "what", "where", "when", "why", "how"];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

const VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "do",
    "does", "did",
];

const ADVERBS: &[&str] = &[
    "not", "very", "also", "often", "never", "always", "however", "then", "there", "here",
    "now", "still", "even", "too", "soon", "already", "again", "almost", "rather", "quite",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "al", "ic"];

/// Tagger backed by a word-to-tag lexicon with heuristic fallback
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    /// Lowercased word to tag
    lexicon: FxHashMap<String, PosTag>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    /// Create a tagger preloaded with English closed-class words
    pub fn new() -> Self {
        let mut tagger = Self::empty();
        tagger.add_words(DETERMINERS, PosTag::Determiner);
        tagger.add_words(PREPOSITIONS, PosTag::Preposition);
        tagger.add_words(CONJUNCTIONS, PosTag::Conjunction);
        tagger.add_words(PRONOUNS, PosTag::Pronoun);
        tagger.add_words(WH_WORDS, PosTag::WhWord);
        tagger.add_words(MODALS, PosTag::Modal);
        tagger.add_words(VERBS, PosTag::Verb);
        tagger.add_words(ADVERBS, PosTag::Adverb);
        tagger.add_word("to", PosTag::To);
        tagger
    }

    /// Create a tagger with an empty lexicon (heuristics only)
    pub fn empty() -> Self {
        Self {
            lexicon: FxHashMap::default(),
        }
    }

    /// Add or override the tag for a single word
    pub fn add_word(&mut self, word: &str, pos: PosTag) {
        self.lexicon.insert(word.to_lowercase(), pos);
    }

    /// Add or override the tag for several words
    pub fn add_words(&mut self, words: &[&str], pos: PosTag) {
        for word in words {
            self.add_word(word, pos);
        }
    }

    /// Builder-style variant of [`add_word`](Self::add_word)
    pub fn with_word(mut self, word: &str, pos: PosTag) -> Self {
        self.add_word(word, pos);
        self
    }

    /// Number of lexicon entries
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Tag a token sequence. `tokens[0]` is treated as sentence-initial.
    pub fn tag(&self, tokens: &[String]) -> Vec<PosTag> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| self.tag_word(token, i == 0))
            .collect()
    }

    /// Tag one word; `sentence_initial` suppresses the capitalization rule
    pub fn tag_word(&self, word: &str, sentence_initial: bool) -> PosTag {
        let lower = word.to_lowercase();
        if let Some(&pos) = self.lexicon.get(&lower) {
            return pos;
        }

        if !word.chars().any(char::is_alphanumeric) {
            return PosTag::Punctuation;
        }
        if word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return PosTag::Number;
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_initial {
            return if is_plural(&lower) {
                PosTag::PluralProperNoun
            } else {
                PosTag::ProperNoun
            };
        }

        suffix_tag(&lower)
    }
}

fn is_plural(lower: &str) -> bool {
    lower.len() > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
}

fn suffix_tag(lower: &str) -> PosTag {
    if lower.len() > 4 && lower.ends_with("ly") {
        PosTag::Adverb
    } else if lower.len() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
        PosTag::Verb
    } else if lower.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        PosTag::Adjective
    } else if is_plural(lower) {
        PosTag::PluralNoun
    } else {
        PosTag::Noun
    }
}
