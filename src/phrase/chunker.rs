//! Noun phrase chunking
//!
//! Identifies noun phrases using a fixed regexp-style grammar over Penn tags:
//!
//! 1. `<NN>+ <IN|DT>* <NN>+`
//! 2. `<NN>+ <IN|DT>* <NNP>+`
//! 3. `<NNP>+ <NNS>*`
//!
//! Rules run in order. Each rule scans the tokens that are still unchunked
//! left to right and takes the leftmost greedy match; a match never crosses a
//! chunk found by an earlier rule.

use crate::types::{ChunkSpan, PosTag, TaggedToken};

/// One element of a chunk rule: a set of accepted tags and a quantifier.
#[derive(Debug, Clone, Copy)]
struct TagElement {
    tags: &'static [PosTag],
    /// `true` for `+`, `false` for `*`
    required: bool,
}

impl TagElement {
    const fn one_or_more(tags: &'static [PosTag]) -> Self {
        Self { tags, required: true }
    }

    const fn zero_or_more(tags: &'static [PosTag]) -> Self {
        Self {
            tags,
            required: false,
        }
    }

    fn accepts(&self, pos: PosTag) -> bool {
        self.tags.contains(&pos)
    }
}

const NN: &[PosTag] = &[PosTag::Noun];
const NNS: &[PosTag] = &[PosTag::PluralNoun];
const NNP: &[PosTag] = &[PosTag::ProperNoun];
const IN_DT: &[PosTag] = &[PosTag::Preposition, PosTag::Determiner];

/// The grammar, in application order
const RULES: [&[TagElement]; 3] = [
    &[
        TagElement::one_or_more(NN),
        TagElement::zero_or_more(IN_DT),
        TagElement::one_or_more(NN),
    ],
    &[
        TagElement::one_or_more(NN),
        TagElement::zero_or_more(IN_DT),
        TagElement::one_or_more(NNP),
    ],
    &[TagElement::one_or_more(NNP), TagElement::zero_or_more(NNS)],
];

/// Noun phrase chunker
#[derive(Debug, Clone, Copy, Default)]
pub struct NounPhraseChunker;

impl NounPhraseChunker {
    pub fn new() -> Self {
        Self
    }

    /// Extract chunk spans from one sentence, ordered by position
    pub fn extract_chunks(&self, tokens: &[TaggedToken]) -> Vec<ChunkSpan> {
        let tags: Vec<PosTag> = tokens.iter().map(|t| t.pos).collect();
        let mut chunked = vec![false; tags.len()];
        let mut spans: Vec<(usize, usize)> = Vec::new();

        for rule in RULES {
            let mut i = 0;
            while i < tags.len() {
                if chunked[i] {
                    i += 1;
                    continue;
                }

                // Matches are confined to the current run of unchunked tokens
                let limit = chunked[i..]
                    .iter()
                    .position(|&c| c)
                    .map_or(tags.len(), |offset| i + offset);

                match match_rule(rule, &tags[..limit], i) {
                    Some(end) => {
                        chunked[i..end].iter_mut().for_each(|c| *c = true);
                        spans.push((i, end));
                        i = end;
                    }
                    None => i += 1,
                }
            }
        }

        spans.sort_unstable_by_key(|&(start, _)| start);
        spans
            .into_iter()
            .map(|(start, end)| ChunkSpan {
                start,
                end,
                text: chunk_text(tokens, start, end),
            })
            .collect()
    }

    /// Extract only the surface text of each chunk
    pub fn extract_phrases(&self, tokens: &[TaggedToken]) -> Vec<String> {
        self.extract_chunks(tokens)
            .into_iter()
            .map(|chunk| chunk.text)
            .collect()
    }
}

/// Match `rule` against `tags` starting at `start`, returning the end index.
///
/// Quantifiers are greedy with backtracking, so the result is the same match a
/// regex engine would report for the equivalent tag pattern.
fn match_rule(rule: &[TagElement], tags: &[PosTag], start: usize) -> Option<usize> {
    let Some((element, rest)) = rule.split_first() else {
        return Some(start);
    };

    let run = tags[start..]
        .iter()
        .take_while(|&&pos| element.accepts(pos))
        .count();
    let min = usize::from(element.required);

    (min..=run)
        .rev()
        .find_map(|taken| match_rule(rest, tags, start + taken))
}

fn chunk_text(tokens: &[TaggedToken], start: usize, end: usize) -> String {
    tokens[start..end]
        .iter()
        .map(|t| t.word.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
