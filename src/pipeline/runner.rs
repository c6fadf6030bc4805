//! Pipeline runner: derives candidate questions and samples tests.
//!
//! [`ObjectiveTestGenerator`] owns the corpus and its collaborators. Calling
//! [`generate_test`](ObjectiveTestGenerator::generate_test) runs, in order:
//!
//! 1. Sentence split of the whole corpus (failure is fatal)
//! 2. Per sentence: tokenize + tag (failure skips the sentence)
//! 3. Per sentence: chunk, select blank, look up distractors
//! 4. Filter trivial answers and sample unique questions
//!
//! # Static dispatch
//!
//! The generator is generic over the [`Annotator`] and [`LexicalHierarchy`],
//! so stub collaborators in tests cost nothing at runtime. References to
//! either also implement the traits.

use std::path::Path;

use rustc_hash::FxHashSet;

use super::artifacts::{CandidateReport, SkippedSentence};
use super::config::GeneratorConfig;
use super::sampling::IndexSource;
use crate::errors::{QuizError, Result};
use crate::lexicon::LexicalHierarchy;
use crate::nlp::annotator::Annotator;
use crate::question::blank::BlankSelector;
use crate::question::{BlankOutcome, SkipReason};
use crate::types::{CandidateQuestion, ObjectiveTest};

/// Generates fill-in-the-blank tests from one corpus
#[derive(Debug, Clone)]
pub struct ObjectiveTestGenerator<A, H> {
    corpus: String,
    annotator: A,
    selector: BlankSelector<H>,
    config: GeneratorConfig,
}

impl<A, H> ObjectiveTestGenerator<A, H>
where
    A: Annotator,
    H: LexicalHierarchy,
{
    /// Create a generator over in-memory text with the default config
    pub fn new(corpus: impl Into<String>, annotator: A, hierarchy: H) -> Self {
        let config = GeneratorConfig::default();
        Self {
            corpus: corpus.into(),
            annotator,
            selector: BlankSelector::new(hierarchy, &config),
            config,
        }
    }

    /// Create a generator with a custom (validated) config
    pub fn with_config(
        corpus: impl Into<String>,
        annotator: A,
        hierarchy: H,
        config: GeneratorConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            corpus: corpus.into(),
            annotator,
            selector: BlankSelector::new(hierarchy, &config),
            config,
        })
    }

    /// Load the corpus from a text file
    pub fn from_path(path: impl AsRef<Path>, annotator: A, hierarchy: H) -> Result<Self> {
        let corpus = load_corpus(path.as_ref())?;
        Ok(Self::new(corpus, annotator, hierarchy))
    }

    /// Load the corpus from a text file and use a custom config
    pub fn from_path_with_config(
        path: impl AsRef<Path>,
        annotator: A,
        hierarchy: H,
        config: GeneratorConfig,
    ) -> Result<Self> {
        let corpus = load_corpus(path.as_ref())?;
        Self::with_config(corpus, annotator, hierarchy, config)
    }

    pub fn corpus(&self) -> &str {
        &self.corpus
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Derive candidate questions for every sentence of the corpus.
    ///
    /// Only a failed sentence split, or a strict-mode distractor failure, is
    /// returned as an error. Every other problem is recorded in
    /// [`CandidateReport::skipped`].
    pub fn generate_candidates(&self) -> Result<CandidateReport> {
        let sentences = self.annotator.split_into_sentences(&self.corpus)?;
        let mut report = CandidateReport {
            sentence_count: sentences.len(),
            ..CandidateReport::default()
        };

        for (index, sentence) in sentences.iter().enumerate() {
            let tokens = match self.annotator.annotate(sentence) {
                Ok(tokens) => tokens,
                Err(err) => {
                    crate::warn_event!(sentence = index, error = %err, "skipping sentence");
                    report.skipped.push(SkippedSentence {
                        index,
                        reason: SkipReason::Annotation {
                            message: err.to_string(),
                        },
                    });
                    continue;
                }
            };

            match self.selector.select(index, sentence, &tokens)? {
                BlankOutcome::Candidate(candidate) => {
                    crate::debug_event!(
                        sentence = index,
                        answer = %candidate.answer,
                        key = candidate.key,
                        "candidate question"
                    );
                    report.candidates.push(candidate);
                }
                BlankOutcome::NotApplicable(reason) => {
                    crate::debug_event!(sentence = index, reason = %reason, "sentence not applicable");
                    report.skipped.push(SkippedSentence { index, reason });
                }
            }
        }

        Ok(report)
    }

    /// Generate a test of `num_questions` unique questions using a
    /// thread-local random source.
    pub fn generate_test(&self, num_questions: usize) -> Result<ObjectiveTest> {
        self.generate_test_with(num_questions, &mut rand::thread_rng())
    }

    /// Generate a test drawing indices from `rng`.
    ///
    /// Candidates are drawn uniformly with replacement; a draw whose question
    /// text is already in the test is rejected. Fails with
    /// [`QuizError::InsufficientCandidates`] when fewer distinct questions
    /// exist than requested, or when `max_sampling_attempts` draws were not
    /// enough to collect them.
    pub fn generate_test_with(
        &self,
        num_questions: usize,
        rng: &mut impl IndexSource,
    ) -> Result<ObjectiveTest> {
        let report = self.generate_candidates()?;
        let eligible: Vec<&CandidateQuestion> =
            report.eligible(self.config.min_answer_len).collect();

        let available = eligible
            .iter()
            .map(|c| c.question.as_str())
            .collect::<FxHashSet<_>>()
            .len();
        if available < num_questions {
            return Err(QuizError::InsufficientCandidates {
                requested: num_questions,
                available,
            });
        }

        let budget = draw_budget(eligible.len(), available, self.config.max_sampling_attempts);
        let test = sample_unique(&eligible, num_questions, available, budget, rng)?;
        crate::info_event!(
            questions = test.len(),
            candidates = report.candidates.len(),
            eligible = eligible.len(),
            "generated objective test"
        );
        Ok(test)
    }
}

fn load_corpus(path: &Path) -> Result<String> {
    let corpus = std::fs::read_to_string(path).map_err(|source| QuizError::CorpusLoad {
        path: path.to_path_buf(),
        source,
    })?;
    crate::info_event!(path = %path.display(), bytes = corpus.len(), "corpus loaded");
    Ok(corpus)
}

/// Number of draws allowed when sampling from `pool_len` candidates with
/// `distinct` question texts.
///
/// Collecting every distinct question takes about `pool_len * ln(distinct)`
/// draws, so the configured floor is raised to four times that bound.
fn draw_budget(pool_len: usize, distinct: usize, floor: usize) -> usize {
    if pool_len == 0 {
        return floor;
    }
    let expected = pool_len as f64 * ((distinct.max(1) as f64).ln() + 1.0);
    floor.max((4.0 * expected).ceil() as usize)
}

/// Rejection-sample `count` candidates with distinct question text
fn sample_unique(
    eligible: &[&CandidateQuestion],
    count: usize,
    available: usize,
    max_attempts: usize,
    rng: &mut impl IndexSource,
) -> Result<ObjectiveTest> {
    let mut test = ObjectiveTest::default();
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut attempts = 0;

    while test.len() < count {
        if attempts == max_attempts {
            crate::warn_event!(
                attempts,
                collected = test.len(),
                requested = count,
                "sampling draw budget exhausted"
            );
            return Err(QuizError::InsufficientCandidates {
                requested: count,
                available,
            });
        }
        attempts += 1;

        let candidate = eligible[rng.next_index(eligible.len())];
        if seen.insert(candidate.question.as_str()) {
            test.push(candidate);
        }
    }

    Ok(test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnnotationError;
    use crate::lexicon::InMemoryHierarchy;
    use crate::pipeline::sampling::ScriptedIndices;
    use crate::types::{PosTag, TaggedToken};

    const LEXICON: &[(&str, &str)] = &[
        ("Alpha", "NNP"), ("rockets", "NNS"), ("fly", "VBP"), ("high", "JJ"),
        ("Bravo", "NNP"), ("engines", "NNS"), ("burn", "VBP"), ("fuel", "NN"),
        ("Very", "RB"), ("quickly", "RB"), ("it", "PRP"), ("ended", "VBD"),
        ("Cat", "NN"), ("sat", "VBD"), ("down", "RB"), ("here", "RB"),
        ("Delta", "NNP"), ("wings", "NNS"), ("bend", "VBP"), ("easily", "RB"),
        ("Short", "JJ"), ("one", "CD"),
    ];

    /// Splits on newlines, tokenizes on whitespace and tags from `LEXICON`.
    /// Words missing from the lexicon are a tagging failure.
    struct LineAnnotator;

    impl Annotator for LineAnnotator {
        fn split_into_sentences(&self, text: &str) -> std::result::Result<Vec<String>, AnnotationError> {
            Ok(text.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect())
        }

        fn tokenize(&self, sentence: &str) -> std::result::Result<Vec<String>, AnnotationError> {
            Ok(sentence.split_whitespace().map(String::from).collect())
        }

        fn tag(&self, tokens: &[String]) -> std::result::Result<Vec<TaggedToken>, AnnotationError> {
            tokens
                .iter()
                .map(|t| {
                    let (_, tag) = LEXICON
                        .iter()
                        .find(|(word, _)| *word == t.as_str())
                        .ok_or_else(|| AnnotationError::Tag(format!("unknown word {t}")))?;
                    Ok(TaggedToken::new(t.as_str(), PosTag::from_penn(tag)))
                })
                .collect()
        }
    }

    const CORPUS: &str = "\
Alpha rockets fly high
Bravo engines burn fuel
Very quickly it ended
Cat sat down here
Delta wings bend easily
Short one";

    fn generator() -> ObjectiveTestGenerator<LineAnnotator, InMemoryHierarchy> {
        ObjectiveTestGenerator::new(CORPUS, LineAnnotator, InMemoryHierarchy::new())
    }

    #[test]
    fn test_candidates_and_skips_are_reported() {
        let report = generator().generate_candidates().unwrap();
        assert_eq!(report.sentence_count, 6);

        let answers: Vec<_> = report.candidates.iter().map(|c| c.answer.as_str()).collect();
        assert_eq!(answers, vec!["Alpha rockets", "Bravo engines", "Cat", "Delta wings"]);

        let skipped: Vec<_> = report.skipped.iter().map(|s| (s.index, s.reason.clone())).collect();
        assert_eq!(
            skipped,
            vec![
                (2, SkipReason::LeadingAdverb),
                (5, SkipReason::TooShort { tokens: 2 }),
            ]
        );
    }

    #[test]
    fn test_trivial_answers_never_sampled() {
        // "Cat" has key 3 and is filtered; three questions remain
        let test = generator()
            .generate_test_with(3, &mut ScriptedIndices::new(vec![0, 1, 2]))
            .unwrap();
        assert_eq!(test.answers, vec!["Alpha rockets", "Bravo engines", "Delta wings"]);
    }

    #[test]
    fn test_duplicate_draws_are_rejected() {
        let mut source = ScriptedIndices::new(vec![2, 2, 2, 0]);
        let test = generator().generate_test_with(2, &mut source).unwrap();
        assert_eq!(test.answers, vec!["Delta wings", "Alpha rockets"]);
        assert_eq!(source.draws(), 4);
    }

    #[test]
    fn test_insufficient_candidates() {
        let err = generator()
            .generate_test_with(4, &mut ScriptedIndices::new(vec![0]))
            .unwrap_err();
        assert!(matches!(
            err,
            QuizError::InsufficientCandidates {
                requested: 4,
                available: 3
            }
        ));
    }

    #[test]
    fn test_attempt_bound() {
        let config = GeneratorConfig::default().with_max_sampling_attempts(500);
        let generator =
            ObjectiveTestGenerator::with_config(CORPUS, LineAnnotator, InMemoryHierarchy::new(), config)
                .unwrap();
        // Always the same index: the second unique question never appears
        let mut source = ScriptedIndices::new(vec![0]);
        let err = generator.generate_test_with(2, &mut source).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InsufficientCandidates {
                requested: 2,
                available: 3
            }
        ));
        assert_eq!(source.draws(), 500);
    }

    #[test]
    fn test_draw_budget_grows_with_pool() {
        assert_eq!(draw_budget(0, 0, 10), 10);
        assert_eq!(draw_budget(3, 3, 10_000), 10_000);

        let budget = draw_budget(5000, 5000, 10_000);
        // ln(5000) + 1 is about 9.5, so four times the bound is about 190 000
        assert!(budget > 150_000, "budget {budget}");
        assert!(budget < 250_000, "budget {budget}");
    }

    #[test]
    fn test_zero_questions() {
        let test = generator()
            .generate_test_with(0, &mut ScriptedIndices::new(Vec::new()))
            .unwrap();
        assert!(test.is_empty());
    }

    #[test]
    fn test_tagging_failure_skips_sentence() {
        let corpus = "Alpha rockets fly high\nbroken sentence without tags";
        let generator = ObjectiveTestGenerator::new(corpus, LineAnnotator, InMemoryHierarchy::new());
        let report = generator.generate_candidates().unwrap();
        assert_eq!(report.candidates.len(), 1);
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::Annotation { .. }
        ));
    }

    #[test]
    fn test_sentence_split_failure_is_fatal() {
        struct NoSentences;

        impl Annotator for NoSentences {
            fn split_into_sentences(&self, _text: &str) -> std::result::Result<Vec<String>, AnnotationError> {
                Err(AnnotationError::Sentence("model unavailable".into()))
            }

            fn tokenize(&self, _sentence: &str) -> std::result::Result<Vec<String>, AnnotationError> {
                Ok(Vec::new())
            }

            fn tag(&self, _tokens: &[String]) -> std::result::Result<Vec<TaggedToken>, AnnotationError> {
                Ok(Vec::new())
            }
        }

        let generator = ObjectiveTestGenerator::new("text", NoSentences, InMemoryHierarchy::new());
        let err = generator.generate_test(1).unwrap_err();
        assert!(matches!(err, QuizError::Annotation(AnnotationError::Sentence(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig::default().with_blank_marker("");
        let result = ObjectiveTestGenerator::with_config("", LineAnnotator, InMemoryHierarchy::new(), config);
        assert!(matches!(result, Err(QuizError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_corpus_file() {
        let result = ObjectiveTestGenerator::from_path(
            "/nonexistent/corpus.txt",
            LineAnnotator,
            InMemoryHierarchy::new(),
        );
        assert!(matches!(result, Err(QuizError::CorpusLoad { .. })));
    }
}
