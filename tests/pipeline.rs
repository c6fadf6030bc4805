//! End-to-end tests over the public API.

use rand::rngs::StdRng;
use rand::SeedableRng;

use rapid_cloze::prelude::*;

const MARKER: &str = "__________";

/// Hierarchy with a canine category used for distractor checks
fn canine_hierarchy() -> InMemoryHierarchy {
    let mut h = InMemoryHierarchy::new();
    let canine = h.add_sense("canine.n.02", WordClass::Noun, &["canine"]);
    for lemma in ["fox", "wolf", "dog", "coyote", "jackal", "dingo", "dhole", "wild_dog", "fennec", "hyena_dog"] {
        let id = h.add_sense(&format!("{lemma}.n.01"), WordClass::Noun, &[lemma]);
        h.add_hypernym(id, canine);
    }
    h
}

#[test]
fn test_single_word_answer_from_second_sentence() {
    let corpus = "The quick brown fox jumps over the lazy dog. Dogs are loyal animals.";
    let hierarchy = InMemoryHierarchy::new();
    let generator = ObjectiveTestGenerator::new(corpus, RuleAnnotator::new(), &hierarchy);

    let report = generator.generate_candidates().unwrap();
    assert_eq!(report.sentence_count, 2);
    // "The" is blanked in the first sentence but is too short to be sampled
    assert_eq!(report.candidates.len(), 2);
    assert_eq!(report.candidates[0].answer, "The");
    assert_eq!(report.eligible(3).count(), 1);

    let test = generator.generate_test(1).unwrap();
    assert_eq!(test.len(), 1);
    assert_eq!(test.questions[0], "__________ are loyal animals.");
    assert_eq!(test.answers[0], "Dogs");
    assert!(test.options[0].is_empty());
}

#[test]
fn test_distractors_exclude_the_word_and_cap_at_eight() {
    let hierarchy = canine_hierarchy();
    let generator = DistractorGenerator::new(&hierarchy, 8);
    let similar = generator.generate("dog").unwrap();

    assert_eq!(
        similar,
        vec!["fox", "wolf", "coyote", "jackal", "dingo", "dhole", "wild dog", "fennec"]
    );
}

#[test]
fn test_not_enough_candidates() {
    let corpus = "Dogs are loyal animals. Cats are independent creatures.";
    let hierarchy = InMemoryHierarchy::new();
    let generator = ObjectiveTestGenerator::new(corpus, RuleAnnotator::new(), &hierarchy);

    let err = generator.generate_test(5).unwrap_err();
    assert!(matches!(
        err,
        QuizError::InsufficientCandidates {
            requested: 5,
            available: 2
        }
    ));
}

const SCIENCE: &str = "Photosynthesis converts light energy into chemical energy. \
    Chlorophyll absorbs mostly blue and red light. \
    The Amazon River flows through Brazil. \
    Mitochondria produce energy for the cell. \
    However, some cells lack mitochondria. \
    Plants grow.";

#[test]
fn test_skips_are_reported() {
    let hierarchy = InMemoryHierarchy::new();
    let generator = ObjectiveTestGenerator::new(SCIENCE, RuleAnnotator::new(), &hierarchy);
    let report = generator.generate_candidates().unwrap();

    assert_eq!(report.sentence_count, 6);
    let adverbs: Vec<usize> = report
        .skipped_where(|r| *r == SkipReason::LeadingAdverb)
        .map(|s| s.index)
        .collect();
    assert_eq!(adverbs, vec![4]);
    let short: Vec<usize> = report
        .skipped_where(|r| matches!(r, SkipReason::TooShort { .. }))
        .map(|s| s.index)
        .collect();
    assert_eq!(short, vec![5]);
}

#[test]
fn test_filling_the_blank_restores_the_sentence() {
    let annotator = RuleAnnotator::new();
    let hierarchy = InMemoryHierarchy::new();
    let sentences = annotator.split_into_sentences(SCIENCE).unwrap();
    let generator = ObjectiveTestGenerator::new(SCIENCE, &annotator, &hierarchy);

    let report = generator.generate_candidates().unwrap();
    assert!(!report.is_empty());
    for candidate in &report.candidates {
        let blank = MARKER.repeat(candidate.blanked_words.len());
        let restored = candidate.question.replacen(&blank, &candidate.answer, 1);
        assert_eq!(
            restored.to_lowercase(),
            sentences[candidate.sentence_index].to_lowercase(),
            "question {:?}",
            candidate.question
        );
    }
}

#[test]
fn test_sampled_questions_are_distinct_and_non_trivial() {
    let hierarchy = InMemoryHierarchy::new();
    let generator = ObjectiveTestGenerator::new(SCIENCE, RuleAnnotator::new(), &hierarchy);
    let available = generator.generate_candidates().unwrap().eligible(3).count();
    assert!(available >= 2);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let test = generator.generate_test_with(2, &mut rng).unwrap();
        assert_eq!(test.questions.len(), 2);
        assert_eq!(test.answers.len(), 2);
        assert_eq!(test.options.len(), 2);
        assert_ne!(test.questions[0], test.questions[1]);
        for answer in &test.answers {
            assert!(answer.split(' ').all(|w| w.chars().count() > 3));
        }
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let hierarchy = InMemoryHierarchy::new();
    let generator = ObjectiveTestGenerator::new(SCIENCE, RuleAnnotator::new(), &hierarchy);
    let a = generator
        .generate_test_with(2, &mut StdRng::seed_from_u64(11))
        .unwrap();
    let b = generator
        .generate_test_with(2, &mut StdRng::seed_from_u64(11))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_corpus_and_hierarchy_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let corpus_path = dir.path().join("corpus.txt");
    std::fs::write(&corpus_path, "Foxes hunt small rodents at night. Wolves live in packs.").unwrap();

    let hierarchy_path = dir.path().join("hierarchy.json");
    std::fs::write(
        &hierarchy_path,
        r#"{"synsets": [
            {"id": "canine.n.02", "pos": "n", "lemmas": ["canine"]},
            {"id": "fox.n.01", "pos": "n", "lemmas": ["fox"], "hypernyms": ["canine.n.02"]},
            {"id": "wolf.n.01", "pos": "n", "lemmas": ["wolf"], "hypernyms": ["canine.n.02"]},
            {"id": "jackal.n.01", "pos": "n", "lemmas": ["jackal"], "hypernyms": ["canine.n.02"]}
        ]}"#,
    )
    .unwrap();

    let hierarchy = InMemoryHierarchy::from_path(&hierarchy_path).unwrap();
    let generator =
        ObjectiveTestGenerator::from_path(&corpus_path, RuleAnnotator::new(), hierarchy).unwrap();
    let report = generator.generate_candidates().unwrap();

    let foxes = report
        .candidates
        .iter()
        .find(|c| c.answer == "Foxes")
        .expect("first sentence blanks its first word");
    assert_eq!(foxes.question, "__________ hunt small rodents at night.");
    assert_eq!(foxes.similar, vec!["fox", "wolf", "jackal"]);
}

#[test]
fn test_missing_corpus_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ObjectiveTestGenerator::from_path(
        dir.path().join("absent.txt"),
        RuleAnnotator::new(),
        InMemoryHierarchy::new(),
    )
    .unwrap_err();
    assert!(matches!(err, QuizError::CorpusLoad { .. }));
}

#[test]
fn test_config_file_drives_the_marker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"blank_marker": "[...]"}"#).unwrap();
    let config = GeneratorConfig::from_path(&path).unwrap();

    let generator = ObjectiveTestGenerator::with_config(
        "Dogs are loyal animals.",
        RuleAnnotator::new(),
        InMemoryHierarchy::new(),
        config,
    )
    .unwrap();
    let test = generator.generate_test(1).unwrap();
    assert_eq!(test.questions[0], "[...] are loyal animals.");
}

#[test]
fn test_every_distinct_question_of_a_large_corpus() {
    let corpus: String = (0..3000)
        .map(|i| format!("Zorbq flows near river{i}. "))
        .collect();
    let hierarchy = InMemoryHierarchy::new();
    let generator = ObjectiveTestGenerator::new(corpus, RuleAnnotator::new(), &hierarchy);
    assert_eq!(generator.generate_candidates().unwrap().eligible(3).count(), 3000);

    let test = generator
        .generate_test_with(3000, &mut StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(test.len(), 3000);
    let distinct: std::collections::HashSet<&String> = test.questions.iter().collect();
    assert_eq!(distinct.len(), 3000);
}

#[test]
fn test_hard_wrapped_phrase_is_blanked() {
    let hierarchy = InMemoryHierarchy::new();
    let generator = ObjectiveTestGenerator::new(
        "Acme\nCorporation builds rockets.",
        RuleAnnotator::new(),
        &hierarchy,
    );
    let report = generator.generate_candidates().unwrap();
    assert!(report.skipped.is_empty());
    assert_eq!(report.candidates[0].answer, "Acme Corporation");
    assert_eq!(
        report.candidates[0].question,
        "____________________ builds rockets."
    );
}
