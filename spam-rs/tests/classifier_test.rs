//! End-to-end tests: learn from corpora, persist dictionaries, reload them,
//! score messages and evaluate test corpora.

use std::fs;
use std::path::Path;

use spam_rs::classifier::{FrequencyDictionary, ScoreOutcome, SpamClassifier};
use spam_rs::evaluate::{sweep_thresholds, BatchEvaluator};
use spam_rs::tokenize::TokenNormalizer;

const THRESHOLD: f64 = 0.09;

/// Helper to write a corpus file, one message per line
fn write_corpus(path: &Path, messages: &[&str]) {
    let mut content = String::new();
    for message in messages {
        content.push_str(message);
        content.push('\n');
    }
    fs::write(path, content).unwrap();
}

/// Train a classifier from two small corpora via the full persistence cycle
fn trained_classifier(dir: &Path) -> SpamClassifier {
    let learn_normal = dir.join("normal.txt");
    let learn_spam = dir.join("spam.txt");

    // "赢" appears in every spam message, "好" in every normal one
    write_corpus(
        &learn_normal,
        &["好 朋友", "好 吃饭", "好 天气", "好 好 好", "好 周末"],
    );
    write_corpus(
        &learn_spam,
        &["赢 大奖", "赢 现金", "赢 赢 赢", "赢 彩票", "赢 红包"],
    );

    let normalizer = TokenNormalizer::new();
    let normal = FrequencyDictionary::learn(&learn_normal, &normalizer).unwrap();
    let spam = FrequencyDictionary::learn(&learn_spam, &normalizer).unwrap();

    // Round-trip through the persistence format before classifying
    let wnormal = dir.join("wnormal.txt");
    let wspam = dir.join("wspam.txt");
    normal.save(&wnormal).unwrap();
    spam.save(&wspam).unwrap();

    SpamClassifier::new(
        FrequencyDictionary::load(&wspam).unwrap(),
        FrequencyDictionary::load(&wnormal).unwrap(),
    )
}

#[test]
fn test_learn_persist_reload_preserves_counts() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier(dir.path());

    // One increment per message containing the token, repeats ignored
    assert_eq!(classifier.normal_dictionary().count("好"), 5);
    assert_eq!(classifier.spam_dictionary().count("赢"), 5);
}

#[test]
fn test_trained_classifier_decisions() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier(dir.path());

    // "赢" occurs only in the spam dictionary with count 5 > 2
    assert_eq!(
        classifier.score_message("赢").unwrap(),
        ScoreOutcome::Scored(0.99)
    );
    assert!(classifier.is_spam("赢", THRESHOLD).unwrap());

    // "好" occurs only in the normal dictionary with count 5 > 2
    assert_eq!(
        classifier.score_message("好").unwrap(),
        ScoreOutcome::Scored(0.01)
    );
    assert!(!classifier.is_spam("好", THRESHOLD).unwrap());
}

#[test]
fn test_evaluate_corpora_and_sweep() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier(dir.path());
    let evaluator = BatchEvaluator::new(&classifier);

    let test_normal = dir.path().join("testnormal.txt");
    let test_spam = dir.path().join("testspam.txt");
    write_corpus(&test_normal, &["好", "好 朋友", "天气"]);
    write_corpus(&test_spam, &["赢", "赢 现金", "赢 大奖"]);

    let normal = evaluator
        .evaluate(&test_normal, dir.path().join("log_testnormal.txt"))
        .unwrap();
    let spam = evaluator
        .evaluate(&test_spam, dir.path().join("log_testspam.txt"))
        .unwrap();

    assert_eq!(normal.processed, 3);
    assert_eq!(spam.processed, 3);
    assert_eq!(normal.skipped, 0);
    assert_eq!(spam.skipped, 0);

    let points = sweep_thresholds(&normal.scores, &spam.scores, &[0.01, 0.09, 0.5]);

    // Every spam message contains "赢", so all are detected at each threshold
    for point in &points {
        assert_eq!(point.true_positives, spam.scores.len());
    }

    // Counts never increase as the threshold rises
    for pair in points.windows(2) {
        assert!(pair[0].false_positives >= pair[1].false_positives);
        assert!(pair[0].true_positives >= pair[1].true_positives);
    }

    // The per-message logs contain one block per scored message
    let log = fs::read_to_string(dir.path().join("log_testspam.txt")).unwrap();
    assert_eq!(log.matches("probability = ").count(), spam.scores.len());
    assert!(log.contains("赢"));
}

#[test]
fn test_missing_dictionary_is_an_error() {
    let err = FrequencyDictionary::load("data/save/does-not-exist.txt").unwrap_err();
    assert!(matches!(err, spam_rs::SpamError::NotFound(_)));
}
