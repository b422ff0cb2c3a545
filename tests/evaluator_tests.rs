//! Property tests for rule evaluation
//!
//! Sentences are drawn from a mix of ASCII, kana, full-width forms, kanji
//! numerals and the punctuation the spacing rules look at.

mod common;

use common::builtin_catalog;
use msstyle::engine::{EvaluationMode, Evaluator, evaluate_rule};
use msstyle::{MsStyleValidator, Sentence};
use proptest::prelude::*;
use std::sync::Arc;

const SENTENCE_PATTERN: &str = "[ -~ぁ-んァ-ヶー｡-ﾟ０-９Ａ-Ｚ一二三十百千万章第当社不正。、．，「」（）？！：…°%/]{0,40}";

proptest! {
    #[test]
    fn failure_matches_unanchored_search(content in SENTENCE_PATTERN) {
        let catalog = builtin_catalog();
        for rule in catalog.active_rules() {
            let result = evaluate_rule(rule, &content);
            prop_assert_eq!(
                result.is_failed(),
                rule.pattern().is_match(&content),
                "rule {} disagrees with its pattern on {:?}",
                rule.id(),
                content
            );
            prop_assert_eq!(result.is_failed(), !result.is_succeeded());
            prop_assert_eq!(result.is_failed(), result.message().is_some());
        }
    }

    #[test]
    fn spans_are_ordered_non_overlapping_and_in_bounds(content in SENTENCE_PATTERN) {
        let catalog = builtin_catalog();
        let char_len = content.chars().count();

        for rule in catalog.active_rules() {
            let result = evaluate_rule(rule, &content);
            let positions = result.positions();

            for span in positions {
                prop_assert!(span.start < span.end);
                prop_assert!(span.end <= char_len);

                let text = span.slice(&content);
                prop_assert!(text.is_some());
                if let Some(text) = text {
                    prop_assert!(
                        rule.pattern().is_match(text),
                        "rule {} reported {:?} which its pattern does not match",
                        rule.id(),
                        text
                    );
                }
            }

            for pair in positions.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start);
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent(content in SENTENCE_PATTERN) {
        let catalog = builtin_catalog();
        for rule in catalog.active_rules() {
            prop_assert_eq!(evaluate_rule(rule, &content), evaluate_rule(rule, &content));
        }
    }

    #[test]
    fn parallel_matches_sequential(content in SENTENCE_PATTERN) {
        let catalog = builtin_catalog();
        let sentence = Sentence::new(content, 1);

        let sequential = Evaluator::new(&catalog)
            .with_mode(EvaluationMode::Sequential)
            .evaluate(&sentence);
        let parallel = Evaluator::new(&catalog)
            .with_mode(EvaluationMode::Parallel)
            .evaluate(&sentence);

        prop_assert_eq!(sequential.len(), parallel.len());
        for (s, p) in sequential.iter().zip(parallel.iter()) {
            prop_assert_eq!(s.rule.id(), p.rule.id());
            prop_assert_eq!(&s.result, &p.result);
        }
    }

    #[test]
    fn one_error_per_position(content in SENTENCE_PATTERN) {
        let catalog = Arc::new(builtin_catalog());
        let sentence = Sentence::new(content, 3);

        let expected: usize = Evaluator::new(&catalog)
            .evaluate(&sentence)
            .iter()
            .map(|outcome| outcome.result.positions().len())
            .sum();

        let errors = MsStyleValidator::with_catalog(catalog).check(&sentence);
        prop_assert_eq!(errors.len(), expected);
        prop_assert!(errors.iter().all(|e| e.line == 3 && e.start < e.end));
    }
}

#[test]
fn test_empty_sentence_passes_every_rule() {
    let catalog = builtin_catalog();
    let outcomes = Evaluator::new(&catalog).evaluate(&Sentence::new("", 1));

    assert_eq!(outcomes.len(), catalog.active_len());
    assert!(outcomes.iter().all(|o| o.result.is_succeeded()));
}

#[test]
fn test_outcomes_follow_catalog_order() {
    let catalog = builtin_catalog();
    let outcomes = Evaluator::new(&catalog).evaluate(&Sentence::new("第3章", 1));

    let ids: Vec<&str> = outcomes.iter().map(|o| o.rule.id().as_str()).collect();
    let expected: Vec<&str> = catalog.active_rules().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, expected);
}
