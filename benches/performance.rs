//! Performance benchmarks for msstyle
//!
//! These benchmarks measure the performance of key operations:
//! - Catalog construction (pattern compilation)
//! - Single-rule evaluation on clean and violating sentences
//! - Full catalog evaluation, sequential vs parallel
//! - Document-sized validation through the validator
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench catalog_build
//! cargo bench sentence_evaluation
//! ```
//!
//! ## Expected Performance Characteristics
//!
//! ### Catalog Construction
//! - Paid once per process; dominated by regex compilation
//!
//! ### Evaluation
//! - Clean sentences only pay for the pass/fail check of each rule
//! - Violating sentences additionally pay for the exhaustive scan
//! - Parallel evaluation only pays off for long sentences; short ones are
//!   dominated by scheduling overhead

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use msstyle::engine::{EvaluationMode, Evaluator, evaluate_rule};
use msstyle::{Catalog, MsStyleValidator, RuleId, Sentence};
use std::sync::Arc;

// ============================================================================
// Helper Functions
// ============================================================================

const CLEAN_SENTENCE: &str = "これは Windows の設定を変更するための手順です。";
const VIOLATING_SENTENCE: &str =
    "当社のﾃﾞｰﾀを 3 ケ月ごとに確認し、不正な値は ５０ % 未満にしてください。保存しますか?Excel";

/// Build a sentence by repeating `unit` `times` times
fn repeated_sentence(unit: &str, times: usize) -> Sentence {
    Sentence::new(unit.repeat(times), 1)
}

// ============================================================================
// Catalog Benchmarks
// ============================================================================

fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_build", |b| {
        b.iter(|| black_box(Catalog::builtin().unwrap()));
    });
}

// ============================================================================
// Evaluation Benchmarks
// ============================================================================

/// Benchmark a single rule on clean and violating content
fn bench_rule_evaluation(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let rule = catalog
        .get_rule(&RuleId::new("spaces-full-half").unwrap())
        .unwrap();

    let mut group = c.benchmark_group("rule_evaluation");
    group.bench_function("clean", |b| {
        b.iter(|| black_box(evaluate_rule(rule, black_box(CLEAN_SENTENCE))));
    });
    group.bench_function("violating", |b| {
        b.iter(|| black_box(evaluate_rule(rule, black_box(VIOLATING_SENTENCE))));
    });
    group.finish();
}

/// Benchmark the full catalog, sequential vs parallel, over sentence lengths
fn bench_sentence_evaluation(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let mut group = c.benchmark_group("sentence_evaluation");

    for repeat in [1usize, 10, 100].iter() {
        let sentence = repeated_sentence(VIOLATING_SENTENCE, *repeat);
        group.throughput(Throughput::Bytes(sentence.content.len() as u64));

        for (name, mode) in [
            ("sequential", EvaluationMode::Sequential),
            ("parallel", EvaluationMode::Parallel),
        ] {
            let evaluator = Evaluator::new(&catalog).with_mode(mode);
            group.bench_with_input(BenchmarkId::new(name, repeat), &sentence, |b, sentence| {
                b.iter(|| black_box(evaluator.evaluate(sentence)));
            });
        }
    }

    group.finish();
}

/// Benchmark validating a document of mixed sentences
fn bench_document_validation(c: &mut Criterion) {
    let validator = MsStyleValidator::with_catalog(Arc::new(Catalog::builtin().unwrap()));
    let document: Vec<Sentence> = (0..500)
        .map(|line| {
            let content = if line % 5 == 0 {
                VIOLATING_SENTENCE
            } else {
                CLEAN_SENTENCE
            };
            Sentence::new(content, line + 1)
        })
        .collect();

    let mut group = c.benchmark_group("document_validation");
    group.throughput(Throughput::Elements(document.len() as u64));
    group.bench_function("500_sentences", |b| {
        b.iter(|| {
            let errors: usize = document.iter().map(|s| validator.check(s).len()).sum();
            black_box(errors)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_catalog_build,
    bench_rule_evaluation,
    bench_sentence_evaluation,
    bench_document_validation
);
criterion_main!(benches);
