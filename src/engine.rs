//! Rule evaluation engine

pub mod evaluator;

pub use evaluator::{EvaluationMode, Evaluator, RuleOutcome, evaluate_rule};
