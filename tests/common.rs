//! Test utilities for msstyle integration tests

#![allow(dead_code)]

use msstyle::{Catalog, RuleId, Sentence};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// Build the built-in catalog
pub fn builtin_catalog() -> Catalog {
    assert_ok!(Catalog::builtin(), "built-in catalog should compile")
}

/// Parse a rule ID known to be valid
pub fn rule_id(id: &str) -> RuleId {
    assert_some!(RuleId::new(id), "rule ID should be valid")
}

/// A sentence on line 1
pub fn sentence(content: &str) -> Sentence {
    Sentence::new(content, 1)
}
