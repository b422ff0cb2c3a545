#![forbid(unsafe_code)]

//! Outcome of evaluating one rule against one sentence

use crate::types::Span;

/// Result of testing a single rule against a single sentence
///
/// A result with no positions means the rule passed. A failed result always
/// carries the message of the rule that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    message: Option<String>,
    positions: Vec<Span>,
}

impl ValidationResult {
    /// Creates an empty (passing) result
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty result that will report `message` once positions are added
    pub(crate) fn with_message(message: impl Into<String>) -> Self {
        ValidationResult {
            message: Some(message.into()),
            positions: Vec::new(),
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Appends a violation span
    ///
    /// `start < end` must hold; an empty span is a defect in the rule that
    /// produced it.
    pub fn add_position(&mut self, start: usize, end: usize) -> &mut Self {
        debug_assert!(start < end, "empty violation span {}..{}", start, end);
        self.positions.push(Span::new(start, end));
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Violation spans in the order they were found
    pub fn positions(&self) -> &[Span] {
        &self.positions
    }

    pub fn is_failed(&self) -> bool {
        !self.positions.is_empty()
    }

    pub fn is_succeeded(&self) -> bool {
        self.positions.is_empty()
    }
}
