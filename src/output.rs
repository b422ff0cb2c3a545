//! Output formatters (human and JSONL)

pub mod human;
pub mod jsonl;
pub mod report;
pub mod rule_status;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
pub use report::{CheckReport, ReportedViolation};
pub use rule_status::{RuleListHumanFormatter, RuleListJsonlFormatter, RuleListing};
