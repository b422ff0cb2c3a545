#![forbid(unsafe_code)]

//! Rule catalog
//!
//! The Catalog is responsible for:
//! - Compiling the built-in rule table once at startup
//! - Keeping catalog declaration order, which is also the reporting order
//! - Enabling and disabling entries based on configuration
//! - Providing access to rules by ID

use crate::config::style_toml::RulesConfig;
use crate::error::{ConfigError, RuleError};
use crate::rules::builtin::{BUILTIN_RULES, RuleDefinition};
use crate::rules::StyleRule;
use crate::types::{Category, RuleId};
use std::collections::HashMap;

/// Lifecycle state of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleStatus {
    /// Evaluated by default
    Active,
    /// Defined and compiled but only evaluated when enabled by configuration
    Disabled,
    /// Named placeholder without detection logic; never evaluated
    Unimplemented,
}

impl RuleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStatus::Active => "active",
            RuleStatus::Disabled => "disabled",
            RuleStatus::Unimplemented => "unimplemented",
        }
    }
}

/// One named entry of the catalog
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    id: RuleId,
    category: Category,
    status: RuleStatus,
    enabled: bool,
    message: String,
    rule: Option<StyleRule>,
}

impl CatalogEntry {
    pub fn id(&self) -> &RuleId {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Status declared by the catalog, independent of configuration
    pub fn status(&self) -> RuleStatus {
        self.status
    }

    /// Whether the entry takes part in evaluation
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Compiled rule; `None` for unimplemented entries
    pub fn rule(&self) -> Option<&StyleRule> {
        self.rule.as_ref()
    }
}

/// Ordered, immutable-after-construction collection of style rules
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<RuleId, usize>,
}

impl Catalog {
    /// Compile the built-in Microsoft Japanese style catalog
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if any built-in definition is malformed. This is a
    /// defect in the catalog itself; callers should abort rather than run with
    /// a partial rule set.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_definitions(BUILTIN_RULES)
    }

    /// Compile a catalog from rule definitions, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if:
    /// - A rule ID is invalid or duplicated
    /// - A pattern does not compile
    /// - A rule other than an unimplemented one lacks a pattern
    pub fn from_definitions(definitions: &[RuleDefinition]) -> Result<Self, RuleError> {
        let mut entries = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());

        for def in definitions {
            let id = RuleId::new(def.id).ok_or_else(|| {
                RuleError::InvalidDefinition(format!("Invalid rule ID: {}", def.id))
            })?;

            if index.contains_key(&id) {
                return Err(RuleError::InvalidDefinition(format!(
                    "Duplicate rule ID '{}'",
                    id
                )));
            }

            let rule = match (def.status, def.pattern) {
                (RuleStatus::Unimplemented, _) => None,
                (_, Some(pattern)) => Some(StyleRule::new(
                    id.clone(),
                    def.category,
                    pattern,
                    def.message,
                )?),
                (_, None) => {
                    return Err(RuleError::InvalidDefinition(format!(
                        "Rule '{}' has no pattern",
                        id
                    )));
                }
            };

            index.insert(id.clone(), entries.len());
            entries.push(CatalogEntry {
                id,
                category: def.category,
                status: def.status,
                enabled: def.status == RuleStatus::Active,
                message: def.message.to_string(),
                rule,
            });
        }

        tracing::debug!(
            entries = entries.len(),
            active = entries.iter().filter(|e| e.enabled).count(),
            "compiled style rule catalog"
        );

        Ok(Catalog { entries, index })
    }

    /// Enable or disable a single entry
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` for unknown IDs and
    /// `RuleError::NotImplemented` when enabling an unimplemented entry.
    pub fn set_enabled(&mut self, id: &RuleId, enabled: bool) -> Result<(), RuleError> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| RuleError::NotFound(id.to_string()))?;
        let entry = &mut self.entries[position];

        if entry.status == RuleStatus::Unimplemented && enabled {
            return Err(RuleError::NotImplemented(id.to_string()));
        }

        entry.enabled = enabled;
        Ok(())
    }

    /// Apply the `[rules]` table of the configuration
    ///
    /// Entries not mentioned keep their catalog default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the table names an unknown rule or
    /// tries to enable an unimplemented one.
    pub fn apply_config(&mut self, config: &RulesConfig) -> Result<(), ConfigError> {
        // Sorted so the first reported problem does not depend on hash order
        let mut settings: Vec<_> = config.iter().collect();
        settings.sort_by(|a, b| a.0.cmp(b.0));

        for (id, enabled) in settings {
            self.set_enabled(id, *enabled).map_err(|e| match e {
                RuleError::NotFound(_) => {
                    ConfigError::Validation(format!("Unknown rule '{}' in [rules]", id))
                }
                RuleError::NotImplemented(_) => ConfigError::Validation(format!(
                    "Rule '{}' is not implemented and cannot be enabled",
                    id
                )),
                other => ConfigError::Validation(other.to_string()),
            })?;
        }

        Ok(())
    }

    /// Get an entry by its ID
    pub fn entry(&self, id: &RuleId) -> Option<&CatalogEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Get a compiled rule by its ID, regardless of whether it is enabled
    pub fn get_rule(&self, id: &RuleId) -> Option<&StyleRule> {
        self.entry(id).and_then(CatalogEntry::rule)
    }

    /// All entries in declaration order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Enabled rules in declaration order
    pub fn active_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.entries
            .iter()
            .filter(|entry| entry.enabled)
            .filter_map(CatalogEntry::rule)
    }

    /// Number of enabled rules
    pub fn active_len(&self) -> usize {
        self.active_rules().count()
    }

    /// Number of entries, including disabled and unimplemented ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
