//! Priority configuration and region-name resolution.

use hashbrown::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a region's geometry is resolved against candidate points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContainmentPolicy {
    /// Evaluate the inside/outside predicate on every candidate point.
    Exact,
    /// Write every candidate point unconditionally: the bounding box
    /// stands in for the solid. Valid only for axis-aligned shapes where
    /// this is an accepted approximation.
    Bulk,
}

/// One tag rule: a name fragment mapped to tier, label, and policy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagRule {
    /// The tag matched (case-insensitively) as a substring of region names.
    pub tag: String,
    /// Priority tier; higher tiers win at shared points.
    pub tier: i32,
    /// The material label written for regions matching this tag.
    pub label: i32,
    /// How matching regions are resolved geometrically.
    pub policy: ContainmentPolicy,
}

/// Ordered mapping from tag to (tier, label, containment policy).
///
/// Region names are matched against tags by case-insensitive substring
/// search. When a name matches several tags, **the first matching rule in
/// declaration order wins** - declaration order is the explicit,
/// documented tie-break, so put more specific tags first.
///
/// The configuration also carries the background label (for points no
/// region accepts) and a fallback label (for callers that want a label
/// for an unmatched name instead of the skip signal).
///
/// # Example
///
/// ```
/// use voxel_label::{ContainmentPolicy, PriorityConfig};
///
/// let config = PriorityConfig::new(0, 99)
///     .with_rule("ice", 0, 2, ContainmentPolicy::Bulk)
///     .with_rule("heterogeneity", 3, 10, ContainmentPolicy::Exact);
///
/// let rule = config.match_rule("Heterogeneity.003").unwrap();
/// assert_eq!(rule.label, 10);
/// assert!(config.match_rule("debris").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriorityConfig {
    rules: Vec<TagRule>,
    background_label: i32,
    fallback_label: i32,
}

impl PriorityConfig {
    /// Create an empty configuration with background and fallback labels.
    ///
    /// An empty configuration fails [`validate`](Self::validate); add at
    /// least one rule before running a compositor.
    #[must_use]
    pub const fn new(background_label: i32, fallback_label: i32) -> Self {
        Self {
            rules: Vec::new(),
            background_label,
            fallback_label,
        }
    }

    /// Append a tag rule (builder pattern).
    ///
    /// Rules are matched in the order they are added.
    #[must_use]
    pub fn with_rule(
        mut self,
        tag: impl Into<String>,
        tier: i32,
        label: i32,
        policy: ContainmentPolicy,
    ) -> Self {
        self.rules.push(TagRule {
            tag: tag.into(),
            tier,
            label,
            policy,
        });
        self
    }

    /// Append a tag rule in place.
    pub fn push_rule(&mut self, rule: TagRule) {
        self.rules.push(rule);
    }

    /// Get the rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    /// Get the background label.
    #[must_use]
    pub const fn background_label(&self) -> i32 {
        self.background_label
    }

    /// Get the fallback label for unmatched region names.
    #[must_use]
    pub const fn fallback_label(&self) -> i32 {
        self.fallback_label
    }

    /// Check the configuration for fatal problems.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] for a ruleless configuration,
    /// [`ConfigError::EmptyTag`] for a rule whose tag is the empty string,
    /// and [`ConfigError::DuplicateTag`] when two rules share a tag
    /// (case-insensitive).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.tag.is_empty() {
                return Err(ConfigError::EmptyTag { index });
            }
            if !seen.insert(rule.tag.to_lowercase()) {
                return Err(ConfigError::DuplicateTag {
                    tag: rule.tag.clone(),
                });
            }
        }
        Ok(())
    }

    /// Find the rule applying to a region name.
    ///
    /// Returns the **first** rule in declaration order whose tag is a
    /// case-insensitive substring of `name`, or `None` if no tag matches.
    /// `None` is the skip signal: compositors exclude such regions
    /// entirely.
    #[must_use]
    pub fn match_rule(&self, name: &str) -> Option<&TagRule> {
        let lower = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lower.contains(&rule.tag.to_lowercase()))
    }

    /// Get the priority tier for a region name, or `None` if unmatched.
    #[must_use]
    pub fn tier_of(&self, name: &str) -> Option<i32> {
        self.match_rule(name).map(|rule| rule.tier)
    }

    /// Get the label for a region name, falling back for unmatched names.
    ///
    /// The fallback is distinct from the skip signal: callers that skip
    /// unmatched regions must check [`match_rule`](Self::match_rule)
    /// first rather than rely on this method.
    #[must_use]
    pub fn label_of(&self, name: &str) -> i32 {
        self.match_rule(name)
            .map_or(self.fallback_label, |rule| rule.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glacier_config() -> PriorityConfig {
        PriorityConfig::new(0, 99)
            .with_rule("ice", 0, 2, ContainmentPolicy::Bulk)
            .with_rule("air", 1, 4, ContainmentPolicy::Bulk)
            .with_rule("base", 2, 3, ContainmentPolicy::Bulk)
            .with_rule("heterogeneity", 3, 10, ContainmentPolicy::Exact)
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let config = glacier_config();
        assert_eq!(config.match_rule("Ice_Sheet.001").map(|r| r.label), Some(2));
        assert_eq!(
            config.match_rule("HETEROGENEITY_07").map(|r| r.label),
            Some(10)
        );
        assert!(config.match_rule("debris").is_none());
    }

    #[test]
    fn ambiguous_names_resolve_by_declaration_order() {
        // "ice" is declared before "air": a name containing both gets "ice".
        let config = glacier_config();
        let rule = config.match_rule("icy_air_ice_mix");
        assert_eq!(rule.map(|r| r.tag.as_str()), Some("ice"));

        // Reversed declaration order flips the winner.
        let flipped = PriorityConfig::new(0, 99)
            .with_rule("air", 1, 4, ContainmentPolicy::Bulk)
            .with_rule("ice", 0, 2, ContainmentPolicy::Bulk);
        let rule = flipped.match_rule("icy_air_ice_mix");
        assert_eq!(rule.map(|r| r.tag.as_str()), Some("air"));
    }

    #[test]
    fn tier_of_unmatched_is_none() {
        let config = glacier_config();
        assert_eq!(config.tier_of("base_rock"), Some(2));
        assert_eq!(config.tier_of("debris"), None);
    }

    #[test]
    fn label_of_falls_back_for_unmatched() {
        let config = glacier_config();
        assert_eq!(config.label_of("air_dome"), 4);
        assert_eq!(config.label_of("debris"), 99);
    }

    #[test]
    fn validate_rejects_empty_config() {
        let config = PriorityConfig::new(0, 99);
        assert!(matches!(config.validate(), Err(ConfigError::Empty)));
    }

    #[test]
    fn validate_rejects_empty_tag() {
        let config = PriorityConfig::new(0, 99).with_rule("", 0, 1, ContainmentPolicy::Bulk);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyTag { index: 0 })
        ));
    }

    #[test]
    fn validate_rejects_duplicate_tags() {
        let config = PriorityConfig::new(0, 99)
            .with_rule("ice", 0, 2, ContainmentPolicy::Bulk)
            .with_rule("Ice", 1, 5, ContainmentPolicy::Exact);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateTag { .. })
        ));
    }

    #[test]
    fn validate_accepts_well_formed_config() {
        assert!(glacier_config().validate().is_ok());
    }
}
