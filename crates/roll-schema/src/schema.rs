//! Per-entity schema configuration: rule sets and defaults per mode.

use roll_core::FieldMap;

use crate::rules::RuleSet;

/// Which rule set and defaults apply to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Create,
    Update,
}

/// A screen's validation and default configuration.
///
/// Most entities share one rule set and one default map between modes;
/// [`SchemaConfig::symmetric`] covers that case.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaConfig {
    pub create_rules: RuleSet,
    pub update_rules: RuleSet,
    pub create_defaults: FieldMap,
    pub update_defaults: FieldMap,
}

impl SchemaConfig {
    /// Same rules and defaults for both modes.
    #[must_use]
    pub fn symmetric(rules: RuleSet, defaults: FieldMap) -> Self {
        Self {
            create_rules: rules.clone(),
            update_rules: rules,
            create_defaults: defaults.clone(),
            update_defaults: defaults,
        }
    }

    /// Rules active in `mode`.
    #[must_use]
    pub const fn rules(&self, mode: Mode) -> &RuleSet {
        match mode {
            Mode::Create => &self.create_rules,
            Mode::Update => &self.update_rules,
        }
    }

    /// Default values for `mode`.
    #[must_use]
    pub const fn defaults(&self, mode: Mode) -> &FieldMap {
        match mode {
            Mode::Create => &self.create_defaults,
            Mode::Update => &self.update_defaults,
        }
    }
}

#[cfg(test)]
mod tests {
    use roll_core::FieldValue;

    use super::*;
    use crate::rules::FieldRule;

    #[test]
    fn symmetric_shares_rules_and_defaults() {
        let mut rules = RuleSet::new();
        rules.insert("name".into(), FieldRule::text_min(2, "名稱至少要2個字"));
        let mut defaults = FieldMap::new();
        defaults.insert("name".into(), FieldValue::Text(String::new()));

        let schema = SchemaConfig::symmetric(rules, defaults);
        assert_eq!(schema.rules(Mode::Create), schema.rules(Mode::Update));
        assert_eq!(
            schema.defaults(Mode::Create),
            schema.defaults(Mode::Update)
        );
    }
}
