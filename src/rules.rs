// src/rules.rs
//
// Ignore rules: exclusion policy evaluated per provenance phase.
//
// Two different "all"s are in play and must not be confused:
// - RuleScope::Any is the rule-file value "all": the rule applies in every phase.
// - Phase::All is the post-merge pass over the remote (non-overridden) records.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::model::Record;

/// Which records a rule targets, by provenance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleScope {
    #[serde(rename = "remote")]
    Remote,
    #[serde(rename = "local")]
    Local,
    /// Wildcard: fires in every phase.
    #[serde(rename = "all")]
    Any,
}

/// The three filter passes of a reconciliation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Freshly scraped candidates, before overrides are merged.
    Remote,
    /// Scraped records that no override touched, after the merge.
    All,
    /// Records that came from the overwrite file.
    Local,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Remote => "remote",
            Phase::All => "all",
            Phase::Local => "local",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Combinator {
    #[serde(rename = "AND", alias = "ALL")]
    And,
    #[serde(rename = "OR", alias = "ANY")]
    Or,
}

/// Field name → expected value. `null` means the field must be null or absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(pub Map<String, Value>);

impl Condition {
    /// Every named field matches. An empty condition matches vacuously.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.0.iter().all(|(name, expected)| match (expected, record.field(name)) {
            (Value::Null, actual) => actual.is_none(),
            (_, None) => false,
            (expected, Some(actual)) => actual.eq_json(expected),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IgnoreRule {
    #[serde(rename = "source")]
    pub scope: RuleScope,
    #[serde(rename = "type")]
    pub combinator: Combinator,
    pub conditions: Vec<Condition>,
    pub description: String,
}

impl IgnoreRule {
    pub fn applies_in(&self, phase: Phase) -> bool {
        match self.scope {
            RuleScope::Any => true,
            RuleScope::Remote => phase == Phase::Remote,
            RuleScope::Local => phase == Phase::Local,
        }
    }

    /// Whether this rule ignores `record`. An empty condition list never fires,
    /// whatever the combinator.
    pub fn fires<R: Record>(&self, record: &R) -> bool {
        if self.conditions.is_empty() {
            return false;
        }
        match self.combinator {
            Combinator::And => self.conditions.iter().all(|c| c.matches(record)),
            Combinator::Or => self.conditions.iter().any(|c| c.matches(record)),
        }
    }
}

/// First rule applicable in `phase` that fires on `record`.
pub fn triggering_rule<'r, R: Record>(record: &R, rules: &'r [IgnoreRule], phase: Phase) -> Option<&'r IgnoreRule> {
    rules.iter().find(|rule| rule.applies_in(phase) && rule.fires(record))
}

/// Drop every record some applicable rule fires on; survivors keep their order.
pub fn filter<R: Record>(records: Vec<R>, rules: &[IgnoreRule], phase: Phase) -> Vec<R> {
    if rules.is_empty() {
        return records;
    }
    info!("Applying ignore filters (phase: {phase})");

    let before = records.len();
    let kept: Vec<R> = records
        .into_iter()
        .filter(|record| match triggering_rule(record, rules, phase) {
            Some(rule) => {
                info!("Ignoring '{}' - {}", record.title(), rule.description);
                false
            }
            None => true,
        })
        .collect();

    let ignored = before - kept.len();
    if ignored > 0 {
        info!("Filtered out {ignored} items based on ignore rules");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Movie, Show};
    use serde_json::json;

    fn cond(v: Value) -> Condition {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn null_expectation_means_absent() {
        let movie = Movie::new("A", 1, 2, None).unwrap();
        assert!(cond(json!({"guessed_slug": null})).matches(&movie));
        assert!(cond(json!({"season": null})).matches(&movie));
        assert!(!cond(json!({"title": null})).matches(&movie));

        let show = Show::new("A", 1, 2, 3, Some(s!("a"))).unwrap();
        assert!(!cond(json!({"season": null})).matches(&show));
        assert!(cond(json!({"season": 3, "title": "A"})).matches(&show));
    }

    #[test]
    fn non_null_expectation_needs_a_value() {
        let movie = Movie::new("A", 1, 2, None).unwrap();
        assert!(!cond(json!({"guessed_slug": "a"})).matches(&movie));
        assert!(!cond(json!({"season": 1})).matches(&movie));
    }

    #[test]
    fn type_synonyms_parse() {
        for (raw, want) in [("ALL", Combinator::And), ("AND", Combinator::And), ("ANY", Combinator::Or), ("OR", Combinator::Or)] {
            let rule: IgnoreRule = serde_json::from_value(json!({
                "source": "all", "type": raw, "conditions": [], "description": "d"
            })).unwrap();
            assert_eq!(rule.combinator, want);
            assert_eq!(rule.scope, RuleScope::Any);
        }
        let bad = serde_json::from_value::<IgnoreRule>(json!({
            "source": "all", "type": "XOR", "conditions": [], "description": "d"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn scope_matching() {
        let rule = |scope| IgnoreRule { scope, combinator: Combinator::Or, conditions: vec![], description: s!() };
        assert!(rule(RuleScope::Remote).applies_in(Phase::Remote));
        assert!(!rule(RuleScope::Remote).applies_in(Phase::All));
        assert!(!rule(RuleScope::Remote).applies_in(Phase::Local));
        assert!(rule(RuleScope::Local).applies_in(Phase::Local));
        assert!(!rule(RuleScope::Local).applies_in(Phase::All));
        for phase in [Phase::Remote, Phase::All, Phase::Local] {
            assert!(rule(RuleScope::Any).applies_in(phase));
        }
    }
}
