// src/reconcile.rs
//
// Five-phase reconciliation of scraped candidates against curation data:
//   1. drop candidates hit by `remote`/`all` rules
//   2. merge overrides (replace by MAL id, append the rest)
//   3. split into overwritten (key has an override) and remote
//   4. filter remote with `all` rules, overwritten with `local`/`all` rules
//   5. overwritten first, then remote; stable sort by case-folded title

use tracing::{debug, info};

use crate::model::Record;
use crate::overwrite::{self, override_keys};
use crate::rules::{self, IgnoreRule, Phase};

/// Run every phase over one media kind. Pure: no I/O beyond logging.
pub fn reconcile<R: Record>(candidates: Vec<R>, rules: &[IgnoreRule], overrides: &[R]) -> Vec<R> {
    let scraped = candidates.len();

    let candidates = rules::filter(candidates, rules, Phase::Remote);
    let merged = overwrite::merge(candidates, overrides);

    let keys = override_keys(overrides);
    let (overwritten, remote): (Vec<R>, Vec<R>) =
        merged.into_iter().partition(|r| keys.contains(&r.mal_id()));
    debug!("Partitioned: {} overwritten, {} remote", overwritten.len(), remote.len());

    let remote = rules::filter(remote, rules, Phase::All);
    let overwritten = rules::filter(overwritten, rules, Phase::Local);

    let mut out = overwritten;
    out.extend(remote);
    sort_by_title(&mut out);

    info!("Reconciled {scraped} scraped records into {}", out.len());
    out
}

/// Stable sort by lowercase title; equal titles keep their relative order.
pub fn sort_by_title<R: Record>(records: &mut [R]) {
    records.sort_by_cached_key(|r| r.title().to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use crate::rules::{Combinator, Condition, RuleScope};
    use serde_json::json;

    fn m(title: &str, mal: i64) -> Movie {
        Movie::new(title, mal, mal + 1000, None).unwrap()
    }

    fn rule(scope: RuleScope, cond: serde_json::Value) -> IgnoreRule {
        IgnoreRule {
            scope,
            combinator: Combinator::And,
            conditions: vec![serde_json::from_value::<Condition>(cond).unwrap()],
            description: s!("test"),
        }
    }

    #[test]
    fn sort_is_case_insensitive_and_stable() {
        let mut v = vec![m("beta", 1), m("Alpha", 2), m("alpha", 3), m("ALPHA", 4)];
        sort_by_title(&mut v);
        let ids: Vec<_> = v.iter().map(|r| r.mal_id()).collect();
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn remote_rule_does_not_touch_overrides() {
        let rules = vec![rule(RuleScope::Remote, json!({"mal_id": 1}))];
        let out = reconcile(vec![m("scraped", 1)], &rules, &[m("curated", 1)]);
        assert_eq!(out, vec![m("curated", 1)]);
    }

    #[test]
    fn local_rule_hits_only_overrides() {
        let rules = vec![rule(RuleScope::Local, json!({"title": "x"}))];
        let out = reconcile(vec![m("x", 1)], &rules, &[m("x", 2)]);
        assert_eq!(out, vec![m("x", 1)]);
    }

    #[test]
    fn all_rule_hits_both_sides() {
        let rules = vec![rule(RuleScope::Any, json!({"title": "x"}))];
        let out = reconcile(vec![m("x", 1), m("y", 3)], &rules, &[m("x", 2)]);
        assert_eq!(out, vec![m("y", 3)]);
    }
}
