// src/overwrite.rs
//
// Manual overrides, keyed by MAL id. Overrides always win, whole-record.

use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::model::Record;

/// MAL ids covered by an override set.
pub fn override_keys<R: Record>(overrides: &[R]) -> HashSet<u32> {
    overrides.iter().map(Record::mal_id).collect()
}

/// Merge `overrides` into `candidates`.
///
/// - A candidate whose MAL id has an override is replaced in place by it.
/// - Overrides with no matching candidate are appended, in override order.
/// - Untouched candidates pass through unchanged.
///
/// Each overridden key appears once in the result: a later override for the
/// same key beats an earlier one, and extra scraped duplicates of an
/// overridden key are dropped. This keeps `merge(merge(c, o), o) == merge(c, o)`.
pub fn merge<R: Record>(candidates: Vec<R>, overrides: &[R]) -> Vec<R> {
    if overrides.is_empty() {
        return candidates;
    }

    // last override per key wins
    let latest: HashMap<u32, &R> = overrides.iter().map(|o| (o.mal_id(), o)).collect();
    let mut placed: HashSet<u32> = HashSet::with_capacity(latest.len());
    let mut out = Vec::with_capacity(candidates.len() + latest.len());

    for candidate in candidates {
        let key = candidate.mal_id();
        match latest.get(&key) {
            None => out.push(candidate),
            Some(_) if placed.contains(&key) => {}
            Some(&replacement) => {
                info!("Replaced from overwrite: {} (MAL ID: {key})", replacement.title());
                out.push(replacement.clone());
                placed.insert(key);
            }
        }
    }

    for o in overrides {
        let key = o.mal_id();
        if placed.insert(key) {
            let record = latest[&key];
            info!("Added from overwrite: {} (MAL ID: {key})", record.title());
            out.push(record.clone());
        }
    }
    out
}
