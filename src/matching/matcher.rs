use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use serde::Serialize;

use crate::scene::model::Shape;

use super::assign::{CostMatrix, solve};
use super::cost::{Features, pair_cost, scene_diagonal};
use super::weights::MatchWeights;

/// How a pair was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    StableKey,
    Anchor,
    Optimized,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchedPair<'a> {
    pub start: &'a Shape,
    pub end: &'a Shape,
    /// Weighted dissimilarity; 0 for stable-key and anchor pairs.
    pub cost: f64,
    pub kind: MatchKind,
}

/// Correspondence between two shape sets.
///
/// Every input shape lands in exactly one of `pairs`, `unmatched_start` or `unmatched_end`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchResult<'a> {
    pub pairs: Vec<MatchedPair<'a>>,
    pub unmatched_start: Vec<&'a Shape>,
    pub unmatched_end: Vec<&'a Shape>,
}

/// Pair `start` shapes with `end` shapes.
///
/// Shapes are bucketed by tag and paint kind; within a bucket, stable keys pair first, then
/// class tokens unique on both sides, then a minimum-cost assignment over the rest.
#[tracing::instrument(skip_all, fields(start = start.len(), end = end.len()))]
pub fn match_shapes<'a>(
    start: &'a [Shape],
    end: &'a [Shape],
    weights: &MatchWeights,
) -> MatchResult<'a> {
    let weights = weights.sanitized();
    let mut buckets: BTreeMap<String, (Vec<&'a Shape>, Vec<&'a Shape>)> = BTreeMap::new();
    for s in start {
        buckets.entry(s.bucket_key()).or_default().0.push(s);
    }
    for e in end {
        buckets.entry(e.bucket_key()).or_default().1.push(e);
    }

    let mut out = MatchResult::default();
    for (key, (s, e)) in buckets {
        let res = match_bucket(s, e, &weights);
        tracing::debug!(
            bucket = %key,
            pairs = res.pairs.len(),
            unmatched_start = res.unmatched_start.len(),
            unmatched_end = res.unmatched_end.len(),
            "matched bucket"
        );
        out.pairs.extend(res.pairs);
        out.unmatched_start.extend(res.unmatched_start);
        out.unmatched_end.extend(res.unmatched_end);
    }
    out
}

fn match_bucket<'a>(
    start: Vec<&'a Shape>,
    end: Vec<&'a Shape>,
    weights: &MatchWeights,
) -> MatchResult<'a> {
    let mut pairs = Vec::new();
    if start.is_empty() || end.is_empty() {
        return MatchResult {
            pairs,
            unmatched_start: start,
            unmatched_end: end,
        };
    }

    let (start, end) = pair_stable_keys(start, end, &mut pairs);
    let (start, end) = pair_anchors(start, end, &mut pairs);

    if start.is_empty() || end.is_empty() {
        return MatchResult {
            pairs,
            unmatched_start: start,
            unmatched_end: end,
        };
    }

    let sf: Vec<Features> = start.iter().map(|s| Features::of(s)).collect();
    let ef: Vec<Features> = end.iter().map(|e| Features::of(e)).collect();
    let diag = scene_diagonal(&sf).max(scene_diagonal(&ef));
    let matrix = CostMatrix::from_fn(start.len(), end.len(), |r, c| {
        pair_cost(&sf[r], &ef[c], diag, weights)
    });

    let mut start_used = vec![false; start.len()];
    let mut end_used = vec![false; end.len()];
    for (r, c) in solve(&matrix) {
        start_used[r] = true;
        end_used[c] = true;
        pairs.push(MatchedPair {
            start: start[r],
            end: end[c],
            cost: matrix.get(r, c),
            kind: MatchKind::Optimized,
        });
    }

    MatchResult {
        pairs,
        unmatched_start: keep_unused(start, &start_used),
        unmatched_end: keep_unused(end, &end_used),
    }
}

fn keep_unused<'a>(shapes: Vec<&'a Shape>, used: &[bool]) -> Vec<&'a Shape> {
    shapes
        .into_iter()
        .zip(used)
        .filter(|(_, u)| !**u)
        .map(|(s, _)| s)
        .collect()
}

/// Duplicate keys pair in input order.
fn pair_stable_keys<'a>(
    start: Vec<&'a Shape>,
    end: Vec<&'a Shape>,
    pairs: &mut Vec<MatchedPair<'a>>,
) -> (Vec<&'a Shape>, Vec<&'a Shape>) {
    let mut by_key: HashMap<&'a str, VecDeque<usize>> = HashMap::new();
    for (i, e) in end.iter().enumerate() {
        if let Some(k) = e.stable_key() {
            by_key.entry(k).or_default().push_back(i);
        }
    }

    let mut end_used = vec![false; end.len()];
    let mut rest = Vec::with_capacity(start.len());
    for s in start {
        let hit = s
            .stable_key()
            .and_then(|k| by_key.get_mut(k))
            .and_then(VecDeque::pop_front);
        match hit {
            Some(j) => {
                end_used[j] = true;
                pairs.push(MatchedPair {
                    start: s,
                    end: end[j],
                    cost: 0.0,
                    kind: MatchKind::StableKey,
                });
            }
            None => rest.push(s),
        }
    }
    (rest, keep_unused(end, &end_used))
}

/// Class tokens occurring exactly once on each side pair their owners directly.
fn pair_anchors<'a>(
    start: Vec<&'a Shape>,
    end: Vec<&'a Shape>,
    pairs: &mut Vec<MatchedPair<'a>>,
) -> (Vec<&'a Shape>, Vec<&'a Shape>) {
    if start.is_empty() || end.is_empty() {
        return (start, end);
    }
    let start_tokens: Vec<Vec<String>> = start.iter().map(|s| s.class_tokens()).collect();
    let end_tokens: Vec<Vec<String>> = end.iter().map(|e| e.class_tokens()).collect();

    let count = |tokens: &[Vec<String>]| {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for t in tokens {
            // A token repeated on one shape still counts once for that shape.
            for tok in t.iter().collect::<BTreeSet<_>>() {
                *counts.entry(tok.clone()).or_default() += 1;
            }
        }
        counts
    };
    let sc = count(&start_tokens[..]);
    let ec = count(&end_tokens[..]);
    let unique: BTreeSet<&String> = sc
        .iter()
        .filter(|(tok, n)| **n == 1 && ec.get(*tok) == Some(&1))
        .map(|(tok, _)| tok)
        .collect();
    if unique.is_empty() {
        return (start, end);
    }

    let first_anchor = |tokens: &[String]| tokens.iter().find(|t| unique.contains(t)).cloned();
    let mut end_by_token: HashMap<String, usize> = HashMap::new();
    for (j, t) in end_tokens.iter().enumerate() {
        if let Some(tok) = first_anchor(t.as_slice()) {
            end_by_token.insert(tok, j);
        }
    }

    let mut start_used = vec![false; start.len()];
    let mut end_used = vec![false; end.len()];
    for (i, t) in start_tokens.iter().enumerate() {
        let Some(tok) = first_anchor(t.as_slice()) else {
            continue;
        };
        let Some(&j) = end_by_token.get(&tok) else {
            continue;
        };
        if end_used[j] {
            continue;
        }
        start_used[i] = true;
        end_used[j] = true;
        pairs.push(MatchedPair {
            start: start[i],
            end: end[j],
            cost: 0.0,
            kind: MatchKind::Anchor,
        });
    }
    (keep_unused(start, &start_used), keep_unused(end, &end_used))
}

#[cfg(test)]
#[path = "../../tests/unit/matching/matcher.rs"]
mod tests;
