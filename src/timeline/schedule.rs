//! Layer, group and intra-layer stagger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const LAYER_COUNT: usize = 3;
const LAYER0_AREA_RATIO: f64 = 0.35;
const LAYER1_AREA_RATIO: f64 = 0.12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerStrategy {
    #[default]
    Area,
    Order,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub layer_ms: f64,
    pub group_ms: f64,
    pub intra_ms: f64,
}

/// What the scheduler needs to know about one track.
#[derive(Debug, Clone)]
pub struct ScheduleItem {
    /// Area fraction of the scene, in `[0, 1]`.
    pub importance: f64,
    pub order: usize,
    pub group_key: String,
}

/// Delay components of one track, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Delay {
    pub layer: f64,
    pub group: f64,
    pub intra: f64,
}

impl Delay {
    pub fn total(&self) -> f64 {
        self.layer + self.group + self.intra
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slot {
    pub layer: usize,
    pub group_rank: usize,
    pub index_in_layer: usize,
    pub delay: Delay,
}

pub fn area_layer(importance: f64) -> usize {
    if importance > LAYER0_AREA_RATIO {
        0
    } else if importance > LAYER1_AREA_RATIO {
        1
    } else {
        2
    }
}

/// Draw-order tertiles: the earliest third of the tracks is layer 0.
fn order_layers(items: &[ScheduleItem]) -> Vec<usize> {
    let n = items.len();
    let mut idx: Vec<usize> = (0..n).collect();
    idx.sort_by_key(|&i| (items[i].order, i));
    let mut out = vec![0; n];
    for (rank, &i) in idx.iter().enumerate() {
        out[i] = (rank * LAYER_COUNT / n.max(1)).min(LAYER_COUNT - 1);
    }
    out
}

/// Groups ranked by the smallest draw order among their members.
fn group_ranks(items: &[ScheduleItem]) -> Vec<usize> {
    let mut first: BTreeMap<&str, usize> = BTreeMap::new();
    for it in items {
        first
            .entry(it.group_key.as_str())
            .and_modify(|o| *o = (*o).min(it.order))
            .or_insert(it.order);
    }
    let mut ranked: Vec<(&str, usize)> = first.into_iter().collect();
    ranked.sort_by_key(|&(key, order)| (order, key));
    let rank: BTreeMap<&str, usize> = ranked
        .iter()
        .enumerate()
        .map(|(r, (key, _))| (*key, r))
        .collect();
    items
        .iter()
        .map(|it| rank.get(it.group_key.as_str()).copied().unwrap_or(0))
        .collect()
}

/// Assign every item a layer, group rank, position within its layer and the resulting delay.
pub fn schedule(
    items: &[ScheduleItem],
    strategy: LayerStrategy,
    grouping: bool,
    stagger: &Stagger,
) -> Vec<Slot> {
    let layers: Vec<usize> = match strategy {
        LayerStrategy::Area => items.iter().map(|it| area_layer(it.importance)).collect(),
        LayerStrategy::Order => order_layers(items),
    };
    let ranks = if grouping {
        group_ranks(items)
    } else {
        vec![0; items.len()]
    };

    let mut idx: Vec<usize> = (0..items.len()).collect();
    idx.sort_by_key(|&i| (layers[i], items[i].order, i));
    let mut index_in_layer = vec![0; items.len()];
    let mut counts = [0usize; LAYER_COUNT];
    for i in idx {
        index_in_layer[i] = counts[layers[i]];
        counts[layers[i]] += 1;
    }

    (0..items.len())
        .map(|i| {
            let delay = Delay {
                layer: layers[i] as f64 * stagger.layer_ms,
                group: ranks[i] as f64 * stagger.group_ms,
                intra: index_in_layer[i] as f64 * stagger.intra_ms,
            };
            Slot {
                layer: layers[i],
                group_rank: ranks[i],
                index_in_layer: index_in_layer[i],
                delay,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/schedule.rs"]
mod tests;
