use super::*;

fn item(importance: f64, order: usize, group: &str) -> ScheduleItem {
    ScheduleItem {
        importance,
        order,
        group_key: group.to_owned(),
    }
}

const STAGGER: Stagger = Stagger {
    layer_ms: 70.0,
    group_ms: 40.0,
    intra_ms: 18.0,
};

#[test]
fn area_thresholds_pick_layers() {
    assert_eq!(area_layer(0.5), 0);
    assert_eq!(area_layer(0.35), 1);
    assert_eq!(area_layer(0.2), 1);
    assert_eq!(area_layer(0.12), 2);
    assert_eq!(area_layer(0.0), 2);
}

#[test]
fn delay_sums_components() {
    let items = vec![
        item(0.6, 0, "bg"),
        item(0.05, 1, "icons"),
        item(0.05, 2, "icons"),
    ];
    let slots = schedule(&items, LayerStrategy::Area, true, &STAGGER);
    assert_eq!(slots[0].layer, 0);
    assert_eq!(slots[0].delay.total(), 0.0);
    assert_eq!(slots[1].layer, 2);
    assert_eq!(slots[1].group_rank, 1);
    assert_eq!(slots[1].index_in_layer, 0);
    assert_eq!(slots[1].delay.total(), 2.0 * 70.0 + 40.0);
    assert_eq!(slots[2].index_in_layer, 1);
    assert_eq!(slots[2].delay.total(), 2.0 * 70.0 + 40.0 + 18.0);
}

#[test]
fn grouping_off_zeroes_group_delay() {
    let items = vec![item(0.6, 0, "a"), item(0.6, 1, "b")];
    let slots = schedule(&items, LayerStrategy::Area, false, &STAGGER);
    assert_eq!(slots[1].group_rank, 0);
    assert_eq!(slots[1].delay.group, 0.0);
    assert_eq!(slots[1].delay.intra, 18.0);
}

#[test]
fn order_strategy_uses_tertiles() {
    let items: Vec<ScheduleItem> = (0..6).rev().map(|o| item(0.9, o, "g")).collect();
    let slots = schedule(&items, LayerStrategy::Order, true, &STAGGER);
    let layers: Vec<usize> = slots.iter().map(|s| s.layer).collect();
    assert_eq!(layers, vec![2, 2, 1, 1, 0, 0]);
}

#[test]
fn groups_rank_by_earliest_member() {
    let items = vec![item(0.0, 5, "late"), item(0.0, 3, "early"), item(0.0, 9, "early")];
    let slots = schedule(&items, LayerStrategy::Area, true, &STAGGER);
    assert_eq!(slots[1].group_rank, 0);
    assert_eq!(slots[2].group_rank, 0);
    assert_eq!(slots[0].group_rank, 1);
}
