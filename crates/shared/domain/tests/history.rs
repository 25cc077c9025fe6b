use flowmill_domain::history::{HistoryLevel, HistoryLevelRegistry};

#[test]
fn builtin_levels_carry_domain_fixed_codes() {
    assert_eq!(HistoryLevel::NONE.code(), 0);
    assert_eq!(HistoryLevel::NONE.name(), "none");
    assert_eq!(HistoryLevel::ACTIVITY.code(), 1);
    assert_eq!(HistoryLevel::ACTIVITY.name(), "activity");
    assert_eq!(HistoryLevel::AUDIT.code(), 2);
    assert_eq!(HistoryLevel::AUDIT.name(), "audit");
    assert_eq!(HistoryLevel::FULL.code(), 3);
    assert_eq!(HistoryLevel::FULL.name(), "full");
}

#[test]
fn registry_seeds_builtins_in_insertion_order() {
    let registry = HistoryLevelRegistry::default();
    let names: Vec<&str> = registry.levels().iter().map(HistoryLevel::name).collect();
    assert_eq!(names, ["activity", "audit", "full", "none"]);
}

#[test]
fn find_returns_first_match_for_duplicated_codes() {
    let mut registry = HistoryLevelRegistry::builtin();
    registry.register(HistoryLevel::custom(3, "shadowed"));

    assert_eq!(registry.find(3).map(HistoryLevel::name), Some("full"));
}

#[test]
fn find_rejects_unknown_and_out_of_range_codes() {
    let registry = HistoryLevelRegistry::default();
    assert!(registry.find(99).is_none());
    assert!(registry.find(-1).is_none());
    assert!(registry.find(i64::from(u32::MAX) + 1).is_none());
}

#[test]
fn custom_levels_extend_the_registry() {
    let mut registry = HistoryLevelRegistry::builtin();
    registry.extend([HistoryLevel::custom(10, "archive"), HistoryLevel::custom(11, "replay")]);

    assert_eq!(registry.len(), 6);
    assert_eq!(registry.find(10).map(HistoryLevel::name), Some("archive"));
    assert_eq!(registry.find(11).map(HistoryLevel::name), Some("replay"));
}

#[test]
fn levels_serialize_round_trip() {
    let level = HistoryLevel::custom(7, "archive");
    let encoded = serde_json::to_string(&level).expect("level serialize");
    let decoded: HistoryLevel = serde_json::from_str(&encoded).expect("level deserialize");
    assert_eq!(decoded, level);
}
