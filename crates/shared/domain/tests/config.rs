use flowmill_domain::config::{DatabaseProperties, EngineProperties, HistoryProperties};
use serde_json::json;

#[test]
fn properties_defaults_are_sane() {
    let history = HistoryProperties::default();
    assert!(history.level_default.is_none());
    assert!(history.fault_tolerant);

    let database = DatabaseProperties::default();
    assert!(database.table_prefix.is_none());
}

#[test]
fn engine_properties_deserialize() {
    let raw = json!({
        "history": { "level_default": "full", "fault_tolerant": false },
        "database": { "table_prefix": "FM_" }
    });

    let props: EngineProperties = serde_json::from_value(raw).expect("properties deserialize");
    assert_eq!(props.history.level_default.as_deref(), Some("full"));
    assert!(!props.history.fault_tolerant);
    assert_eq!(props.database.table_prefix.as_deref(), Some("FM_"));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let props: EngineProperties =
        serde_json::from_value(json!({})).expect("empty properties deserialize");
    assert!(props.history.level_default.is_none());
    assert!(props.history.fault_tolerant);
    assert!(props.database.table_prefix.is_none());
}
