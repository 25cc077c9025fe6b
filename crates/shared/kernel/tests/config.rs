use flowmill_kernel::config::{ConfigError, load_config};
use flowmill_kernel::domain::config::EngineProperties;
use std::fs;

#[test]
fn loads_properties_from_file() -> Result<(), ConfigError> {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("engine.toml"),
        concat!(
            "[history]\n",
            "level_default = \"full\"\n",
            "fault_tolerant = false\n",
            "\n",
            "[database]\n",
            "table_prefix = \"FM_\"\n",
        ),
    )
    .expect("write config file");

    let props: EngineProperties = load_config(Some(dir.path().join("engine")))?;

    assert_eq!(props.history.level_default.as_deref(), Some("full"));
    assert!(!props.history.fault_tolerant);
    assert_eq!(props.database.table_prefix.as_deref(), Some("FM_"));
    Ok(())
}

#[test]
fn empty_file_yields_section_defaults() -> Result<(), ConfigError> {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("engine.toml"), "").expect("write config file");

    let props: EngineProperties = load_config(Some(dir.path().join("engine")))?;

    assert!(props.history.level_default.is_none());
    assert!(props.history.fault_tolerant);
    assert!(props.database.table_prefix.is_none());
    Ok(())
}

#[test]
fn missing_file_surfaces_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");

    let result: Result<EngineProperties, ConfigError> =
        load_config(Some(dir.path().join("absent")));

    let err = result.expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Config error"));
}
