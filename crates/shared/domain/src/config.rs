use serde::Deserialize;

/// Engine bootstrap configuration shared across startup steps.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineProperties {
    pub history: HistoryProperties,
    pub database: DatabaseProperties,
}

/// History persistence configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryProperties {
    /// Replaces the built-in default level name when present and non-blank.
    pub level_default: Option<String>,
    /// Degrade to the default level when the store lookup fails.
    pub fault_tolerant: bool,
}

/// Relational store configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseProperties {
    /// Prefix applied to engine table names (empty when unset).
    pub table_prefix: Option<String>,
}

// --- Default ---

impl Default for HistoryProperties {
    fn default() -> Self {
        Self { level_default: None, fault_tolerant: true }
    }
}
