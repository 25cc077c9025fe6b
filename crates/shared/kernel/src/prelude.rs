//! Convenience re-exports for engine bootstrap code.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use flowmill_domain::config::{DatabaseProperties, EngineProperties, HistoryProperties};
pub use flowmill_domain::history::{HistoryLevel, HistoryLevelRegistry};
