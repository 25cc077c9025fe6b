//! History level definitions and the level registry.
//! The engine persists only the numeric code; names are what configuration
//! surfaces and operators work with.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A named history retention policy paired with its persisted numeric code.
///
/// Four well-known levels ship as associated constants. Extensions may
/// contribute further levels through [`HistoryLevelRegistry::extend`]; their
/// `name` is expected to be non-empty and unique among registered levels,
/// the registry performs no validation of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLevel {
    code: u32,
    name: Cow<'static, str>,
}

impl HistoryLevel {
    /// No historical data is persisted.
    pub const NONE: Self = Self { code: 0, name: Cow::Borrowed("none") };
    /// Process, activity and task instance events are persisted.
    pub const ACTIVITY: Self = Self { code: 1, name: Cow::Borrowed("activity") };
    /// Activity data plus variable updates and form properties.
    pub const AUDIT: Self = Self { code: 2, name: Cow::Borrowed("audit") };
    /// Everything, including user operation logs.
    pub const FULL: Self = Self { code: 3, name: Cow::Borrowed("full") };

    /// Creates an extension-contributed level.
    pub fn custom(code: u32, name: impl Into<Cow<'static, str>>) -> Self {
        Self { code, name: name.into() }
    }

    /// The numeric code persisted in the backing store.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// The configuration-facing level name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered, append-only collection of known history levels.
///
/// Lookups scan in insertion order and return the first code match. The
/// built-ins are inserted first, so custom entries can add new codes but
/// cannot shadow built-in ones.
#[derive(Debug, Clone)]
pub struct HistoryLevelRegistry {
    levels: Vec<HistoryLevel>,
}

impl Default for HistoryLevelRegistry {
    fn default() -> Self {
        Self {
            levels: vec![
                HistoryLevel::ACTIVITY,
                HistoryLevel::AUDIT,
                HistoryLevel::FULL,
                HistoryLevel::NONE,
            ],
        }
    }
}

impl HistoryLevelRegistry {
    /// Returns a registry seeded with the four built-in levels.
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Appends a single level, preserving insertion order.
    pub fn register(&mut self, level: HistoryLevel) {
        self.levels.push(level);
    }

    /// Appends a sequence of levels, preserving their order.
    pub fn extend(&mut self, levels: impl IntoIterator<Item = HistoryLevel>) {
        self.levels.extend(levels);
    }

    /// First level whose code matches the raw store value, if any.
    ///
    /// Takes the store-typed `i64` so negative or oversized persisted values
    /// simply fail to match instead of truncating.
    #[must_use]
    pub fn find(&self, code: i64) -> Option<&HistoryLevel> {
        self.levels.iter().find(|level| i64::from(level.code) == code)
    }

    /// All registered levels in insertion order.
    #[must_use]
    pub fn levels(&self) -> &[HistoryLevel] {
        &self.levels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
