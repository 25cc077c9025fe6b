//! # History Level Resolution
//!
//! This crate decides, at engine startup, which history level (how much
//! historical execution data the engine persists) should be active.
//!
//! ## Resolution
//!
//! The resolver queries the backing store once for the persisted level code
//! and maps it through its level registry:
//!
//! * a code matching a registered level resolves to that level's name;
//! * an unmapped code or an absent property resolves to the configured
//!   default;
//! * a failing store lookup resolves to the default when the resolver is
//!   fault tolerant, and surfaces [`HistoryError::Lookup`] otherwise.
//!
//! The default level name is `"audit"` unless the engine properties supply a
//! non-blank override. Extensions may register additional levels; built-ins
//! keep precedence for duplicated codes (first match wins).
//!
//! ## Example
//!
//! ```rust
//! use flowmill_domain::config::EngineProperties;
//! use flowmill_history::{HistoryError, HistoryLevelResolver, LookupError};
//!
//! # fn main() -> Result<(), HistoryError> {
//! let resolver = HistoryLevelResolver::builder()
//!     .lookup(|_query: &str| -> Result<Option<i64>, LookupError> { Ok(Some(3)) })
//!     .properties(EngineProperties::default())
//!     .init()?;
//!
//! assert_eq!(resolver.resolve()?, "full");
//! # Ok(())
//! # }
//! ```

mod error;
mod resolver;

pub use crate::error::{HistoryError, HistoryErrorExt};
pub use crate::resolver::{
    DEFAULT_HISTORY_LEVEL, HistoryLevelLookup, HistoryLevelResolver, HistoryLevelResolverBuilder,
    LookupError,
};
