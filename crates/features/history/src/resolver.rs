use crate::error::HistoryError;
use flowmill_domain::config::EngineProperties;
use flowmill_domain::history::{HistoryLevel, HistoryLevelRegistry};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Built-in default level name, used when the properties supply no override.
pub const DEFAULT_HISTORY_LEVEL: &str = "audit";

/// Placeholder token replaced with the configured table prefix.
const TABLE_PREFIX_PLACEHOLDER: &str = "{TABLE_PREFIX}";

/// Query executed against the engine property table at startup.
const LOOKUP_QUERY_TEMPLATE: &str =
    "SELECT VALUE_ FROM {TABLE_PREFIX}ACT_GE_PROPERTY WHERE NAME_='historyLevel'";

/// Error type produced by [`HistoryLevelLookup`] implementations.
pub type LookupError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Narrow capability for fetching the persisted history level code.
///
/// Implementations execute `query` against the backing store and return the
/// single numeric value of the history level property. The call may block on
/// I/O; timeouts and cancellation are the implementation's responsibility.
/// A blanket impl covers plain closures, so small embedders and tests need
/// no dedicated type.
pub trait HistoryLevelLookup: Send + Sync {
    /// Fetches the persisted level code.
    ///
    /// Returns `Ok(None)` when the property row does not exist.
    ///
    /// # Errors
    ///
    /// Any store-side failure (unreachable store, malformed value, more than
    /// one row) is reported as an opaque [`LookupError`].
    fn fetch_level_code(&self, query: &str) -> Result<Option<i64>, LookupError>;
}

impl<F> HistoryLevelLookup for F
where
    F: Fn(&str) -> Result<Option<i64>, LookupError> + Send + Sync,
{
    fn fetch_level_code(&self, query: &str) -> Result<Option<i64>, LookupError> {
        self(query)
    }
}

/// A fluent builder for configuring a [`HistoryLevelResolver`].
///
/// The lookup capability and the engine properties are both required;
/// [`HistoryLevelResolverBuilder::init`] validates their presence.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Default)]
pub struct HistoryLevelResolverBuilder {
    lookup: Option<Arc<dyn HistoryLevelLookup>>,
    properties: Option<EngineProperties>,
}

impl fmt::Debug for HistoryLevelResolverBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryLevelResolverBuilder")
            .field("lookup", &self.lookup.as_ref().map(|_| "dyn HistoryLevelLookup"))
            .field("properties", &self.properties)
            .finish()
    }
}

impl HistoryLevelResolverBuilder {
    /// Creates a new [`HistoryLevelResolverBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookup capability used to query the backing store.
    pub fn lookup(mut self, lookup: impl HistoryLevelLookup + 'static) -> Self {
        self.lookup = Some(Arc::new(lookup));
        self
    }

    /// Sets the engine properties read at initialization.
    pub fn properties(mut self, properties: EngineProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Consumes the builder and produces an initialized resolver.
    ///
    /// # Process
    /// 1. **Validation**: Ensures the lookup capability and the properties
    ///    were provided.
    /// 2. **Default Override**: A present, non-blank `history.level_default`
    ///    replaces the built-in default level name
    ///    ([`DEFAULT_HISTORY_LEVEL`]).
    /// 3. **Registry Seeding**: Registers the built-in levels; extensions
    ///    append theirs via [`HistoryLevelResolver::add_custom_levels`].
    ///
    /// # Errors
    /// * [`HistoryError::InvalidConfiguration`] if a required collaborator
    ///   is missing.
    pub fn init(self) -> Result<HistoryLevelResolver, HistoryError> {
        let lookup = self.lookup.ok_or(HistoryError::InvalidConfiguration {
            message: "A history level lookup must be set".into(),
            context: None,
        })?;
        let properties = self.properties.ok_or(HistoryError::InvalidConfiguration {
            message: "Engine properties must be set".into(),
            context: None,
        })?;

        let default_level = match properties.history.level_default.as_deref() {
            Some(level) if !level.trim().is_empty() => level.to_owned(),
            _ => DEFAULT_HISTORY_LEVEL.to_owned(),
        };
        let table_prefix = properties.database.table_prefix.unwrap_or_default();

        let resolver = HistoryLevelResolver {
            lookup,
            registry: HistoryLevelRegistry::default(),
            default_level,
            table_prefix,
            fault_tolerant: properties.history.fault_tolerant,
        };

        info!(
            default_level = %resolver.default_level,
            fault_tolerant = resolver.fault_tolerant,
            "History level resolver initialized"
        );

        Ok(resolver)
    }
}

/// Resolves the effective history level name at engine startup.
///
/// Each [`HistoryLevelResolver::resolve`] call queries the backing store
/// once, maps the persisted code through the level registry and falls back
/// to the configured default when the value is absent, unmapped or (when
/// fault tolerant) the store is unreachable. The resolver holds no mutable
/// state during resolution, so concurrent calls are safe; registering
/// custom levels requires exclusive access.
pub struct HistoryLevelResolver {
    lookup: Arc<dyn HistoryLevelLookup>,
    registry: HistoryLevelRegistry,
    default_level: String,
    table_prefix: String,
    fault_tolerant: bool,
}

impl fmt::Debug for HistoryLevelResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryLevelResolver")
            .field("registry", &self.registry)
            .field("default_level", &self.default_level)
            .field("table_prefix", &self.table_prefix)
            .field("fault_tolerant", &self.fault_tolerant)
            .finish_non_exhaustive()
    }
}

impl HistoryLevelResolver {
    /// Creates a new [`HistoryLevelResolverBuilder`].
    pub fn builder() -> HistoryLevelResolverBuilder {
        HistoryLevelResolverBuilder::new()
    }

    /// Appends extension-contributed levels to the registry.
    ///
    /// May be called any number of times; levels registered between
    /// resolutions only affect subsequent [`HistoryLevelResolver::resolve`]
    /// calls. Built-ins keep precedence for duplicated codes (first match
    /// wins).
    pub fn add_custom_levels(&mut self, levels: impl IntoIterator<Item = HistoryLevel>) {
        self.registry.extend(levels);
    }

    /// Determines the effective history level name.
    ///
    /// Queries the backing store exactly once per call; no retries, no
    /// caching. An absent property and an unmapped code both resolve to the
    /// configured default.
    ///
    /// # Errors
    /// * [`HistoryError::Lookup`] if the store query fails and the resolver
    ///   is not fault tolerant.
    #[instrument(skip(self), fields(default_level = %self.default_level))]
    pub fn resolve(&self) -> Result<String, HistoryError> {
        let query = self.lookup_query();

        let persisted = match self.lookup.fetch_level_code(&query) {
            Ok(code) => code,
            Err(e) if self.fault_tolerant => {
                warn!(error = %e, "Unable to fetch history level from store, using default");
                debug!(error = ?e, "History level lookup failure detail");
                None
            },
            Err(e) => {
                return Err(HistoryError::Lookup {
                    message: e.to_string().into(),
                    context: Some("Fetching persisted history level".into()),
                });
            },
        };

        Ok(self.level_name_from(persisted))
    }

    /// Maps the raw persisted code onto a registered level name.
    fn level_name_from(&self, persisted: Option<i64>) -> String {
        let Some(code) = persisted else {
            return self.default_level.clone();
        };

        debug!(code, "Found persisted history level in store");

        self.registry.find(code).map_or_else(
            || self.default_level.clone(),
            |level| {
                debug!(level = level.name(), "Matched registered history level");
                level.name().to_owned()
            },
        )
    }

    /// The lookup query with the configured table prefix substituted in.
    #[must_use]
    pub fn lookup_query(&self) -> String {
        LOOKUP_QUERY_TEMPLATE.replace(TABLE_PREFIX_PLACEHOLDER, &self.table_prefix)
    }

    /// The effective default level name after the configuration override.
    #[must_use]
    pub fn default_level(&self) -> &str {
        &self.default_level
    }

    /// Whether store failures degrade to the default level.
    #[must_use]
    pub const fn fault_tolerant(&self) -> bool {
        self.fault_tolerant
    }

    /// The currently registered levels.
    #[must_use]
    pub const fn registry(&self) -> &HistoryLevelRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_with_prefix(prefix: Option<&str>) -> HistoryLevelResolver {
        let mut properties = EngineProperties::default();
        properties.database.table_prefix = prefix.map(str::to_owned);

        HistoryLevelResolver::builder()
            .lookup(|_: &str| -> Result<Option<i64>, LookupError> { Ok(None) })
            .properties(properties)
            .init()
            .expect("resolver init")
    }

    #[test]
    fn query_without_prefix_drops_placeholder() {
        let resolver = resolver_with_prefix(None);
        assert_eq!(
            resolver.lookup_query(),
            "SELECT VALUE_ FROM ACT_GE_PROPERTY WHERE NAME_='historyLevel'"
        );
    }

    #[test]
    fn query_substitutes_table_prefix() {
        let resolver = resolver_with_prefix(Some("FM_"));
        assert_eq!(
            resolver.lookup_query(),
            "SELECT VALUE_ FROM FM_ACT_GE_PROPERTY WHERE NAME_='historyLevel'"
        );
    }
}
