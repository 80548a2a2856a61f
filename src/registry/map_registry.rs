use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::FeatureCollection;
use crate::error::{ChartError, ChartResult};

/// Geometry registered under a map id.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRegistryEntry {
    pub id: String,
    pub features: FeatureCollection,
}

/// Capability to associate a map id with geometry.
pub trait MapRegistrar {
    fn register_map(&mut self, id: &str, collection: FeatureCollection);
}

/// A chart backend that may or may not ship map support.
///
/// Returning `None` models a backend loaded without its map module.
pub trait ChartLibrary {
    fn map_registrar(&mut self) -> Option<&mut dyn MapRegistrar>;
}

/// Fails with [`ChartError::MissingCapability`] when the backend cannot
/// register maps.
pub fn require_registrar<L: ChartLibrary + ?Sized>(
    library: &mut L,
) -> ChartResult<&mut dyn MapRegistrar> {
    library
        .map_registrar()
        .ok_or(ChartError::MissingCapability("map registration"))
}

/// Ordered map-id to geometry table.
///
/// Filled once at startup and shared read-only afterwards; views receive it
/// explicitly instead of reaching for process-wide state.
#[derive(Debug, Clone, Default)]
pub struct MapRegistry {
    entries: IndexMap<String, MapRegistryEntry>,
}

impl MapRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for `id`, returning the replaced one.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        features: FeatureCollection,
    ) -> Option<MapRegistryEntry> {
        let id = id.into();
        let unclosed = features.unclosed_rings();
        if unclosed > 0 {
            warn!(
                map_id = %id,
                unclosed_rings = unclosed,
                "registering map with unclosed polygon rings"
            );
        }
        debug!(map_id = %id, features = features.len(), "register map");
        let replaced = self
            .entries
            .insert(id.clone(), MapRegistryEntry { id, features });
        if let Some(previous) = &replaced {
            debug!(
                map_id = %previous.id,
                replaced_features = previous.features.len(),
                "replaced previously registered map"
            );
        }
        replaced
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MapRegistryEntry> {
        self.entries.get(id)
    }

    pub fn resolve(&self, id: &str) -> ChartResult<&MapRegistryEntry> {
        self.get(id).ok_or_else(|| ChartError::UnregisteredMap {
            map_id: id.to_owned(),
        })
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl MapRegistrar for MapRegistry {
    fn register_map(&mut self, id: &str, collection: FeatureCollection) {
        self.register(id, collection);
    }
}

impl ChartLibrary for MapRegistry {
    fn map_registrar(&mut self) -> Option<&mut dyn MapRegistrar> {
        Some(self)
    }
}
