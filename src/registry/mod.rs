//! Map geometry registration.

mod fixture;
mod map_registry;

pub use fixture::{
    FIXTURE_MAP_ID, FIXTURE_REGIONS, FixtureRegistration, fixture_collection, register_fixture,
};
pub use map_registry::{
    ChartLibrary, MapRegistrar, MapRegistry, MapRegistryEntry, require_registrar,
};
