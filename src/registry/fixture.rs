use tracing::{debug, error};

use crate::core::{FeatureCollection, MapFeature, Position};

use super::ChartLibrary;

/// Map id the bundled fixture registers under.
pub const FIXTURE_MAP_ID: &str = "pk";

/// Region names of the three panels, left to right.
pub const FIXTURE_REGIONS: [&str; 3] = ["NO11", "NO12", "NO13"];

/// Outcome of [`register_fixture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureRegistration {
    Registered { features: usize },
    Skipped,
}

/// The "pk" geometry: one outline plus three panels.
///
/// Panel rings are left open exactly as the fixture was authored; consumers
/// that need closed rings use [`FeatureCollection::to_geojson`].
#[must_use]
pub fn fixture_collection() -> FeatureCollection {
    FeatureCollection::new(vec![
        MapFeature::line(vec![
            Position::new(-4.12811279296875, 0.5273363048115169),
            Position::new(1.14532470703125, 0.703107352436491),
            Position::new(1.14532470703125, 3.6888551431470478),
            Position::new(-4.47967529296875, 3.8642546157214084),
            Position::new(-4.12811279296875, 0.5273363048115169),
        ]),
        MapFeature::polygon(
            "NO11",
            vec![vec![
                Position::new(0.0, 0.0),
                Position::new(1.0, 0.0),
                Position::new(1.0, 0.5),
                Position::new(0.0, 0.5),
            ]],
        ),
        MapFeature::polygon(
            "NO12",
            vec![vec![
                Position::new(1.0, 0.0),
                Position::new(2.0, 0.0),
                Position::new(2.0, 0.5),
                Position::new(1.0, 0.5),
            ]],
        ),
        MapFeature::polygon(
            "NO13",
            vec![vec![
                Position::new(2.0, 0.0),
                Position::new(3.0, 0.0),
                Position::new(3.0, 0.5),
                Position::new(2.0, 0.5),
            ]],
        ),
    ])
}

/// Registers the fixture under [`FIXTURE_MAP_ID`].
///
/// A missing library, or one without map support, is logged once and
/// skipped; this never fails.
pub fn register_fixture<L: ChartLibrary + ?Sized>(
    library: Option<&mut L>,
) -> FixtureRegistration {
    let Some(registrar) = library.and_then(|library| library.map_registrar()) else {
        error!(map_id = FIXTURE_MAP_ID, "registry capability unavailable");
        return FixtureRegistration::Skipped;
    };

    let collection = fixture_collection();
    let features = collection.len();
    registrar.register_map(FIXTURE_MAP_ID, collection);
    debug!(map_id = FIXTURE_MAP_ID, features, "registered map fixture");
    FixtureRegistration::Registered { features }
}
