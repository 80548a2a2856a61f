//! chart-map-live: a choropleth chart document kept fresh by a periodic timer.
//!
//! The crate splits into pure domain values (`core`), the map geometry
//! registry and its bundled fixture (`registry`), the rendering-surface
//! contract (`render`), and the stateful view controller (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod registry;
pub mod render;
pub mod telemetry;

pub use api::{ChartViewConfig, ChartViewController};
pub use error::{ChartError, ChartResult};
pub use registry::{MapRegistry, register_fixture};
