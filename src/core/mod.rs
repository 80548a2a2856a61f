pub mod document;
pub mod geometry;
pub mod refresh;

pub use document::{
    ChartOptionsDocument, DataViewFeature, EmptyFeature, LabelVisibility, Legend, MapSeries,
    RegionDatum, SeriesKind, SeriesLabel, Title, Toolbox, ToolboxFeatures, Tooltip, VisualMap,
};
pub use geometry::{FeatureCollection, Geometry, MapFeature, Position};
pub use refresh::{next_document, tick_label};
