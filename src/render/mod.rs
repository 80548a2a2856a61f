mod null_surface;

pub use null_surface::NullSurface;

use crate::core::ChartOptionsDocument;
use crate::error::ChartResult;
use crate::registry::{MapRegistry, MapRegistryEntry};

/// Contract implemented by anything that draws a chart document.
///
/// Surfaces receive the document together with the geometry of every map its
/// series reference, already resolved, so drawing code never touches the
/// registry.
pub trait ChartSurface {
    fn render(
        &mut self,
        document: &ChartOptionsDocument,
        maps: &[&MapRegistryEntry],
    ) -> ChartResult<()>;
}

/// Resolves the document's map references and hands both to `surface`.
///
/// An unregistered map id surfaces as [`crate::ChartError::UnregisteredMap`]
/// and nothing is drawn.
pub fn present<S: ChartSurface + ?Sized>(
    surface: &mut S,
    registry: &MapRegistry,
    document: &ChartOptionsDocument,
) -> ChartResult<()> {
    let maps = document
        .map_ids()
        .into_iter()
        .map(|id| registry.resolve(id))
        .collect::<ChartResult<Vec<_>>>()?;
    surface.render(document, &maps)
}
