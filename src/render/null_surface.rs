use tracing::trace;

use crate::core::ChartOptionsDocument;
use crate::error::{ChartError, ChartResult};
use crate::registry::MapRegistryEntry;

use super::ChartSurface;

/// Headless surface used by tests and demos.
///
/// It still checks that every series has geometry to draw on, and records the
/// region names no feature matched so callers can spot stray data.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub render_count: usize,
    pub last_title: Option<String>,
    pub unmatched_regions: Vec<String>,
}

impl ChartSurface for NullSurface {
    fn render(
        &mut self,
        document: &ChartOptionsDocument,
        maps: &[&MapRegistryEntry],
    ) -> ChartResult<()> {
        let mut unmatched = Vec::new();
        for series in &document.series {
            let map = maps
                .iter()
                .find(|entry| entry.id == series.map_type)
                .ok_or_else(|| ChartError::UnregisteredMap {
                    map_id: series.map_type.clone(),
                })?;
            for datum in &series.data {
                if map.features.feature(&datum.name).is_none() && !unmatched.contains(&datum.name)
                {
                    unmatched.push(datum.name.clone());
                }
            }
        }

        self.render_count += 1;
        self.last_title = Some(document.title.text.clone());
        self.unmatched_regions = unmatched;
        trace!(
            render_count = self.render_count,
            unmatched = self.unmatched_regions.len(),
            "null surface render"
        );
        Ok(())
    }
}
