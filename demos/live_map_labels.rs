use std::sync::Arc;

use chart_map_live::api::{ChartViewConfig, ChartViewController, SystemClock};
use chart_map_live::registry::{MapRegistry, register_fixture};
use chart_map_live::render::{NullSurface, present};
use chart_map_live::telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = telemetry::init_tracing_with_fallback("chart_map_live=trace,info");

    let mut registry = MapRegistry::new();
    register_fixture(Some(&mut registry));
    let registry = Arc::new(registry);

    let mut view = ChartViewController::new(ChartViewConfig::default(), Arc::new(SystemClock))?;
    let mut surface = NullSurface::default();
    present(&mut surface, &registry, &view.document())?;

    let mut updates = view.subscribe();
    view.mount()?;
    for _ in 0..3 {
        updates.changed().await?;
        let state = updates.borrow_and_update().clone();
        present(&mut surface, &registry, &state.document)?;
        println!(
            "revision {} title {:?} unmatched {:?}",
            state.revision, state.document.title.text, surface.unmatched_regions
        );
    }
    view.unmount();

    println!("{}", view.document_json_contract_v1_pretty()?);
    println!("{}", registry.resolve("pk")?.features.to_geojson_string()?);
    Ok(())
}
