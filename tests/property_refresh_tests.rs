use std::sync::Arc;

use chart_map_live::api::{ChartViewConfig, ChartViewController, FixedClock};
use chart_map_live::core::{ChartOptionsDocument, tick_label};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #[test]
    fn tick_label_is_prefix_then_unpadded_seconds(seconds in 0u32..60) {
        let label = tick_label("iphone销量", seconds);
        let digits = seconds.to_string();
        prop_assert_eq!(label.strip_prefix("iphone销量"), Some(digits.as_str()));
        prop_assert!(!digits.starts_with('0') || seconds == 0);
    }

    #[test]
    fn labels_follow_the_clock_and_regions_never_move(
        seed in any::<u64>(),
        ticks in prop::collection::vec(0u32..60, 1..24)
    ) {
        let config = ChartViewConfig::default();
        let document = ChartOptionsDocument::sales_demo(
            &config.map_id,
            &config.label_prefix,
            config.region_value_bound,
            &mut StdRng::seed_from_u64(seed),
        );
        let regions = document.region_snapshot();
        let clock = Arc::new(FixedClock::new(0));
        let view = ChartViewController::with_document(config, clock.clone(), document)
            .expect("controller init");

        for (index, seconds) in ticks.iter().copied().enumerate() {
            clock.set(seconds);
            let current = view.tick_now();
            let label = format!("iphone销量{seconds}");
            prop_assert_eq!(&current.title.text, &label);
            prop_assert_eq!(&current.series[0].name, &label);
            prop_assert_eq!(&current.legend.data[0], &label);
            prop_assert_eq!(current.region_snapshot(), regions.clone());
            prop_assert_eq!(view.revision(), index as u64 + 1);
        }
    }
}
