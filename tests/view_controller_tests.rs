use std::sync::Arc;
use std::time::Duration;

use chart_map_live::api::{ChartViewConfig, ChartViewController, FixedClock, ViewState};
use chart_map_live::core::ChartOptionsDocument;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded_view(clock: Arc<FixedClock>) -> ChartViewController {
    let config = ChartViewConfig::default();
    let document = ChartOptionsDocument::sales_demo(
        &config.map_id,
        &config.label_prefix,
        config.region_value_bound,
        &mut StdRng::seed_from_u64(7),
    );
    ChartViewController::with_document(config, clock, document).expect("controller init")
}

#[test]
fn controller_starts_unmounted_with_constructed_document() {
    let view = seeded_view(Arc::new(FixedClock::new(0)));
    assert_eq!(view.state(), ViewState::Unmounted);
    assert_eq!(view.revision(), 0);
    assert_eq!(view.document().title.text, "iphone销量");
    assert_eq!(view.document().series.len(), 3);
}

#[test]
fn unmount_without_timer_is_a_no_op() {
    let mut view = seeded_view(Arc::new(FixedClock::new(0)));
    view.unmount();
    view.unmount();
    assert_eq!(view.state(), ViewState::Unmounted);
    assert_eq!(view.revision(), 0);
}

#[test]
fn concurrent_ticks_each_advance_the_revision() {
    const THREADS: u64 = 4;
    const TICKS_PER_THREAD: u64 = 5_000;

    let view = seeded_view(Arc::new(FixedClock::new(44)));
    let regions = view.document().region_snapshot();
    std::thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..TICKS_PER_THREAD {
                    view.tick_now();
                }
            });
        }
    });

    assert_eq!(view.revision(), THREADS * TICKS_PER_THREAD);
    assert_eq!(view.document().title.text, "iphone销量44");
    assert_eq!(view.document().region_snapshot(), regions);
}

#[tokio::test(start_paused = true)]
async fn first_tick_fires_one_period_after_mount() {
    let mut view = seeded_view(Arc::new(FixedClock::new(5)));
    view.mount().expect("mount");
    assert_eq!(view.state(), ViewState::Mounted);

    tokio::time::sleep(Duration::from_millis(999)).await;
    assert_eq!(view.revision(), 0);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(view.revision(), 1);
    assert_eq!(view.document().title.text, "iphone销量5");
}

#[tokio::test(start_paused = true)]
async fn ticks_relabel_while_region_values_stay_fixed() {
    let clock = Arc::new(FixedClock::new(0));
    let mut view = seeded_view(Arc::clone(&clock));
    let regions_at_construction = view.document().region_snapshot();
    let mut updates = view.subscribe();
    view.mount().expect("mount");

    for seconds in [3_u32, 17, 42, 9] {
        clock.set(seconds);
        updates.changed().await.expect("tick published");
        let state = updates.borrow_and_update().clone();
        let label = format!("iphone销量{seconds}");

        assert_eq!(state.document.title.text, label);
        assert_eq!(state.document.series[0].name, label);
        assert_eq!(state.document.legend.data[0], label);
        assert_eq!(state.document.region_snapshot(), regions_at_construction);
    }

    let document = view.document();
    assert_eq!(document.series[1].name, "iphone4");
    assert_eq!(document.legend.data[1..], ["iphone4", "iphone5"]);
    assert_eq!(document.title.subtext, "纯属虚构");
    view.unmount();
}

#[tokio::test(start_paused = true)]
async fn each_tick_publishes_a_fresh_document() {
    let mut view = seeded_view(Arc::new(FixedClock::new(30)));
    let before = view.document();
    let mut updates = view.subscribe();
    view.mount().expect("mount");

    updates.changed().await.expect("tick published");
    let after = view.document();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.title.text, "iphone销量");
    assert_eq!(after.title.text, "iphone销量30");
}

#[tokio::test(start_paused = true)]
async fn double_mount_keeps_a_single_tick_stream() {
    let mut view = seeded_view(Arc::new(FixedClock::new(1)));
    view.mount().expect("first mount");
    view.mount().expect("second mount");
    assert_eq!(view.state(), ViewState::Mounted);

    tokio::time::sleep(Duration::from_millis(3_500)).await;
    assert_eq!(view.revision(), 3);
}

#[tokio::test(start_paused = true)]
async fn remount_after_partial_period_restarts_the_schedule() {
    let mut view = seeded_view(Arc::new(FixedClock::new(1)));
    view.mount().expect("first mount");
    tokio::time::sleep(Duration::from_millis(600)).await;
    view.mount().expect("second mount");

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(view.revision(), 0);
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(view.revision(), 1);
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_ticks() {
    let mut view = seeded_view(Arc::new(FixedClock::new(1)));
    view.mount().expect("mount");
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(view.revision(), 2);

    view.unmount();
    assert_eq!(view.state(), ViewState::Unmounted);
    tokio::time::sleep(Duration::from_millis(5_000)).await;
    assert_eq!(view.revision(), 2);

    view.unmount();
    assert_eq!(view.state(), ViewState::Unmounted);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_controller_cancels_its_timer() {
    let mut view = seeded_view(Arc::new(FixedClock::new(1)));
    let mut updates = view.subscribe();
    view.mount().expect("mount");
    drop(view);

    tokio::time::sleep(Duration::from_millis(3_000)).await;
    assert!(updates.changed().await.is_err());
    assert_eq!(updates.borrow().revision, 0);
}

#[tokio::test(start_paused = true)]
async fn custom_period_and_prefix_drive_the_labels() {
    let config = ChartViewConfig::default()
        .with_tick_period_ms(250)
        .with_label_prefix("sales-");
    let mut view =
        ChartViewController::new(config, Arc::new(FixedClock::new(8))).expect("controller init");
    view.mount().expect("mount");

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    assert_eq!(view.revision(), 4);
    assert_eq!(view.document().title.text, "sales-8");
    assert_eq!(view.document().legend.data[0], "sales-8");
}
