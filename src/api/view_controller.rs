use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, trace, warn};

use crate::core::{ChartOptionsDocument, next_document};
use crate::error::ChartResult;

use super::{ChartViewConfig, Clock, TimerHandle};

/// Published view state: the current document and how many ticks produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub revision: u64,
    pub document: Arc<ChartOptionsDocument>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Unmounted,
    Mounted,
}

/// Owns a chart document and refreshes its labels on a fixed period.
///
/// The document is built once at construction. While mounted, every tick
/// replaces it with a relabeled copy and publishes the copy on a `watch`
/// channel; region values are never regenerated.
pub struct ChartViewController {
    config: ChartViewConfig,
    clock: Arc<dyn Clock>,
    state: Arc<watch::Sender<ChartState>>,
    timer: Option<TimerHandle>,
}

impl ChartViewController {
    /// Builds the sales demo document with thread-local randomness.
    pub fn new(config: ChartViewConfig, clock: Arc<dyn Clock>) -> ChartResult<Self> {
        config.validate()?;
        let document = ChartOptionsDocument::sales_demo(
            &config.map_id,
            &config.label_prefix,
            config.region_value_bound,
            &mut rand::thread_rng(),
        );
        Self::with_document(config, clock, document)
    }

    pub fn with_document(
        config: ChartViewConfig,
        clock: Arc<dyn Clock>,
        document: ChartOptionsDocument,
    ) -> ChartResult<Self> {
        config.validate()?;
        let (sender, _) = watch::channel(ChartState {
            revision: 0,
            document: Arc::new(document),
        });
        Ok(Self {
            config,
            clock,
            state: Arc::new(sender),
            timer: None,
        })
    }

    /// Starts the refresh timer, replacing any timer already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self) -> ChartResult<()> {
        let state = Arc::clone(&self.state);
        let clock = Arc::clone(&self.clock);
        let prefix = self.config.label_prefix.clone();
        let timer = TimerHandle::spawn(self.config.tick_period(), move || {
            publish_tick(&state, clock.as_ref(), &prefix);
        })?;

        if let Some(previous) = self.timer.replace(timer) {
            warn!("mount while already mounted; replacing refresh timer");
            previous.cancel();
        }
        debug!(
            period_ms = self.config.tick_period_ms,
            map_id = %self.config.map_id,
            "chart view mounted"
        );
        Ok(())
    }

    /// Stops the refresh timer. No-op when not mounted.
    pub fn unmount(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            debug!(revision = self.revision(), "chart view unmounted");
        }
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        if self.timer.is_some() {
            ViewState::Mounted
        } else {
            ViewState::Unmounted
        }
    }

    /// Runs one tick synchronously, for hosts that drive their own loop.
    pub fn tick_now(&self) -> Arc<ChartOptionsDocument> {
        publish_tick(&self.state, self.clock.as_ref(), &self.config.label_prefix)
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ChartState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> ChartState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn document(&self) -> Arc<ChartOptionsDocument> {
        Arc::clone(&self.state.borrow().document)
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    #[must_use]
    pub fn config(&self) -> &ChartViewConfig {
        &self.config
    }
}

impl Drop for ChartViewController {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Relabels and republishes under the channel's write lock, so concurrent
/// ticks never overwrite each other.
fn publish_tick(
    state: &watch::Sender<ChartState>,
    clock: &dyn Clock,
    prefix: &str,
) -> Arc<ChartOptionsDocument> {
    let seconds = clock.seconds();
    let mut published = None;
    state.send_modify(|current| {
        let document = Arc::new(next_document(&current.document, prefix, seconds));
        current.revision += 1;
        current.document = Arc::clone(&document);
        trace!(seconds, revision = current.revision, "chart view tick");
        published = Some(document);
    });
    published.unwrap_or_else(|| Arc::clone(&state.borrow().document))
}
