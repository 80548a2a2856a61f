use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::error::{ChartError, ChartResult};

/// Repeating timer bound to a spawned task.
///
/// The first tick fires one full period after spawning. Cancelling or
/// dropping the handle aborts the task, so a timer never outlives its owner.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
    period: Duration,
}

impl TimerHandle {
    /// Spawns `on_tick` on the current tokio runtime every `period`.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> ChartResult<Self>
    where
        F: FnMut() + Send + 'static,
    {
        if period.is_zero() {
            return Err(ChartError::InvalidConfig(
                "timer period must be greater than zero".to_owned(),
            ));
        }
        let runtime = Handle::try_current().map_err(|_| ChartError::RuntimeUnavailable)?;
        let start = Instant::now() + period;
        let task = runtime.spawn(async move {
            let mut interval = time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                on_tick();
            }
        });
        Ok(Self { task, period })
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
