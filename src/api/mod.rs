mod clock;
mod json_contract;
mod timer;
mod view_config;
mod view_controller;

pub use clock::{Clock, FixedClock, SystemClock};
pub use json_contract::{CHART_OPTIONS_JSON_SCHEMA_V1, ChartOptionsJsonContractV1};
pub use timer::TimerHandle;
pub use view_config::{ChartViewConfig, DEFAULT_REGION_VALUE_BOUND, DEFAULT_TICK_PERIOD_MS};
pub use view_controller::{ChartState, ChartViewController, ViewState};
