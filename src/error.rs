use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("map `{map_id}` is not registered")]
    UnregisteredMap { map_id: String },

    #[error("capability unavailable: {0}")]
    MissingCapability(&'static str),

    #[error("no async runtime is available to drive the refresh timer")]
    RuntimeUnavailable,
}
