use thiserror::Error;

/// Configuration-time failures. Editing operations themselves never fail;
/// stale or unknown condition ids are silent no-ops.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("condition type catalog must not be empty")]
    EmptyConditionTypes,
    #[error("invalid condition list JSON: {0}")]
    InvalidConditionList(#[from] serde_json::Error),
}
