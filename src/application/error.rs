// Errors surfaced by the dashboard use cases
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("dashboard unavailable")]
    Repository(#[from] anyhow::Error),
}
