//! Error types, one enum per concern plus a top-level wrapper.

pub mod scoring_error;
pub mod store_error;

pub use scoring_error::ScoringError;
pub use store_error::StoreError;

/// Top-level error for the Sector workspace.
#[derive(Debug, thiserror::Error)]
pub enum SectorError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience result alias used across the workspace.
pub type SectorResult<T> = Result<T, SectorError>;
