//! Unified error for the convenience surface.

use thiserror::Error;

use sizhu_core::ChartError;
use sizhu_engine::ProviderError;
use sizhu_time::TimeError;

/// Errors surfaced by the facade.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SizhuError {
    /// Invalid pillar input.
    #[error(transparent)]
    Chart(#[from] ChartError),
    /// Timestamp correction failed.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// A collaborator failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
