//! The model state module
//! One-shot startup build and the Ready/Failed state every query checks

use crate::error::RecError;
use crate::index::KnnIndex;
use crate::store;

/// Neighbor count of the reference deployment.
pub const DEFAULT_K: usize = 3;

/// Outcome of the startup model build, shared read-only with every
/// request worker.
///
/// A failed build is a terminal state for the process: the server still
/// starts and answers requests, but every query short-circuits with
/// [`RecError::ModelUnavailable`]. There is no rebuild path.
pub enum ModelState {
    /// The index was fit and is serving queries.
    Ready(KnnIndex),
    /// The build failed; the reason is kept for logging and diagnostics.
    Failed(String),
}

impl ModelState {
    /// Runs one query against the built index.
    ///
    /// # Errors
    ///
    /// * [`RecError::ModelUnavailable`] - the startup build failed
    /// * [`RecError::DimensionMismatch`] - `features` has the wrong arity
    pub fn query(&self, features: &[f64]) -> Result<Vec<i64>, RecError> {
        match self {
            ModelState::Ready(index) => index.query(features),
            ModelState::Failed(_) => Err(RecError::ModelUnavailable),
        }
    }

    /// Returns true when the index was built successfully.
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }
}

/// Loads feature vectors from the store and fits the nearest-neighbor
/// index, converting any failure into [`ModelState::Failed`].
///
/// Called exactly once before the server starts accepting requests;
/// an empty store surfaces here as a failed build, never a panic.
pub async fn load_model(conn_str: &str, k: usize) -> ModelState {
    match try_load(conn_str, k).await {
        Ok(index) => {
            tracing::info!(
                rows = index.count(),
                k = index.k(),
                "recommendation model loaded successfully"
            );
            ModelState::Ready(index)
        }
        Err(e) => {
            tracing::error!("failed to initialize recommendation model: {e}");
            ModelState::Failed(e.to_string())
        }
    }
}

async fn try_load(conn_str: &str, k: usize) -> Result<KnnIndex, RecError> {
    let (ids, matrix) = store::fetch_post_features(conn_str).await?;
    KnnIndex::fit(ids, matrix, k)
}
