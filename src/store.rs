//! The feature store loader module
//! Fetch per-post engagement features from PostgreSQL

use crate::error::RecError;
use tokio_postgres::NoTls;

/// Arity of every stored and query feature vector.
pub const FEATURE_DIM: usize = 3;

/// Fetches the (identifier list, feature matrix) pair from the store.
///
/// Opens one connection, reads every row of `posts`, and closes the
/// connection on every exit path: the connection future is driven on a
/// background task and resolves once the client handle drops, success or
/// failure alike. Row order is whatever the store returns, preserved
/// identically in both output sequences.
///
/// Zero rows is a valid empty output, not an error; the index builder is
/// the one that treats it as "no model available."
///
/// # Errors
///
/// * [`RecError::StoreUnavailable`] - connect or query failure
/// * [`RecError::MalformedRow`] - a row's id or feature columns cannot be
///   read as the required numeric types
pub async fn fetch_post_features(conn_str: &str) -> Result<(Vec<i64>, Vec<Vec<f64>>), RecError> {
    let (client, connection) =
        tokio_postgres::connect(conn_str, NoTls)
            .await
            .map_err(|e| RecError::StoreUnavailable {
                reason: e.to_string(),
            })?;

    let _driver = actix_web::rt::spawn(async move {
        if let Err(e) = connection.await {
            tracing::warn!("store connection error: {e}");
        }
    });

    let rows = client
        .query(
            "SELECT id::BIGINT, like_count::BIGINT, dislike_count::BIGINT, \
             engagement_rate::DOUBLE PRECISION FROM posts",
            &[],
        )
        .await
        .map_err(|e| RecError::StoreUnavailable {
            reason: e.to_string(),
        })?;

    let mut ids = Vec::with_capacity(rows.len());
    let mut matrix = Vec::with_capacity(rows.len());

    for row in &rows {
        let id: i64 = row.try_get(0).map_err(malformed)?;
        let like_count: i64 = row.try_get(1).map_err(malformed)?;
        let dislike_count: i64 = row.try_get(2).map_err(malformed)?;
        let engagement_rate: f64 = row.try_get(3).map_err(malformed)?;

        ids.push(id);
        matrix.push(vec![like_count as f64, dislike_count as f64, engagement_rate]);
    }

    tracing::info!(rows = ids.len(), "fetched post features from store");

    Ok((ids, matrix))
}

fn malformed(e: tokio_postgres::Error) -> RecError {
    RecError::MalformedRow {
        reason: e.to_string(),
    }
}
