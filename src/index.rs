//! The nearest-neighbor index module
//! Provide fit and query over a static feature matrix

use crate::error::RecError;
use crate::vector::sq_l2_distance;
use std::cmp::Ordering;

/// Exact k-nearest-neighbor index over post engagement features.
///
/// Fit once at startup from a point-in-time snapshot of the store, then
/// queried read-only for the lifetime of the process. Row i of the flat
/// matrix belongs to `ids[i]`; that positional correspondence is what a
/// query result is built from, so neither sequence is ever reordered
/// independently.
pub struct KnnIndex {
    ids: Vec<i64>,
    vectors: Vec<f64>,
    dimension: usize,
    k: usize,
}

impl KnnIndex {
    /// Fits an index over a feature matrix and its parallel identifier list.
    ///
    /// `k` is the neighbor count applied uniformly to every query; it is
    /// fixed here and cannot be overridden at query time.
    ///
    /// # Errors
    ///
    /// * [`RecError::EmptyIndex`] - `rows` is empty
    /// * [`RecError::DimensionMismatch`] - rows disagree on arity
    ///
    /// # Examples
    ///
    /// ```
    /// use tweetrec::KnnIndex;
    ///
    /// let index = KnnIndex::fit(
    ///     vec![1, 2],
    ///     vec![vec![10.0, 2.0, 0.8], vec![1.0, 9.0, 0.1]],
    ///     1,
    /// ).unwrap();
    /// assert_eq!(index.count(), 2);
    /// ```
    pub fn fit(ids: Vec<i64>, rows: Vec<Vec<f64>>, k: usize) -> Result<KnnIndex, RecError> {
        debug_assert_eq!(ids.len(), rows.len());

        let Some(first) = rows.first() else {
            return Err(RecError::EmptyIndex);
        };
        let dimension = first.len();

        let mut vectors = Vec::with_capacity(rows.len() * dimension);
        for row in &rows {
            if row.len() != dimension {
                return Err(RecError::DimensionMismatch {
                    expected: dimension,
                    got: row.len(),
                });
            }
            vectors.extend_from_slice(row);
        }

        Ok(KnnIndex { ids, vectors, dimension, k })
    }

    /// Returns the identifiers of the k stored rows nearest to `query`,
    /// ordered by ascending Euclidean distance.
    ///
    /// The scan is exact and deterministic: distances tie-break on row
    /// index, so a fixed index and query always produce the same sequence.
    /// Returns `min(k, count)` identifiers.
    ///
    /// # Errors
    ///
    /// * [`RecError::DimensionMismatch`] - `query` arity differs from the
    ///   fitted matrix
    ///
    /// # Examples
    ///
    /// ```
    /// use tweetrec::KnnIndex;
    ///
    /// let index = KnnIndex::fit(
    ///     vec![1, 2],
    ///     vec![vec![10.0, 2.0, 0.8], vec![1.0, 9.0, 0.1]],
    ///     1,
    /// ).unwrap();
    /// assert_eq!(index.query(&[10.0, 2.0, 0.8]).unwrap(), vec![1]);
    /// ```
    pub fn query(&self, query: &[f64]) -> Result<Vec<i64>, RecError> {
        if query.len() != self.dimension {
            return Err(RecError::DimensionMismatch {
                expected: self.dimension,
                got: query.len(),
            });
        }

        let mut pairs: Vec<(f64, usize)> = Vec::with_capacity(self.count());
        for i in 0..self.count() {
            let sq_dist = sq_l2_distance(self.row(i), query)?;
            pairs.push((sq_dist, i));
        }

        // Tuple order tie-breaks equal distances on row index.
        pairs.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        pairs.truncate(self.k);

        Ok(pairs.iter().map(|&(_, i)| self.ids[i]).collect())
    }

    /// Returns the number of indexed rows.
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Returns the arity the index was fit with.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the fixed neighbor count.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Slices one row out of the flat matrix. Rows are stored contiguously
    /// as `[r0_d0, r0_d1, ..., r1_d0, r1_d1, ...]`.
    fn row(&self, index: usize) -> &[f64] {
        let start = index * self.dimension;
        &self.vectors[start..start + self.dimension]
    }
}
