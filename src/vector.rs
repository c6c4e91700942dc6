//! This is the vector math module
//! Provide squared Euclidean (L2) distance over raw feature values

use crate::error::RecError;

/// Squared Euclidean Distance
/// sq_dist = sum((a[i] - b[i])^2) for i = 0..a.len()
/// Can only process vectors with same dimensions
///
/// Distances are compared, never reported, so the square root is skipped.
/// No scaling or weighting is applied: raw counts and the [0,1] engagement
/// rate enter the same sum.
pub fn sq_l2_distance(left: &[f64], right: &[f64]) -> Result<f64, RecError> {
    if left.len() != right.len() {
        return Err(RecError::DimensionMismatch {
            expected: left.len(),
            got: right.len(),
        });
    }

    let sq_dist = left.iter()
        .zip(right.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum();

    Ok(sq_dist)
}

#[cfg(test)]
mod vector_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sq_l2_basic() {
        // Test case: [0,0] vs [3,4] => 9 + 16 = 25
        let a = vec![0.0, 0.0];
        let b = vec![3.0, 4.0];
        let result = sq_l2_distance(&a, &b).unwrap();

        assert_abs_diff_eq!(result, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sq_l2_identical_vectors() {
        let a = vec![10.0, 2.0, 0.8];
        let result = sq_l2_distance(&a, &a).unwrap();

        assert_abs_diff_eq!(result, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sq_l2_symmetric() {
        let a = vec![1.0, 9.0, 0.1];
        let b = vec![9.0, 2.0, 0.7];

        let ab = sq_l2_distance(&a, &b).unwrap();
        let ba = sq_l2_distance(&b, &a).unwrap();

        assert_abs_diff_eq!(ab, ba, epsilon = 1e-12);
    }

    #[test]
    fn test_sq_l2_negative_values() {
        // [-1, 2] vs [2, -2] => 9 + 16 = 25
        let a = vec![-1.0, 2.0];
        let b = vec![2.0, -2.0];
        let result = sq_l2_distance(&a, &b).unwrap();

        assert_abs_diff_eq!(result, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sq_l2_counts_dominate_rate() {
        // Raw values: a two-unit count gap outweighs the full rate range.
        let rate_gap = sq_l2_distance(&[10.0, 2.0, 0.0], &[10.0, 2.0, 1.0]).unwrap();
        let count_gap = sq_l2_distance(&[10.0, 2.0, 0.5], &[12.0, 2.0, 0.5]).unwrap();

        assert!(rate_gap < count_gap);
    }

    #[test]
    fn test_sq_l2_dimension_mismatch() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0]; // Different dimension

        let result = sq_l2_distance(&a, &b);
        assert!(matches!(
            result,
            Err(RecError::DimensionMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn test_sq_l2_empty_vectors() {
        let a: Vec<f64> = vec![];
        let b: Vec<f64> = vec![];
        let result = sq_l2_distance(&a, &b).unwrap();

        assert_abs_diff_eq!(result, 0.0, epsilon = 1e-12);
    }
}
