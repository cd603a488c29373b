/// Compute the dot product of two 3d vectors.
///
/// Example:
///
/// ```
/// use posecloud_3d::linalg::dot_product3;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert_eq!(dot_product3(&a, &b), 32.0);
/// ```
#[inline]
pub fn dot_product3(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Compute the euclidean norm of a 3d vector.
#[inline]
pub fn norm3(a: &[f64; 3]) -> f64 {
    dot_product3(a, a).sqrt()
}

/// Transpose a row-major 3x3 matrix.
///
/// # Arguments
///
/// * `m` - The matrix to transpose.
///
/// # Returns
///
/// The transposed matrix.
pub fn transpose33(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// Multiply a row-major 3x3 matrix by a 3d column vector.
///
/// # Arguments
///
/// * `m` - The matrix.
/// * `v` - The column vector.
///
/// # Returns
///
/// The product `m * v`.
pub fn mat33_mul_vec3(m: &[[f64; 3]; 3], v: &[f64; 3]) -> [f64; 3] {
    [
        dot_product3(&m[0], v),
        dot_product3(&m[1], v),
        dot_product3(&m[2], v),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot_product3() {
        assert_eq!(dot_product3(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), 0.0);
        assert_eq!(dot_product3(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 14.0);
    }

    #[test]
    fn test_norm3() {
        assert_relative_eq!(norm3(&[3.0, 4.0, 0.0]), 5.0);
        assert_relative_eq!(norm3(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_transpose33() {
        let m = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let expected = [[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]];
        assert_eq!(transpose33(&m), expected);
        assert_eq!(transpose33(&transpose33(&m)), m);
    }

    #[test]
    fn test_mat33_mul_vec3() {
        let m = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let v = [1.0, 0.0, -1.0];
        assert_eq!(mat33_mul_vec3(&m, &v), [-2.0, -2.0, -2.0]);
    }
}
