//! Scalar helpers shared by the vector math

/// Linear interpolation between `a` and `b`.
///
/// `amount` is not clamped, so values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: f32, b: f32, amount: f32) -> f32 {
    a + (b - a) * amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_relative_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert_relative_eq!(lerp(0.0, 1.0, 2.0), 2.0);
        assert_relative_eq!(lerp(0.0, 1.0, -1.0), -1.0);
    }
}
