/// absolute difference test used by every `PartialEq` impl in this module.
/// the tolerance does not scale with magnitude, so large values effectively compare exactly.
#[inline(always)]
pub fn nearly_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < f32::EPSILON
}

// determinant of [[a, b], [c, d]]
#[inline(always)]
pub(crate) fn det2(a: f32, b: f32, c: f32, d: f32) -> f32 {
    a * d - b * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearly_equal_is_absolute() {
        assert!(nearly_equal(1.0, 1.0 + f32::EPSILON / 2.0));
        assert!(!nearly_equal(1.0, 1.0 + 4.0 * f32::EPSILON));
        // one ulp at this magnitude is far larger than EPSILON
        assert!(!nearly_equal(1.0e6, 1.0e6 + 0.125));
    }

    #[test]
    fn test_det2() {
        assert_eq!(det2(1.0, 2.0, 3.0, 4.0), -2.0);
    }
}
