pub mod math {
    /// Absolute tolerance used by every approximate comparison in the crate.
    pub const EPSILON: f64 = 1e-6;

    pub fn degree_to_radian(degree: f64) -> f64 {
        degree * std::f64::consts::PI / 180.0
    }

    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }
}
