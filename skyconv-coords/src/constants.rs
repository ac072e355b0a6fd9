/// Rotation from J2000 equatorial to galactic Cartesian coordinates.
///
/// Row-major; multiply a column vector `(cos ra cos dec, sin ra cos dec, sin dec)`
/// on the right. The transpose takes galactic vectors back to equatorial.
pub const EQUATORIAL_TO_GALACTIC: [[f64; 3]; 3] = [
    [-0.054875539, -0.873437105, -0.483834992],
    [0.494109454, -0.444829594, 0.746982249],
    [-0.867666136, -0.198076390, 0.455983795],
];
