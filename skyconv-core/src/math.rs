//! Floating-point helpers shared by the conversion modules.

/// C-style remainder; the result takes the sign of `x`.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Floored modulo; the result takes the sign of `y`.
///
/// `floor_mod(-1.0, 360.0) == 359.0` and `floor_mod(1.0, -360.0) == -359.0`.
#[inline]
pub fn floor_mod(x: f64, y: f64) -> f64 {
    let r = fmod(x, y);
    if r != 0.0 && ((r < 0.0) != (y < 0.0)) {
        r + y
    } else {
        r
    }
}

/// Wraps decimal hours into `[0, 24)`.
///
/// Tiny negative inputs can round up to exactly 24.0 after the shift; those
/// collapse to zero.
#[inline]
pub fn wrap_hours(hours: f64) -> f64 {
    let wrapped = floor_mod(hours, 24.0);
    if wrapped >= 24.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wraps degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = floor_mod(degrees, 360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Great-circle separation by Vincenty's formula.
///
/// Stable at every separation, including antipodal and coincident points.
#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = delta_lon.sin_cos();

    let num = ((cos_lat2 * sin_delta_lon).powi(2)
        + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2))
    .sqrt();
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    num.atan2(den)
}

/// Multiplies a 3x3 row-major matrix by a column vector.
#[inline]
pub fn rotate(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Multiplies the transpose of a 3x3 row-major matrix by a column vector.
#[inline]
pub fn rotate_transposed(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[1][0] * v[1] + m[2][0] * v[2],
        m[0][1] * v[0] + m[1][1] * v[1] + m[2][1] * v[2],
        m[0][2] * v[0] + m[1][2] * v[1] + m[2][2] * v[2],
    ]
}
