//! Small-scale geodesy for relative vehicle moves.

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_bearing(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Project a point `distance_m` meters along `bearing_deg` from `(lat, lng)`.
///
/// Uses the great-circle destination formula on a spherical earth. Latitudes
/// and longitudes are in degrees; the returned longitude is wrapped into
/// `[-180, 180)`.
pub fn destination(lat: f64, lng: f64, bearing_deg: f64, distance_m: f64) -> (f64, f64) {
    let phi1 = lat.to_radians();
    let lambda1 = lng.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_m / EARTH_RADIUS_M;

    let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
    let phi2 = sin_phi2.clamp(-1.0, 1.0).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

    let lng2 = (lambda2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    (phi2.to_degrees(), lng2)
}

/// Great-circle distance in meters between two points given in degrees.
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();
    let a = (d_phi / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}
