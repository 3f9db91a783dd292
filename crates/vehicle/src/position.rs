/// Vehicle position and heading as reported by telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Degrees.
    pub lat: f64,
    /// Degrees.
    pub lng: f64,
    /// Meters above home.
    pub alt: f32,
    /// Heading in degrees clockwise from north.
    pub yaw: f64,
}

/// Target for a guided-mode move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    pub alt: f32,
}
