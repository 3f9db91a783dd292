use {base::normalize_bearing, std::fmt};

/// Direction of a relative move, taken from the vehicle's current heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    pub fn keyword(&self) -> &'static str {
        match self {
            Direction::Forward => "FORWARD",
            Direction::Backward => "BACKWARD",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }

    /// Offset from the heading in degrees, clockwise.
    pub fn offset(&self) -> f64 {
        match self {
            Direction::Forward => 0.0,
            Direction::Backward => 180.0,
            Direction::Left => -90.0,
            Direction::Right => 90.0,
        }
    }

    /// Compass bearing in `[0, 360)` for a move given the vehicle yaw in degrees.
    pub fn bearing(&self, yaw: f64) -> f64 {
        normalize_bearing(yaw + self.offset())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}
