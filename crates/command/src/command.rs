use {crate::Direction, std::fmt};

/// Altitude in meters used when `TAKEOFF` has no parameter.
pub const DEFAULT_TAKEOFF_ALTITUDE: f32 = 5.0;

/// Distance in meters used when a move keyword has no parameter.
pub const DEFAULT_MOVE_DISTANCE: f32 = 1.0;

/// Duration in seconds used when `LOITER` has no parameter.
pub const DEFAULT_LOITER_SECONDS: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Takeoff { altitude: f32 },
    Land,
    ReturnToLaunch,
    Move { direction: Direction, distance: f32 },
    Loiter { duration_seconds: u32 },
    Unknown { raw_text: String },
}

impl Command {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Command::Unknown { .. })
    }
}

/// Renders the canonical `KEYWORD:PARAMETER` form; unknown commands render their raw text.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Takeoff { altitude } => write!(f, "TAKEOFF:{altitude}"),
            Command::Land => write!(f, "LAND"),
            Command::ReturnToLaunch => write!(f, "RTL"),
            Command::Move {
                direction,
                distance,
            } => write!(f, "{}:{distance}", direction.keyword()),
            Command::Loiter { duration_seconds } => write!(f, "LOITER:{duration_seconds}"),
            Command::Unknown { raw_text } => write!(f, "{raw_text}"),
        }
    }
}
