use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightMode {
    Guided,
    Land,
    Rtl,
    Loiter,
}

impl FlightMode {
    /// Mode name as understood by the autopilot.
    pub fn name(&self) -> &'static str {
        match self {
            FlightMode::Guided => "GUIDED",
            FlightMode::Land => "LAND",
            FlightMode::Rtl => "RTL",
            FlightMode::Loiter => "LOITER",
        }
    }
}

impl fmt::Display for FlightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
