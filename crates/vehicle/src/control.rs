use crate::{FlightMode, Position, VehicleError, Waypoint};

/// Command and telemetry interface of a connected vehicle.
///
/// Every call may fail; none of them may panic on a link problem. Calls
/// take `&self` because the link is shared with other parts of the system.
#[allow(async_fn_in_trait)]
pub trait VehicleControl {
    fn is_connected(&self) -> bool;

    async fn set_mode(&self, mode: FlightMode) -> Result<(), VehicleError>;

    /// Ask the vehicle to take off to `altitude` meters. Returns once the
    /// command is accepted, not when the altitude is reached.
    async fn send_takeoff(&self, altitude: f32) -> Result<(), VehicleError>;

    async fn send_guided_waypoint(&self, waypoint: Waypoint) -> Result<(), VehicleError>;

    async fn current_position(&self) -> Result<Position, VehicleError>;
}
