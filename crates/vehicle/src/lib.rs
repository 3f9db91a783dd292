//! Vehicle control boundary.
//!
//! `VehicleControl` is the capability the command dispatcher drives. The
//! telemetry link implementing it lives outside this workspace; `SimVehicle`
//! is an in-process stand-in.

pub mod control;
pub mod error;
pub mod mode;
pub mod position;
pub mod sim;

pub use control::VehicleControl;
pub use error::VehicleError;
pub use mode::FlightMode;
pub use position::{Position, Waypoint};
pub use sim::{CallKind, SimVehicle, VehicleCall};
