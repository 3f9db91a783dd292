use {
    crate::{ActionError, DispatchOutcome, PipelineConfig, StatusStream},
    command::Command,
    std::{future::Future, time::Duration},
    vehicle::{FlightMode, VehicleControl, VehicleError, Waypoint},
};

fn label(command: &Command) -> &'static str {
    match command {
        Command::Takeoff { .. } => "takeoff",
        Command::Land => "land",
        Command::ReturnToLaunch => "return to launch",
        Command::Move { .. } => "move",
        Command::Loiter { .. } => "loiter",
        Command::Unknown { .. } => "parse",
    }
}

/// Drives a vehicle through the mode and command sequence of one `Command`.
///
/// Each vehicle call is bounded by the configured timeout and any error it
/// returns becomes a `DispatchOutcome::Failure`. Every outcome is published
/// on the status stream before `dispatch` returns.
pub struct ActionDispatcher {
    settle_delay: Duration,
    vehicle_timeout: Duration,
    status: StatusStream,
}

impl ActionDispatcher {
    pub fn new(config: &PipelineConfig, status: StatusStream) -> Self {
        Self {
            settle_delay: config.settle_delay(),
            vehicle_timeout: config.vehicle_timeout(),
            status,
        }
    }

    pub async fn dispatch<V: VehicleControl>(&self, command: Command, vehicle: &V) -> DispatchOutcome {
        let label = label(&command);
        let outcome = DispatchOutcome::from(self.execute(command, vehicle).await);
        match &outcome {
            DispatchOutcome::Success => self.status.publish(format!("{} succeeded", label)),
            DispatchOutcome::Failure(error) => {
                self.status.publish_failure(format!("{} failed: {}", label, error))
            }
        }
        outcome
    }

    async fn execute<V: VehicleControl>(&self, command: Command, vehicle: &V) -> Result<(), ActionError> {
        if !vehicle.is_connected() {
            return Err(ActionError::NotConnected);
        }
        match command {
            Command::Takeoff { altitude } => {
                self.status.publish(format!("taking off to {}m", altitude));
                self.guided(vehicle).await?;
                self.call("takeoff", vehicle.send_takeoff(altitude)).await
            }
            Command::Land => {
                self.status.publish("landing");
                self.set_mode(vehicle, FlightMode::Land).await
            }
            Command::ReturnToLaunch => {
                self.status.publish("returning to launch");
                self.set_mode(vehicle, FlightMode::Rtl).await
            }
            Command::Move {
                direction,
                distance,
            } => {
                self.status.publish(format!("moving {} {}m", direction, distance));
                self.guided(vehicle).await?;
                let position = self.call("position", vehicle.current_position()).await?;
                let bearing = direction.bearing(position.yaw);
                let (lat, lng) =
                    base::destination(position.lat, position.lng, bearing, distance as f64);
                log::debug!(
                    "move: yaw {:.1} bearing {:.1} -> {:.7},{:.7}",
                    position.yaw,
                    bearing,
                    lat,
                    lng
                );
                let waypoint = Waypoint {
                    lat,
                    lng,
                    alt: position.alt,
                };
                self.call("waypoint", vehicle.send_guided_waypoint(waypoint))
                    .await
            }
            Command::Loiter { duration_seconds } => {
                self.status.publish(format!("loitering for {}s", duration_seconds));
                self.set_mode(vehicle, FlightMode::Loiter).await?;
                tokio::time::sleep(Duration::from_secs(duration_seconds as u64)).await;
                Ok(())
            }
            Command::Unknown { raw_text } => Err(ActionError::Unrecognized(raw_text)),
        }
    }

    // GUIDED, then give the autopilot time to switch
    async fn guided<V: VehicleControl>(&self, vehicle: &V) -> Result<(), ActionError> {
        self.set_mode(vehicle, FlightMode::Guided).await?;
        tokio::time::sleep(self.settle_delay).await;
        Ok(())
    }

    async fn set_mode<V: VehicleControl>(&self, vehicle: &V, mode: FlightMode) -> Result<(), ActionError> {
        log::debug!("setting mode {}", mode);
        self.call("set mode", vehicle.set_mode(mode)).await
    }

    async fn call<T>(
        &self,
        operation: &str,
        request: impl Future<Output = Result<T, VehicleError>>,
    ) -> Result<T, ActionError> {
        match tokio::time::timeout(self.vehicle_timeout, request).await {
            Ok(result) => result.map_err(ActionError::from),
            Err(_) => Err(ActionError::Timeout(operation.to_string())),
        }
    }
}
