use {
    crate::{FlightMode, Position, VehicleControl, VehicleError, Waypoint},
    std::{
        collections::{HashMap, HashSet},
        sync::{Arc, Mutex, MutexGuard},
        time::Duration,
    },
};

/// A call received by `SimVehicle`.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleCall {
    SetMode(FlightMode),
    Takeoff(f32),
    Waypoint(Waypoint),
    Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    SetMode,
    Takeoff,
    Waypoint,
    Position,
}

impl VehicleCall {
    pub fn kind(&self) -> CallKind {
        match self {
            VehicleCall::SetMode(_) => CallKind::SetMode,
            VehicleCall::Takeoff(_) => CallKind::Takeoff,
            VehicleCall::Waypoint(_) => CallKind::Waypoint,
            VehicleCall::Position => CallKind::Position,
        }
    }
}

struct SimState {
    connected: bool,
    mode: Option<FlightMode>,
    home: Position,
    position: Position,
    latency: Duration,
    calls: Vec<VehicleCall>,
    failures: HashMap<CallKind, VehicleError>,
    stalled: HashSet<CallKind>,
}

/// In-process simulated vehicle.
///
/// Keeps a mode and a position, applies accepted commands to them instantly
/// and records every call. Individual call kinds can be made to fail or to
/// never answer. Clones share the same state.
#[derive(Clone)]
pub struct SimVehicle {
    state: Arc<Mutex<SimState>>,
}

impl SimVehicle {
    /// A connected vehicle sitting at `home`.
    pub fn new(home: Position) -> Self {
        Self {
            state: Arc::new(Mutex::new(SimState {
                connected: true,
                mode: None,
                home,
                position: home,
                latency: Duration::ZERO,
                calls: Vec::new(),
                failures: HashMap::new(),
                stalled: HashSet::new(),
            })),
        }
    }

    /// Delay applied to every answered call.
    pub fn with_latency(self, latency: Duration) -> Self {
        self.lock().latency = latency;
        self
    }

    fn lock(&self) -> MutexGuard<'_, SimState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_connected(&self, connected: bool) {
        self.lock().connected = connected;
    }

    /// Make every call of `kind` fail with `error`.
    pub fn fail_on(&self, kind: CallKind, error: VehicleError) {
        self.lock().failures.insert(kind, error);
    }

    /// Make every call of `kind` hang forever.
    pub fn stall_on(&self, kind: CallKind) {
        self.lock().stalled.insert(kind);
    }

    pub fn clear_faults(&self) {
        let mut state = self.lock();
        state.failures.clear();
        state.stalled.clear();
    }

    pub fn set_position(&self, position: Position) {
        self.lock().position = position;
    }

    pub fn position(&self) -> Position {
        self.lock().position
    }

    pub fn mode(&self) -> Option<FlightMode> {
        self.lock().mode
    }

    pub fn calls(&self) -> Vec<VehicleCall> {
        self.lock().calls.clone()
    }

    // records the call and decides how it is answered
    async fn answer(&self, call: VehicleCall) -> Result<(), VehicleError> {
        let (latency, stalled) = {
            let mut state = self.lock();
            let kind = call.kind();
            state.calls.push(call);
            if !state.connected {
                return Err(VehicleError::Link("not connected".to_string()));
            }
            if let Some(error) = state.failures.get(&kind) {
                return Err(error.clone());
            }
            (state.latency, state.stalled.contains(&kind))
        };
        if stalled {
            std::future::pending::<()>().await;
        }
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        Ok(())
    }

    fn require_guided(state: &SimState, what: &str) -> Result<(), VehicleError> {
        if state.mode != Some(FlightMode::Guided) {
            return Err(VehicleError::Rejected(format!("{what} requires GUIDED mode")));
        }
        Ok(())
    }
}

impl VehicleControl for SimVehicle {
    fn is_connected(&self) -> bool {
        self.lock().connected
    }

    async fn set_mode(&self, mode: FlightMode) -> Result<(), VehicleError> {
        self.answer(VehicleCall::SetMode(mode)).await?;
        let mut state = self.lock();
        state.mode = Some(mode);
        match mode {
            FlightMode::Land => state.position.alt = 0.0,
            FlightMode::Rtl => {
                state.position.lat = state.home.lat;
                state.position.lng = state.home.lng;
            }
            FlightMode::Guided | FlightMode::Loiter => {}
        }
        log::debug!("sim: mode {}", mode);
        Ok(())
    }

    async fn send_takeoff(&self, altitude: f32) -> Result<(), VehicleError> {
        self.answer(VehicleCall::Takeoff(altitude)).await?;
        let mut state = self.lock();
        Self::require_guided(&state, "takeoff")?;
        state.position.alt = altitude;
        log::debug!("sim: takeoff to {}m", altitude);
        Ok(())
    }

    async fn send_guided_waypoint(&self, waypoint: Waypoint) -> Result<(), VehicleError> {
        self.answer(VehicleCall::Waypoint(waypoint)).await?;
        let mut state = self.lock();
        Self::require_guided(&state, "waypoint")?;
        state.position.lat = waypoint.lat;
        state.position.lng = waypoint.lng;
        state.position.alt = waypoint.alt;
        log::debug!("sim: waypoint {:.7},{:.7}", waypoint.lat, waypoint.lng);
        Ok(())
    }

    async fn current_position(&self) -> Result<Position, VehicleError> {
        self.answer(VehicleCall::Position).await?;
        Ok(self.lock().position)
    }
}
