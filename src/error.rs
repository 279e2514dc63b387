use crate::aircraft::Callsign;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("fuel amount {amount} for {callsign} is outside [0, {capacity}]")]
    InvalidFuel {
        callsign: Callsign,
        amount: f64,
        capacity: f64,
    },

    #[error("payload {amount} for {callsign} is outside [0, {capacity}]")]
    InvalidPayload {
        callsign: Callsign,
        amount: u32,
        capacity: u32,
    },

    #[error("load percent {0} is outside [0, 100]")]
    InvalidLoadPercent(u32),

    #[error("task list must contain at least one task")]
    EmptyTaskList,

    #[error("unknown task: {0}")]
    UnknownTask(String),

    #[error("terminal {terminal} already has the maximum number of gates")]
    NoSpace { terminal: u32 },

    #[error("gate {gate} is already occupied by {occupant}")]
    GateOccupied { gate: u32, occupant: Callsign },

    #[error("no suitable gate available")]
    NoSuitableGate,

    #[error("aircraft {0} not found")]
    UnknownAircraft(String),

    #[error("terminal {0} not found")]
    UnknownTerminal(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
