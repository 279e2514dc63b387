//! Discrete-time simulation of airport ground operations: aircraft cycling through
//! their tasks and a control tower allocating gates across terminals.

pub mod aircraft;
pub mod error;
pub mod gate;
pub mod report;
pub mod scenario;
pub mod task;
pub mod terminal;
pub mod tower;

pub use aircraft::{Aircraft, AircraftModel, AircraftType, Callsign, Payload};
pub use error::{SimError, SimResult};
pub use gate::Gate;
pub use task::{Task, TaskKind, TaskList};
pub use terminal::Terminal;
pub use tower::ControlTower;
