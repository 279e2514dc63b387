use crate::aircraft::{Aircraft, Callsign};
use crate::error::{SimError, SimResult};
use std::fmt;
use std::fmt::Formatter;

/// A single parking slot. Records who is parked, never owns the aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    number: u32,
    occupant: Option<Callsign>,
}

impl Gate {
    pub fn new(number: u32) -> Gate {
        Gate { number, occupant: None }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn park(&mut self, aircraft: &Aircraft) -> SimResult<()> {
        if let Some(occupant) = &self.occupant {
            return Err(SimError::GateOccupied {
                gate: self.number,
                occupant: occupant.clone(),
            });
        }
        self.occupant = Some(aircraft.callsign().clone());
        Ok(())
    }

    pub fn release(&mut self) {
        self.occupant = None;
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn occupant(&self) -> Option<&Callsign> {
        self.occupant.as_ref()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.occupant {
            Some(callsign) => write!(f, "Gate {} [{}]", self.number, callsign),
            None => write!(f, "Gate {} [empty]", self.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::AircraftModel;
    use crate::task::{Task, TaskKind, TaskList};

    fn aircraft(callsign: &str) -> Aircraft {
        let tasks = TaskList::new(vec![Task::new(TaskKind::Wait)]).unwrap();
        Aircraft::passenger(callsign, AircraftModel::AirbusA320, tasks, 10000.0, 50).unwrap()
    }

    #[test]
    fn test_park_and_release() {
        let mut gate = Gate::new(1);
        assert!(!gate.is_occupied());
        assert_eq!(None, gate.occupant());

        gate.park(&aircraft("ABC123")).unwrap();
        assert!(gate.is_occupied());
        assert_eq!(Some(&Callsign::from("ABC123")), gate.occupant());

        gate.release();
        assert!(!gate.is_occupied());
        gate.release();
        assert!(!gate.is_occupied());
    }

    #[test]
    fn test_park_occupied() {
        let mut gate = Gate::new(4);
        gate.park(&aircraft("ABC123")).unwrap();
        let result = gate.park(&aircraft("DEF456"));
        assert!(matches!(result, Err(SimError::GateOccupied { gate: 4, .. })));
        assert_eq!(Some(&Callsign::from("ABC123")), gate.occupant());
    }

    #[test]
    fn test_display() {
        let mut gate = Gate::new(2);
        assert_eq!("Gate 2 [empty]", gate.to_string());
        gate.park(&aircraft("ABC123")).unwrap();
        assert_eq!("Gate 2 [ABC123]", gate.to_string());
    }
}
