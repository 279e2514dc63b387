use crate::aircraft::AircraftType;
use crate::error::{SimError, SimResult};
use crate::gate::Gate;
use std::fmt;
use std::fmt::Formatter;

/// A group of gates serving one aircraft category.
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    number: u32,
    kind: AircraftType,
    gates: Vec<Gate>,
    emergency: bool,
}

impl Terminal {
    pub const MAX_GATES: usize = 6;

    pub fn new(number: u32, kind: AircraftType) -> Terminal {
        Terminal {
            number,
            kind,
            gates: Vec::with_capacity(Self::MAX_GATES),
            emergency: false,
        }
    }

    pub fn airplane(number: u32) -> Terminal {
        Self::new(number, AircraftType::Airplane)
    }

    pub fn helicopter(number: u32) -> Terminal {
        Self::new(number, AircraftType::Helicopter)
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn kind(&self) -> AircraftType {
        self.kind
    }

    pub fn serves(&self, aircraft_type: AircraftType) -> bool {
        self.kind == aircraft_type
    }

    pub fn add_gate(&mut self, gate: Gate) -> SimResult<()> {
        if self.gates.len() >= Self::MAX_GATES {
            return Err(SimError::NoSpace { terminal: self.number });
        }
        self.gates.push(gate);
        Ok(())
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub(crate) fn gates_mut(&mut self) -> &mut [Gate] {
        &mut self.gates
    }

    pub fn find_unoccupied_gate(&self) -> SimResult<&Gate> {
        self.gates
            .iter()
            .find(|g| !g.is_occupied())
            .ok_or(SimError::NoSuitableGate)
    }

    pub fn find_unoccupied_gate_mut(&mut self) -> SimResult<&mut Gate> {
        self.gates
            .iter_mut()
            .find(|g| !g.is_occupied())
            .ok_or(SimError::NoSuitableGate)
    }

    /// Percentage of gates occupied, 0 for a terminal without gates.
    pub fn occupancy_level(&self) -> u8 {
        if self.gates.is_empty() {
            return 0;
        }
        let occupied = self.gates.iter().filter(|g| g.is_occupied()).count();
        (100.0 * occupied as f64 / self.gates.len() as f64).round() as u8
    }

    pub fn declare_emergency(&mut self) {
        self.emergency = true;
    }

    pub fn clear_emergency(&mut self) {
        self.emergency = false;
    }

    pub fn has_emergency(&self) -> bool {
        self.emergency
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            AircraftType::Airplane => "AirplaneTerminal",
            AircraftType::Helicopter => "HelicopterTerminal",
        };
        write!(f, "{} {}, {} gates", label, self.number, self.gates.len())?;
        if self.emergency {
            write!(f, " (EMERGENCY)")?;
        }
        Ok(())
    }
}
