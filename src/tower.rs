use crate::aircraft::Aircraft;
use crate::error::{SimError, SimResult};
use crate::gate::Gate;
use crate::task::Task;
use crate::terminal::Terminal;

/// Owns every aircraft under its jurisdiction and every terminal, and drives the tick loop.
#[derive(Debug, Default)]
pub struct ControlTower {
    aircraft: Vec<Aircraft>,
    terminals: Vec<Terminal>,
}

impl ControlTower {
    pub fn new() -> ControlTower {
        ControlTower::default()
    }

    pub fn add_terminal(&mut self, terminal: Terminal) {
        log::debug!("registered {}", terminal);
        self.terminals.push(terminal);
    }

    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }

    pub fn terminal_mut(&mut self, number: u32) -> SimResult<&mut Terminal> {
        self.terminals
            .iter_mut()
            .find(|t| t.number() == number)
            .ok_or(SimError::UnknownTerminal(number))
    }

    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn aircraft_by_callsign(&self, callsign: &str) -> Option<&Aircraft> {
        self.aircraft.iter().find(|a| &**a.callsign() == callsign)
    }

    pub fn aircraft_mut(&mut self, callsign: &str) -> SimResult<&mut Aircraft> {
        self.aircraft
            .iter_mut()
            .find(|a| &**a.callsign() == callsign)
            .ok_or_else(|| SimError::UnknownAircraft(callsign.to_string()))
    }

    /// Admits an aircraft. Aircraft waiting or loading are parked first; if no gate is free
    /// the aircraft is not admitted and nothing is reserved.
    pub fn add_aircraft(&mut self, aircraft: Aircraft) -> SimResult<()> {
        if aircraft.tasks().current_task().kind.requires_gate() {
            let gate = park_at_unoccupied_gate(&mut self.terminals, &aircraft)?;
            log::debug!("parked {} at gate {}", aircraft.callsign(), gate);
        }
        log::info!("admitted {}", aircraft);
        self.aircraft.push(aircraft);
        Ok(())
    }

    /// First free gate in a terminal serving the aircraft's category, searching terminals in
    /// registration order and gates in insertion order.
    pub fn find_unoccupied_gate(&self, aircraft: &Aircraft) -> SimResult<&Gate> {
        let aircraft_type = aircraft.aircraft_type();
        self.terminals
            .iter()
            .filter(|t| t.serves(aircraft_type))
            .find_map(|t| t.find_unoccupied_gate().ok())
            .ok_or(SimError::NoSuitableGate)
    }

    pub fn find_gate_of_aircraft(&self, aircraft: &Aircraft) -> Option<&Gate> {
        self.terminals
            .iter()
            .flat_map(|t| t.gates())
            .find(|g| g.occupant() == Some(aircraft.callsign()))
    }

    pub fn tick(&mut self) {
        for aircraft in self.aircraft.iter_mut() {
            aircraft.tick();
            log::trace!(
                "{} fuel {}% payload {}",
                aircraft.callsign(),
                aircraft.fuel_percent_remaining(),
                aircraft.payload().amount()
            );
        }
    }

    /// Moves an aircraft on to its next task, parking it when the next task happens at a gate
    /// and releasing its gate when it does not. Fails without advancing if no gate is free.
    pub fn advance_task(&mut self, callsign: &str) -> SimResult<&Task> {
        let index = self
            .aircraft
            .iter()
            .position(|a| &**a.callsign() == callsign)
            .ok_or_else(|| SimError::UnknownAircraft(callsign.to_string()))?;

        let aircraft = &self.aircraft[index];
        let needs_gate = aircraft.tasks().next_task().kind.requires_gate();
        let parked = self.find_gate_of_aircraft(aircraft).is_some();

        if needs_gate && !parked {
            let gate = park_at_unoccupied_gate(&mut self.terminals, aircraft)?;
            log::debug!("parked {} at gate {}", aircraft.callsign(), gate);
        } else if !needs_gate && parked {
            release_gate_of(&mut self.terminals, aircraft);
        }

        let tasks = self.aircraft[index].tasks_mut();
        tasks.advance();
        Ok(tasks.current_task())
    }
}

fn park_at_unoccupied_gate(terminals: &mut [Terminal], aircraft: &Aircraft) -> SimResult<u32> {
    let aircraft_type = aircraft.aircraft_type();
    for terminal in terminals.iter_mut().filter(|t| t.serves(aircraft_type)) {
        if let Ok(gate) = terminal.find_unoccupied_gate_mut() {
            gate.park(aircraft)?;
            return Ok(gate.number());
        }
    }
    log::warn!("no suitable gate for {}", aircraft.callsign());
    Err(SimError::NoSuitableGate)
}

fn release_gate_of(terminals: &mut [Terminal], aircraft: &Aircraft) {
    if let Some(gate) = terminals
        .iter_mut()
        .flat_map(|t| t.gates_mut())
        .find(|g| g.occupant() == Some(aircraft.callsign()))
    {
        gate.release();
        log::debug!("{} left gate {}", aircraft.callsign(), gate.number());
    }
}
