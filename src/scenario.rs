use crate::aircraft::{Aircraft, AircraftModel, AircraftType, Callsign, Payload};
use crate::error::SimResult;
use crate::gate::Gate;
use crate::task::TaskList;
use crate::terminal::Terminal;
use crate::tower::ControlTower;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct TerminalSpec {
    pub number: u32,
    pub kind: AircraftType,
    #[serde(default)]
    pub gates: Vec<u32>,
    #[serde(default)]
    pub emergency: bool,
}

#[derive(Debug, Deserialize)]
pub struct AircraftSpec {
    pub callsign: Callsign,
    pub model: AircraftModel,
    pub tasks: TaskList,
    pub fuel: f64,
    pub payload: Payload,
    #[serde(default)]
    pub emergency: bool,
}

/// Terminals and aircraft as read from a scenario file, before any core validation.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub terminals: Vec<TerminalSpec>,
    #[serde(default)]
    pub aircraft: Vec<AircraftSpec>,
}

impl Scenario {
    pub fn load_from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Registers terminals and gates, then admits aircraft in file order.
    pub fn into_tower(self) -> SimResult<ControlTower> {
        let mut tower = ControlTower::new();

        for spec in self.terminals {
            let mut terminal = Terminal::new(spec.number, spec.kind);
            for number in spec.gates {
                terminal.add_gate(Gate::new(number))?;
            }
            if spec.emergency {
                terminal.declare_emergency();
            }
            tower.add_terminal(terminal);
        }

        for spec in self.aircraft {
            let mut aircraft = Aircraft::new(spec.callsign, spec.model, spec.tasks, spec.fuel, spec.payload)?;
            if spec.emergency {
                aircraft.declare_emergency();
            }
            tower.add_aircraft(aircraft)?;
        }

        Ok(tower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use crate::task::TaskKind;

    const SCENARIO: &str = r#"{
        "terminals": [
            { "number": 1, "kind": "AIRPLANE", "gates": [1, 2] },
            { "number": 2, "kind": "HELICOPTER", "gates": [10], "emergency": true }
        ],
        "aircraft": [
            {
                "callsign": "QFA481",
                "model": "AIRBUS_A320",
                "tasks": ["WAIT", "LOAD@60", "TAKEOFF", "AWAY", "LAND"],
                "fuel": 13200.0,
                "payload": { "passengers": 0 }
            },
            {
                "callsign": "UTD302",
                "model": "BOEING_787",
                "tasks": ["AWAY", "LAND", "WAIT", "LOAD@100", "TAKEOFF"],
                "fuel": 6000.0,
                "payload": { "passengers": 120 },
                "emergency": true
            },
            {
                "callsign": "VH-BFK",
                "model": "SIKORSKY_SKYCRANE",
                "tasks": ["LOAD@90", "TAKEOFF", "AWAY", "LAND"],
                "fuel": 1400.0,
                "payload": { "freight": 0 }
            }
        ]
    }"#;

    #[test]
    fn test_load_scenario() {
        let tower = Scenario::from_json(SCENARIO).unwrap().into_tower().unwrap();

        assert_eq!(2, tower.terminals().len());
        assert!(tower.terminals()[1].has_emergency());
        assert_eq!(3, tower.aircraft().len());

        let qfa = tower.aircraft_by_callsign("QFA481").unwrap();
        assert_eq!(TaskKind::Wait, qfa.tasks().current_task().kind);
        assert_eq!(1, tower.find_gate_of_aircraft(qfa).unwrap().number());

        let utd = tower.aircraft_by_callsign("UTD302").unwrap();
        assert!(utd.has_emergency());
        assert!(tower.find_gate_of_aircraft(utd).is_none());

        let heli = tower.aircraft_by_callsign("VH-BFK").unwrap();
        assert_eq!(Payload::Freight(0), heli.payload());
        assert_eq!(10, tower.find_gate_of_aircraft(heli).unwrap().number());
    }

    #[test]
    fn test_too_many_gates() {
        let json = r#"{ "terminals": [{ "number": 4, "kind": "AIRPLANE", "gates": [1, 2, 3, 4, 5, 6, 7] }] }"#;
        let result = Scenario::from_json(json).unwrap().into_tower();
        assert!(matches!(result, Err(SimError::NoSpace { terminal: 4 })));
    }

    #[test]
    fn test_invalid_payload() {
        let json = r#"{ "aircraft": [{
            "callsign": "ABC", "model": "ROBINSON_R44", "tasks": ["AWAY"],
            "fuel": 10.0, "payload": { "passengers": 5 }
        }] }"#;
        let result = Scenario::from_json(json).unwrap().into_tower();
        assert!(matches!(result, Err(SimError::InvalidPayload { .. })));
    }

    #[test]
    fn test_no_gate_for_waiting_aircraft() {
        let json = r#"{ "aircraft": [{
            "callsign": "ABC", "model": "AIRBUS_A320", "tasks": ["WAIT"],
            "fuel": 10.0, "payload": { "passengers": 5 }
        }] }"#;
        let result = Scenario::from_json(json).unwrap().into_tower();
        assert!(matches!(result, Err(SimError::NoSuitableGate)));
    }

    #[test]
    fn test_malformed_scenario() {
        assert!(matches!(Scenario::from_json("{ \"aircraft\": 3 }"), Err(SimError::Json(_))));
        let bad_task = r#"{ "aircraft": [{
            "callsign": "ABC", "model": "AIRBUS_A320", "tasks": ["HOVER"],
            "fuel": 10.0, "payload": { "passengers": 5 }
        }] }"#;
        assert!(matches!(Scenario::from_json(bad_task), Err(SimError::Json(_))));
        let empty_tasks = r#"{ "aircraft": [{
            "callsign": "ABC", "model": "AIRBUS_A320", "tasks": [],
            "fuel": 10.0, "payload": { "passengers": 5 }
        }] }"#;
        assert!(matches!(Scenario::from_json(empty_tasks), Err(SimError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Scenario::load_from_file("does/not/exist.json");
        assert!(matches!(result, Err(SimError::Io(_))));
    }

    #[test]
    fn test_default_scenario_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/default.json");
        let tower = Scenario::load_from_file(path).unwrap().into_tower().unwrap();
        assert!(!tower.aircraft().is_empty());
    }
}
