use crate::aircraft::{Aircraft, AircraftModel, Callsign};
use crate::gate::Gate;
use crate::task::{Task, TaskKind, TaskList};
use crate::terminal::Terminal;
use crate::tower::ControlTower;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Callsign {
    Arc::from(s)
}

pub fn tasks(list: &[TaskKind]) -> TaskList {
    TaskList::new(list.iter().map(|k| Task::new(*k)).collect()).unwrap()
}

/// Full ground cycle starting from `first`.
pub fn cycle_from(first: TaskKind) -> TaskList {
    let cycle = [
        TaskKind::Away,
        TaskKind::Land,
        TaskKind::Wait,
        TaskKind::Load,
        TaskKind::Takeoff,
    ];
    let start = cycle.iter().position(|k| *k == first).unwrap();
    let mut list = tasks(&cycle);
    for _ in 0..start {
        list.advance();
    }
    list
}

pub fn airplane(callsign: &str, current: TaskKind) -> Aircraft {
    Aircraft::passenger(callsign, AircraftModel::AirbusA320, cycle_from(current), 10000.0, 50).unwrap()
}

pub fn freighter(callsign: &str, current: TaskKind) -> Aircraft {
    Aircraft::freight(callsign, AircraftModel::Boeing747_8F, cycle_from(current), 11000.0, 50).unwrap()
}

pub fn helicopter(callsign: &str, current: TaskKind) -> Aircraft {
    Aircraft::passenger(callsign, AircraftModel::RobinsonR44, cycle_from(current), 30.0, 3).unwrap()
}

pub fn add_terminal(tower: &mut ControlTower, terminal: Terminal, gates: &[u32]) {
    let number = terminal.number();
    tower.add_terminal(terminal);
    for gate in gates {
        tower.terminal_mut(number).unwrap().add_gate(Gate::new(*gate)).unwrap();
    }
}

pub fn gate_numbers(tower: &ControlTower, terminal: u32) -> Vec<(u32, Option<Callsign>)> {
    tower
        .terminals()
        .iter()
        .find(|t| t.number() == terminal)
        .unwrap()
        .gates()
        .iter()
        .map(|g| (g.number(), g.occupant().cloned()))
        .collect()
}

pub fn arb_task_kind() -> impl Strategy<Value = TaskKind> {
    prop_oneof![
        Just(TaskKind::Away),
        Just(TaskKind::Land),
        Just(TaskKind::Wait),
        Just(TaskKind::Load),
        Just(TaskKind::Takeoff),
    ]
}
