use crate::aircraft::AircraftType;
use crate::terminal::Terminal;
use crate::tower::ControlTower;
use crate::tower::tests::utils::{add_terminal, airplane, arb_task_kind, helicopter};
use proptest::prelude::*;
use proptest::proptest;

proptest! {
    #[test]
    fn test_gate_search_order_and_category(
        layout in prop::collection::vec((any::<bool>(), 0..=6usize), 1..5),
        arrivals in prop::collection::vec((any::<bool>(), arb_task_kind()), 1..20),
    ) {
        let mut tower = ControlTower::new();
        let mut next_gate = 1;
        for (i, (is_helicopter, gates)) in layout.iter().enumerate() {
            let terminal = if *is_helicopter {
                Terminal::helicopter(i as u32)
            } else {
                Terminal::airplane(i as u32)
            };
            let numbers: Vec<u32> = (next_gate..next_gate + *gates as u32).collect();
            next_gate += *gates as u32;
            add_terminal(&mut tower, terminal, &numbers);
        }

        for (i, (is_helicopter, kind)) in arrivals.into_iter().enumerate() {
            let callsign = format!("AC{}", i);
            let aircraft = if is_helicopter {
                helicopter(&callsign, kind)
            } else {
                airplane(&callsign, kind)
            };
            let aircraft_type = aircraft.aircraft_type();

            // gate numbers grow with (terminal order, insertion order), so the expected gate is
            // the lowest free number among terminals of the right category
            let expected = tower.terminals().iter()
                .filter(|t| t.kind() == aircraft_type)
                .flat_map(|t| t.gates())
                .filter(|g| !g.is_occupied())
                .map(|g| g.number())
                .min();
            let found = tower.find_unoccupied_gate(&aircraft).ok().map(|g| g.number());
            prop_assert_eq!(expected, found);

            let admitted_before = tower.aircraft().len();
            let result = tower.add_aircraft(aircraft);
            if kind.requires_gate() && expected.is_none() {
                prop_assert!(result.is_err());
                prop_assert_eq!(admitted_before, tower.aircraft().len());
            } else {
                prop_assert!(result.is_ok());
            }
        }

        for terminal in tower.terminals() {
            for gate in terminal.gates() {
                if let Some(callsign) = gate.occupant() {
                    let aircraft = tower.aircraft_by_callsign(callsign).unwrap();
                    prop_assert_eq!(terminal.kind(), aircraft.aircraft_type());
                    prop_assert!(aircraft.tasks().current_task().kind.requires_gate());
                }
            }
            let occupied = terminal.gates().iter().filter(|g| g.is_occupied()).count();
            prop_assert!(occupied <= Terminal::MAX_GATES);
        }
    }

    #[test]
    fn test_advance_keeps_gates_consistent(
        arrivals in prop::collection::vec(arb_task_kind(), 1..8),
        steps in prop::collection::vec(0..8usize, 0..40),
    ) {
        let mut tower = ControlTower::new();
        add_terminal(&mut tower, Terminal::airplane(1), &[1, 2, 3]);
        for (i, kind) in arrivals.iter().enumerate() {
            let _ = tower.add_aircraft(airplane(&format!("AC{}", i), *kind));
        }

        for step in steps {
            let callsigns: Vec<_> = tower.aircraft().iter().map(|a| a.callsign().clone()).collect();
            if callsigns.is_empty() {
                break;
            }
            let callsign = &callsigns[step % callsigns.len()];
            let _ = tower.advance_task(callsign);
            tower.tick();

            for aircraft in tower.aircraft() {
                let parked = tower.find_gate_of_aircraft(aircraft).is_some();
                prop_assert_eq!(aircraft.tasks().current_task().kind.requires_gate(), parked);
                prop_assert_eq!(AircraftType::Airplane, aircraft.aircraft_type());
            }
        }
    }
}
