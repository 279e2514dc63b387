use crate::tower::ControlTower;
use tabled::Tabled;

pub const EMERGENCY: &str = "EMERGENCY";

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct AircraftRow {
    #[tabled(rename = "Callsign")]
    pub callsign: String,
    #[tabled(rename = "Type")]
    pub category: String,
    #[tabled(rename = "Model")]
    pub model: String,
    #[tabled(rename = "Task")]
    pub task: String,
    #[tabled(rename = "Fuel")]
    pub fuel: String,
    #[tabled(rename = "Payload")]
    pub payload: String,
    #[tabled(rename = "Weight (kg)")]
    pub weight: String,
    #[tabled(rename = "Load time")]
    pub loading_time: u32,
    #[tabled(rename = "Gate")]
    pub gate: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct GateRow {
    #[tabled(rename = "Terminal")]
    pub terminal: String,
    #[tabled(rename = "Gate")]
    pub gate: u32,
    #[tabled(rename = "Occupant")]
    pub occupant: String,
    #[tabled(rename = "Terminal occupancy")]
    pub occupancy: String,
}

pub fn aircraft_rows(tower: &ControlTower) -> Vec<AircraftRow> {
    tower
        .aircraft()
        .iter()
        .map(|a| AircraftRow {
            callsign: a.callsign().to_string(),
            category: format!("{} {}", a.aircraft_type(), a.payload().label()),
            model: a.model().to_string(),
            task: a.tasks().current_task().to_string(),
            fuel: format!("{}%", a.fuel_percent_remaining()),
            payload: format!(
                "{}/{} ({}%)",
                a.payload().amount(),
                a.payload_capacity(),
                a.occupancy_level()
            ),
            weight: format!("{:.0}", a.total_weight()),
            loading_time: a.loading_time(),
            gate: tower
                .find_gate_of_aircraft(a)
                .map(|g| g.number().to_string())
                .unwrap_or_else(|| "-".to_string()),
            status: if a.has_emergency() { EMERGENCY.to_string() } else { String::new() },
        })
        .collect()
}

pub fn gate_rows(tower: &ControlTower) -> Vec<GateRow> {
    tower
        .terminals()
        .iter()
        .flat_map(|t| {
            t.gates().iter().map(move |g| GateRow {
                terminal: t.to_string(),
                gate: g.number(),
                occupant: g.occupant().map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()),
                occupancy: format!("{}%", t.occupancy_level()),
            })
        })
        .collect()
}
