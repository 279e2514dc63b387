use crate::error::{SimError, SimResult};
use crate::task::{TaskKind, TaskList};
use serde::Deserialize;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type Callsign = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AircraftType {
    Airplane,
    Helicopter,
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AircraftType::Airplane => write!(f, "AIRPLANE"),
            AircraftType::Helicopter => write!(f, "HELICOPTER"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct AircraftCharacteristics {
    pub aircraft_type: AircraftType,
    /// kg
    pub empty_weight: u32,
    /// litres
    pub fuel_capacity: f64,
    pub passenger_capacity: u32,
    /// kg
    pub freight_capacity: u32,
}

static AIRBUS_A320: AircraftCharacteristics = AircraftCharacteristics {
    aircraft_type: AircraftType::Airplane,
    empty_weight: 42600,
    fuel_capacity: 27200.0,
    passenger_capacity: 150,
    freight_capacity: 0,
};

static BOEING_747_8F: AircraftCharacteristics = AircraftCharacteristics {
    aircraft_type: AircraftType::Airplane,
    empty_weight: 197131,
    fuel_capacity: 226117.0,
    passenger_capacity: 0,
    freight_capacity: 137756,
};

static ROBINSON_R44: AircraftCharacteristics = AircraftCharacteristics {
    aircraft_type: AircraftType::Helicopter,
    empty_weight: 658,
    fuel_capacity: 190.0,
    passenger_capacity: 4,
    freight_capacity: 0,
};

static BOEING_787: AircraftCharacteristics = AircraftCharacteristics {
    aircraft_type: AircraftType::Airplane,
    empty_weight: 119950,
    fuel_capacity: 126206.0,
    passenger_capacity: 242,
    freight_capacity: 0,
};

static FOKKER_100: AircraftCharacteristics = AircraftCharacteristics {
    aircraft_type: AircraftType::Airplane,
    empty_weight: 24375,
    fuel_capacity: 13365.0,
    passenger_capacity: 97,
    freight_capacity: 0,
};

static SIKORSKY_SKYCRANE: AircraftCharacteristics = AircraftCharacteristics {
    aircraft_type: AircraftType::Helicopter,
    empty_weight: 8724,
    fuel_capacity: 3328.0,
    passenger_capacity: 0,
    freight_capacity: 9100,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AircraftModel {
    #[serde(rename = "AIRBUS_A320")]
    AirbusA320,
    #[serde(rename = "BOEING_747_8F")]
    Boeing747_8F,
    #[serde(rename = "ROBINSON_R44")]
    RobinsonR44,
    #[serde(rename = "BOEING_787")]
    Boeing787,
    #[serde(rename = "FOKKER_100")]
    Fokker100,
    #[serde(rename = "SIKORSKY_SKYCRANE")]
    SikorskySkycrane,
}

impl AircraftModel {
    pub fn characteristics(&self) -> &'static AircraftCharacteristics {
        match self {
            AircraftModel::AirbusA320 => &AIRBUS_A320,
            AircraftModel::Boeing747_8F => &BOEING_747_8F,
            AircraftModel::RobinsonR44 => &ROBINSON_R44,
            AircraftModel::Boeing787 => &BOEING_787,
            AircraftModel::Fokker100 => &FOKKER_100,
            AircraftModel::SikorskySkycrane => &SIKORSKY_SKYCRANE,
        }
    }
}

impl fmt::Display for AircraftModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            AircraftModel::AirbusA320 => "AIRBUS_A320",
            AircraftModel::Boeing747_8F => "BOEING_747_8F",
            AircraftModel::RobinsonR44 => "ROBINSON_R44",
            AircraftModel::Boeing787 => "BOEING_787",
            AircraftModel::Fokker100 => "FOKKER_100",
            AircraftModel::SikorskySkycrane => "SIKORSKY_SKYCRANE",
        };
        write!(f, "{}", label)
    }
}

/// What the aircraft carries: a head count or a freight mass in kg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payload {
    Passengers(u32),
    Freight(u32),
}

impl Payload {
    pub fn amount(&self) -> u32 {
        match self {
            Payload::Passengers(n) | Payload::Freight(n) => *n,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Payload::Passengers(_) => "PASSENGER",
            Payload::Freight(_) => "FREIGHT",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Aircraft {
    callsign: Callsign,
    model: AircraftModel,
    characteristics: &'static AircraftCharacteristics,
    tasks: TaskList,
    fuel: f64,
    emergency: bool,
    payload: Payload,
}

impl Aircraft {
    /// kg per litre
    pub const FUEL_WEIGHT: f64 = 0.8;
    /// kg per passenger
    pub const AVG_PASSENGER_WEIGHT: f64 = 90.0;
    /// Fraction of fuel capacity burnt per tick while away.
    const AWAY_FUEL_BURN: f64 = 0.1;

    pub fn new(
        callsign: impl Into<Callsign>,
        model: AircraftModel,
        tasks: TaskList,
        fuel: f64,
        payload: Payload,
    ) -> SimResult<Aircraft> {
        let callsign = callsign.into();
        let characteristics = model.characteristics();

        if !(0.0..=characteristics.fuel_capacity).contains(&fuel) {
            return Err(SimError::InvalidFuel {
                callsign,
                amount: fuel,
                capacity: characteristics.fuel_capacity,
            });
        }

        let aircraft = Aircraft {
            callsign,
            model,
            characteristics,
            tasks,
            fuel,
            emergency: false,
            payload,
        };
        let capacity = aircraft.payload_capacity();
        if payload.amount() > capacity {
            return Err(SimError::InvalidPayload {
                callsign: aircraft.callsign,
                amount: payload.amount(),
                capacity,
            });
        }
        Ok(aircraft)
    }

    pub fn passenger(
        callsign: impl Into<Callsign>,
        model: AircraftModel,
        tasks: TaskList,
        fuel: f64,
        passengers: u32,
    ) -> SimResult<Aircraft> {
        Self::new(callsign, model, tasks, fuel, Payload::Passengers(passengers))
    }

    pub fn freight(
        callsign: impl Into<Callsign>,
        model: AircraftModel,
        tasks: TaskList,
        fuel: f64,
        freight: u32,
    ) -> SimResult<Aircraft> {
        Self::new(callsign, model, tasks, fuel, Payload::Freight(freight))
    }

    pub fn callsign(&self) -> &Callsign {
        &self.callsign
    }

    pub fn model(&self) -> AircraftModel {
        self.model
    }

    pub fn characteristics(&self) -> &'static AircraftCharacteristics {
        self.characteristics
    }

    pub fn aircraft_type(&self) -> AircraftType {
        self.characteristics.aircraft_type
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskList {
        &mut self.tasks
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn payload(&self) -> Payload {
        self.payload
    }

    pub fn payload_capacity(&self) -> u32 {
        match self.payload {
            Payload::Passengers(_) => self.characteristics.passenger_capacity,
            Payload::Freight(_) => self.characteristics.freight_capacity,
        }
    }

    pub fn fuel_percent_remaining(&self) -> u8 {
        (100.0 * self.fuel / self.characteristics.fuel_capacity).round() as u8
    }

    /// Empty weight plus fuel and payload, in kg.
    pub fn total_weight(&self) -> f64 {
        let payload_weight = match self.payload {
            Payload::Passengers(n) => Self::AVG_PASSENGER_WEIGHT * n as f64,
            Payload::Freight(m) => m as f64,
        };
        self.characteristics.empty_weight as f64 + Self::FUEL_WEIGHT * self.fuel + payload_weight
    }

    /// Percentage of payload capacity in use, 0 for an aircraft that cannot carry this payload.
    pub fn occupancy_level(&self) -> u8 {
        let capacity = self.payload_capacity();
        if capacity == 0 {
            return 0;
        }
        (100.0 * self.payload.amount() as f64 / capacity as f64).round() as u8
    }

    /// Payload to be loaded by the current task. Zero unless the task carries a load percent.
    fn target_payload(&self) -> u32 {
        let ratio = self.tasks.current_task().load_percent() as f64 / 100.0;
        (self.payload_capacity() as f64 * ratio).round() as u32
    }

    /// Ticks needed to load the current task's target payload.
    pub fn loading_time(&self) -> u32 {
        let target = self.target_payload();
        match self.payload {
            Payload::Freight(_) => {
                if target < 1000 {
                    1
                } else if target > 50000 {
                    3
                } else {
                    2
                }
            }
            Payload::Passengers(_) => {
                if target == 0 {
                    1
                } else {
                    ((target as f64).log10().round() as u32).max(1)
                }
            }
        }
    }

    pub fn tick(&mut self) {
        let fuel_capacity = self.characteristics.fuel_capacity;
        match self.tasks.current_task().kind {
            TaskKind::Away => {
                self.fuel = (self.fuel - Self::AWAY_FUEL_BURN * fuel_capacity).max(0.0);
            }
            TaskKind::Load => {
                let loading_time = self.loading_time() as f64;
                self.fuel = (self.fuel + fuel_capacity / loading_time).min(fuel_capacity);

                let increment = (self.target_payload() as f64 / loading_time).round() as u32;
                let capacity = self.payload_capacity();
                match &mut self.payload {
                    Payload::Passengers(n) | Payload::Freight(n) => {
                        *n = n.saturating_add(increment).min(capacity);
                    }
                }
            }
            TaskKind::Land | TaskKind::Wait | TaskKind::Takeoff => {}
        }
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

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.aircraft_type(),
            self.callsign,
            self.model,
            self.tasks.current_task().kind
        )?;
        if self.emergency {
            write!(f, " (EMERGENCY)")?;
        }
        Ok(())
    }
}
