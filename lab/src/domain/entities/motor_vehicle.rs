//! Motor vehicle entity
//!
//! Cars, trucks, ATVs. Runs on fuel or, once a battery is configured, on EV
//! power (which then takes priority for travel).

use std::fmt;

use super::entity::{entity_any, put, Entity, EntityHeader, EntityKind, EntitySnapshot};
use super::power::{write_ev_fields, EvSystem};
use super::transport::TransportCore;
use crate::domain::capabilities::{EvPowered, Fuelable, TransportLike};

/// Engine data shared by motor vehicles and motorcycles
#[derive(Debug, Clone, PartialEq)]
pub struct MotorCore {
    horsepower: Option<u32>,
    weight_lbs: Option<f64>,
    engine_running: bool,
    ev: Option<EvSystem>,
}

impl MotorCore {
    pub fn new(horsepower: Option<u32>, weight_lbs: Option<f64>) -> Self {
        Self {
            horsepower,
            weight_lbs,
            engine_running: false,
            ev: None,
        }
    }

    pub fn horsepower(&self) -> Option<u32> {
        self.horsepower
    }

    pub fn weight_lbs(&self) -> Option<f64> {
        self.weight_lbs
    }

    pub fn engine_running(&self) -> bool {
        self.engine_running
    }

    pub fn ev(&self) -> Option<&EvSystem> {
        self.ev.as_ref()
    }

    pub fn ev_mut(&mut self) -> Option<&mut EvSystem> {
        self.ev.as_mut()
    }

    /// Replace the battery system (it starts flat)
    pub fn set_ev(&mut self, ev: EvSystem) {
        self.ev = Some(ev);
    }

    /// Start the engine; `false` if it was already running
    pub fn start_engine(&mut self, name: &str) -> bool {
        if self.engine_running {
            tracing::warn!(entity = %name, "Engine already running");
            return false;
        }
        self.engine_running = true;
        tracing::info!(entity = %name, "Engine started");
        true
    }

    /// Stop the engine; `false` if it was already off
    pub fn stop_engine(&mut self, name: &str) -> bool {
        if !self.engine_running {
            tracing::warn!(entity = %name, "Engine already off");
            return false;
        }
        self.engine_running = false;
        tracing::info!(entity = %name, "Engine stopped");
        true
    }

    pub fn write_fields(&self, out: &mut EntitySnapshot) {
        put(out, "horsepower", self.horsepower);
        put(out, "weight_lbs", self.weight_lbs);
        put(out, "engine_running", self.engine_running);
        write_ev_fields(self.ev(), out);
    }
}

/// Data needed to create a motor vehicle
#[derive(Debug, Clone, Default)]
pub struct NewMotorVehicle {
    pub name: String,
    pub max_speed: f64,
    pub horsepower: Option<u32>,
    pub weight_lbs: Option<f64>,
}

/// A generic motor vehicle
#[derive(Debug, Clone)]
pub struct MotorVehicle {
    header: EntityHeader,
    transport: TransportCore,
    motor: MotorCore,
}

impl MotorVehicle {
    pub fn new(new: NewMotorVehicle) -> Self {
        let vehicle = Self {
            header: EntityHeader::new(new.name),
            transport: TransportCore::new(new.max_speed),
            motor: MotorCore::new(new.horsepower, new.weight_lbs),
        };
        tracing::info!(
            entity = %vehicle.name(),
            horsepower = ?new.horsepower,
            weight_lbs = ?new.weight_lbs,
            "Created motor vehicle"
        );
        vehicle
    }

    pub fn start_engine(&mut self) -> bool {
        self.motor.start_engine(self.header.name())
    }

    pub fn stop_engine(&mut self) -> bool {
        self.motor.stop_engine(self.header.name())
    }
}

impl Entity for MotorVehicle {
    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn kind(&self) -> EntityKind {
        EntityKind::MotorVehicle
    }

    fn write_fields(&self, out: &mut EntitySnapshot) {
        self.transport.write_fields(out);
        self.motor.write_fields(out);
    }

    entity_any!();
}

impl TransportLike for MotorVehicle {
    fn transport(&self) -> &TransportCore {
        &self.transport
    }

    fn transport_mut(&mut self) -> &mut TransportCore {
        &mut self.transport
    }

    fn travel(&mut self, distance: f64) -> bool {
        self.travel_on_power(distance)
    }
}

impl Fuelable for MotorVehicle {}

impl EvPowered for MotorVehicle {
    fn motor(&self) -> &MotorCore {
        &self.motor
    }

    fn motor_mut(&mut self) -> &mut MotorCore {
        &mut self.motor
    }
}

impl fmt::Display for MotorVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MotorVehicle(name={}, hp={:?}, weight={:?}, engine_running={}, fuel={:?}, charge={:?} kWh, id={})",
            self.name(),
            self.motor.horsepower(),
            self.motor.weight_lbs(),
            self.motor.engine_running(),
            self.current_fuel(),
            self.current_charge_kwh(),
            self.id()
        )
    }
}
