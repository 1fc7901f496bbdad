//! Airplane entity
//!
//! Commercial aircraft, private planes. The flight state lives in
//! [`Airframe`] and is driven through the [`Flyable`] capability.

use std::fmt;

use super::entity::{entity_any, put, Entity, EntityHeader, EntityKind, EntitySnapshot};
use super::transport::TransportCore;
use crate::domain::capabilities::{Flyable, Fuelable, TransportLike};

/// Aviation data and flight state shared by airplanes and jets.
///
/// While grounded the altitude is always 0, and it never exceeds
/// `max_altitude` when a ceiling is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Airframe {
    wingspan: Option<f64>,
    max_altitude: Option<f64>,
    num_passengers: Option<u32>,
    current_altitude: f64,
    in_air: bool,
}

impl Airframe {
    pub fn new(wingspan: Option<f64>, max_altitude: Option<f64>, num_passengers: Option<u32>) -> Self {
        Self {
            wingspan,
            max_altitude,
            num_passengers,
            current_altitude: 0.0,
            in_air: false,
        }
    }

    pub fn wingspan(&self) -> Option<f64> {
        self.wingspan
    }

    pub fn max_altitude(&self) -> Option<f64> {
        self.max_altitude
    }

    pub fn num_passengers(&self) -> Option<u32> {
        self.num_passengers
    }

    pub fn current_altitude(&self) -> f64 {
        self.current_altitude
    }

    pub fn in_air(&self) -> bool {
        self.in_air
    }

    pub(crate) fn set_airborne(&mut self, altitude: f64) {
        self.in_air = true;
        self.current_altitude = altitude;
    }

    pub(crate) fn set_grounded(&mut self) {
        self.in_air = false;
        self.current_altitude = 0.0;
    }

    pub(crate) fn set_altitude(&mut self, altitude: f64) {
        self.current_altitude = altitude;
    }

    pub fn write_fields(&self, out: &mut EntitySnapshot) {
        put(out, "wingspan", self.wingspan);
        put(out, "max_altitude", self.max_altitude);
        put(out, "num_passengers", self.num_passengers);
        put(out, "current_altitude", self.current_altitude);
        put(out, "in_air", self.in_air);
    }
}

/// Data needed to create an airplane
#[derive(Debug, Clone, Default)]
pub struct NewAirplane {
    pub name: String,
    pub max_speed: f64,
    pub wingspan: Option<f64>,
    pub max_altitude: Option<f64>,
    pub num_passengers: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Airplane {
    header: EntityHeader,
    transport: TransportCore,
    airframe: Airframe,
}

impl Airplane {
    pub fn new(new: NewAirplane) -> Self {
        let plane = Self {
            header: EntityHeader::new(new.name),
            transport: TransportCore::new(new.max_speed),
            airframe: Airframe::new(new.wingspan, new.max_altitude, new.num_passengers),
        };
        tracing::info!(
            entity = %plane.name(),
            wingspan = ?new.wingspan,
            ceiling = ?new.max_altitude,
            passengers = ?new.num_passengers,
            "Created airplane"
        );
        plane
    }
}

impl Entity for Airplane {
    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Airplane
    }

    fn write_fields(&self, out: &mut EntitySnapshot) {
        self.transport.write_fields(out);
        self.airframe.write_fields(out);
    }

    entity_any!();
}

impl TransportLike for Airplane {
    fn transport(&self) -> &TransportCore {
        &self.transport
    }

    fn transport_mut(&mut self) -> &mut TransportCore {
        &mut self.transport
    }

    fn travel(&mut self, distance: f64) -> bool {
        tracing::info!(entity = %self.name(), distance = distance, "Preparing to travel");
        self.travel_on_fuel(distance)
    }
}

impl Fuelable for Airplane {}

impl Flyable for Airplane {
    fn airframe(&self) -> &Airframe {
        &self.airframe
    }

    fn airframe_mut(&mut self) -> &mut Airframe {
        &mut self.airframe
    }
}

impl fmt::Display for Airplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Airplane(name={}, wingspan={:?}, pax={:?}, altitude={}, in_air={}, id={})",
            self.name(),
            self.airframe.wingspan(),
            self.airframe.num_passengers(),
            self.airframe.current_altitude(),
            self.airframe.in_air(),
            self.id()
        )
    }
}
