//! Transport mode entity
//!
//! [`TransportCore`] is the data every transport variant carries (top speed
//! and the optional fuel system). [`TransportMode`] is the plain variant
//! built from nothing but that core.

use std::fmt;

use super::entity::{entity_any, put, Entity, EntityHeader, EntityKind, EntitySnapshot};
use super::power::{write_fuel_fields, FuelSystem};
use crate::domain::capabilities::{Fuelable, TransportLike};

/// Shared transport data: top speed (mph) and an optional fuel system
#[derive(Debug, Clone, PartialEq)]
pub struct TransportCore {
    max_speed: f64,
    fuel: Option<FuelSystem>,
}

impl TransportCore {
    pub fn new(max_speed: f64) -> Self {
        Self {
            max_speed,
            fuel: None,
        }
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn fuel(&self) -> Option<&FuelSystem> {
        self.fuel.as_ref()
    }

    pub fn fuel_mut(&mut self) -> Option<&mut FuelSystem> {
        self.fuel.as_mut()
    }

    /// Replace the fuel system (the tank starts empty)
    pub fn set_fuel(&mut self, fuel: FuelSystem) {
        self.fuel = Some(fuel);
    }

    pub fn write_fields(&self, out: &mut EntitySnapshot) {
        put(out, "max_speed", self.max_speed);
        write_fuel_fields(self.fuel(), out);
    }
}

/// Generic transportation mode (boats, bikes, anything with a top speed)
#[derive(Debug, Clone)]
pub struct TransportMode {
    header: EntityHeader,
    transport: TransportCore,
}

impl TransportMode {
    pub fn new(name: impl Into<String>, max_speed: f64) -> Self {
        let mode = Self {
            header: EntityHeader::new(name),
            transport: TransportCore::new(max_speed),
        };
        tracing::debug!(entity = %mode.name(), max_speed = max_speed, "Created transport mode");
        mode
    }
}

impl Entity for TransportMode {
    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn kind(&self) -> EntityKind {
        EntityKind::TransportMode
    }

    fn write_fields(&self, out: &mut EntitySnapshot) {
        self.transport.write_fields(out);
    }

    entity_any!();
}

impl TransportLike for TransportMode {
    fn transport(&self) -> &TransportCore {
        &self.transport
    }

    fn transport_mut(&mut self) -> &mut TransportCore {
        &mut self.transport
    }

    fn travel(&mut self, distance: f64) -> bool {
        self.travel_on_fuel(distance)
    }
}

impl Fuelable for TransportMode {}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TransportMode(name={}, max_speed={}, fuel={:?}/{:?}, mpg={:?}, id={})",
            self.name(),
            self.max_speed(),
            self.current_fuel(),
            self.fuel_system().map(FuelSystem::fuel_capacity),
            self.fuel_system().map(FuelSystem::mpg),
            self.id()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn travel_without_fuel_system_always_succeeds() {
        let mut canoe = TransportMode::new("Canoe", 5.0);
        assert!(canoe.travel(12.0));
        assert_eq!(canoe.current_fuel(), None);
    }

    #[test]
    fn travel_rejects_non_positive_distance() {
        let mut canoe = TransportMode::new("Canoe", 5.0);
        assert!(!canoe.travel(0.0));
        assert!(!canoe.travel(-3.0));
        assert!(!canoe.travel(f64::NAN));
    }

    #[test]
    fn add_fuel_before_configuring_is_an_error() {
        let mut boat = TransportMode::new("Ferry", 25.0);
        assert_eq!(
            boat.add_fuel(10.0),
            Err(DomainError::FuelNotConfigured("Ferry".to_string()))
        );
    }

    #[test]
    fn add_fuel_clamps_and_rejects_non_positive() {
        let mut boat = TransportMode::new("Ferry", 25.0);
        assert!(boat.configure_fuel_system(2.0, 100.0));
        assert_eq!(boat.current_fuel(), Some(0.0));

        assert_eq!(boat.add_fuel(0.0), Ok(false));
        assert_eq!(boat.add_fuel(60.0), Ok(true));
        assert_eq!(boat.add_fuel(60.0), Ok(true));
        assert_eq!(boat.current_fuel(), Some(100.0));
    }

    #[test]
    fn configure_rejects_non_positive_figures() {
        let mut boat = TransportMode::new("Ferry", 25.0);
        assert!(!boat.configure_fuel_system(0.0, 100.0));
        assert!(boat.fuel_system().is_none());
    }

    #[test]
    fn fuel_is_conserved_across_trips() {
        let mut boat = TransportMode::new("Ferry", 25.0);
        boat.configure_fuel_system(4.0, 20.0);
        boat.add_fuel(20.0).unwrap();

        let trips = [10.0, 18.0, 22.0];
        for distance in trips {
            assert!(boat.travel(distance));
        }
        let expected = 20.0 - trips.iter().map(|d| d / 4.0).sum::<f64>();
        assert!((boat.current_fuel().unwrap() - expected).abs() < 1e-9);

        // 7.5 gal left = 30 miles; a 40 mile trip must fail untouched
        assert!(!boat.travel(40.0));
        assert!((boat.current_fuel().unwrap() - expected).abs() < 1e-9);
        assert_eq!(boat.estimate_range(), Some(expected * 4.0));
    }

    #[test]
    fn to_dict_includes_transport_fields() {
        let mut boat = TransportMode::new("Ferry", 25.0);
        let dict = boat.to_dict();
        assert_eq!(dict["type"], "TransportMode");
        assert_eq!(dict["max_speed"], 25.0);
        assert!(dict["mpg"].is_null());
        assert!(dict["current_fuel"].is_null());

        boat.configure_fuel_system(4.0, 20.0);
        let dict = boat.to_dict();
        assert_eq!(dict["mpg"], 4.0);
        assert_eq!(dict["fuel_capacity"], 20.0);
        assert_eq!(dict["current_fuel"], 0.0);
        assert_eq!(dict["estimated_range"], 0.0);
    }
}
