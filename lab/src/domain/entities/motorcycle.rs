//! Motorcycle entity

use std::fmt;

use super::entity::{entity_any, put, Entity, EntityHeader, EntityKind, EntitySnapshot};
use super::motor_vehicle::MotorCore;
use super::transport::TransportCore;
use crate::domain::capabilities::{EvPowered, Fuelable, TransportLike};

/// Lean angles above this many degrees are unsafe
pub const MAX_SAFE_LEAN_DEG: f64 = 50.0;

/// Data needed to create a motorcycle
#[derive(Debug, Clone)]
pub struct NewMotorcycle {
    pub name: String,
    pub max_speed: f64,
    pub horsepower: u32,
    pub weight_lbs: f64,
    pub seat_height: Option<f64>,
    pub is_offroad_capable: bool,
    pub has_abs: bool,
}

impl Default for NewMotorcycle {
    fn default() -> Self {
        Self {
            name: String::new(),
            max_speed: 0.0,
            horsepower: 0,
            weight_lbs: 0.0,
            seat_height: None,
            is_offroad_capable: false,
            has_abs: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Motorcycle {
    header: EntityHeader,
    transport: TransportCore,
    motor: MotorCore,
    seat_height: Option<f64>,
    is_offroad_capable: bool,
    has_abs: bool,
}

impl Motorcycle {
    pub fn new(new: NewMotorcycle) -> Self {
        let bike = Self {
            header: EntityHeader::new(new.name),
            transport: TransportCore::new(new.max_speed),
            motor: MotorCore::new(Some(new.horsepower), Some(new.weight_lbs)),
            seat_height: new.seat_height,
            is_offroad_capable: new.is_offroad_capable,
            has_abs: new.has_abs,
        };
        tracing::info!(
            entity = %bike.name(),
            horsepower = new.horsepower,
            offroad = new.is_offroad_capable,
            abs = new.has_abs,
            "Created motorcycle"
        );
        bike
    }

    pub fn seat_height(&self) -> Option<f64> {
        self.seat_height
    }

    pub fn is_offroad_capable(&self) -> bool {
        self.is_offroad_capable
    }

    pub fn has_abs(&self) -> bool {
        self.has_abs
    }

    pub fn start_engine(&mut self) -> bool {
        self.motor.start_engine(self.header.name())
    }

    pub fn stop_engine(&mut self) -> bool {
        self.motor.stop_engine(self.header.name())
    }

    pub fn wheelie(&self) -> String {
        tracing::warn!(entity = %self.name(), "Attempted a wheelie");
        format!(
            "{} lifts the front wheel briefly. Dangerous but impressive!",
            self.name()
        )
    }

    /// Lean into a corner; anything past [`MAX_SAFE_LEAN_DEG`] is reported unsafe
    pub fn lean(&self, angle: f64) -> String {
        if !(angle > 0.0) {
            return "Lean angle must be positive.".to_string();
        }

        if angle > MAX_SAFE_LEAN_DEG {
            tracing::error!(entity = %self.name(), angle = angle, "Leaned dangerously");
            format!("{} leans too far! {}° is unsafe!", self.name(), angle)
        } else {
            tracing::info!(entity = %self.name(), angle = angle, "Leans safely");
            format!("{} leans smoothly at {}°.", self.name(), angle)
        }
    }
}

impl Entity for Motorcycle {
    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Motorcycle
    }

    fn write_fields(&self, out: &mut EntitySnapshot) {
        self.transport.write_fields(out);
        self.motor.write_fields(out);
        put(out, "seat_height", self.seat_height);
        put(out, "is_offroad_capable", self.is_offroad_capable);
        put(out, "has_abs", self.has_abs);
    }

    entity_any!();
}

impl TransportLike for Motorcycle {
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

impl Fuelable for Motorcycle {}

impl EvPowered for Motorcycle {
    fn motor(&self) -> &MotorCore {
        &self.motor
    }

    fn motor_mut(&mut self) -> &mut MotorCore {
        &mut self.motor
    }
}

impl fmt::Display for Motorcycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Motorcycle(name={}, hp={:?}, weight={:?}, seat_height={:?}, offroad={}, abs={}, id={})",
            self.name(),
            self.motor.horsepower(),
            self.motor.weight_lbs(),
            self.seat_height,
            self.is_offroad_capable,
            self.has_abs,
            self.id()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_motorcycle;

    #[test]
    fn lean_angles() {
        let bike = test_motorcycle();
        assert_eq!(bike.lean(0.0), "Lean angle must be positive.");
        assert!(bike.lean(35.0).contains("leans smoothly at 35°"));
        assert!(bike.lean(50.0).contains("leans smoothly"));
        assert!(bike.lean(60.0).contains("60° is unsafe"));
    }

    #[test]
    fn wheelie_mentions_the_bike() {
        let bike = test_motorcycle();
        assert!(bike.wheelie().starts_with("Kawasaki Ninja ZX-6R lifts"));
    }

    #[test]
    fn travels_on_fuel() {
        let mut bike = test_motorcycle();
        bike.configure_fuel_system(42.0, 5.0);
        bike.add_fuel(3.0).unwrap();

        assert!(bike.travel(42.0));
        assert_eq!(bike.current_fuel(), Some(2.0));
    }

    #[test]
    fn electric_motorcycle() {
        let mut bike = test_motorcycle();
        bike.configure_ev_system(15.0, 10.0);
        bike.charge(15.0).unwrap();

        assert!(bike.travel(100.0));
        assert_eq!(bike.current_charge_kwh(), Some(5.0));
        assert!(!bike.travel(60.0));
    }

    #[test]
    fn to_dict_includes_every_level() {
        let bike = test_motorcycle();
        let dict = bike.to_dict();

        assert_eq!(dict["type"], "Motorcycle");
        assert_eq!(dict["max_speed"], 165.0);
        assert_eq!(dict["horsepower"], 130);
        assert_eq!(dict["engine_running"], false);
        assert_eq!(dict["seat_height"], 32.7);
        assert_eq!(dict["is_offroad_capable"], false);
        assert_eq!(dict["has_abs"], true);
        for key in ["mpg", "current_fuel", "battery_kwh", "ev_range_estimate"] {
            assert!(dict.contains_key(key), "missing {}", key);
        }
    }
}
