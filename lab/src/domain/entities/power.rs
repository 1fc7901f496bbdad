//! Power systems
//!
//! Optional fuel and battery subsystems carried by transport entities.
//! Both keep their level within `[0, capacity]`: filling is clamped and
//! consumption is refused (leaving the level untouched) on a shortfall.

use super::entity::{put, EntitySnapshot};

/// Result of trying to draw energy for a trip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Draw {
    /// Energy was debited; carries the level left afterwards
    Debited { remaining: f64 },
    /// Not enough energy; nothing was debited
    Shortfall { required: f64, available: f64 },
}

impl Draw {
    pub fn is_debited(&self) -> bool {
        matches!(self, Draw::Debited { .. })
    }
}

/// A configured fuel system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelSystem {
    mpg: f64,
    fuel_capacity: f64,
    current_fuel: f64,
}

impl FuelSystem {
    /// A new, empty tank. Returns `None` unless both figures are positive.
    pub fn new(mpg: f64, fuel_capacity: f64) -> Option<Self> {
        if !(mpg > 0.0 && fuel_capacity > 0.0) {
            return None;
        }
        Some(Self {
            mpg,
            fuel_capacity,
            current_fuel: 0.0,
        })
    }

    pub fn mpg(&self) -> f64 {
        self.mpg
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.fuel_capacity
    }

    pub fn current_fuel(&self) -> f64 {
        self.current_fuel
    }

    /// Remaining range in miles
    pub fn estimate_range(&self) -> f64 {
        self.current_fuel * self.mpg
    }

    /// Add fuel, clamped to capacity. Returns the new level.
    pub fn fill(&mut self, gallons: f64) -> f64 {
        self.current_fuel = self.fuel_capacity.min(self.current_fuel + gallons);
        self.current_fuel
    }

    /// Debit the fuel needed for `distance` miles
    pub fn draw(&mut self, distance: f64) -> Draw {
        let required = distance / self.mpg;
        if self.current_fuel < required {
            return Draw::Shortfall {
                required,
                available: self.current_fuel,
            };
        }
        self.current_fuel = (self.current_fuel - required).max(0.0);
        Draw::Debited {
            remaining: self.current_fuel,
        }
    }
}

/// Fuel fields of a snapshot; all `null` while the fuel system is unconfigured
pub fn write_fuel_fields(fuel: Option<&FuelSystem>, out: &mut EntitySnapshot) {
    put(out, "mpg", fuel.map(FuelSystem::mpg));
    put(out, "fuel_capacity", fuel.map(FuelSystem::fuel_capacity));
    put(out, "current_fuel", fuel.map(FuelSystem::current_fuel));
    put(out, "estimated_range", fuel.map(FuelSystem::estimate_range));
}

/// A configured battery system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvSystem {
    battery_kwh: f64,
    current_charge_kwh: f64,
    efficiency_mi_per_kwh: f64,
}

impl EvSystem {
    /// A new, flat battery. Returns `None` unless both figures are positive.
    pub fn new(battery_kwh: f64, efficiency_mi_per_kwh: f64) -> Option<Self> {
        if !(battery_kwh > 0.0 && efficiency_mi_per_kwh > 0.0) {
            return None;
        }
        Some(Self {
            battery_kwh,
            current_charge_kwh: 0.0,
            efficiency_mi_per_kwh,
        })
    }

    pub fn battery_kwh(&self) -> f64 {
        self.battery_kwh
    }

    pub fn current_charge_kwh(&self) -> f64 {
        self.current_charge_kwh
    }

    pub fn efficiency_mi_per_kwh(&self) -> f64 {
        self.efficiency_mi_per_kwh
    }

    pub fn remaining_range(&self) -> f64 {
        self.current_charge_kwh * self.efficiency_mi_per_kwh
    }

    /// Charge, clamped to battery size. Returns the new charge.
    pub fn charge(&mut self, kwh: f64) -> f64 {
        self.current_charge_kwh = self.battery_kwh.min(self.current_charge_kwh + kwh);
        self.current_charge_kwh
    }

    /// Debit the charge needed for `distance` miles
    pub fn draw(&mut self, distance: f64) -> Draw {
        let required = distance / self.efficiency_mi_per_kwh;
        if self.current_charge_kwh < required {
            return Draw::Shortfall {
                required,
                available: self.current_charge_kwh,
            };
        }
        self.current_charge_kwh = (self.current_charge_kwh - required).max(0.0);
        Draw::Debited {
            remaining: self.current_charge_kwh,
        }
    }
}

/// EV fields of a snapshot; all `null` while the EV system is unconfigured
pub fn write_ev_fields(ev: Option<&EvSystem>, out: &mut EntitySnapshot) {
    put(out, "battery_kwh", ev.map(EvSystem::battery_kwh));
    put(out, "current_charge_kwh", ev.map(EvSystem::current_charge_kwh));
    put(
        out,
        "efficiency_mi_per_kwh",
        ev.map(EvSystem::efficiency_mi_per_kwh),
    );
    put(out, "ev_range_estimate", ev.map(EvSystem::remaining_range));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_system_rejects_non_positive_figures() {
        assert!(FuelSystem::new(0.0, 10.0).is_none());
        assert!(FuelSystem::new(30.0, -1.0).is_none());
        assert!(FuelSystem::new(f64::NAN, 10.0).is_none());
    }

    #[test]
    fn fuel_system_starts_empty() {
        let fuel = FuelSystem::new(30.0, 10.0).unwrap();
        assert_eq!(fuel.current_fuel(), 0.0);
        assert_eq!(fuel.estimate_range(), 0.0);
    }

    #[test]
    fn fill_is_clamped_to_capacity() {
        let mut fuel = FuelSystem::new(30.0, 10.0).unwrap();
        assert_eq!(fuel.fill(4.0), 4.0);
        assert_eq!(fuel.fill(100.0), 10.0);
    }

    #[test]
    fn draw_debits_or_refuses() {
        let mut fuel = FuelSystem::new(20.0, 10.0).unwrap();
        fuel.fill(10.0);

        assert_eq!(fuel.draw(100.0), Draw::Debited { remaining: 5.0 });
        assert_eq!(
            fuel.draw(200.0),
            Draw::Shortfall {
                required: 10.0,
                available: 5.0
            }
        );
        assert_eq!(fuel.current_fuel(), 5.0);
    }

    #[test]
    fn ev_system_charge_and_draw() {
        let mut ev = EvSystem::new(60.0, 4.0).unwrap();
        assert_eq!(ev.charge(80.0), 60.0);
        assert!(ev.draw(40.0).is_debited());
        assert_eq!(ev.current_charge_kwh(), 50.0);
        assert_eq!(ev.remaining_range(), 200.0);
        assert!(!ev.draw(400.0).is_debited());
        assert_eq!(ev.current_charge_kwh(), 50.0);
    }

    #[test]
    fn unconfigured_fields_are_null() {
        let mut out = EntitySnapshot::new();
        write_fuel_fields(None, &mut out);
        write_ev_fields(None, &mut out);

        for key in [
            "mpg",
            "fuel_capacity",
            "current_fuel",
            "estimated_range",
            "battery_kwh",
            "current_charge_kwh",
            "efficiency_mi_per_kwh",
            "ev_range_estimate",
        ] {
            assert!(out[key].is_null(), "{} should be null", key);
        }
    }
}
