//! Capability traits
//!
//! Transport variants are flat structs composed of shared building blocks
//! ([`TransportCore`], [`MotorCore`], [`Airframe`]). These traits give them
//! their polymorphic behaviour: each variant implements the accessors and
//! picks up the provided methods.

use crate::domain::entities::{
    Airframe, Draw, Entity, EvSystem, FuelSystem, MotorCore, TransportCore,
};
use crate::error::DomainError;

/// Altitude reached immediately after takeoff (feet)
pub const TAKEOFF_ALTITUDE_FT: f64 = 1000.0;

/// Anything that can travel a distance
pub trait TransportLike: Entity {
    fn transport(&self) -> &TransportCore;

    fn transport_mut(&mut self) -> &mut TransportCore;

    /// Travel `distance` miles. Returns `false` (and changes nothing) when the
    /// distance is not positive or the configured power source falls short.
    fn travel(&mut self, distance: f64) -> bool;

    fn max_speed(&self) -> f64 {
        self.transport().max_speed()
    }
}

/// Optional fuel system
pub trait Fuelable: TransportLike {
    fn fuel_system(&self) -> Option<&FuelSystem> {
        self.transport().fuel()
    }

    /// Enable the fuel system with an empty tank. Non-positive figures are rejected.
    fn configure_fuel_system(&mut self, mpg: f64, fuel_capacity: f64) -> bool {
        let Some(fuel) = FuelSystem::new(mpg, fuel_capacity) else {
            tracing::warn!(
                entity = %self.name(),
                mpg = mpg,
                fuel_capacity = fuel_capacity,
                "Fuel system figures must be positive"
            );
            return false;
        };

        self.transport_mut().set_fuel(fuel);
        tracing::info!(
            entity = %self.name(),
            mpg = mpg,
            fuel_capacity = fuel_capacity,
            "Fuel system configured"
        );
        true
    }

    /// Add fuel, clamped to capacity.
    ///
    /// Errors if the fuel system was never configured. A non-positive amount
    /// is a soft rejection (`Ok(false)`).
    fn add_fuel(&mut self, gallons: f64) -> Result<bool, DomainError> {
        let name = self.name().to_string();
        let Some(fuel) = self.transport_mut().fuel_mut() else {
            tracing::error!(entity = %name, "Fuel system not configured");
            return Err(DomainError::FuelNotConfigured(name));
        };

        if !(gallons > 0.0) {
            tracing::warn!(entity = %name, gallons = gallons, "Cannot add non-positive fuel amount");
            return Ok(false);
        }

        let before = fuel.current_fuel();
        let after = fuel.fill(gallons);
        tracing::info!(entity = %name, gallons = gallons, before = before, after = after, "Added fuel");
        Ok(true)
    }

    fn current_fuel(&self) -> Option<f64> {
        self.fuel_system().map(FuelSystem::current_fuel)
    }

    /// Remaining range in miles based on fuel and mpg
    fn estimate_range(&self) -> Option<f64> {
        self.fuel_system().map(FuelSystem::estimate_range)
    }

    /// The fuel-gated travel path. Without a fuel system every positive trip succeeds.
    fn travel_on_fuel(&mut self, distance: f64) -> bool {
        if !(distance > 0.0) {
            tracing::warn!(entity = %self.name(), distance = distance, "Travel distance must be positive");
            return false;
        }

        let name = self.name().to_string();
        let Some(fuel) = self.transport_mut().fuel_mut() else {
            tracing::info!(entity = %name, distance = distance, "Traveled (no fuel system)");
            return true;
        };

        match fuel.draw(distance) {
            Draw::Debited { remaining } => {
                tracing::info!(
                    entity = %name,
                    distance = distance,
                    fuel_remaining = remaining,
                    "Traveled on fuel"
                );
                true
            }
            Draw::Shortfall {
                required,
                available,
            } => {
                tracing::warn!(
                    entity = %name,
                    distance = distance,
                    required = required,
                    available = available,
                    "Not enough fuel to travel"
                );
                false
            }
        }
    }
}

/// Optional battery system; takes priority over fuel when configured
pub trait EvPowered: Fuelable {
    fn motor(&self) -> &MotorCore;

    fn motor_mut(&mut self) -> &mut MotorCore;

    fn ev_system(&self) -> Option<&EvSystem> {
        self.motor().ev()
    }

    /// Enable the battery system, starting flat. Non-positive figures are rejected.
    fn configure_ev_system(&mut self, battery_kwh: f64, efficiency_mi_per_kwh: f64) -> bool {
        let Some(ev) = EvSystem::new(battery_kwh, efficiency_mi_per_kwh) else {
            tracing::warn!(
                entity = %self.name(),
                battery_kwh = battery_kwh,
                efficiency = efficiency_mi_per_kwh,
                "EV system figures must be positive"
            );
            return false;
        };

        self.motor_mut().set_ev(ev);
        tracing::info!(
            entity = %self.name(),
            battery_kwh = battery_kwh,
            efficiency = efficiency_mi_per_kwh,
            "Configured as an EV"
        );
        true
    }

    /// Charge the battery, clamped to its size.
    ///
    /// Errors if the EV system was never configured. A non-positive amount
    /// is a soft rejection (`Ok(false)`).
    fn charge(&mut self, kwh: f64) -> Result<bool, DomainError> {
        let name = self.name().to_string();
        let Some(ev) = self.motor_mut().ev_mut() else {
            tracing::error!(entity = %name, "EV system not configured");
            return Err(DomainError::EvNotConfigured(name));
        };

        if !(kwh > 0.0) {
            tracing::warn!(entity = %name, kwh = kwh, "Cannot charge with non-positive kWh");
            return Ok(false);
        }

        let before = ev.current_charge_kwh();
        let after = ev.charge(kwh);
        tracing::info!(entity = %name, before = before, after = after, "Charged");
        Ok(true)
    }

    fn current_charge_kwh(&self) -> Option<f64> {
        self.ev_system().map(EvSystem::current_charge_kwh)
    }

    fn remaining_range_ev(&self) -> Option<f64> {
        self.ev_system().map(EvSystem::remaining_range)
    }

    /// EV path when a battery is configured, otherwise the fuel path
    fn travel_on_power(&mut self, distance: f64) -> bool {
        if !(distance > 0.0) {
            tracing::warn!(entity = %self.name(), distance = distance, "Distance must be positive");
            return false;
        }

        let name = self.name().to_string();
        let Some(ev) = self.motor_mut().ev_mut() else {
            return self.travel_on_fuel(distance);
        };

        match ev.draw(distance) {
            Draw::Debited { remaining } => {
                tracing::info!(
                    entity = %name,
                    distance = distance,
                    charge_remaining = remaining,
                    "Traveled on EV power"
                );
                true
            }
            Draw::Shortfall {
                required,
                available,
            } => {
                tracing::error!(
                    entity = %name,
                    distance = distance,
                    required = required,
                    available = available,
                    "Not enough charge to travel"
                );
                false
            }
        }
    }
}

/// Flight state machine: grounded <-> airborne
pub trait Flyable: Fuelable {
    fn airframe(&self) -> &Airframe;

    fn airframe_mut(&mut self) -> &mut Airframe;

    fn in_air(&self) -> bool {
        self.airframe().in_air()
    }

    fn current_altitude(&self) -> f64 {
        self.airframe().current_altitude()
    }

    /// Grounded -> airborne at the takeoff altitude (capped by the ceiling)
    fn takeoff(&mut self) -> bool {
        if self.in_air() {
            tracing::warn!(entity = %self.name(), "Already airborne");
            return false;
        }

        let altitude = match self.airframe().max_altitude() {
            Some(ceiling) => TAKEOFF_ALTITUDE_FT.min(ceiling),
            None => TAKEOFF_ALTITUDE_FT,
        };
        if !(altitude > 0.0) {
            tracing::error!(entity = %self.name(), "Ceiling too low to take off");
            return false;
        }

        self.airframe_mut().set_airborne(altitude);
        tracing::info!(entity = %self.name(), altitude = altitude, "Took off");
        true
    }

    /// Airborne -> grounded, altitude back to 0
    fn land(&mut self) -> bool {
        if !self.in_air() {
            tracing::warn!(entity = %self.name(), "Already on the ground");
            return false;
        }

        self.airframe_mut().set_grounded();
        tracing::info!(entity = %self.name(), "Landed");
        true
    }

    /// Climb while airborne; refused if the ceiling would be exceeded
    fn climb(&mut self, feet: f64) -> bool {
        if !self.in_air() {
            tracing::error!(entity = %self.name(), "Cannot climb while on the ground");
            return false;
        }
        if !(feet > 0.0) {
            tracing::warn!(entity = %self.name(), feet = feet, "Climb must be positive");
            return false;
        }

        let requested = self.current_altitude() + feet;
        if let Some(ceiling) = self.airframe().max_altitude() {
            if requested > ceiling {
                tracing::error!(
                    entity = %self.name(),
                    ceiling = ceiling,
                    requested = requested,
                    "Cannot exceed max altitude"
                );
                return false;
            }
        }

        self.airframe_mut().set_altitude(requested);
        tracing::info!(entity = %self.name(), altitude = requested, "Climbed");
        true
    }

    /// Descend while airborne; reaching the ground lands instead
    fn descend(&mut self, feet: f64) -> bool {
        if !self.in_air() {
            tracing::error!(entity = %self.name(), "Cannot descend while on the ground");
            return false;
        }
        if !(feet > 0.0) {
            tracing::warn!(entity = %self.name(), feet = feet, "Descent must be positive");
            return false;
        }

        let requested = self.current_altitude() - feet;
        if requested <= 0.0 {
            tracing::info!(entity = %self.name(), "Descending to runway");
            return self.land();
        }

        self.airframe_mut().set_altitude(requested);
        tracing::info!(entity = %self.name(), altitude = requested, "Descended");
        true
    }
}
