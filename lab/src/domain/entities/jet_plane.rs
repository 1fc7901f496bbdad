//! Jet plane entity
//!
//! An airplane with afterburners, autopilot, Mach telemetry and aerobatic
//! maneuvers. Afterburner and autopilot can only be switched on while
//! airborne; switching them off is always allowed.

use std::fmt;

use super::airplane::Airframe;
use super::entity::{entity_any, put, Entity, EntityHeader, EntityKind, EntitySnapshot};
use super::transport::TransportCore;
use crate::domain::capabilities::{Flyable, Fuelable, TransportLike};

/// Mach 1 in mph
pub const SPEED_OF_SOUND_MPH: f64 = 767.0;

/// Effective speed multiplier while the afterburner is engaged
pub const AFTERBURNER_BOOST: f64 = 1.25;

/// Data needed to create a jet plane
#[derive(Debug, Clone)]
pub struct NewJetPlane {
    pub name: String,
    pub max_speed: f64,
    pub wingspan: f64,
    pub max_altitude: f64,
    pub num_passengers: u32,
    pub is_military: bool,
}

impl Default for NewJetPlane {
    fn default() -> Self {
        Self {
            name: String::new(),
            max_speed: 0.0,
            wingspan: 0.0,
            max_altitude: 0.0,
            num_passengers: 1,
            is_military: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JetPlane {
    header: EntityHeader,
    transport: TransportCore,
    airframe: Airframe,
    is_military: bool,
    afterburner_on: bool,
    autopilot_enabled: bool,
    mach_speed: f64,
}

impl JetPlane {
    pub fn new(new: NewJetPlane) -> Self {
        let jet = Self {
            header: EntityHeader::new(new.name),
            transport: TransportCore::new(new.max_speed),
            airframe: Airframe::new(
                Some(new.wingspan),
                Some(new.max_altitude),
                Some(new.num_passengers),
            ),
            is_military: new.is_military,
            afterburner_on: false,
            autopilot_enabled: false,
            mach_speed: 0.0,
        };
        tracing::info!(
            entity = %jet.name(),
            military = new.is_military,
            wingspan = new.wingspan,
            ceiling = new.max_altitude,
            "Created jet plane"
        );
        jet
    }

    pub fn is_military(&self) -> bool {
        self.is_military
    }

    pub fn afterburner_on(&self) -> bool {
        self.afterburner_on
    }

    pub fn autopilot_enabled(&self) -> bool {
        self.autopilot_enabled
    }

    pub fn mach_speed(&self) -> f64 {
        self.mach_speed
    }

    pub fn enable_afterburner(&mut self) -> bool {
        if !self.in_air() {
            tracing::error!(entity = %self.name(), "Cannot enable afterburners while grounded");
            return false;
        }
        self.afterburner_on = true;
        tracing::info!(entity = %self.name(), "Afterburners engaged");
        true
    }

    pub fn disable_afterburner(&mut self) -> bool {
        self.afterburner_on = false;
        tracing::info!(entity = %self.name(), "Afterburners disengaged");
        true
    }

    pub fn enable_autopilot(&mut self) -> bool {
        if !self.in_air() {
            tracing::error!(entity = %self.name(), "Cannot enable autopilot while grounded");
            return false;
        }
        self.autopilot_enabled = true;
        tracing::info!(entity = %self.name(), "Autopilot engaged");
        true
    }

    pub fn disable_autopilot(&mut self) -> bool {
        self.autopilot_enabled = false;
        tracing::info!(entity = %self.name(), "Autopilot disengaged");
        true
    }

    /// Record `mph` as a Mach number
    pub fn update_mach_speed(&mut self, mph: f64) {
        self.mach_speed = mph / SPEED_OF_SOUND_MPH;
        tracing::info!(entity = %self.name(), mach = self.mach_speed, "Mach updated");
    }

    /// Speed used for telemetry: top speed, boosted while the afterburner is on
    pub fn effective_speed(&self) -> f64 {
        let boost = if self.afterburner_on {
            AFTERBURNER_BOOST
        } else {
            1.0
        };
        self.max_speed() * boost
    }

    pub fn barrel_roll(&self) -> String {
        if !self.in_air() {
            tracing::error!(entity = %self.name(), "Cannot perform barrel roll on the ground");
            return "Jet must be in the air.".to_string();
        }
        tracing::warn!(entity = %self.name(), "Performs a barrel roll");
        format!(
            "{} performs a perfect barrel roll at {} ft!",
            self.name(),
            self.current_altitude()
        )
    }

    pub fn immelmann(&self) -> String {
        if !self.in_air() {
            tracing::error!(entity = %self.name(), "Cannot perform Immelmann while grounded");
            return "Jet must be airborne.".to_string();
        }
        tracing::info!(entity = %self.name(), "Performs an Immelmann turn");
        format!(
            "{} performs an Immelmann and reverses direction!",
            self.name()
        )
    }
}

impl Entity for JetPlane {
    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn kind(&self) -> EntityKind {
        EntityKind::JetPlane
    }

    fn write_fields(&self, out: &mut EntitySnapshot) {
        self.transport.write_fields(out);
        self.airframe.write_fields(out);
        put(out, "is_military", self.is_military);
        put(out, "afterburner_on", self.afterburner_on);
        put(out, "autopilot_enabled", self.autopilot_enabled);
        put(out, "mach_speed", self.mach_speed);
    }

    entity_any!();
}

impl TransportLike for JetPlane {
    fn transport(&self) -> &TransportCore {
        &self.transport
    }

    fn transport_mut(&mut self) -> &mut TransportCore {
        &mut self.transport
    }

    /// Mach telemetry is updated first, then the airplane's fuel-gated travel runs
    fn travel(&mut self, distance: f64) -> bool {
        tracing::info!(entity = %self.name(), distance = distance, "Preparing supersonic travel");
        self.update_mach_speed(self.effective_speed());
        self.travel_on_fuel(distance)
    }
}

impl Fuelable for JetPlane {}

impl Flyable for JetPlane {
    fn airframe(&self) -> &Airframe {
        &self.airframe
    }

    fn airframe_mut(&mut self) -> &mut Airframe {
        &mut self.airframe
    }
}

impl fmt::Display for JetPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JetPlane(name={}, Mach={:.2}, afterburner={}, autopilot={}, alt={}, id={})",
            self.name(),
            self.mach_speed,
            self.afterburner_on,
            self.autopilot_enabled,
            self.airframe.current_altitude(),
            self.id()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_jet;

    #[test]
    fn afterburner_requires_airborne() {
        let mut jet = test_jet();
        assert!(!jet.enable_afterburner());
        assert!(!jet.afterburner_on());

        jet.takeoff();
        assert!(jet.enable_afterburner());
        assert!(jet.afterburner_on());

        assert!(jet.disable_afterburner());
        assert!(!jet.afterburner_on());
    }

    #[test]
    fn autopilot_requires_airborne() {
        let mut jet = test_jet();
        assert!(!jet.enable_autopilot());

        jet.takeoff();
        assert!(jet.enable_autopilot());
        assert!(jet.autopilot_enabled());

        // disabling is always allowed, even on the ground
        jet.land();
        assert!(jet.disable_autopilot());
        assert!(!jet.autopilot_enabled());
    }

    #[test]
    fn travel_updates_mach_with_afterburner_boost() {
        let mut jet = test_jet();
        jet.configure_fuel_system(2.0, 300.0);
        jet.add_fuel(200.0).unwrap();

        assert!(jet.travel(50.0));
        assert!((jet.mach_speed() - 1500.0 / 767.0).abs() < 1e-9);
        assert_eq!(jet.current_fuel(), Some(175.0));

        jet.takeoff();
        jet.enable_afterburner();
        assert!(jet.travel(50.0));
        assert!((jet.mach_speed() - 1500.0 * 1.25 / 767.0).abs() < 1e-9);
        assert_eq!(jet.current_fuel(), Some(150.0));
    }

    #[test]
    fn travel_shortfall_keeps_fuel() {
        let mut jet = test_jet();
        jet.configure_fuel_system(2.0, 300.0);
        jet.add_fuel(10.0).unwrap();

        assert!(!jet.travel(50.0));
        assert_eq!(jet.current_fuel(), Some(10.0));
    }

    #[test]
    fn maneuvers_require_airborne() {
        let mut jet = test_jet();
        assert_eq!(jet.barrel_roll(), "Jet must be in the air.");
        assert_eq!(jet.immelmann(), "Jet must be airborne.");

        jet.takeoff();
        assert!(jet.barrel_roll().contains("barrel roll at 1000 ft"));
        assert!(jet.immelmann().contains("reverses direction"));
    }

    #[test]
    fn flight_state_machine_is_inherited() {
        let mut jet = test_jet();
        jet.takeoff();
        assert!(jet.climb(10_000.0));
        assert!(!jet.climb(60_000.0));
        assert!(jet.descend(15_000.0));
        assert!(!jet.in_air());
        assert_eq!(jet.current_altitude(), 0.0);
    }

    #[test]
    fn to_dict_includes_every_level() {
        let jet = test_jet();
        let dict = jet.to_dict();

        for key in [
            "id",
            "name",
            "type",
            "max_speed",
            "mpg",
            "fuel_capacity",
            "current_fuel",
            "wingspan",
            "max_altitude",
            "num_passengers",
            "current_altitude",
            "in_air",
            "is_military",
            "afterburner_on",
            "autopilot_enabled",
            "mach_speed",
        ] {
            assert!(dict.contains_key(key), "missing {}", key);
        }
        assert_eq!(dict["type"], "JetPlane");
        assert_eq!(dict["is_military"], true);
        assert_eq!(dict["mach_speed"], 0.0);
    }
}
