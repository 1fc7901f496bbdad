//! Test fixtures
//!
//! Factory functions for creating test entities with realistic values.

use crate::domain::entities::{
    Airplane, JetPlane, MotorVehicle, Motorcycle, NewAirplane, NewJetPlane, NewMotorVehicle,
    NewMotorcycle, Team, VendingMachine,
};

/// Create a small private plane
pub fn test_cessna() -> Airplane {
    Airplane::new(NewAirplane {
        name: "Cessna 172".to_string(),
        max_speed: 140.0,
        wingspan: Some(36.0),
        max_altitude: Some(13000.0),
        num_passengers: Some(4),
    })
}

/// Create a military jet
pub fn test_jet() -> JetPlane {
    JetPlane::new(NewJetPlane {
        name: "F-22 Raptor".to_string(),
        max_speed: 1500.0,
        wingspan: 44.5,
        max_altitude: 65000.0,
        num_passengers: 1,
        is_military: true,
    })
}

/// Create a sport bike
pub fn test_motorcycle() -> Motorcycle {
    Motorcycle::new(NewMotorcycle {
        name: "Kawasaki Ninja ZX-6R".to_string(),
        max_speed: 165.0,
        horsepower: 130,
        weight_lbs: 430.0,
        seat_height: Some(32.7),
        is_offroad_capable: false,
        has_abs: true,
    })
}

/// Create a pickup truck
pub fn test_truck() -> MotorVehicle {
    MotorVehicle::new(NewMotorVehicle {
        name: "F-150".to_string(),
        max_speed: 110.0,
        horsepower: Some(400),
        weight_lbs: Some(4700.0),
    })
}

/// Create a team with a 3-1 record
pub fn test_team() -> Team {
    Team::with_record("Rovers", 3, 1)
}

/// Create a vending machine holding five items
pub fn test_vending_machine() -> VendingMachine {
    VendingMachine::new("Lobby Snacks", 5)
}
