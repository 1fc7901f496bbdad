//! Domain entities
//!
//! Every lab object: the transport hierarchy (flattened into shared building
//! blocks plus capability traits) and the standalone entities.

pub mod airplane;
pub mod entity;
pub mod jet_plane;
pub mod motor_vehicle;
pub mod motorcycle;
pub mod pet;
pub mod power;
pub mod team;
pub mod transport;
pub mod vending_machine;

pub use airplane::{Airframe, Airplane, NewAirplane};
pub use entity::{pretty_json, Entity, EntityHeader, EntityId, EntityKind, EntitySnapshot};
pub use jet_plane::{JetPlane, NewJetPlane, AFTERBURNER_BOOST, SPEED_OF_SOUND_MPH};
pub use motor_vehicle::{MotorCore, MotorVehicle, NewMotorVehicle};
pub use motorcycle::{Motorcycle, NewMotorcycle, MAX_SAFE_LEAN_DEG};
pub use pet::{Pet, UNKNOWN_SPECIES};
pub use power::{Draw, EvSystem, FuelSystem};
pub use team::Team;
pub use transport::{TransportCore, TransportMode};
pub use vending_machine::VendingMachine;
