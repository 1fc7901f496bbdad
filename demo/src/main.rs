//! OOP Lab demo
//!
//! Runs the vehicle simulation, lists every registered object as JSON and
//! then asks the configured explainer to describe each one.
//!
//! Set `EXPLAINER_URL` (and optionally `EXPLAINER_MODEL`, `EXPLAINER_API_KEY`)
//! to use a real chat-completions server; otherwise descriptions fall back to
//! a fixed message.

use std::sync::Arc;

use anyhow::Result;
use oop_lab::adapters::{HttpExplainer, NoopExplainer};
use oop_lab::domain::capabilities::{Flyable, Fuelable, TransportLike};
use oop_lab::domain::entities::{
    pretty_json, Airplane, Entity, EntityKind, JetPlane, Motorcycle, NewAirplane, NewJetPlane,
    NewMotorcycle, Pet, Team, VendingMachine,
};
use oop_lab::domain::ports::Explainer;
use oop_lab::{Config, DescriptionService, LockExt, ObjectRegistry};
use tracing_subscriber::EnvFilter;

const SEPARATOR: &str = "----------------------------------------";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,oop_lab=debug")),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Running vehicle simulation demo");
    let mut registry = ObjectRegistry::new();

    demo_motorcycle(&mut registry)?;
    println!("\n{}\n", SEPARATOR);
    demo_airplane(&mut registry)?;
    println!("\n{}\n", SEPARATOR);
    demo_jet_plane(&mut registry)?;
    println!("\n{}\n", SEPARATOR);
    demo_standalone(&mut registry);

    show_registered_objects(&registry);

    let explainer: Arc<dyn Explainer> = match HttpExplainer::from_config(&config)? {
        Some(client) => {
            tracing::info!(model = %config.explainer_model, "Using remote explainer");
            Arc::new(client)
        }
        None => {
            tracing::warn!("EXPLAINER_URL not set, descriptions will use the fallback");
            Arc::new(NoopExplainer)
        }
    };
    describe_registered_objects(&registry, &DescriptionService::new(explainer)).await;

    tracing::info!("Demo complete");
    Ok(())
}

fn demo_motorcycle(registry: &mut ObjectRegistry) -> Result<()> {
    tracing::info!("=== Motorcycle Demo ===");

    let bike = registry.insert(Motorcycle::new(NewMotorcycle {
        name: "Kawasaki Ninja ZX-6R".to_string(),
        max_speed: 165.0,
        horsepower: 130,
        weight_lbs: 430.0,
        seat_height: Some(32.7),
        is_offroad_capable: false,
        has_abs: true,
    }));
    let mut bike = bike.write_lock();

    bike.start_engine();
    bike.configure_fuel_system(42.0, 5.0);
    bike.add_fuel(3.0)?;

    bike.travel(40.0);
    println!("{}", bike.wheelie());
    println!("{}", bike.lean(35.0));
    println!("{}", bike.lean(60.0));
    println!("{}", bike);
    Ok(())
}

fn demo_airplane(registry: &mut ObjectRegistry) -> Result<()> {
    tracing::info!("=== Airplane Demo ===");

    let plane = registry.insert(Airplane::new(NewAirplane {
        name: "Cessna 172".to_string(),
        max_speed: 140.0,
        wingspan: Some(36.0),
        max_altitude: Some(13000.0),
        num_passengers: Some(4),
    }));
    let mut plane = plane.write_lock();

    plane.configure_fuel_system(15.0, 50.0);
    plane.add_fuel(20.0)?;

    plane.takeoff();
    plane.climb(3000.0);
    plane.climb(6000.0);
    plane.descend(7000.0);
    plane.land();

    plane.travel(100.0);
    println!("{}", plane);
    Ok(())
}

fn demo_jet_plane(registry: &mut ObjectRegistry) -> Result<()> {
    tracing::info!("=== JetPlane Demo ===");

    let jet = registry.insert(JetPlane::new(NewJetPlane {
        name: "F-22 Raptor".to_string(),
        max_speed: 1500.0,
        wingspan: 44.5,
        max_altitude: 65000.0,
        num_passengers: 1,
        is_military: true,
    }));
    let mut jet = jet.write_lock();

    // jet fuel burn rate
    jet.configure_fuel_system(2.0, 300.0);
    jet.add_fuel(200.0)?;

    jet.takeoff();
    jet.climb(10000.0);
    jet.enable_afterburner();
    jet.travel(50.0);

    println!("{}", jet.barrel_roll());
    println!("{}", jet.immelmann());

    jet.disable_afterburner();
    jet.descend(15000.0);
    jet.land();
    println!("{}", jet);
    Ok(())
}

fn demo_standalone(registry: &mut ObjectRegistry) {
    tracing::info!("=== Standalone Objects ===");

    let pet = registry.insert(Pet::with_species("Rex", 3, "Dog"));
    pet.write_lock().birthday();

    let team = registry.insert(Team::new("Rovers"));
    {
        let mut team = team.write_lock();
        team.record_win();
        team.record_win();
        team.record_win();
        team.record_loss();
    }

    let machine = registry.insert(VendingMachine::new("Lobby Snacks", 5));
    {
        let mut machine = machine.write_lock();
        machine.purchase(3);
        machine.purchase(3);
        machine.restock(10);
    }

    println!("{}", pet.read_lock());
    println!("{}", team.read_lock());
    println!("{}", machine.read_lock());
}

fn show_registered_objects(registry: &ObjectRegistry) {
    tracing::info!(count = registry.len(), "Listing all registered simulation objects");

    if registry.is_empty() {
        println!("No objects registered.");
        return;
    }

    println!("\nRegistered Objects:");
    println!("-------------------");
    for snapshot in registry.snapshots() {
        let id = snapshot.get("id").and_then(|v| v.as_str()).unwrap_or_default();
        let kind = snapshot.get("type").and_then(|v| v.as_str()).unwrap_or_default();
        println!("ID: {} | Type: {}", id, kind);
        println!("{}\n", pretty_json(&snapshot));
    }
}

async fn describe_registered_objects(
    registry: &ObjectRegistry,
    descriptions: &DescriptionService<dyn Explainer>,
) {
    println!("\nDescriptions:");
    println!("-------------");
    for snapshot in registry.snapshots() {
        let name = snapshot
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let text = descriptions.describe_snapshot(snapshot).await;
        println!("{}: {}\n", name, text);
    }

    for id in registry.ids_of_kind(EntityKind::Team) {
        let Some(handle) = registry.lookup(&id) else {
            continue;
        };
        let team = {
            let guard = handle.read_lock();
            guard.as_any().downcast_ref::<Team>().cloned()
        };
        if let Some(team) = team {
            let summary = descriptions.summarize_team(&team).await;
            println!("{} summary: {}", team.name(), summary);
        }
    }
}
