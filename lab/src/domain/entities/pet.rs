//! Pet entity

use std::fmt;

use super::entity::{entity_any, put, Entity, EntityHeader, EntityKind, EntitySnapshot};

/// Species used when none is given
pub const UNKNOWN_SPECIES: &str = "Unknown";

#[derive(Debug, Clone)]
pub struct Pet {
    header: EntityHeader,
    age: u32,
    species: String,
}

impl Pet {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self::with_species(name, age, UNKNOWN_SPECIES)
    }

    pub fn with_species(name: impl Into<String>, age: u32, species: impl Into<String>) -> Self {
        let pet = Self {
            header: EntityHeader::new(name),
            age,
            species: species.into(),
        };
        tracing::debug!(entity = %pet.name(), age = age, species = %pet.species, "Created pet");
        pet
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    /// One year older; `false` (age unchanged) if the age cannot grow
    pub fn birthday(&mut self) -> bool {
        let Some(age) = self.age.checked_add(1) else {
            tracing::warn!(entity = %self.name(), age = self.age, "Age counter full");
            return false;
        };
        self.age = age;
        tracing::info!(entity = %self.name(), age = self.age, "Birthday");
        true
    }
}

impl Entity for Pet {
    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Pet
    }

    fn write_fields(&self, out: &mut EntitySnapshot) {
        put(out, "age", self.age);
        put(out, "species", self.species.as_str());
    }

    entity_any!();
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pet(name={}, age={}, species={}, id={})",
            self.name(),
            self.age,
            self.species,
            self.id()
        )
    }
}
