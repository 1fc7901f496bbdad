//! Entity base
//!
//! Identity, type tag and snapshot serialization shared by every lab object.
//! Concrete variants hold an [`EntityHeader`] and implement [`Entity`] by
//! writing their own fields into the snapshot; the header fields and the
//! `type` tag are written by the trait itself.

use std::any::Any;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A serialized view of an entity: plain scalar/optional values keyed by field name
pub type EntitySnapshot = Map<String, Value>;

/// Unique identifier for a lab entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EntityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| format!("Invalid entity id: {}", s))
    }
}

/// Concrete variant tag, serialized as the snapshot's `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    TransportMode,
    MotorVehicle,
    Motorcycle,
    Airplane,
    JetPlane,
    Pet,
    Team,
    VendingMachine,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::TransportMode => "TransportMode",
            EntityKind::MotorVehicle => "MotorVehicle",
            EntityKind::Motorcycle => "Motorcycle",
            EntityKind::Airplane => "Airplane",
            EntityKind::JetPlane => "JetPlane",
            EntityKind::Pet => "Pet",
            EntityKind::Team => "Team",
            EntityKind::VendingMachine => "VendingMachine",
        }
    }

    /// Whether the variant belongs to the transport hierarchy
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            EntityKind::TransportMode
                | EntityKind::MotorVehicle
                | EntityKind::Motorcycle
                | EntityKind::Airplane
                | EntityKind::JetPlane
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "").as_str() {
            "transportmode" => Ok(EntityKind::TransportMode),
            "motorvehicle" => Ok(EntityKind::MotorVehicle),
            "motorcycle" => Ok(EntityKind::Motorcycle),
            "airplane" => Ok(EntityKind::Airplane),
            "jetplane" => Ok(EntityKind::JetPlane),
            "pet" => Ok(EntityKind::Pet),
            "team" => Ok(EntityKind::Team),
            "vendingmachine" => Ok(EntityKind::VendingMachine),
            _ => Err(format!("Unknown entity kind: {}", s)),
        }
    }
}

/// Identity shared by every entity. The id is assigned once, here.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityHeader {
    id: EntityId,
    name: String,
    created_at: DateTime<Utc>,
}

impl EntityHeader {
    pub fn new(name: impl Into<String>) -> Self {
        let header = Self {
            id: EntityId::new(),
            name: name.into(),
            created_at: Utc::now(),
        };
        tracing::debug!(id = %header.id, name = %header.name, "Assigned entity id");
        header
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Capability set every lab object supports
pub trait Entity: Any + Send + Sync + fmt::Debug {
    fn header(&self) -> &EntityHeader;

    fn kind(&self) -> EntityKind;

    /// Write the variant's own fields (every level it is composed of) into `out`
    fn write_fields(&self, out: &mut EntitySnapshot);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn id(&self) -> EntityId {
        self.header().id()
    }

    fn name(&self) -> &str {
        self.header().name()
    }

    /// Snapshot with `id`, `name`, `type`, `created_at` and all variant fields
    fn to_dict(&self) -> EntitySnapshot {
        let header = self.header();
        let mut out = EntitySnapshot::new();
        out.insert("id".to_string(), Value::String(header.id().to_string()));
        out.insert("name".to_string(), Value::String(header.name().to_string()));
        out.insert(
            "type".to_string(),
            Value::String(self.kind().as_str().to_string()),
        );
        out.insert(
            "created_at".to_string(),
            Value::String(header.created_at().to_rfc3339()),
        );
        self.write_fields(&mut out);
        out
    }
}

/// Insert a serializable value into a snapshot. Non-finite floats become `null`.
pub fn put<V: Into<Value>>(out: &mut EntitySnapshot, key: &str, value: V) {
    out.insert(key.to_string(), value.into());
}

/// Pretty JSON for a snapshot, keys in sorted order (the map keeps them
/// sorted). Falls back to `{}`.
pub fn pretty_json(snapshot: &EntitySnapshot) -> String {
    match serde_json::to_string_pretty(snapshot) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(error = %e, "Snapshot serialization failed");
            "{}".to_string()
        }
    }
}

/// Implements the `as_any` plumbing of [`Entity`] for a concrete type.
macro_rules! entity_any {
    () => {
        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }
    };
}

pub(crate) use entity_any;
