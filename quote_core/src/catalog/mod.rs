//! # Catalog Snapshot
//!
//! Read-only reference data the pricing engine looks up: laminations (with
//! their paired E-I core piece), winding wire specs, accessories and
//! customers. The catalog provider owns the lifecycle; this crate only reads
//! a snapshot taken at calculation time.
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "laminations":   [ { "id": 1, "name": "EI-66", "price_per_kg": 45000.0,
//!                        "core_name": "Bobbin EI-66", "core_price": 10000.0 } ],
//!   "winding_specs": [ { "id": 10, "name": "Cu 0.35", "diameter_mm": 0.35,
//!                        "price_per_kg": 280000.0, "material": "COPPER",
//!                        "winding_type": "PRIMARY" } ],
//!   "accessories":   [ { "id": 20, "name": "Lead wire", "unit_price": 5000.0,
//!                        "unit_type": "PER_PIECE", "accessory_type": "ELECTRIC_WIRE" } ],
//!   "customers":     [ { "id": 3, "name": "Dien May Co." } ]
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quote_core::catalog::{Catalog, AccessorySpec, SpecId};
//!
//! let catalog = Catalog::builder()
//!     .accessory(AccessorySpec::new(SpecId(20), "Mounting bolt", 1500.0))
//!     .build();
//!
//! assert!(catalog.accessory(SpecId(20)).is_some());
//! assert!(catalog.accessory(SpecId(21)).is_none());
//! ```

pub mod accessory;
pub mod customer;
pub mod lamination;
pub mod sample;
pub mod winding;

pub use accessory::{AccessorySpec, AccessoryType, UnitType};
pub use customer::Customer;
pub use lamination::LaminationSpec;
pub use winding::{WindingMaterial, WindingSpec, WindingType};

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

// ============================================================================
// Identifiers
// ============================================================================

/// Catalog identifier.
///
/// Every catalog kind shares one id type. Deserialization accepts JSON
/// numbers and numeric strings, so `12` and `"12"` name the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpecId(pub u64);

impl fmt::Display for SpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SpecId {
    fn from(id: u64) -> Self {
        SpecId(id)
    }
}

impl Serialize for SpecId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for SpecId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(IdVisitor)?
            .ok_or_else(|| de::Error::custom("expected a non-negative integer id"))
    }
}

/// Parses an id into `Some` or `None`; shared by `SpecId` and `optional_id`.
struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = Option<SpecId>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer id, a numeric string, or null")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(SpecId(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(u64::try_from(v).ok().map(SpecId))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 {
            Ok(Some(SpecId(v as u64)))
        } else {
            Ok(None)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.trim().parse::<u64>().ok().map(SpecId))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(IdVisitor)
    }
}

/// Serde adapter for optional id references coming from form selects.
///
/// `null`, a missing field, `""` and anything non-numeric mean "nothing
/// selected".
pub mod optional_id {
    use serde::{Deserializer, Serialize, Serializer};

    use super::{IdVisitor, SpecId};

    pub fn serialize<S: Serializer>(id: &Option<SpecId>, serializer: S) -> Result<S::Ok, S::Error> {
        id.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<SpecId>, D::Error> {
        deserializer.deserialize_any(IdVisitor)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Wire shape of a catalog snapshot: plain arrays, as the catalog provider
/// returns them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub laminations: Vec<LaminationSpec>,
    #[serde(default)]
    pub winding_specs: Vec<WindingSpec>,
    #[serde(default)]
    pub accessories: Vec<AccessorySpec>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// Indexed catalog snapshot.
///
/// Records are keyed by [`SpecId`]. When a snapshot repeats an id the first
/// record wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CatalogSnapshot", into = "CatalogSnapshot")]
pub struct Catalog {
    laminations: BTreeMap<SpecId, LaminationSpec>,
    winding_specs: BTreeMap<SpecId, WindingSpec>,
    accessories: BTreeMap<SpecId, AccessorySpec>,
    customers: BTreeMap<SpecId, Customer>,
}

impl Catalog {
    /// Start building a catalog in code.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Index a snapshot.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        let mut catalog = Catalog::default();
        for spec in snapshot.laminations {
            insert_first(&mut catalog.laminations, spec.id, spec, "lamination");
        }
        for spec in snapshot.winding_specs {
            insert_first(&mut catalog.winding_specs, spec.id, spec, "winding spec");
        }
        for spec in snapshot.accessories {
            insert_first(&mut catalog.accessories, spec.id, spec, "accessory");
        }
        for customer in snapshot.customers {
            insert_first(&mut catalog.customers, customer.id, customer, "customer");
        }
        catalog
    }

    /// Flatten back into the array shape, ordered by id.
    pub fn to_snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            laminations: self.laminations.values().cloned().collect(),
            winding_specs: self.winding_specs.values().cloned().collect(),
            accessories: self.accessories.values().cloned().collect(),
            customers: self.customers.values().cloned().collect(),
        }
    }

    /// Look up a lamination by id.
    pub fn lamination(&self, id: SpecId) -> Option<&LaminationSpec> {
        self.laminations.get(&id)
    }

    /// Look up a winding wire spec by id.
    pub fn winding_spec(&self, id: SpecId) -> Option<&WindingSpec> {
        self.winding_specs.get(&id)
    }

    /// Look up an accessory by id.
    pub fn accessory(&self, id: SpecId) -> Option<&AccessorySpec> {
        self.accessories.get(&id)
    }

    /// Look up a customer by id.
    pub fn customer(&self, id: SpecId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    pub fn laminations(&self) -> impl Iterator<Item = &LaminationSpec> {
        self.laminations.values()
    }

    pub fn winding_specs(&self) -> impl Iterator<Item = &WindingSpec> {
        self.winding_specs.values()
    }

    pub fn accessories(&self) -> impl Iterator<Item = &AccessorySpec> {
        self.accessories.values()
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    /// Total number of records across all kinds.
    pub fn len(&self) -> usize {
        self.laminations.len() + self.winding_specs.len() + self.accessories.len() + self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<CatalogSnapshot> for Catalog {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Catalog::from_snapshot(snapshot)
    }
}

impl From<Catalog> for CatalogSnapshot {
    fn from(catalog: Catalog) -> Self {
        catalog.to_snapshot()
    }
}

fn insert_first<T>(map: &mut BTreeMap<SpecId, T>, id: SpecId, value: T, kind: &str) {
    match map.entry(id) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        Entry::Occupied(_) => {
            warn!(%id, kind, "duplicate catalog id ignored");
        }
    }
}

/// Fluent builder for catalogs assembled in code (tests, demos).
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    snapshot: CatalogSnapshot,
}

impl CatalogBuilder {
    pub fn lamination(mut self, spec: LaminationSpec) -> Self {
        self.snapshot.laminations.push(spec);
        self
    }

    pub fn winding_spec(mut self, spec: WindingSpec) -> Self {
        self.snapshot.winding_specs.push(spec);
        self
    }

    pub fn accessory(mut self, spec: AccessorySpec) -> Self {
        self.snapshot.accessories.push(spec);
        self
    }

    pub fn customer(mut self, customer: Customer) -> Self {
        self.snapshot.customers.push(customer);
        self
    }

    pub fn build(self) -> Catalog {
        Catalog::from_snapshot(self.snapshot)
    }
}
