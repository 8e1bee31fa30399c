//! Static point-of-interest catalog.
//!
//! The catalog is loaded once at startup and never mutated. The shipped
//! campus catalog is bundled from `data/poi_catalog.json`.
//!
//! ```
//! use wayfind_logic::catalog::{PoiCatalog, PoiCategory};
//!
//! let catalog = PoiCatalog::builtin().unwrap();
//! let cafeteria = catalog.get("CAFETERIA").unwrap();
//! assert_eq!(cafeteria.location.floor, 1);
//! assert!(!catalog.by_category(PoiCategory::Medical).is_empty());
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::facility::Point;

const BUILTIN_CATALOG_JSON: &str = include_str!("../../../data/poi_catalog.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Medical,
    Service,
    Emergency,
    Transport,
}

impl PoiCategory {
    pub const ALL: [PoiCategory; 4] = [
        PoiCategory::Medical,
        PoiCategory::Service,
        PoiCategory::Emergency,
        PoiCategory::Transport,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PoiCategory::Medical => "medical",
            PoiCategory::Service => "service",
            PoiCategory::Emergency => "emergency",
            PoiCategory::Transport => "transport",
        }
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, located destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub category: PoiCategory,
    pub building: String,
    pub floor: i32,
    pub location: Point,
}

/// Immutable list of POIs with unique ids.
#[derive(Debug, Clone, Default)]
pub struct PoiCatalog {
    pois: Vec<Poi>,
}

impl PoiCatalog {
    /// Build a catalog, rejecting duplicate ids and floor mismatches.
    pub fn new(pois: Vec<Poi>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for poi in &pois {
            if !seen.insert(poi.id.as_str()) {
                return Err(CatalogError::DuplicateId(poi.id.clone()));
            }
            if poi.floor != poi.location.floor {
                return Err(CatalogError::FloorMismatch {
                    id: poi.id.clone(),
                    floor: poi.floor,
                    location_floor: poi.location.floor,
                });
            }
        }
        Ok(Self { pois })
    }

    /// Parse a JSON array of POIs.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let pois: Vec<Poi> = serde_json::from_str(json)?;
        let catalog = Self::new(pois)?;
        log::info!("Loaded POI catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    pub fn get(&self, id: &str) -> Option<&Poi> {
        self.pois.iter().find(|p| p.id == id)
    }

    /// Like [`get`](Self::get), but a miss is an error.
    pub fn require(&self, id: &str) -> Result<&Poi, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownPoi(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Poi> {
        self.pois.iter()
    }

    pub fn as_slice(&self) -> &[Poi] {
        &self.pois
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    pub fn by_category(&self, category: PoiCategory) -> Vec<&Poi> {
        self.pois.iter().filter(|p| p.category == category).collect()
    }

    /// POIs on a given floor, e.g. for labelling a floor plan.
    pub fn on_floor(&self, floor: i32) -> Vec<&Poi> {
        self.pois
            .iter()
            .filter(|p| p.location.floor == floor)
            .collect()
    }

    /// Case-insensitive substring filter over name, category and building.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Poi> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.pois
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.category.as_str().contains(&needle)
                    || p.building.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
