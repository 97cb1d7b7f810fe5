//! Bead catalog data model.
//!
//! [`BeadPrototype`] is a catalog entry — the reusable template a user picks
//! from the bead library. Placing one on the loop creates a
//! [`PlacedBead`](crate::strand::PlacedBead) instance that snapshots the
//! prototype's fields. Prototypes and [`Category`] records are loaded through
//! the [`DesignStore`](crate::store::DesignStore) collaborator and are
//! immutable here; catalog management lives in the surrounding application.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::BeadloopError;

/// Identifier of a catalog prototype, assigned by the persistence layer.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct PrototypeId(pub String);

impl fmt::Display for PrototypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a bead category, assigned by the persistence layer.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bead category (glass, wood, gemstone, ...). Read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Persistence-assigned identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Optional category thumbnail reference.
    pub image: Option<String>,
}

/// A catalog entry describing one bead type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeadPrototype {
    /// Persistence-assigned identifier.
    pub id: PrototypeId,
    /// Display name.
    pub name: String,
    /// Category this bead belongs to.
    pub category_id: CategoryId,
    /// Physical diameter in millimeters. Must be positive and finite.
    pub diameter_mm: f32,
    /// Unit price in the shop currency.
    pub unit_price: f32,
    /// Image reference (URL or asset key) for rendering.
    pub image: String,
    /// Precomputed dominant image color, if the catalog pipeline produced
    /// one. Used for string tinting by the renderer; never computed here.
    pub dominant_color: Option<[f32; 3]>,
}

impl BeadPrototype {
    /// Check the fields an add operation depends on.
    ///
    /// # Errors
    ///
    /// Returns [`BeadloopError::InvalidBead`] for a non-positive or
    /// non-finite diameter, a negative or non-finite price, or an empty id.
    pub fn validate(&self) -> Result<(), BeadloopError> {
        if self.id.0.is_empty() {
            return Err(BeadloopError::InvalidBead("empty prototype id".into()));
        }
        if !self.diameter_mm.is_finite() || self.diameter_mm <= 0.0 {
            return Err(BeadloopError::InvalidBead(format!(
                "diameter must be positive, got {}",
                self.diameter_mm
            )));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(BeadloopError::InvalidBead(format!(
                "price must be non-negative, got {}",
                self.unit_price
            )));
        }
        Ok(())
    }
}

/// Loaded catalog indexed for id and category lookup.
///
/// The storefront UI resolves a click on a library tile to a prototype by
/// id, and filters the library per category tab; both paths go through
/// here instead of scanning the raw load result.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    by_id: FxHashMap<PrototypeId, BeadPrototype>,
    by_category: FxHashMap<CategoryId, Vec<PrototypeId>>,
}

impl CatalogIndex {
    /// Build an index from a catalog load result. Later duplicates of an
    /// id replace earlier ones.
    #[must_use]
    pub fn from_prototypes(prototypes: Vec<BeadPrototype>) -> Self {
        let mut by_id = FxHashMap::default();
        let mut by_category: FxHashMap<CategoryId, Vec<PrototypeId>> =
            FxHashMap::default();
        for proto in prototypes {
            by_category
                .entry(proto.category_id.clone())
                .or_default()
                .push(proto.id.clone());
            if by_id.insert(proto.id.clone(), proto).is_some() {
                log::debug!("duplicate prototype id in catalog load");
            }
        }
        Self { by_id, by_category }
    }

    /// Look up a prototype by id.
    #[must_use]
    pub fn get(&self, id: &PrototypeId) -> Option<&BeadPrototype> {
        self.by_id.get(id)
    }

    /// Prototype ids in a category, in load order. Empty for unknown
    /// categories.
    #[must_use]
    pub fn in_category(&self, category: &CategoryId) -> &[PrototypeId] {
        match self.by_category.get(category) {
            Some(ids) => ids,
            None => &[],
        }
    }

    /// Number of indexed prototypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the index holds no prototypes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Prototype builder shared by test modules across the crate.
#[cfg(test)]
pub(crate) fn test_prototype(id: &str, diameter_mm: f32) -> BeadPrototype {
    BeadPrototype {
        id: PrototypeId(id.to_owned()),
        name: format!("bead-{id}"),
        category_id: CategoryId("glass".to_owned()),
        diameter_mm,
        unit_price: 10.0,
        image: format!("beads/{id}.png"),
        dominant_color: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_prototype_passes() {
        assert!(test_prototype("a", 10.0).validate().is_ok());
    }

    #[test]
    fn zero_diameter_rejected() {
        let proto = test_prototype("a", 0.0);
        assert!(matches!(
            proto.validate(),
            Err(BeadloopError::InvalidBead(_))
        ));
    }

    #[test]
    fn negative_diameter_rejected() {
        let proto = test_prototype("a", -3.0);
        assert!(proto.validate().is_err());
    }

    #[test]
    fn nan_diameter_rejected() {
        let proto = test_prototype("a", f32::NAN);
        assert!(proto.validate().is_err());
    }

    #[test]
    fn negative_price_rejected() {
        let mut proto = test_prototype("a", 10.0);
        proto.unit_price = -1.0;
        assert!(proto.validate().is_err());
    }

    #[test]
    fn empty_id_rejected() {
        let proto = test_prototype("", 10.0);
        assert!(proto.validate().is_err());
    }

    #[test]
    fn prototype_round_trips_through_json() {
        let proto = test_prototype("a", 12.5);
        let json = serde_json::to_string(&proto).unwrap();
        let parsed: BeadPrototype = serde_json::from_str(&json).unwrap();
        assert_eq!(proto, parsed);
    }

    #[test]
    fn index_resolves_by_id_and_category() {
        let mut wood = test_prototype("w1", 8.0);
        wood.category_id = CategoryId("wood".to_owned());
        let index = CatalogIndex::from_prototypes(vec![
            test_prototype("g1", 10.0),
            test_prototype("g2", 12.0),
            wood,
        ]);

        assert_eq!(index.len(), 3);
        assert_eq!(
            index.get(&PrototypeId("g2".to_owned())).map(|p| p.diameter_mm),
            Some(12.0)
        );
        assert_eq!(index.in_category(&CategoryId("glass".to_owned())).len(), 2);
        assert_eq!(index.in_category(&CategoryId("wood".to_owned())).len(), 1);
        assert!(index.in_category(&CategoryId("metal".to_owned())).is_empty());
    }

    #[test]
    fn index_keeps_last_duplicate() {
        let mut second = test_prototype("a", 10.0);
        second.diameter_mm = 14.0;
        let index = CatalogIndex::from_prototypes(vec![
            test_prototype("a", 10.0),
            second,
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get(&PrototypeId("a".to_owned())).map(|p| p.diameter_mm),
            Some(14.0)
        );
    }
}
