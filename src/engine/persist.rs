//! Persistence payload assembly for `DesignEngine`.
//!
//! The engine snapshots its own state into serde payloads and hands them
//! to the application's collaborators. It never learns how they are
//! stored.

use super::DesignEngine;
use crate::catalog::BeadPrototype;
use crate::error::BeadloopError;
use crate::store::{
    AuthProvider, DesignId, DesignPayload, DesignStore, OrderId,
    OrderPayload, ShippingInfo, SnapshotSource,
};
use crate::strand::PlacedBead;

impl DesignEngine {
    /// Placed prototypes in strand order, for payload assembly.
    fn placed_prototypes(&self) -> Vec<BeadPrototype> {
        self.strand
            .beads()
            .iter()
            .map(PlacedBead::prototype)
            .cloned()
            .collect()
    }

    /// Assemble a design-save payload from current state.
    ///
    /// # Errors
    ///
    /// [`BeadloopError::NotSignedIn`] without an authenticated user;
    /// snapshot capture errors pass through.
    pub fn design_payload(
        &self,
        auth: &dyn AuthProvider,
        snapshot: &dyn SnapshotSource,
    ) -> Result<DesignPayload, BeadloopError> {
        let user = auth.current_user().ok_or(BeadloopError::NotSignedIn)?;
        let thumbnail_png = snapshot.capture()?;
        Ok(DesignPayload {
            user,
            beads: self.placed_prototypes(),
            circumference_cm: self.layout.circumference_cm,
            total_price: self.strand.total_price(),
            thumbnail_png,
        })
    }

    /// Save the current loop as a design.
    ///
    /// # Errors
    ///
    /// Payload assembly errors plus [`BeadloopError::Store`] from the
    /// persistence call.
    pub fn save_design(
        &self,
        store: &dyn DesignStore,
        auth: &dyn AuthProvider,
        snapshot: &dyn SnapshotSource,
    ) -> Result<DesignId, BeadloopError> {
        let payload = self.design_payload(auth, snapshot)?;
        let id = store.save_design(&payload)?;
        log::debug!(
            "design {id} saved: {} beads, {:.1} cm",
            payload.beads.len(),
            payload.circumference_cm
        );
        Ok(id)
    }

    /// Assemble an order payload from current state and shipping details.
    ///
    /// # Errors
    ///
    /// [`BeadloopError::NotSignedIn`] without an authenticated user.
    pub fn order_payload(
        &self,
        auth: &dyn AuthProvider,
        shipping: ShippingInfo,
    ) -> Result<OrderPayload, BeadloopError> {
        let user = auth.current_user().ok_or(BeadloopError::NotSignedIn)?;
        Ok(OrderPayload {
            user,
            beads: self.placed_prototypes(),
            circumference_cm: self.layout.circumference_cm,
            total_price: self.strand.total_price(),
            shipping,
        })
    }

    /// Create an order for the current loop.
    ///
    /// # Errors
    ///
    /// Payload assembly errors plus [`BeadloopError::Store`] from the
    /// persistence call.
    pub fn create_order(
        &self,
        store: &dyn DesignStore,
        auth: &dyn AuthProvider,
        shipping: ShippingInfo,
    ) -> Result<OrderId, BeadloopError> {
        let payload = self.order_payload(auth, shipping)?;
        let id = store.create_order(&payload)?;
        log::debug!(
            "order {id} created: {} beads, total {:.2}",
            payload.beads.len(),
            payload.total_price
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::catalog::{test_prototype, Category};
    use crate::store::UserId;

    struct FakeStore {
        saved: RefCell<Vec<DesignPayload>>,
        ordered: RefCell<Vec<OrderPayload>>,
    }

    impl FakeStore {
        fn new() -> Self {
            Self {
                saved: RefCell::new(Vec::new()),
                ordered: RefCell::new(Vec::new()),
            }
        }
    }

    impl DesignStore for FakeStore {
        fn load_catalog(&self) -> Result<Vec<BeadPrototype>, BeadloopError> {
            Ok(vec![test_prototype("a", 10.0)])
        }

        fn load_categories(&self) -> Result<Vec<Category>, BeadloopError> {
            Ok(Vec::new())
        }

        fn save_design(
            &self,
            payload: &DesignPayload,
        ) -> Result<DesignId, BeadloopError> {
            self.saved.borrow_mut().push(payload.clone());
            Ok(DesignId("design-1".to_owned()))
        }

        fn create_order(
            &self,
            payload: &OrderPayload,
        ) -> Result<OrderId, BeadloopError> {
            self.ordered.borrow_mut().push(payload.clone());
            Ok(OrderId("order-1".to_owned()))
        }
    }

    struct SignedIn;

    impl AuthProvider for SignedIn {
        fn current_user(&self) -> Option<UserId> {
            Some(UserId("user-7".to_owned()))
        }
    }

    struct SignedOut;

    impl AuthProvider for SignedOut {
        fn current_user(&self) -> Option<UserId> {
            None
        }
    }

    struct FakeRenderer;

    impl SnapshotSource for FakeRenderer {
        fn capture(&self) -> Result<Vec<u8>, BeadloopError> {
            Ok(vec![0x89, 0x50, 0x4e, 0x47])
        }
    }

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            recipient: "Alex".to_owned(),
            phone: "555-0100".to_owned(),
            address: "1 Loop Way".to_owned(),
        }
    }

    #[test]
    fn save_design_snapshots_current_state() {
        let mut engine = DesignEngine::new();
        let mut proto = test_prototype("a", 10.0);
        proto.unit_price = 24.0;
        let _ = engine.add_bead(proto).unwrap();

        let store = FakeStore::new();
        let id = engine
            .save_design(&store, &SignedIn, &FakeRenderer)
            .unwrap();
        assert_eq!(id, DesignId("design-1".to_owned()));

        let saved = store.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].user, UserId("user-7".to_owned()));
        assert_eq!(saved[0].beads.len(), 1);
        assert_eq!(saved[0].circumference_cm, 12.0);
        assert_eq!(saved[0].total_price, 24.0);
        assert!(!saved[0].thumbnail_png.is_empty());
    }

    #[test]
    fn save_requires_sign_in() {
        let engine = DesignEngine::new();
        let store = FakeStore::new();
        assert!(matches!(
            engine.save_design(&store, &SignedOut, &FakeRenderer),
            Err(BeadloopError::NotSignedIn)
        ));
        assert!(store.saved.borrow().is_empty());
    }

    #[test]
    fn order_carries_shipping_and_totals() {
        let mut engine = DesignEngine::new();
        for i in 0..3 {
            let mut proto = test_prototype(&format!("b{i}"), 10.0);
            proto.unit_price = 5.0;
            let _ = engine.add_bead(proto).unwrap();
        }

        let store = FakeStore::new();
        let id = engine
            .create_order(&store, &SignedIn, shipping())
            .unwrap();
        assert_eq!(id, OrderId("order-1".to_owned()));

        let ordered = store.ordered.borrow();
        assert_eq!(ordered[0].total_price, 15.0);
        assert_eq!(ordered[0].beads.len(), 3);
        assert_eq!(ordered[0].shipping.recipient, "Alex");
    }

    #[test]
    fn order_requires_sign_in() {
        let engine = DesignEngine::new();
        let store = FakeStore::new();
        assert!(matches!(
            engine.create_order(&store, &SignedOut, shipping()),
            Err(BeadloopError::NotSignedIn)
        ));
    }
}
