//! Collaborator seams to the surrounding storefront.
//!
//! The engine never talks HTTP or SQL. The application implements these
//! traits over its persistence API, renderer, and auth/session layer; the
//! engine only assembles payloads from its current state and hands them
//! over. Payloads are serde-serializable so the application can ship them
//! to whatever wire format it uses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{BeadPrototype, Category};
use crate::error::BeadloopError;

/// Identifier of a signed-in user, assigned by the auth provider.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a saved design, assigned by the persistence layer.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct DesignId(pub String);

impl fmt::Display for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a created order, assigned by the persistence layer.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shipping details collected at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingInfo {
    /// Recipient name.
    pub recipient: String,
    /// Contact phone number.
    pub phone: String,
    /// Delivery address.
    pub address: String,
}

/// Everything needed to persist the current loop as a saved design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPayload {
    /// Owning user.
    pub user: UserId,
    /// Placed prototypes in strand order.
    pub beads: Vec<BeadPrototype>,
    /// Derived circumference at save time, in centimeters.
    pub circumference_cm: f32,
    /// Running total price at save time.
    pub total_price: f32,
    /// PNG thumbnail of the rendered loop.
    pub thumbnail_png: Vec<u8>,
}

/// Everything needed to turn the current loop into an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Ordering user.
    pub user: UserId,
    /// Placed prototypes in strand order.
    pub beads: Vec<BeadPrototype>,
    /// Derived circumference at checkout, in centimeters.
    pub circumference_cm: f32,
    /// Total price at checkout.
    pub total_price: f32,
    /// Shipping details.
    pub shipping: ShippingInfo,
}

/// Persistence API of the surrounding application.
pub trait DesignStore {
    /// Load the full bead catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BeadloopError::Store`] when the backend fails.
    fn load_catalog(&self) -> Result<Vec<BeadPrototype>, BeadloopError>;

    /// Load all bead categories.
    ///
    /// # Errors
    ///
    /// Returns [`BeadloopError::Store`] when the backend fails.
    fn load_categories(&self) -> Result<Vec<Category>, BeadloopError>;

    /// Persist a design payload, returning its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`BeadloopError::Store`] when the backend fails.
    fn save_design(
        &self,
        payload: &DesignPayload,
    ) -> Result<DesignId, BeadloopError>;

    /// Create an order from a payload, returning its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`BeadloopError::Store`] when the backend fails.
    fn create_order(
        &self,
        payload: &OrderPayload,
    ) -> Result<OrderId, BeadloopError>;
}

/// Rendering collaborator that can produce a thumbnail of the current loop.
pub trait SnapshotSource {
    /// Capture the current loop as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BeadloopError::Store`] when capture fails.
    fn capture(&self) -> Result<Vec<u8>, BeadloopError>;
}

/// Auth/session collaborator.
pub trait AuthProvider {
    /// The currently signed-in user, if any.
    fn current_user(&self) -> Option<UserId>;
}
