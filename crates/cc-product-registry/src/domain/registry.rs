//! # Product Registry
//!
//! Arena-backed registry of products. Registration is role-gated: the
//! creator must hold the `Manufacturer` role, checked against the stored
//! participant record, not the caller's claim.

use crate::domain::entities::{Product, ProductDetails};
use cc_participant_registry::Participant;
use shared_types::{CustodyError, ParticipantId, ProductId, Role};
use tracing::debug;

/// Registry of all products, indexed by sequential id.
#[derive(Debug, Clone, Default)]
pub struct ProductRegistry {
    products: Vec<Product>,
}

impl ProductRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new product owned by `creator` and returns its id.
    ///
    /// The creator becomes both the origin manufacturer and the first
    /// custodian. No initial ownership record is written: provenance counts
    /// accepted transfers only.
    ///
    /// # Errors
    ///
    /// `RoleRequired` unless the creator's stored role is `Manufacturer`.
    pub fn add_product(
        &mut self,
        creator: &Participant,
        details: ProductDetails,
    ) -> Result<ProductId, CustodyError> {
        if creator.role != Role::Manufacturer {
            return Err(CustodyError::RoleRequired {
                id: creator.id,
                required: Role::Manufacturer,
                actual: creator.role,
            });
        }

        let id = self.products.len() as ProductId;
        self.products.push(Product {
            id,
            details,
            current_owner: creator.id,
            origin_manufacturer: creator.id,
        });

        debug!(id, manufacturer = creator.id, "product registered");
        Ok(id)
    }

    /// Looks up a product by id.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` if `id` is out of range.
    pub fn lookup(&self, id: ProductId) -> Result<&Product, CustodyError> {
        self.products
            .get(id as usize)
            .ok_or(CustodyError::ProductNotFound(id))
    }

    /// Overwrites the custody pointer of a product.
    ///
    /// Invoked solely by the ownership transfer engine after it has
    /// validated the transfer; nothing else in the system mutates a product.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` if `id` is out of range.
    pub fn set_owner(
        &mut self,
        id: ProductId,
        new_owner: ParticipantId,
    ) -> Result<(), CustodyError> {
        let product = self
            .products
            .get_mut(id as usize)
            .ok_or(CustodyError::ProductNotFound(id))?;
        product.current_owner = new_owner;
        Ok(())
    }

    /// Number of registered products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if no products have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates over all products in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
