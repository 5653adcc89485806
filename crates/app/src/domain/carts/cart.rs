//! Cart
//!
//! The in-memory cart a client (or the clinic counter) builds before checkout. Every
//! mutation keeps each line within `1..=stock_available`; requests beyond stock are
//! clamped rather than rejected. Stock-exempt lines (services) have no upper bound.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        inventory::policy::StockPolicy,
        products::records::{ProductRecord, ProductUuid},
    },
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// A product selected for purchase, priced at the time it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub category: String,
    pub unit_price: u64,
    pub quantity: u64,
    pub stock_available: u64,

    /// Services are sold without stock, so `stock_available` does not cap them.
    #[serde(default)]
    pub stock_exempt: bool,
}

impl CartLine {
    fn from_product(product: &ProductRecord, stock_exempt: bool) -> Self {
        Self {
            product_uuid: product.uuid,
            name: product.name.clone(),
            category: product.category.clone(),
            unit_price: product.price,
            quantity: 1,
            stock_available: product.stock_quantity,
            stock_exempt,
        }
    }

    /// Most units this line may hold.
    #[must_use]
    pub fn max_quantity(&self) -> u64 {
        if self.stock_exempt {
            u64::MAX
        } else {
            self.stock_available
        }
    }

    /// `unit_price * quantity`, saturating rather than wrapping.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub uuid: CartUuid,
    lines: Vec<CartLine>,

    /// When the persisted snapshot was last written; `None` for a cart never saved.
    pub updated_at: Option<Timestamp>,
}

impl Cart {
    #[must_use]
    pub fn new(uuid: CartUuid) -> Self {
        Self {
            uuid,
            lines: Vec::new(),
            updated_at: None,
        }
    }

    /// Rebuild a cart from a persisted snapshot, replacing any in-memory state.
    ///
    /// Lines that violate the quantity invariant are repaired: zero quantities are
    /// dropped and oversized ones clamped to their recorded stock.
    #[must_use]
    pub fn restore(uuid: CartUuid, lines: Vec<CartLine>, updated_at: Option<Timestamp>) -> Self {
        let lines = lines
            .into_iter()
            .filter_map(|mut line| {
                line.quantity = line.quantity.min(line.max_quantity());

                (line.quantity > 0).then_some(line)
            })
            .collect();

        Self {
            uuid,
            lines,
            updated_at,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line(&self, product: ProductUuid) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_uuid == product)
    }

    /// Add one unit of `product`.
    ///
    /// An existing line picks up the product's current price and stock and is
    /// incremented up to that stock. A product with no stock is never added unless
    /// `policy` exempts its category.
    pub fn add_item(&mut self, product: &ProductRecord, policy: &StockPolicy) {
        let exempt = policy.is_exempt(&product.category);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_uuid == product.uuid)
        {
            line.name.clone_from(&product.name);
            line.category.clone_from(&product.category);
            line.unit_price = product.price;
            line.stock_available = product.stock_quantity;
            line.stock_exempt = exempt;
            line.quantity = line.quantity.saturating_add(1).min(line.max_quantity());
        } else if exempt || product.stock_quantity > 0 {
            self.lines.push(CartLine::from_product(product, exempt));
        }

        self.lines.retain(|line| line.quantity > 0);
    }

    /// Set the quantity of a line; zero removes it. Unknown products are ignored.
    pub fn update_quantity(&mut self, product: ProductUuid, quantity: u64) {
        if quantity == 0 {
            self.remove_item(product);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_uuid == product)
        {
            line.quantity = quantity.min(line.max_quantity());
        }

        self.lines.retain(|line| line.quantity > 0);
    }

    pub fn remove_item(&mut self, product: ProductUuid) {
        self.lines.retain(|line| line.product_uuid != product);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unit_price * quantity` over all lines, in minor units.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0_u64, |sum, line| sum.saturating_add(line.line_total()))
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .fold(0_u64, |sum, line| sum.saturating_add(line.quantity))
    }
}
