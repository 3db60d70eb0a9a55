//! The order aggregate: line items plus derived totals.
//!
//! Lines are immutable once created; the only mutations are append, remove
//! and clear. The total is always derived, never stored.

use crate::error::EngineError;
use crate::types::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for [`Order::add_item`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineDraft {
    /// Product display name
    pub name: String,
    /// Line price
    pub price: Money,
    /// Category label ("Vodka", "comida", "bebida", …)
    pub category: String,
    /// Customization descriptions, in the order they were produced
    pub customizations: Vec<String>,
}

/// One accepted line on the order. Immutable after creation except for
/// removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Unique id: `order_{unix_millis}_{counter}`
    pub id: String,
    /// Product display name
    pub name: String,
    /// Line price
    pub price: Money,
    /// Category label
    pub category: String,
    /// Customization descriptions
    pub customizations: Vec<String>,
    /// When the line was appended
    pub added_at: DateTime<Utc>,
}

/// Finalized order record handed to the persistence surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedOrder {
    /// Lines in insertion order
    pub items: Vec<OrderLine>,
    /// Sum of line prices
    pub total: Money,
    /// Completion timestamp
    pub date: DateTime<Utc>,
}

/// Collection of order lines with unique id issuance.
///
/// The id counter strictly increases and is reset only by an explicit
/// [`Order::clear`].
#[derive(Clone, Debug, Default)]
pub struct Order {
    items: Vec<OrderLine>,
    id_counter: u64,
}

impl Order {
    /// Creates an empty order.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            id_counter: 0,
        }
    }

    /// Validate and append a line, issuing its id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] when the name or category is
    /// blank, or the price is not positive.
    pub fn add_item(&mut self, draft: LineDraft, now: DateTime<Utc>) -> Result<OrderLine, EngineError> {
        if draft.name.trim().is_empty() {
            return Err(EngineError::Validation(
                "El producto necesita un nombre".to_string(),
            ));
        }
        if draft.price.cents() <= 0 {
            return Err(EngineError::Validation(format!(
                "Precio inválido para '{}'",
                draft.name
            )));
        }
        if draft.category.trim().is_empty() {
            return Err(EngineError::Validation(format!(
                "Falta la categoría de '{}'",
                draft.name
            )));
        }

        self.id_counter += 1;
        let line = OrderLine {
            id: format!("order_{}_{}", now.timestamp_millis(), self.id_counter),
            name: draft.name,
            price: draft.price,
            category: draft.category,
            customizations: draft.customizations,
            added_at: now,
        };
        self.items.push(line.clone());
        Ok(line)
    }

    /// Remove a line by id. Returns whether a line was actually removed;
    /// a missing id is not an error.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.id != id);
        self.items.len() < before
    }

    /// Sum of line prices; zero for an empty order.
    #[must_use]
    pub fn total(&self) -> Money {
        Money::from_cents(self.items.iter().map(|line| line.price.cents()).sum())
    }

    /// Defensive copy of the lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<OrderLine> {
        self.items.clone()
    }

    /// Number of lines on the order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the order has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empty the order and reset the id counter. Returns how many lines
    /// were cleared.
    pub fn clear(&mut self) -> usize {
        let cleared = self.items.len();
        self.items.clear();
        self.id_counter = 0;
        cleared
    }

    /// Finalize the order: hand back the completed record and clear.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] when the order is empty.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<CompletedOrder, EngineError> {
        if self.items.is_empty() {
            return Err(EngineError::Validation("La orden está vacía".to_string()));
        }
        let completed = CompletedOrder {
            items: self.items.clone(),
            total: self.total(),
            date: now,
        };
        self.clear();
        Ok(completed)
    }
}
