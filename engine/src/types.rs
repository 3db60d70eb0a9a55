//! Core domain types for the ordering engine.
//!
//! Everything here is owned, `Clone`-able data. A [`ProductRef`] is a snapshot
//! taken at tap time and never re-read mid-session; a [`SelectionState`] lives
//! exactly as long as one open customization modal.

use crate::classify::LiquorCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of sale resolved from the tapped price column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    /// Full bottle
    Bottle,
    /// Prepared liter
    Liter,
    /// Single cup/glass
    Cup,
    /// Single-priced item (food, beverages)
    Unit,
    /// No tier could be resolved
    None,
}

impl PriceTier {
    /// Resolve a tier from the tapped control's column header or data
    /// attribute.
    #[must_use]
    pub fn from_hint(hint: Option<&str>) -> Self {
        let Some(hint) = hint else {
            return Self::None;
        };
        let hint = crate::text::normalize(hint);
        if hint.contains("BOTELLA") {
            Self::Bottle
        } else if hint.contains("LITRO") {
            Self::Liter
        } else if hint.contains("COPA") {
            Self::Cup
        } else if hint.contains("PRECIO") {
            Self::Unit
        } else {
            Self::None
        }
    }
}

/// Money amount in cents (to avoid floating point issues)
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a new money amount from cents
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates a new money amount from whole pesos
    #[must_use]
    pub const fn from_pesos(pesos: i64) -> Self {
        Self(pesos * 100)
    }

    /// Returns the value in cents
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in pesos (as floating point, display only)
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // i64 to f64 precision loss is acceptable for display
    pub fn pesos(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a price cell's text ("$110.00", "1,250.5", "110").
    ///
    /// Returns `None` for the unavailable marker "--", empty text, negative
    /// amounts, or anything unparseable — a tap on such a cell is a no-op.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.contains("--") {
            return None;
        }
        let cleaned: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '$' | ',' | ' '))
            .collect();
        let (pesos_part, cents_part) = match cleaned.split_once('.') {
            Some((p, c)) => (p, c),
            None => (cleaned.as_str(), ""),
        };
        let pesos: i64 = pesos_part.parse().ok()?;
        if pesos < 0 {
            return None;
        }
        let cents: i64 = match cents_part.len() {
            0 => 0,
            1 => cents_part.parse::<i64>().ok()? * 10,
            _ => cents_part.get(..2)?.parse().ok()?,
        };
        Some(Self(pesos * 100 + cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.pesos())
    }
}

/// Snapshot of the tapped product. Constructed fresh per selection and never
/// re-read from the catalog mid-session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    /// Product display name
    pub name: String,
    /// Price at the tapped tier
    pub price: Money,
    /// Resolved unit of sale
    pub tier: PriceTier,
    /// Category label carried onto the order line
    pub category_label: String,
}

/// Which customization modal is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    /// Bottled liquor (counted mixers, possibly the boost sub-flow)
    Drink,
    /// Prepared liter (single mixer pick)
    Liter,
    /// Single cup (single style pick)
    Cup,
    /// Food preparation choices
    Food,
    /// Meat cooking term
    Meat,
}

/// Where the session currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Nothing tapped
    #[default]
    Idle,
    /// A modal is open and collecting choices
    ModalOpen(ModalKind),
    /// Choices accepted; the order line is being built
    Confirmed,
}

/// Per-modal selection state.
///
/// Counts are kept as an ordered list of `(option, count)` pairs so the
/// customization description iterates them in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    /// Which modal collected this selection
    pub modal: ModalKind,
    /// Category of the product under customization
    pub category: LiquorCategory,
    /// Product name (special-name rules key off it)
    pub product_name: String,
    /// Tier being sold
    pub tier: PriceTier,
    /// All options offered by the modal
    pub options: Vec<String>,
    /// Chosen single-select options, in pick order
    pub selected: Vec<String>,
    /// Exclusive "2 Boost" flag (Jäger bottle flow)
    pub boost: bool,
    /// Ceiling for total counted units
    pub max_total: u32,
    counts: Vec<(String, u32)>,
}

impl SelectionState {
    /// Create a selection for a freshly opened modal.
    #[must_use]
    pub const fn new(
        modal: ModalKind,
        category: LiquorCategory,
        product_name: String,
        tier: PriceTier,
        options: Vec<String>,
    ) -> Self {
        Self {
            modal,
            category,
            product_name,
            tier,
            options,
            selected: Vec::new(),
            boost: false,
            max_total: crate::limits::MAX_TOTAL,
            counts: Vec::new(),
        }
    }

    /// Current count for an option (0 when never incremented).
    #[must_use]
    pub fn count_of(&self, option: &str) -> u32 {
        self.counts
            .iter()
            .find(|(o, _)| o == option)
            .map_or(0, |(_, n)| *n)
    }

    /// Add one unit of an option, preserving insertion order.
    pub fn increment(&mut self, option: &str) {
        if let Some(entry) = self.counts.iter_mut().find(|(o, _)| o == option) {
            entry.1 += 1;
        } else {
            self.counts.push((option.to_string(), 1));
        }
    }

    /// Remove one unit of an option; saturates at zero.
    pub fn decrement(&mut self, option: &str) {
        if let Some(entry) = self.counts.iter_mut().find(|(o, _)| o == option) {
            entry.1 = entry.1.saturating_sub(1);
        }
    }

    /// Zero every count (boost exclusivity).
    pub fn zero_counts(&mut self) {
        for entry in &mut self.counts {
            entry.1 = 0;
        }
    }

    /// `(option, count)` pairs in insertion order, zeros included.
    #[must_use]
    pub fn counts(&self) -> &[(String, u32)] {
        &self.counts
    }

    /// Total counted units.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Counted units classified as juices.
    #[must_use]
    pub fn total_juices(&self) -> u32 {
        self.counts
            .iter()
            .filter(|(o, _)| crate::accompaniments::is_juice(o))
            .map(|(_, n)| n)
            .sum()
    }

    /// Counted units classified as sodas (anything not a juice).
    #[must_use]
    pub fn total_sodas(&self) -> u32 {
        self.counts
            .iter()
            .filter(|(o, _)| !crate::accompaniments::is_juice(o))
            .map(|(_, n)| n)
            .sum()
    }

    /// Whether anything at all has been chosen.
    #[must_use]
    pub fn has_any_choice(&self) -> bool {
        self.boost || self.total_units() > 0 || !self.selected.is_empty()
    }
}

/// Every input the customization session reacts to.
///
/// Commands arrive from the presentation adapter; `BuildLine` is the internal
/// feedback action the reducer dispatches to itself after a confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// A product/price cell was tapped
    ProductTapped {
        /// Product display name
        name: String,
        /// Raw text of the tapped price cell
        price_text: String,
        /// Column header or data attribute naming the tier
        tier_hint: Option<String>,
    },
    /// One more unit of a counted option
    Increment {
        /// Option label
        option: String,
    },
    /// One unit less of a counted option
    Decrement {
        /// Option label
        option: String,
    },
    /// Toggle a single-select option
    SelectSingle {
        /// Option label
        option: String,
    },
    /// Set the exclusive boost flag (Jäger bottle flow)
    ToggleBoost {
        /// Desired flag state
        active: bool,
    },
    /// Accept the current selection
    Confirm,
    /// Discard the session
    Cancel,
    /// Internal: compose the customization and append the order line
    BuildLine,
}

/// State of one ordering session: the customization state machine plus the
/// order aggregate it feeds.
#[derive(Clone, Debug)]
pub struct SessionState {
    /// Current state-machine phase
    pub phase: SessionPhase,
    /// Product snapshot taken at tap time
    pub product: Option<ProductRef>,
    /// Selection for the open modal
    pub selection: Option<SelectionState>,
    /// Lines accepted so far
    pub order: crate::order::Order,
    /// Reentrancy guard: a confirm is being processed
    pub confirm_in_flight: bool,
    /// Last validation error (if any)
    pub last_error: Option<String>,
}

impl SessionState {
    /// Creates a new idle session with an empty order.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            product: None,
            selection: None,
            order: crate::order::Order::new(),
            confirm_in_flight: false,
            last_error: None,
        }
    }

    /// Drop all customization state and return to idle.
    pub fn reset_session(&mut self) {
        self.phase = SessionPhase::Idle;
        self.product = None;
        self.selection = None;
        self.confirm_in_flight = false;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
