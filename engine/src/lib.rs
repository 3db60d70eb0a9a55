//! # Comanda Engine
//!
//! Order composition and customization rules for a bar/restaurant
//! point-of-sale.
//!
//! The engine answers, deterministically and without any UI knowledge:
//!
//! - What category is this liquor? ([`classify`])
//! - Which accompaniments may it legally be sold with, at this price tier?
//!   ([`accompaniments`])
//! - May one more juice/soda be added to the current selection? ([`limits`])
//! - What does the finished customization read like on the ticket?
//!   ([`describe`])
//! - Which lines are on the order and what do they total? ([`order`])
//!
//! The pieces are glued together by a reducer-driven state machine
//! ([`reducer`]) fronted by a synchronous store ([`store`]); the rendering
//! layer plugs in through the [`surface::PresentationSurface`] trait.
//!
//! ## Example
//!
//! ```
//! use comanda_engine::store::SessionStore;
//! use comanda_engine::surface::NullSurface;
//! use std::sync::Arc;
//!
//! let mut store = SessionStore::new(Arc::new(NullSurface));
//! store.on_product_tap("ABSOLUT AZUL", "$980.00", Some("Botella"));
//! store.increment("Jugo de Piña");
//! store.confirm();
//! assert_eq!(store.order().len(), 1);
//! ```

pub mod accompaniments;
pub mod classify;
pub mod describe;
pub mod error;
pub mod limits;
pub mod order;
pub mod reducer;
pub mod store;
pub mod surface;
pub mod text;
pub mod types;

pub use classify::{FoodKind, LiquorCategory, UnitKind, classify, classify_unit};
pub use error::EngineError;
pub use order::{CompletedOrder, LineDraft, Order, OrderLine};
pub use reducer::{SessionEnvironment, SessionReducer};
pub use store::SessionStore;
pub use surface::{NullSurface, PresentationSurface};
pub use types::{Money, PriceTier, SessionAction, SessionPhase, SessionState};
