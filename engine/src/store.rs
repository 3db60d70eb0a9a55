//! Session store: owns the state and runs the dispatch loop.
//!
//! The presentation adapter holds one [`SessionStore`] and calls its entry
//! points; every call dispatches an action through the reducer and drains the
//! returned effects synchronously, so feedback actions (confirm → build line)
//! complete before the call returns.

use crate::error::EngineError;
use crate::order::{CompletedOrder, Order};
use crate::reducer::{SessionEnvironment, SessionReducer};
use crate::surface::PresentationSurface;
use crate::types::{SessionAction, SessionState};
use comanda_core::environment::SystemClock;
use comanda_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;

/// Single-threaded facade over the session reducer.
pub struct SessionStore {
    state: SessionState,
    reducer: SessionReducer,
    environment: SessionEnvironment,
}

impl SessionStore {
    /// Creates a store with the system clock and the given surface.
    #[must_use]
    pub fn new(surface: Arc<dyn PresentationSurface>) -> Self {
        Self::with_environment(SessionEnvironment::new(Arc::new(SystemClock), surface))
    }

    /// Creates a store with a fully custom environment.
    #[must_use]
    pub fn with_environment(environment: SessionEnvironment) -> Self {
        Self {
            state: SessionState::new(),
            reducer: SessionReducer::new(),
            environment,
        }
    }

    /// Dispatch one action and drain its effects depth-first.
    pub fn dispatch(&mut self, action: SessionAction) {
        let effects = self
            .reducer
            .reduce(&mut self.state, action, &self.environment);
        for effect in effects {
            self.drain(effect);
        }
    }

    fn drain(&mut self, effect: Effect<SessionAction>) {
        match effect {
            Effect::None => {}
            Effect::Dispatch(action) => self.dispatch(*action),
            Effect::Batch(effects) => {
                for effect in effects {
                    self.drain(effect);
                }
            }
        }
    }

    /// A product/price cell was tapped.
    pub fn on_product_tap(&mut self, name: &str, price_text: &str, tier_hint: Option<&str>) {
        self.dispatch(SessionAction::ProductTapped {
            name: name.to_string(),
            price_text: price_text.to_string(),
            tier_hint: tier_hint.map(ToString::to_string),
        });
    }

    /// One more unit of a counted option.
    pub fn increment(&mut self, option: &str) {
        self.dispatch(SessionAction::Increment {
            option: option.to_string(),
        });
    }

    /// One unit less of a counted option.
    pub fn decrement(&mut self, option: &str) {
        self.dispatch(SessionAction::Decrement {
            option: option.to_string(),
        });
    }

    /// Toggle a single-select option.
    pub fn select(&mut self, option: &str) {
        self.dispatch(SessionAction::SelectSingle {
            option: option.to_string(),
        });
    }

    /// Set the exclusive boost flag.
    pub fn toggle_boost(&mut self, active: bool) {
        self.dispatch(SessionAction::ToggleBoost { active });
    }

    /// Accept the current selection.
    pub fn confirm(&mut self) {
        self.dispatch(SessionAction::Confirm);
    }

    /// Discard the session.
    pub fn cancel(&mut self) {
        self.dispatch(SessionAction::Cancel);
    }

    /// Remove a line from the order by id.
    pub fn remove_item(&mut self, id: &str) -> bool {
        self.state.order.remove_item(id)
    }

    /// Finalize the order and hand back the completed record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] when the order is empty.
    pub fn complete_order(&mut self) -> Result<CompletedOrder, EngineError> {
        let now = self.environment.clock.now();
        let completed = self.state.order.complete(now)?;
        tracing::info!(
            items = completed.items.len(),
            total = %completed.total,
            "order completed"
        );
        Ok(completed)
    }

    /// The order as accepted so far.
    #[must_use]
    pub fn order(&self) -> &Order {
        &self.state.order
    }

    /// Read-only view of the full session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
