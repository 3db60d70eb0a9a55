//! The customization session reducer.
//!
//! Drives the path from "product tapped" to "order line appended": resolve the
//! price tier, classify the product, open the right modal, gate every count
//! mutation through the limit validator, and on confirm compose the
//! customization description and append the line to the order aggregate.
//!
//! All validation failures are local and recoverable: they block a transition
//! and surface a message, never a panic. Operations arriving without an
//! active product are logged and self-heal by closing the modal.

use crate::accompaniments::{self, BOOST_OPTION, JAGER_GROUP, is_jager, is_juice};
use crate::classify::{LiquorCategory, UnitKind, classify, classify_unit};
use crate::describe::{describe, describe_food, describe_meat};
use crate::error::EngineError;
use crate::limits::{can_add, should_disable};
use crate::order::LineDraft;
use crate::surface::PresentationSurface;
use crate::types::{
    ModalKind, Money, PriceTier, ProductRef, SelectionState, SessionAction, SessionPhase,
    SessionState,
};
use comanda_core::environment::Clock;
use comanda_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Digestivo bottles that sell without opening any modal.
const NO_MODAL_BOTTLES: &[&str] = &["HIPNOTIQ", "BAILEYS"];

/// Shown when confirm is pressed with nothing chosen.
const MSG_CHOOSE_SOMETHING: &str = "Selecciona al menos una opción";

/// Environment for the customization session.
#[derive(Clone)]
pub struct SessionEnvironment {
    /// Clock for line timestamps and id issuance
    pub clock: Arc<dyn Clock>,
    /// Rendering-layer callbacks
    pub surface: Arc<dyn PresentationSurface>,
}

impl SessionEnvironment {
    /// Creates a new session environment
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, surface: Arc<dyn PresentationSurface>) -> Self {
        Self { clock, surface }
    }
}

/// Reducer implementing the customization state machine.
#[derive(Clone, Debug, Default)]
pub struct SessionReducer;

impl SessionReducer {
    /// Creates a new session reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// An operation arrived without the session context it needs. Log it,
    /// show the generic retry message, and self-heal back to idle.
    fn context_failure(state: &mut SessionState, env: &SessionEnvironment, what: &str) {
        let error = EngineError::Context(what.to_string());
        tracing::error!(operation = what, "session operation without context");
        env.surface.show_validation_message(&error.user_message());
        env.surface.close_modal();
        state.last_error = Some(error.user_message());
        state.reset_session();
    }

    /// Push fresh disable flags for every counted control after a mutation.
    fn refresh_disables(selection: &SelectionState, env: &SessionEnvironment) {
        let juices = selection.total_juices();
        let sodas = selection.total_sodas();
        for option in &selection.options {
            if option == BOOST_OPTION {
                continue;
            }
            let disabled = if selection.boost {
                // Boost exclusivity: the whole group stays greyed out.
                true
            } else {
                should_disable(
                    is_juice(option),
                    juices,
                    sodas,
                    selection.category,
                    &selection.product_name,
                )
            };
            env.surface.disable_control(option, disabled);
        }
    }

    fn handle_tap(
        state: &mut SessionState,
        env: &SessionEnvironment,
        name: &str,
        price_text: &str,
        tier_hint: Option<&str>,
    ) -> SmallVec<[Effect<SessionAction>; 4]> {
        if state.phase != SessionPhase::Idle {
            tracing::warn!(product = name, "tap ignored: session already active");
            return SmallVec::new();
        }

        // A tap on an unavailable ("--") cell is a no-op.
        let Some(price) = Money::parse(price_text) else {
            return SmallVec::new();
        };

        let tier = PriceTier::from_hint(tier_hint);
        match tier {
            PriceTier::Bottle | PriceTier::Liter | PriceTier::Cup => {
                Self::open_liquor(state, env, name, price, tier)
            }
            PriceTier::Unit | PriceTier::None => Self::open_unit(state, env, name, price),
        }
    }

    fn open_liquor(
        state: &mut SessionState,
        env: &SessionEnvironment,
        name: &str,
        price: Money,
        tier: PriceTier,
    ) -> SmallVec<[Effect<SessionAction>; 4]> {
        let category = classify(name);
        state.product = Some(ProductRef {
            name: name.to_string(),
            price,
            tier,
            category_label: category.to_string(),
        });

        // Some digestivo bottles sell plain, with no modal at all.
        let normalized = crate::text::normalize(name);
        if category == LiquorCategory::Digestivos
            && tier == PriceTier::Bottle
            && NO_MODAL_BOTTLES.iter().any(|p| normalized.contains(p))
        {
            let mut selection = SelectionState::new(
                ModalKind::Drink,
                category,
                name.to_string(),
                tier,
                vec!["Ninguno".to_string()],
            );
            selection.selected.push("Ninguno".to_string());
            state.selection = Some(selection);
            state.phase = SessionPhase::Confirmed;
            return smallvec![Effect::dispatch(SessionAction::BuildLine)];
        }

        let kind = match tier {
            PriceTier::Liter => ModalKind::Liter,
            PriceTier::Cup => ModalKind::Cup,
            _ => ModalKind::Drink,
        };
        let set = accompaniments::options_for(category, tier, name);
        env.surface.open_modal(kind, &set.options, &set.message);
        state.selection = Some(SelectionState::new(
            kind,
            category,
            name.to_string(),
            tier,
            set.options,
        ));
        state.phase = SessionPhase::ModalOpen(kind);
        SmallVec::new()
    }

    fn open_unit(
        state: &mut SessionState,
        env: &SessionEnvironment,
        name: &str,
        price: Money,
    ) -> SmallVec<[Effect<SessionAction>; 4]> {
        match classify_unit(name) {
            UnitKind::Food(food) => {
                state.product = Some(ProductRef {
                    name: name.to_string(),
                    price,
                    tier: PriceTier::Unit,
                    category_label: "comida".to_string(),
                });
                let set = accompaniments::food_options(food);
                env.surface
                    .open_modal(ModalKind::Food, &set.options, &set.message);
                state.selection = Some(SelectionState::new(
                    ModalKind::Food,
                    LiquorCategory::Otro,
                    name.to_string(),
                    PriceTier::Unit,
                    set.options,
                ));
                state.phase = SessionPhase::ModalOpen(ModalKind::Food);
                SmallVec::new()
            }
            UnitKind::Meat => {
                state.product = Some(ProductRef {
                    name: name.to_string(),
                    price,
                    tier: PriceTier::Unit,
                    category_label: "comida".to_string(),
                });
                let set = accompaniments::meat_options();
                env.surface
                    .open_modal(ModalKind::Meat, &set.options, &set.message);
                state.selection = Some(SelectionState::new(
                    ModalKind::Meat,
                    LiquorCategory::Otro,
                    name.to_string(),
                    PriceTier::Unit,
                    set.options,
                ));
                state.phase = SessionPhase::ModalOpen(ModalKind::Meat);
                SmallVec::new()
            }
            UnitKind::Beverage => {
                // Beverages bypass customization entirely.
                state.product = Some(ProductRef {
                    name: name.to_string(),
                    price,
                    tier: PriceTier::Unit,
                    category_label: "bebida".to_string(),
                });
                state.selection = None;
                state.phase = SessionPhase::Confirmed;
                smallvec![Effect::dispatch(SessionAction::BuildLine)]
            }
        }
    }

    fn handle_increment(state: &mut SessionState, env: &SessionEnvironment, option: &str) {
        let SessionPhase::ModalOpen(_) = state.phase else {
            Self::context_failure(state, env, "increment");
            return;
        };
        let Some(selection) = state.selection.as_mut() else {
            Self::context_failure(state, env, "increment");
            return;
        };
        if !selection.options.iter().any(|o| o == option) || option == BOOST_OPTION {
            return;
        }

        // Incrementing a grouped counter clears the exclusive boost flag.
        if selection.boost {
            selection.boost = false;
            for grouped in JAGER_GROUP {
                env.surface.disable_control(grouped, false);
            }
        }

        let allowed = can_add(
            is_juice(option),
            selection.total_juices(),
            selection.total_sodas(),
            selection.category,
            &selection.product_name,
        );
        if !allowed {
            // Rejected silently; the control reads as disabled.
            return;
        }

        selection.increment(option);
        env.surface
            .update_count_display(option, selection.count_of(option));
        Self::refresh_disables(selection, env);
    }

    fn handle_decrement(state: &mut SessionState, env: &SessionEnvironment, option: &str) {
        let SessionPhase::ModalOpen(_) = state.phase else {
            Self::context_failure(state, env, "decrement");
            return;
        };
        let Some(selection) = state.selection.as_mut() else {
            Self::context_failure(state, env, "decrement");
            return;
        };
        if selection.count_of(option) == 0 {
            return;
        }
        selection.decrement(option);
        env.surface
            .update_count_display(option, selection.count_of(option));
        Self::refresh_disables(selection, env);
    }

    fn handle_select(state: &mut SessionState, env: &SessionEnvironment, option: &str) {
        let SessionPhase::ModalOpen(kind) = state.phase else {
            Self::context_failure(state, env, "select");
            return;
        };
        let Some(selection) = state.selection.as_mut() else {
            Self::context_failure(state, env, "select");
            return;
        };
        if !selection.options.iter().any(|o| o == option) {
            return;
        }

        match kind {
            // Single pick: mixer, style, cooking term.
            ModalKind::Liter | ModalKind::Cup | ModalKind::Meat => {
                selection.selected = vec![option.to_string()];
            }
            // Toggle semantics; "Ninguno" excludes everything else.
            ModalKind::Drink | ModalKind::Food => {
                if let Some(pos) = selection.selected.iter().position(|s| s == option) {
                    selection.selected.remove(pos);
                } else if option == "Ninguno" {
                    selection.selected = vec![option.to_string()];
                    selection.zero_counts();
                    for counted in selection.options.clone() {
                        if counted != "Ninguno" {
                            env.surface.update_count_display(&counted, 0);
                        }
                    }
                } else {
                    selection.selected.retain(|s| s != "Ninguno");
                    selection.selected.push(option.to_string());
                }
            }
        }
    }

    fn handle_toggle_boost(state: &mut SessionState, env: &SessionEnvironment, active: bool) {
        let SessionPhase::ModalOpen(ModalKind::Drink) = state.phase else {
            tracing::warn!("boost toggled outside the drink modal");
            return;
        };
        let Some(selection) = state.selection.as_mut() else {
            Self::context_failure(state, env, "toggle_boost");
            return;
        };
        if !is_jager(&selection.product_name) {
            tracing::warn!(product = %selection.product_name, "boost is a Jäger-only flow");
            return;
        }

        selection.boost = active;
        if active {
            // Exclusive: boost zeroes and freezes the grouped counters.
            selection.zero_counts();
            for grouped in JAGER_GROUP {
                env.surface.update_count_display(grouped, 0);
                env.surface.disable_control(grouped, true);
            }
        } else {
            for grouped in JAGER_GROUP {
                env.surface.disable_control(grouped, false);
            }
        }
    }

    fn handle_confirm(
        state: &mut SessionState,
        env: &SessionEnvironment,
    ) -> SmallVec<[Effect<SessionAction>; 4]> {
        if state.confirm_in_flight {
            // Reentrancy guard: a confirm is already being processed.
            return SmallVec::new();
        }
        let SessionPhase::ModalOpen(_) = state.phase else {
            Self::context_failure(state, env, "confirm");
            return SmallVec::new();
        };
        let Some(selection) = state.selection.as_ref() else {
            Self::context_failure(state, env, "confirm");
            return SmallVec::new();
        };

        if !selection.has_any_choice() {
            state.last_error = Some(MSG_CHOOSE_SOMETHING.to_string());
            env.surface.show_validation_message(MSG_CHOOSE_SOMETHING);
            return SmallVec::new();
        }

        state.phase = SessionPhase::Confirmed;
        state.confirm_in_flight = true;
        smallvec![Effect::dispatch(SessionAction::BuildLine)]
    }

    fn handle_build_line(state: &mut SessionState, env: &SessionEnvironment) {
        if state.phase != SessionPhase::Confirmed {
            Self::context_failure(state, env, "build_line");
            return;
        }
        let Some(product) = state.product.clone() else {
            Self::context_failure(state, env, "build_line");
            return;
        };

        let customizations = match state.selection.as_ref() {
            Some(selection) => {
                let text = match selection.modal {
                    ModalKind::Drink => describe(
                        selection.tier,
                        &selection.selected,
                        selection.counts(),
                        selection.boost && is_jager(&selection.product_name),
                    ),
                    ModalKind::Liter | ModalKind::Cup => describe(
                        selection.tier,
                        &selection.selected,
                        selection.counts(),
                        false,
                    ),
                    ModalKind::Food => describe_food(&selection.selected),
                    ModalKind::Meat => describe_meat(&selection.selected),
                };
                vec![text]
            }
            // Beverage bypass: nothing to describe.
            None => Vec::new(),
        };

        let draft = LineDraft {
            name: product.name.clone(),
            price: product.price,
            category: product.category_label.clone(),
            customizations,
        };
        match state.order.add_item(draft, env.clock.now()) {
            Ok(line) => {
                tracing::info!(id = %line.id, product = %line.name, "order line appended");
                env.surface.close_modal();
                state.last_error = None;
                state.reset_session();
            }
            Err(error) => {
                tracing::warn!(%error, "order line rejected");
                state.last_error = Some(error.user_message());
                env.surface.show_validation_message(&error.user_message());
                env.surface.close_modal();
                state.reset_session();
            }
        }
    }
}

impl Reducer for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;
    type Environment = SessionEnvironment;

    #[allow(clippy::cognitive_complexity)] // Large match statement is appropriate for reducer
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SessionAction::ProductTapped {
                name,
                price_text,
                tier_hint,
            } => Self::handle_tap(state, env, &name, &price_text, tier_hint.as_deref()),
            SessionAction::Increment { option } => {
                Self::handle_increment(state, env, &option);
                SmallVec::new()
            }
            SessionAction::Decrement { option } => {
                Self::handle_decrement(state, env, &option);
                SmallVec::new()
            }
            SessionAction::SelectSingle { option } => {
                Self::handle_select(state, env, &option);
                SmallVec::new()
            }
            SessionAction::ToggleBoost { active } => {
                Self::handle_toggle_boost(state, env, active);
                SmallVec::new()
            }
            SessionAction::Confirm => Self::handle_confirm(state, env),
            SessionAction::Cancel => {
                env.surface.close_modal();
                state.last_error = None;
                state.reset_session();
                SmallVec::new()
            }
            SessionAction::BuildLine => {
                Self::handle_build_line(state, env);
                SmallVec::new()
            }
        }
    }
}
