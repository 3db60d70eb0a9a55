//! # Comanda Core
//!
//! Core traits and types for the Comanda ordering engine.
//!
//! This crate provides the fundamental abstractions for building event-driven,
//! synchronous point-of-sale logic using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (an open customization session, an order)
//! - **Action**: All possible inputs to a reducer (taps, increments, confirms)
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! The whole engine is single-threaded and cooperative: every mutation happens
//! on a discrete user-triggered action and every reducer call returns
//! immediately. Effects here are therefore synchronous values — there is no
//! async runtime underneath.
//!
//! ## Example
//!
//! ```
//! use comanda_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Clone, Debug)]
//! struct CounterState {
//!     count: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => {
//!                 state.count += 1;
//!                 SmallVec::new()
//!             }
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the store driving this reducer
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the store that drives a
/// reducer. They are values (not execution) and are composable.
pub mod effect {
    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the store.
    ///
    /// Because the engine is synchronous, the feedback loop is a plain
    /// follow-up action rather than a future: `Dispatch` feeds its action
    /// back into the reducer before control returns to the caller.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed a follow-up action back into the reducer
        Dispatch(Box<Action>),

        /// Run effects in order
        Batch(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Wrap a follow-up action as an effect
        #[must_use]
        pub fn dispatch(action: Action) -> Effect<Action> {
            Effect::Dispatch(Box::new(action))
        }

        /// Combine effects to run in order
        #[must_use]
        pub const fn batch(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Batch(effects)
        }

        /// Whether this effect does nothing at all
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Dispatch(_) => false,
                Effect::Batch(effects) => effects.iter().all(Effect::is_none),
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use comanda_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let now = clock.now();
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;

    #[test]
    fn effect_none_is_none() {
        assert!(Effect::<u32>::None.is_none());
    }

    #[test]
    fn effect_dispatch_is_not_none() {
        assert!(!Effect::dispatch(1_u32).is_none());
    }

    #[test]
    fn effect_batch_of_none_is_none() {
        let batch = Effect::<u32>::batch(vec![Effect::None, Effect::None]);
        assert!(batch.is_none());
    }

    #[test]
    fn effect_batch_with_dispatch_is_not_none() {
        let batch = Effect::batch(vec![Effect::None, Effect::dispatch(7_u32)]);
        assert!(!batch.is_none());
    }
}
