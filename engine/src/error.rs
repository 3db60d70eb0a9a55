//! Engine error taxonomy.
//!
//! Nothing in here ever crosses the presentation boundary as a panic: the
//! session store converts every error into a no-op, a disabled control, or a
//! user-facing validation message.

use thiserror::Error;

/// Errors raised inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Recoverable, user-facing: missing line fields, empty order at
    /// completion, nothing selected at confirm.
    #[error("validación: {0}")]
    Validation(String),

    /// Recoverable, logged: an operation arrived without an active
    /// product/session. The user sees a generic retry message.
    #[error("contexto: {0}")]
    Context(String),
}

impl EngineError {
    /// Message suitable for the presentation surface.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Context(_) => "Ocurrió un error, intenta de nuevo".to_string(),
        }
    }
}
