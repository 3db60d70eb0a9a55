//! Presentation boundary.
//!
//! The engine never touches a widget. It talks to the rendering layer through
//! this trait, injected into the session environment; the presentation layer
//! is a thin adapter translating these calls into whatever UI it owns.

use crate::types::ModalKind;

/// Callbacks the engine makes into the rendering layer.
///
/// All methods are fire-and-forget notifications; implementations must not
/// call back into the engine synchronously.
pub trait PresentationSurface: Send + Sync {
    /// Open a customization modal with its legal options and hint message.
    fn open_modal(&self, kind: ModalKind, options: &[String], message: &str);

    /// Close whatever modal is open.
    fn close_modal(&self);

    /// Show a user-facing validation message.
    fn show_validation_message(&self, text: &str);

    /// Update the displayed count for an option.
    fn update_count_display(&self, option: &str, value: u32);

    /// Enable/disable the increment control for an option.
    fn disable_control(&self, option: &str, disabled: bool);
}

/// No-op surface for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl PresentationSurface for NullSurface {
    fn open_modal(&self, _kind: ModalKind, _options: &[String], _message: &str) {}
    fn close_modal(&self) {}
    fn show_validation_message(&self, _text: &str) {}
    fn update_count_display(&self, _option: &str, _value: u32) {}
    fn disable_control(&self, _option: &str, _disabled: bool) {}
}
