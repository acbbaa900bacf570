//! Notification module for alumni-toast
//!
//! Provides the toast layer: a category -> style registry, a dispatcher that
//! merges caller overrides and hands toasts to a display primitive, and
//! named presets for the common auth, network and navigation messages.

mod category;
mod notifier;
mod presets;
mod queue;
mod registry;
mod style;
mod terminal;
mod toast;

pub use category::{
    AuthVariant, Category, FeatureVariant, GradientVariant, NetworkVariant, UnknownCategory,
};
pub use notifier::{Notifier, Outcome};
pub use queue::{ActiveToast, ToastQueue};
pub use registry::{StyleRegistry, builtin_style};
pub use style::{StyleOverrides, ToastStyle};
pub use terminal::{TerminalToaster, render_toast};
pub use toast::{Toast, ToastId, ToastKind, ToastPrimitive};
