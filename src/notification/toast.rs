//! Toast display primitive
//!
//! The notifier never draws anything itself. It hands a fully resolved
//! [`Toast`] to a [`ToastPrimitive`], which owns display and expiry.

use std::fmt;
use std::time::Duration;

use super::category::Category;
use super::style::ToastStyle;

/// Opaque handle to a displayed toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Display mode understood by the primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Loading,
    /// Plain toast; the icon comes from the style
    Blank,
}

impl ToastKind {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Success => ToastKind::Success,
            Category::Error => ToastKind::Error,
            Category::Loading => ToastKind::Loading,
            Category::Warning
            | Category::Info
            | Category::Auth(_)
            | Category::Network(_)
            | Category::Gradient(_)
            | Category::FeaturePreview(_) => ToastKind::Blank,
        }
    }
}

/// A resolved toast ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub category: Category,
    pub kind: ToastKind,
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    /// Time on screen, `None` when it stays until dismissed
    pub fn duration(&self) -> Option<Duration> {
        self.style.duration_ms.map(Duration::from_millis)
    }
}

/// Something that can put toasts on screen and take them off again
pub trait ToastPrimitive {
    fn show(&mut self, toast: Toast) -> ToastId;

    fn dismiss(&mut self, id: ToastId);

    fn dismiss_all(&mut self);
}
