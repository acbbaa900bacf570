//! Notification dispatcher
//!
//! Resolves a category to its style, merges caller overrides on top and
//! forwards the result to the toast primitive.

use std::sync::Arc;

use super::category::Category;
use super::registry::StyleRegistry;
use super::style::StyleOverrides;
use super::toast::{Toast, ToastId, ToastKind, ToastPrimitive};

/// How a pending loading toast ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

pub struct Notifier<T: ToastPrimitive> {
    registry: Arc<StyleRegistry>,
    primitive: T,
}

impl<T: ToastPrimitive> Notifier<T> {
    pub fn new(registry: Arc<StyleRegistry>, primitive: T) -> Self {
        Self {
            registry,
            primitive,
        }
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn primitive(&self) -> &T {
        &self.primitive
    }

    pub fn primitive_mut(&mut self) -> &mut T {
        &mut self.primitive
    }

    pub fn into_primitive(self) -> T {
        self.primitive
    }

    /// Build the toast that `show` would display, without displaying it
    pub fn resolve(
        &self,
        category: Category,
        message: &str,
        overrides: Option<&StyleOverrides>,
    ) -> Toast {
        let default = self.registry.style(category);
        let style = match overrides {
            Some(overrides) => default.merged(overrides),
            None => default.clone(),
        };

        Toast {
            category,
            kind: ToastKind::for_category(category),
            message: message.to_string(),
            style,
        }
    }

    pub fn show(
        &mut self,
        category: Category,
        message: &str,
        overrides: Option<&StyleOverrides>,
    ) -> ToastId {
        let toast = self.resolve(category, message, overrides);
        let id = self.primitive.show(toast);
        log::debug!("Showing {} {}: {}", category, id, message);
        id
    }

    pub fn success(&mut self, message: &str, overrides: Option<&StyleOverrides>) -> ToastId {
        self.show(Category::Success, message, overrides)
    }

    pub fn error(&mut self, message: &str, overrides: Option<&StyleOverrides>) -> ToastId {
        self.show(Category::Error, message, overrides)
    }

    pub fn warning(&mut self, message: &str, overrides: Option<&StyleOverrides>) -> ToastId {
        self.show(Category::Warning, message, overrides)
    }

    pub fn info(&mut self, message: &str, overrides: Option<&StyleOverrides>) -> ToastId {
        self.show(Category::Info, message, overrides)
    }

    /// Persistent toast; stays until resolved or dismissed
    pub fn loading(&mut self, message: &str, overrides: Option<&StyleOverrides>) -> ToastId {
        self.show(Category::Loading, message, overrides)
    }

    /// Replace a pending loading toast with its final state
    pub fn resolve_loading(&mut self, id: ToastId, outcome: Outcome, message: &str) -> ToastId {
        self.dismiss(id);
        match outcome {
            Outcome::Success => self.success(message, None),
            Outcome::Error => self.error(message, None),
        }
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.primitive.dismiss(id);
    }

    pub fn dismiss_all(&mut self) {
        log::debug!("Dismissing all toasts");
        self.primitive.dismiss_all();
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod notifier_tests;
