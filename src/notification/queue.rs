//! In-memory toast primitive
//!
//! Keeps the active toasts with their deadlines. Timed toasts are dropped by
//! [`ToastQueue::expire`]; persistent ones stay until dismissed.

use std::time::Instant;

use super::toast::{Toast, ToastId, ToastPrimitive};

/// A toast currently on screen
#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub id: ToastId,
    pub toast: Toast,
    pub expires_at: Option<Instant>,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    active: Vec<ActiveToast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts on screen, oldest first
    pub fn active(&self) -> &[ActiveToast] {
        &self.active
    }

    pub fn get(&self, id: ToastId) -> Option<&ActiveToast> {
        self.active.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Drop every timed toast whose deadline is at or before `now`
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.active.len();
        self.active
            .retain(|t| t.expires_at.is_none_or(|deadline| deadline > now));
        before - self.active.len()
    }

    fn show_at(&mut self, toast: Toast, now: Instant) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        let expires_at = toast.duration().map(|d| now + d);

        self.active.push(ActiveToast {
            id,
            toast,
            expires_at,
        });
        id
    }
}

impl ToastPrimitive for ToastQueue {
    fn show(&mut self, toast: Toast) -> ToastId {
        self.show_at(toast, Instant::now())
    }

    fn dismiss(&mut self, id: ToastId) {
        self.active.retain(|t| t.id != id);
    }

    fn dismiss_all(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod queue_tests;
