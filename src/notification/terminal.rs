//! Terminal toast primitive
//!
//! Draws each toast as a small box on a writer. A terminal can't take lines
//! back, so dismissal only updates which loading toasts are still pending.

use std::collections::BTreeSet;
use std::io::Write;

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

use super::category::Category;
use super::toast::{Toast, ToastId, ToastKind, ToastPrimitive};

pub struct TerminalToaster<W: Write> {
    out: W,
    color: bool,
    next_id: u64,
    pending: BTreeSet<ToastId>,
}

impl<W: Write> TerminalToaster<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            next_id: 0,
            pending: BTreeSet::new(),
        }
    }

    /// Loading toasts not yet dismissed
    pub fn pending(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.pending.iter().copied()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ToastPrimitive for TerminalToaster<W> {
    fn show(&mut self, toast: Toast) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);

        let rendered = render_toast(&toast);
        let rendered = if self.color {
            rendered.with(accent(&toast)).to_string()
        } else {
            rendered
        };

        if let Err(e) = writeln!(self.out, "{}", rendered) {
            log::warn!("Failed to draw {}: {}", id, e);
        }

        if toast.kind == ToastKind::Loading {
            self.pending.insert(id);
        }
        id
    }

    fn dismiss(&mut self, id: ToastId) {
        self.pending.remove(&id);
    }

    fn dismiss_all(&mut self) {
        self.pending.clear();
    }
}

fn accent(toast: &Toast) -> Color {
    match toast.kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
        ToastKind::Loading => Color::Cyan,
        ToastKind::Blank => match toast.category {
            Category::Warning => Color::Yellow,
            Category::Gradient(_) | Category::FeaturePreview(_) => Color::Magenta,
            _ => Color::Blue,
        },
    }
}

/// Box the icon and message, padded to their display width
pub fn render_toast(toast: &Toast) -> String {
    let body = format!("{} {}", toast.style.icon, toast.message);
    let width = body.width() + 2;
    let rule = "─".repeat(width);

    format!("╭{rule}╮\n│ {body} │\n╰{rule}╯")
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod terminal_tests;
