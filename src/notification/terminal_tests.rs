//! Tests for notification/terminal

use super::*;
use crate::notification::registry::builtin_style;

fn toast(category: Category, message: &str) -> Toast {
    Toast {
        category,
        kind: ToastKind::for_category(category),
        message: message.to_string(),
        style: builtin_style(category),
    }
}

#[test]
fn test_render_box_matches_content_width() {
    let mut t = toast(Category::Success, "Saved");
    t.style.icon = "*".to_string();

    assert_eq!(render_toast(&t), "╭─────────╮\n│ * Saved │\n╰─────────╯");
}

#[test]
fn test_render_accounts_for_wide_icon() {
    let t = toast(Category::Success, "ok");
    let rendered = render_toast(&t);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 3);
    // ✅ is two columns wide: "✅ ok" is 5 columns, plus one space per side
    assert_eq!(lines[0].chars().count(), 7 + 2);
    assert_eq!(lines[1].width(), lines[0].width());
}

#[test]
fn test_show_writes_plain_text_without_color() {
    let mut toaster = TerminalToaster::new(Vec::new(), false);
    toaster.show(toast(Category::Error, "Boom"));

    let out = String::from_utf8(toaster.into_inner()).unwrap();
    assert!(out.contains("❌ Boom"));
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn test_show_colors_output_when_enabled() {
    let mut toaster = TerminalToaster::new(Vec::new(), true);
    toaster.show(toast(Category::Warning, "Careful"));

    let out = String::from_utf8(toaster.into_inner()).unwrap();
    // crossterm honors NO_COLOR
    assert!(out.contains('\u{1b}') || std::env::var_os("NO_COLOR").is_some());
    assert!(out.contains("Careful"));
}

#[test]
fn test_loading_stays_pending_until_dismissed() {
    let mut toaster = TerminalToaster::new(Vec::new(), false);
    let loading = toaster.show(toast(Category::Loading, "Working"));
    let info = toaster.show(toast(Category::Info, "Note"));

    assert_eq!(toaster.pending().collect::<Vec<_>>(), vec![loading]);
    assert_ne!(loading, info);

    toaster.dismiss(loading);
    assert_eq!(toaster.pending().count(), 0);
}

#[test]
fn test_dismiss_all_clears_pending() {
    let mut toaster = TerminalToaster::new(Vec::new(), false);
    toaster.show(toast(Category::Loading, "One"));
    toaster.show(toast(Category::Loading, "Two"));

    toaster.dismiss_all();

    assert_eq!(toaster.pending().count(), 0);
}
