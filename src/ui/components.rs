//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Ui};

use crate::notify::{Notification, NotificationKind, NotificationQueue};

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const ACCENT: Color32 = Color32::from_rgb(66, 81, 95);
}

/// Render a back button that returns true when clicked.
pub fn back_button(ui: &mut Ui) -> bool {
    ui.button(RichText::new("< Back to Employees").size(14.0)).clicked()
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Button with a leading phosphor icon.
pub fn icon_button(ui: &mut Ui, icon: &str, text: &str) -> Response {
    ui.button(RichText::new(format!("{icon} {text}")).size(14.0))
}

/// Accent-filled button, optionally disabled.
pub fn primary_button(ui: &mut Ui, icon: &str, text: &str, enabled: bool) -> Response {
    let button = egui::Button::new(RichText::new(format!("{icon} {text}")).size(14.0).color(Color32::WHITE))
        .fill(colors::ACCENT);
    ui.add_enabled(enabled, button)
}

/// Small icon-only button with a tooltip.
pub fn action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.small_button(icon).on_hover_text(tooltip)
}

/// Two-letter initials used as an avatar stand-in.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Draw live notifications stacked in the bottom-right corner.
pub fn show_notifications(ctx: &egui::Context, queue: &NotificationQueue) {
    if queue.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("notifications"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -40.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for notification in queue.active() {
                notification_card(ui, notification);
                ui.add_space(6.0);
            }
        });
}

fn notification_card(ui: &mut Ui, notification: &Notification) {
    let fill = match notification.kind {
        NotificationKind::Success => Color32::from_rgb(46, 125, 50),
        NotificationKind::Error => Color32::from_rgb(198, 40, 40),
    };

    egui::Frame::new()
        .fill(fill)
        .inner_margin(Margin::same(12))
        .corner_radius(CornerRadius::same(6))
        .show(ui, |ui| {
            ui.set_max_width(360.0);
            ui.label(RichText::new(&notification.message).color(Color32::WHITE));
        });
}
