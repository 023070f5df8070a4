//! Employee list with search, edit and delete.

use eframe::egui::{self, Align, CornerRadius, Layout, Margin, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, MAGNIFYING_GLASS, PENCIL, PLUS, TRASH, X};

use super::app::{App, DeleteTarget, Route};
use super::components::{action_button, colors, icon_button, initials, panel_header, primary_button};
use crate::date;
use crate::models::options::DEPARTMENT_SEPARATOR;

/// Show the employee list.
///
/// Returns `Some(route)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Route> {
    let mut next_route = None;

    panel_header(ui, Route::List.name());

    // Toolbar
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{} employees", app.roster.employees().len())).weak());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if primary_button(ui, PLUS, "Add User", true).clicked() {
                next_route = Some(Route::Create);
            }

            ui.add_space(10.0);

            if icon_button(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
                app.load_employees();
            }

            ui.add_space(10.0);

            let toggle_icon = if app.roster.is_search_expanded() { X } else { MAGNIFYING_GLASS };
            if action_button(ui, toggle_icon, "Search").clicked() {
                app.roster.toggle_search();
            }

            if app.roster.is_search_expanded() {
                ui.add(
                    egui::TextEdit::singleline(&mut app.roster.query)
                        .desired_width(220.0)
                        .hint_text("Name, gender or department..."),
                );
            }
        });
    });

    ui.add_space(15.0);

    if app.is_loading && app.roster.employees().is_empty() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading employees...");
        });
        return next_route;
    }

    let mut delete_target = None;
    show_table(app, ui, &mut next_route, &mut delete_target);
    if delete_target.is_some() {
        app.delete_target = delete_target;
    }

    next_route
}

fn show_table(app: &App, ui: &mut Ui, next_route: &mut Option<Route>, delete_target: &mut Option<DeleteTarget>) {
    let visible = app.roster.visible();

    if visible.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("No employees to show").size(18.0).weak());
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(48.0))
        .column(Column::initial(180.0).at_least(120.0))
        .column(Column::initial(80.0))
        .column(Column::initial(220.0).at_least(120.0))
        .column(Column::initial(90.0))
        .column(Column::initial(140.0))
        .column(Column::remainder())
        .header(24.0, |mut header| {
            for title in ["", "Name", "Gender", "Department", "Salary", "Start Date", "Actions"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for emp in visible {
                body.row(34.0, |mut row| {
                    row.col(|ui| {
                        avatar(ui, &emp.name);
                    });
                    row.col(|ui| {
                        ui.label(&emp.name);
                    });
                    row.col(|ui| {
                        ui.label(&emp.gender);
                    });
                    row.col(|ui| {
                        for dept in emp.department.split(DEPARTMENT_SEPARATOR).filter(|d| !d.is_empty()) {
                            department_chip(ui, dept);
                        }
                    });
                    row.col(|ui| {
                        ui.label(emp.salary.to_string());
                    });
                    row.col(|ui| {
                        ui.label(display_date(emp.start_date.as_deref()));
                    });
                    row.col(|ui| {
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            *next_route = Some(Route::Edit(emp.id));
                        }
                        ui.add_space(4.0);
                        if app.roster.is_delete_pending(emp.id) {
                            ui.spinner();
                        } else if action_button(ui, TRASH, "Delete").clicked() {
                            *delete_target = Some(DeleteTarget {
                                id: emp.id,
                                name: emp.name.clone(),
                            });
                        }
                    });
                });
            }
        });
}

/// Circle with the employee's initials.
fn avatar(ui: &mut Ui, name: &str) {
    let size = 28.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), size / 2.0, colors::ACCENT);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials(name),
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
}

fn department_chip(ui: &mut Ui, name: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::symmetric(6, 2))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new(name).small().color(colors::NEUTRAL));
        });
}

/// Human-readable start date, e.g. "15 March 2021".
fn display_date(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|ts| date::decompose(ts).ok())
        .map(|parts| format!("{} {} {}", parts.day, parts.month, parts.year))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date(Some("2021-03-15T00:00:00.000Z")), "15 March 2021");
        assert_eq!(display_date(Some("bogus")), "-");
        assert_eq!(display_date(None), "-");
    }
}
