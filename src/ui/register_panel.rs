//! Register/edit employee form.

use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};
use egui_phosphor::regular::FLOPPY_DISK;

use super::app::{App, Route};
use super::components::{back_button, colors, panel_header, primary_button};
use crate::date::{DAY_RANGE, MONTHS};
use crate::models::Gender;
use crate::models::options::{DEPARTMENTS, PROFILE_IMAGES};

/// Show the register form.
///
/// Returns `Some(route)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Route> {
    let mut next_route = None;

    if back_button(ui) {
        next_route = Some(Route::List);
    }

    panel_header(ui, app.route.name());

    if app.form.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading employee...");
        });
        return next_route;
    }

    let mut date_changed = false;

    ScrollArea::vertical().id_salt("register_scroll").show(ui, |ui| {
        egui::Grid::new("register_grid")
            .num_columns(2)
            .spacing([30.0, 16.0])
            .show(ui, |ui| {
                let draft = &mut app.form.draft;

                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.name)
                        .desired_width(300.0)
                        .hint_text("Full name"),
                );
                ui.end_row();

                ui.label("Profile Image:");
                ui.horizontal(|ui| {
                    for (i, url) in PROFILE_IMAGES.iter().enumerate() {
                        ui.radio_value(&mut draft.image_path, url.to_string(), format!("Profile {}", i + 1))
                            .on_hover_text(*url);
                    }
                });
                ui.end_row();

                ui.label("Gender:");
                ui.horizontal(|ui| {
                    for gender in Gender::ALL {
                        ui.radio_value(&mut draft.gender, Some(gender), gender.label());
                    }
                });
                ui.end_row();

                ui.label("Department:");
                ui.horizontal_wrapped(|ui| {
                    for dept in DEPARTMENTS {
                        let mut checked = draft.has_department(dept);
                        if ui.checkbox(&mut checked, dept).changed() {
                            draft.update_departments(dept, checked);
                        }
                    }
                });
                ui.end_row();

                ui.label("Salary:");
                egui::ComboBox::from_id_salt("register_salary")
                    .width(160.0)
                    .selected_text(draft.salary.map(|s| s.to_string()).unwrap_or_else(|| "Select Salary".to_string()))
                    .show_ui(ui, |ui| {
                        for tier in &app.salary_options {
                            ui.selectable_value(&mut draft.salary, Some(*tier), tier.to_string());
                        }
                    });
                ui.end_row();

                ui.label("Start Date:");
                ui.vertical(|ui| {
                    let before = (draft.day, draft.month.clone(), draft.year);

                    ui.horizontal(|ui| {
                        egui::ComboBox::from_id_salt("register_day")
                            .width(70.0)
                            .selected_text(draft.day.map(|d| d.to_string()).unwrap_or_else(|| "Day".to_string()))
                            .show_ui(ui, |ui| {
                                for day in DAY_RANGE {
                                    ui.selectable_value(&mut draft.day, Some(day), day.to_string());
                                }
                            });

                        egui::ComboBox::from_id_salt("register_month")
                            .width(120.0)
                            .selected_text(draft.month.clone().unwrap_or_else(|| "Month".to_string()))
                            .show_ui(ui, |ui| {
                                for month in MONTHS {
                                    ui.selectable_value(&mut draft.month, Some(month.to_string()), month);
                                }
                            });

                        egui::ComboBox::from_id_salt("register_year")
                            .width(80.0)
                            .selected_text(draft.year.map(|y| y.to_string()).unwrap_or_else(|| "Year".to_string()))
                            .show_ui(ui, |ui| {
                                for year in &app.year_options {
                                    ui.selectable_value(&mut draft.year, Some(*year), year.to_string());
                                }
                            });
                    });

                    date_changed = before != (draft.day, draft.month.clone(), draft.year);

                    let complete = draft.day.is_some() && draft.month.is_some() && draft.year.is_some();
                    if complete && draft.start_date.is_none() && !date_changed {
                        ui.colored_label(colors::ERROR, "Not a valid calendar date");
                    } else {
                        ui.weak("Day, month and year");
                    }
                });
                ui.end_row();
            });

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                next_route = Some(Route::List);
            }

            if !app.form.is_editing() && ui.button("Reset").clicked() {
                app.form.draft = Default::default();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let submitting = app.form.is_submitting();
                let label = if app.form.is_editing() { "Update" } else { "Submit" };
                if primary_button(ui, FLOPPY_DISK, label, !submitting).clicked() {
                    app.submit_form();
                }
                if submitting {
                    ui.spinner();
                    ui.label(RichText::new("Saving...").weak());
                }
            });
        });
    });

    if date_changed {
        app.on_date_changed();
    }

    next_route
}
