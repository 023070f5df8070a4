//! Main application UI.

use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align, Layout};
use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::date;
use crate::form::{self, FormState, SubmitError};
use crate::models::options::salary_tiers;
use crate::models::{Employee, EmployeeDraft};
use crate::notify::{Notification, NotificationQueue, Notifier};
use crate::roster::{self, DELETE_CONFIRM, Roster};

use super::components::{colors, show_notifications};
use super::{dashboard, register_panel};

/// Current view. Create and edit share the register form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Create,
    Edit(i64),
}

impl Route {
    /// Get the display name for the route.
    pub fn name(&self) -> &'static str {
        match self {
            Route::List => "Employees",
            Route::Create => "Register Employee",
            Route::Edit(_) => "Edit Employee",
        }
    }
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    Notify(Notification),

    // Data loading
    EmployeesLoaded(Option<Vec<Employee>>),
    DraftLoaded(i64, Option<EmployeeDraft>),

    // CRUD operations
    EmployeeDeleted(i64, bool),
    SubmitFinished { saved: bool },
}

/// Notifier that hands notifications to the UI thread.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<UiMessage>,
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        let _ = self.tx.send(UiMessage::Notify(notification));
    }
}

/// Target for delete confirmation dialog.
#[derive(Clone)]
pub struct DeleteTarget {
    pub id: i64,
    pub name: String,
}

/// Main application state.
pub struct App {
    // Runtime and backend
    pub rt: tokio::runtime::Runtime,
    pub store: Arc<ApiClient>,
    pub config: AppConfig,

    // Message channel for async communication
    tx: mpsc::UnboundedSender<UiMessage>,
    rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub route: Route,

    // Views
    pub roster: Roster,
    pub form: FormState,
    pub is_loading: bool,

    // Picker options
    pub year_options: Vec<i32>,
    pub salary_options: Vec<u32>,

    // Dialogs
    pub delete_target: Option<DeleteTarget>,
    pub config_error: Option<String>,

    notifications: NotificationQueue,
}

impl App {
    pub fn new(rt: tokio::runtime::Runtime, store: ApiClient, config: AppConfig, config_error: Option<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = Self {
            rt,
            store: Arc::new(store),
            config,
            tx,
            rx,
            route: Route::default(),
            roster: Roster::default(),
            form: FormState::default(),
            is_loading: false,
            year_options: date::year_options(date::current_year()),
            salary_options: salary_tiers(),
            delete_target: None,
            config_error,
            notifications: NotificationQueue::default(),
        };

        // Load initial data
        app.navigate(Route::List);

        app
    }

    fn notifier(&self) -> ChannelNotifier {
        ChannelNotifier { tx: self.tx.clone() }
    }

    /// Show a notification raised on the UI thread.
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification, Instant::now());
    }

    /// Switch views, loading whatever the target view needs.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigate to {:?}", route);
        self.route = route;
        match route {
            Route::List => self.load_employees(),
            Route::Create => self.form = FormState::create(),
            Route::Edit(id) => {
                self.form = FormState::edit(id);
                self.load_draft(id);
            }
        }
    }

    /// Load employees from the backend.
    pub fn load_employees(&mut self) {
        let store = Arc::clone(&self.store);
        let notifier = self.notifier();
        let tx = self.tx.clone();
        self.is_loading = true;

        self.rt.spawn(async move {
            let employees = roster::fetch_employees(&*store, &notifier).await;
            let _ = tx.send(UiMessage::EmployeesLoaded(employees));
        });
    }

    /// Fetch a record into the edit form.
    fn load_draft(&mut self, id: i64) {
        let store = Arc::clone(&self.store);
        let notifier = self.notifier();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let draft = form::load_draft(&*store, &notifier, id).await;
            let _ = tx.send(UiMessage::DraftLoaded(id, draft));
        });
    }

    /// Delete an employee.
    pub fn delete_employee(&mut self, id: i64) {
        let store = Arc::clone(&self.store);
        let notifier = self.notifier();
        let tx = self.tx.clone();
        self.roster.begin_delete(id);

        self.rt.spawn(async move {
            let deleted = roster::delete_employee(&*store, &notifier, id).await;
            let _ = tx.send(UiMessage::EmployeeDeleted(id, deleted));
        });
    }

    /// Validate the form and send it as a create or update.
    pub fn submit_form(&mut self) {
        let submission = match self.form.begin_submit() {
            Ok(submission) => submission,
            Err(SubmitError::InFlight) => {
                tracing::debug!("Ignoring submit while a save is in flight");
                return;
            }
            Err(e) => {
                self.notify(Notification::error(e.to_string()));
                return;
            }
        };

        tracing::info!("Submitting employee '{}'", submission.payload().name);
        let store = Arc::clone(&self.store);
        let notifier = self.notifier();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let saved = form::send_submission(&*store, &notifier, &submission).await.is_ok();
            let _ = tx.send(UiMessage::SubmitFinished { saved });
        });
    }

    /// Recompute the start date after a picker changed.
    pub fn on_date_changed(&mut self) {
        if let Err(e) = self.form.draft.sync_start_date() {
            self.notify(Notification::error(e.to_string()));
        }
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::Notify(notification) => self.notify(notification),
                UiMessage::EmployeesLoaded(employees) => {
                    if let Some(employees) = employees {
                        self.roster.set_employees(employees);
                    }
                    self.is_loading = false;
                }
                UiMessage::DraftLoaded(id, draft) => {
                    // Ignore results for a form the user already left
                    if self.route == Route::Edit(id) {
                        self.form.loaded(draft);
                    }
                }
                UiMessage::EmployeeDeleted(id, deleted) => self.roster.finish_delete(id, deleted),
                UiMessage::SubmitFinished { saved } => {
                    self.form.finish_submit();
                    if saved {
                        self.navigate(Route::List);
                    }
                }
            }
        }
    }

    /// Render modal dialogs (config error, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(error) = self.config_error.clone() {
            egui::Window::new("Configuration Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, &error);
                    ui.label("Default settings are in use.");
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.config_error = None;
                    }
                });
        }

        if let Some(target) = self.delete_target.clone() {
            egui::Window::new("Delete Employee")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(DELETE_CONFIRM);
                    ui.label(egui::RichText::new(&target.name).strong());
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.delete_target = None;
                        }
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.button("Delete").clicked() {
                                tracing::info!("Deleting employee: {}", target.name);
                                self.delete_employee(target.id);
                                self.delete_target = None;
                            }
                        });
                    });
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_async_results();

        let now = Instant::now();
        self.notifications.prune(now);

        // Keep polling while requests are outstanding
        if self.is_loading || self.roster.is_deleting() || self.form.is_loading() || self.form.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else if let Some(remaining) = self.notifications.next_expiry(now) {
            ctx.request_repaint_after(remaining);
        }

        self.show_dialogs(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.route {
            Route::List => {
                if let Some(next) = dashboard::show(self, ui) {
                    self.navigate(next);
                }
            }
            Route::Create | Route::Edit(_) => {
                if let Some(next) = register_panel::show(self, ui) {
                    self.navigate(next);
                }
            }
        });

        show_notifications(ctx, &self.notifications);
    }
}
