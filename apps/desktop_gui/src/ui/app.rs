use std::time::{Duration, Instant};

use directory::DirectoryController;
use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{Department, DepartmentFilter, Employee, EmployeeField},
    format::{format_hire_date, format_salary},
};

use crate::config::Settings;
use crate::controller::events::{ToastQueue, UiAction};
use crate::controller::orchestration::dispatch_action;
use crate::ui::theme::{
    department_badge_colors, scaled_text_styles, toast_colors, visuals_for_theme, ThemePreset,
    DESTRUCTIVE,
};

pub const SETTINGS_STORAGE_KEY: &str = "employee_directory.ui_settings";

const MIN_TEXT_SCALE: f32 = 0.8;
const MAX_TEXT_SCALE: f32 = 1.4;
const FORM_INPUT_WIDTH: f32 = 280.0;

/// Presentation preferences kept in eframe storage. Employee records are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedUiSettings {
    pub theme_preset: ThemePreset,
    pub text_scale: f32,
}

impl Default for PersistedUiSettings {
    fn default() -> Self {
        Self {
            theme_preset: ThemePreset::Light,
            text_scale: 1.0,
        }
    }
}

impl PersistedUiSettings {
    pub fn sanitized(self) -> Self {
        let text_scale = if self.text_scale.is_finite() {
            self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE)
        } else {
            1.0
        };
        Self { text_scale, ..self }
    }
}

pub struct DirectoryApp {
    controller: DirectoryController,
    settings: Settings,
    ui_settings: PersistedUiSettings,
    applied_ui_settings: Option<PersistedUiSettings>,
    toasts: ToastQueue,
    invalid_fields: Vec<EmployeeField>,
    settings_open: bool,
}

impl DirectoryApp {
    pub fn new(
        controller: DirectoryController,
        settings: Settings,
        persisted: Option<PersistedUiSettings>,
    ) -> Self {
        let toasts = ToastQueue::new(Duration::from_secs_f32(settings.toast_seconds));
        Self {
            controller,
            settings,
            ui_settings: persisted.unwrap_or_default().sanitized(),
            applied_ui_settings: None,
            toasts,
            invalid_fields: Vec::new(),
            settings_open: false,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_ui_settings == Some(self.ui_settings) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.ui_settings.theme_preset);
        style.text_styles = scaled_text_styles(self.ui_settings.text_scale);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        ctx.set_style(style);
        self.applied_ui_settings = Some(self.ui_settings);
    }

    fn dispatch(&mut self, action: UiAction) {
        let rejected = dispatch_action(&mut self.controller, action);
        self.invalid_fields = rejected.map(|err| err.fields()).unwrap_or_default();
    }

    fn show_header(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("directory_header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new(&self.settings.window_title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Settings").clicked() {
                        self.settings_open = !self.settings_open;
                    }
                    if ui.button("+ Add employee").clicked() {
                        actions.push(UiAction::OpenAddForm);
                    }
                });
            });
            ui.add_space(8.0);
        });
    }

    fn show_filters(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        card_frame(ui).show(ui, |ui| {
            ui.label(egui::RichText::new("Search and filter").strong());
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let search_width = (ui.available_width() - 200.0).max(160.0);
                ui.add_sized(
                    [search_width, 28.0],
                    egui::TextEdit::singleline(self.controller.search_term_mut())
                        .hint_text("Search by last name, first name, email or job title..."),
                );

                let current = self.controller.selected_department();
                let mut selected = current;
                egui::ComboBox::from_id_salt("department_filter")
                    .selected_text(selected.label())
                    .width(180.0)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut selected,
                            DepartmentFilter::All,
                            DepartmentFilter::All.label(),
                        );
                        for department in Department::ALL {
                            ui.selectable_value(
                                &mut selected,
                                DepartmentFilter::Only(department),
                                department.label(),
                            );
                        }
                    });
                if selected != current {
                    actions.push(UiAction::SetDepartmentFilter(selected));
                }
            });
        });
    }

    fn show_employee_list(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let visible = self.controller.visible();
        card_frame(ui).show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("Employees ({})", visible.len()))
                    .strong()
                    .size(16.0),
            );
            ui.label(
                egui::RichText::new("Manage your employees: edit or delete their details").weak(),
            );
            ui.add_space(8.0);

            if visible.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(egui::RichText::new("No employees found").weak());
                    ui.add_space(24.0);
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for employee in &visible {
                        render_employee_row(ui, employee, &self.settings, actions);
                        ui.add_space(6.0);
                    }
                });
        });
    }

    fn show_form_modal(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let form = self.controller.form();
        if !form.is_open() {
            return;
        }
        let title = form.title();
        let description = form.description();
        let submit_label = form.submit_label();
        let invalid_fields = self.invalid_fields.clone();

        let modal = egui::Modal::new(egui::Id::new("employee_form")).show(ctx, |ui| {
            ui.set_width(FORM_INPUT_WIDTH + 160.0);
            ui.heading(title);
            ui.label(egui::RichText::new(description).weak());
            ui.add_space(10.0);

            let fields = self.controller.form_fields_mut();
            egui::Grid::new("employee_form_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for field in EmployeeField::ALL {
                        let mut label = egui::RichText::new(field.label());
                        if invalid_fields.contains(&field) {
                            label = label.color(ui.visuals().error_fg_color);
                        }
                        ui.label(label);
                        match field {
                            EmployeeField::Department => {
                                department_picker(ui, fields.get_mut(field));
                            }
                            _ => {
                                ui.add(
                                    egui::TextEdit::singleline(fields.get_mut(field))
                                        .hint_text(field_hint(field))
                                        .desired_width(FORM_INPUT_WIDTH),
                                );
                            }
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(submit_label).clicked() {
                    actions.push(UiAction::SubmitForm);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(UiAction::CancelForm);
                }
            });

            if ui.input(|input| input.key_pressed(egui::Key::Enter)) && actions.is_empty() {
                actions.push(UiAction::SubmitForm);
            }
        });

        if modal.should_close() && actions.is_empty() {
            actions.push(UiAction::CancelForm);
        }
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let mut settings_open = self.settings_open;
        egui::Window::new("Settings")
            .open(&mut settings_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Theme");
                egui::ComboBox::from_id_salt("theme_preset")
                    .selected_text(self.ui_settings.theme_preset.label())
                    .show_ui(ui, |ui| {
                        for preset in ThemePreset::ALL {
                            ui.selectable_value(
                                &mut self.ui_settings.theme_preset,
                                preset,
                                preset.label(),
                            );
                        }
                    });
                ui.add(
                    egui::Slider::new(
                        &mut self.ui_settings.text_scale,
                        MIN_TEXT_SCALE..=MAX_TEXT_SCALE,
                    )
                    .text("Text scale")
                    .step_by(0.05),
                );
                if ui.button("Reset to defaults").clicked() {
                    self.ui_settings = PersistedUiSettings::default();
                }
            });
        self.settings_open = settings_open;
    }

    fn show_toasts(&mut self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("directory_toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (index, toast) in self.toasts.toasts().iter().enumerate() {
                    let (fill, stroke) = toast_colors(toast.severity());
                    egui::Frame::NONE
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.0, stroke))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(12, 10))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(
                                        egui::RichText::new(toast.title())
                                            .strong()
                                            .color(egui::Color32::WHITE),
                                    );
                                    ui.label(
                                        egui::RichText::new(toast.message())
                                            .color(egui::Color32::WHITE),
                                    );
                                });
                                if ui.small_button("Dismiss").clicked() {
                                    dismissed = Some(index);
                                }
                            });
                        });
                    ui.add_space(6.0);
                }
            });

        if let Some(index) = dismissed {
            self.toasts.dismiss(index);
        }
    }
}

fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(14, 12))
}

fn render_employee_row(
    ui: &mut egui::Ui,
    employee: &Employee,
    settings: &Settings,
    actions: &mut Vec<UiAction>,
) {
    let dark_mode = ui.visuals().dark_mode;
    egui::Frame::NONE
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(employee.full_name())
                                .strong()
                                .size(16.0),
                        );
                        department_badge(ui, employee.department, dark_mode);
                    });
                    egui::Grid::new(("employee_details", employee.id.0))
                        .num_columns(2)
                        .spacing([24.0, 2.0])
                        .show(ui, |ui| {
                            detail(ui, "Email", &employee.email);
                            detail(ui, "Job title", &employee.job_title);
                            ui.end_row();
                            detail(
                                ui,
                                "Salary",
                                &format_salary(employee.salary, &settings.currency_symbol),
                            );
                            detail(
                                ui,
                                "Hired on",
                                &format_hire_date(employee.hire_date, &settings.date_format),
                            );
                            ui.end_row();
                        });
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let delete = egui::Button::new(
                        egui::RichText::new("Delete").color(egui::Color32::WHITE),
                    )
                    .fill(DESTRUCTIVE);
                    if ui.add(delete).clicked() {
                        actions.push(UiAction::Delete(employee.id));
                    }
                    if ui.button("Edit").clicked() {
                        actions.push(UiAction::OpenEditForm(employee.id));
                    }
                });
            });
        });
}

fn department_badge(ui: &mut egui::Ui, department: Department, dark_mode: bool) {
    let (fill, text) = department_badge_colors(department, dark_mode);
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(department.label()).small().color(text));
        });
}

fn detail(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{label}:")).strong());
        ui.label(value);
    });
}

fn department_picker(ui: &mut egui::Ui, value: &mut String) {
    let selected_text = if value.is_empty() {
        "Select a department".to_string()
    } else {
        value.clone()
    };
    egui::ComboBox::from_id_salt("form_department")
        .selected_text(selected_text)
        .width(FORM_INPUT_WIDTH)
        .show_ui(ui, |ui| {
            for department in Department::ALL {
                ui.selectable_value(
                    &mut *value,
                    department.label().to_string(),
                    department.label(),
                );
            }
        });
}

fn field_hint(field: EmployeeField) -> &'static str {
    match field {
        EmployeeField::LastName => "Family name",
        EmployeeField::FirstName => "First name",
        EmployeeField::Email => "email@entreprise.com",
        EmployeeField::JobTitle => "Job title",
        EmployeeField::Department => "",
        EmployeeField::Salary => "45000",
        EmployeeField::HireDate => "YYYY-MM-DD",
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        let mut actions = Vec::new();
        self.show_header(ctx, &mut actions);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_filters(ui, &mut actions);
            ui.add_space(12.0);
            self.show_employee_list(ui, &mut actions);
        });
        self.show_form_modal(ctx, &mut actions);
        self.show_settings_window(ctx);

        if !actions.is_empty() {
            for action in actions {
                self.dispatch(action);
            }
            ctx.request_repaint();
        }

        let now = Instant::now();
        self.toasts
            .push_all(self.controller.take_notifications(), now);
        self.toasts.prune(now);
        self.show_toasts(ctx);
        if let Some(wait) = self.toasts.next_expiry(now) {
            ctx.request_repaint_after(wait);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(serialized) = serde_json::to_string(&self.ui_settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_settings_fill_missing_keys_with_defaults() {
        let parsed: PersistedUiSettings =
            serde_json::from_str(r#"{"theme_preset":"dark"}"#).expect("settings");
        assert_eq!(parsed.theme_preset, ThemePreset::Dark);
        assert_eq!(parsed.text_scale, 1.0);
    }

    #[test]
    fn sanitized_clamps_text_scale() {
        let settings = PersistedUiSettings {
            theme_preset: ThemePreset::Light,
            text_scale: 3.0,
        }
        .sanitized();
        assert_eq!(settings.text_scale, MAX_TEXT_SCALE);

        let settings = PersistedUiSettings {
            theme_preset: ThemePreset::Light,
            text_scale: f32::NAN,
        }
        .sanitized();
        assert_eq!(settings.text_scale, 1.0);
    }

    #[test]
    fn every_text_field_has_a_hint() {
        for field in EmployeeField::ALL {
            if field != EmployeeField::Department {
                assert!(!field_hint(field).is_empty(), "{field:?}");
            }
        }
    }
}
